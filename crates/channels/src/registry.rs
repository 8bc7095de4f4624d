use std::collections::HashMap;

use botmux_markup::{IdentityRenderer, MarkupRenderer};

/// Markup renderers keyed by channel type (`"telegram"`, ...).
///
/// Channels without a registered renderer fall back to
/// [`IdentityRenderer`], which strips the markup delimiters and keeps the
/// text.
pub struct RendererRegistry {
    renderers: HashMap<String, Box<dyn MarkupRenderer>>,
    fallback: IdentityRenderer,
}

impl Default for RendererRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl RendererRegistry {
    pub fn new() -> Self {
        Self {
            renderers: HashMap::new(),
            fallback: IdentityRenderer,
        }
    }

    pub fn register(&mut self, channel: impl Into<String>, renderer: Box<dyn MarkupRenderer>) {
        self.renderers.insert(channel.into(), renderer);
    }

    /// Renderer registered for `channel`, if any.
    pub fn get(&self, channel: &str) -> Option<&dyn MarkupRenderer> {
        self.renderers.get(channel).map(|r| r.as_ref())
    }

    /// Renderer for `channel`, or the identity fallback.
    pub fn resolve(&self, channel: &str) -> &dyn MarkupRenderer {
        self.get(channel).unwrap_or(&self.fallback)
    }

    /// Registered channel names, sorted.
    pub fn list(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.renderers.keys().map(|s| s.as_str()).collect();
        names.sort_unstable();
        names
    }
}
