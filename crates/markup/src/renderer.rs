use crate::{escape::escape, scanner::FormatType};

/// Channel-specific rendering of the inline markup language.
///
/// Each destination syntax provides one implementation. [`crate::format`]
/// only depends on this trait.
pub trait MarkupRenderer: Send + Sync {
    /// Make literal text safe for the destination syntax. Called once on
    /// the whole message before scanning.
    fn escape(&self, text: &str) -> String;

    fn bold(&self, text: &str) -> String;

    fn italics(&self, text: &str) -> String;

    fn superscript(&self, text: &str) -> String;

    /// Render the inner text of a span of the given kind.
    fn render(&self, kind: FormatType, inner: &str) -> String {
        match kind {
            FormatType::Bold => self.bold(inner),
            FormatType::Italics => self.italics(inner),
            FormatType::Superscript => self.superscript(inner),
        }
    }
}

/// Drops the delimiters and keeps every span's text unchanged.
#[derive(Debug, Clone, Copy, Default)]
pub struct IdentityRenderer;

impl MarkupRenderer for IdentityRenderer {
    fn escape(&self, text: &str) -> String {
        text.to_owned()
    }

    fn bold(&self, text: &str) -> String {
        text.to_owned()
    }

    fn italics(&self, text: &str) -> String {
        text.to_owned()
    }

    fn superscript(&self, text: &str) -> String {
        text.to_owned()
    }
}

/// Renderer assembled from four closures.
pub struct FnRenderer<E, B, I, S> {
    pub escape: E,
    pub bold: B,
    pub italics: I,
    pub superscript: S,
}

impl<E, B, I, S> FnRenderer<E, B, I, S>
where
    E: Fn(&str) -> String + Send + Sync,
    B: Fn(&str) -> String + Send + Sync,
    I: Fn(&str) -> String + Send + Sync,
    S: Fn(&str) -> String + Send + Sync,
{
    pub fn new(escape: E, bold: B, italics: I, superscript: S) -> Self {
        Self {
            escape,
            bold,
            italics,
            superscript,
        }
    }
}

impl<B, I, S> FnRenderer<fn(&str) -> String, B, I, S>
where
    B: Fn(&str) -> String + Send + Sync,
    I: Fn(&str) -> String + Send + Sync,
    S: Fn(&str) -> String + Send + Sync,
{
    /// Closure renderer that uses the crate's default [`escape`].
    pub fn escaped(bold: B, italics: I, superscript: S) -> Self {
        Self::new(escape, bold, italics, superscript)
    }
}

impl<E, B, I, S> MarkupRenderer for FnRenderer<E, B, I, S>
where
    E: Fn(&str) -> String + Send + Sync,
    B: Fn(&str) -> String + Send + Sync,
    I: Fn(&str) -> String + Send + Sync,
    S: Fn(&str) -> String + Send + Sync,
{
    fn escape(&self, text: &str) -> String {
        (self.escape)(text)
    }

    fn bold(&self, text: &str) -> String {
        (self.bold)(text)
    }

    fn italics(&self, text: &str) -> String {
        (self.italics)(text)
    }

    fn superscript(&self, text: &str) -> String {
        (self.superscript)(text)
    }
}
