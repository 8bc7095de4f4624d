//! Telegram MarkdownV2 rendering of botmux inline markup.
//!
//! Plain text is backslash-escaped with [`botmux_markup::escape`], `*bold*`
//! and `_italics_` map onto the identical MarkdownV2 entities, and
//! `^superscript^` is rewritten with Unicode superscript digits since
//! Telegram has no superscript entity.
//!
//! See <https://core.telegram.org/bots/api#markdownv2-style>.

use {
    botmux_markup::{MarkupRenderer, escape, format},
    serde::{Deserialize, Serialize},
};

/// Telegram message size limit.
pub const TELEGRAM_MAX_MESSAGE_LEN: usize = 4096;

// ── Superscript ──────────────────────────────────────────────────────────

/// What happens to non-digit characters inside a `^superscript^` span.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SuperscriptPolicy {
    /// Only `0`-`9` are kept (as superscript digits); every other character
    /// is silently dropped, so `^12a^` renders as `¹²`. Existing replies
    /// rely on this, keep it the default.
    #[default]
    DigitsOnly,
    /// Non-digit characters are kept unchanged.
    KeepOthers,
}

const SUPERSCRIPT_DIGITS: [char; 10] = [
    '\u{2070}', '\u{00b9}', '\u{00b2}', '\u{00b3}', '\u{2074}', '\u{2075}', '\u{2076}', '\u{2077}',
    '\u{2078}', '\u{2079}',
];

/// Rewrite ASCII digits as Unicode superscripts, handling everything else
/// according to `policy`.
#[must_use]
pub fn superscript_digits(text: &str, policy: SuperscriptPolicy) -> String {
    text.chars()
        .filter_map(|c| match c.to_digit(10) {
            Some(d) => Some(SUPERSCRIPT_DIGITS[d as usize]),
            None => match policy {
                SuperscriptPolicy::DigitsOnly => None,
                SuperscriptPolicy::KeepOthers => Some(c),
            },
        })
        .collect()
}

// ── Renderer ─────────────────────────────────────────────────────────────

/// [`MarkupRenderer`] producing Telegram MarkdownV2.
#[derive(Debug, Clone, Copy, Default)]
pub struct TelegramMarkdownV2 {
    pub superscript: SuperscriptPolicy,
}

impl TelegramMarkdownV2 {
    #[must_use]
    pub const fn with_superscript(superscript: SuperscriptPolicy) -> Self {
        Self { superscript }
    }

    /// Render a whole message.
    #[must_use]
    pub fn render_message(&self, text: &str) -> String {
        format(text, self)
    }
}

impl MarkupRenderer for TelegramMarkdownV2 {
    fn escape(&self, text: &str) -> String {
        escape(text)
    }

    fn bold(&self, text: &str) -> String {
        let mut out = String::with_capacity(text.len() + 2);
        out.push('*');
        out.push_str(text);
        out.push('*');
        out
    }

    fn italics(&self, text: &str) -> String {
        let mut out = String::with_capacity(text.len() + 2);
        out.push('_');
        out.push_str(text);
        out.push('_');
        out
    }

    fn superscript(&self, text: &str) -> String {
        superscript_digits(text, self.superscript)
    }
}
