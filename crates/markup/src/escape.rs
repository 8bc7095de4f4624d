/// Characters that carry meaning in Telegram MarkdownV2 outside of the three
/// inline markup delimiters, and must be backslash-escaped in plain text.
pub const ESCAPED_CHARS: [char; 15] = [
    '[', ']', '(', ')', '~', '>', '#', '+', '-', '=', '|', '{', '}', '.', '!',
];

/// Whether `c` is rewritten by [`escape`].
#[must_use]
pub fn needs_escape(c: char) -> bool {
    ESCAPED_CHARS.contains(&c)
}

/// Prefix every character in [`ESCAPED_CHARS`] with a backslash.
///
/// The markup delimiters `*`, `_` and `^` are left alone so the scanner can
/// still find them afterwards.
///
/// This is **not** idempotent: escaping already-escaped text escapes the
/// same characters again (`.` → `\.` → `\\.`). Run it exactly once per
/// message, before scanning.
#[must_use]
pub fn escape(text: &str) -> String {
    let extra = text.chars().filter(|&c| needs_escape(c)).count();
    if extra == 0 {
        return text.to_owned();
    }

    let mut out = String::with_capacity(text.len() + extra);
    for c in text.chars() {
        if needs_escape(c) {
            out.push('\\');
        }
        out.push(c);
    }
    out
}
