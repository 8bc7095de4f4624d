//! Locates inline markup spans.
//!
//! A span opens at the leftmost delimiter and closes at the next occurrence
//! of the same delimiter. Spans never nest. An opening delimiter without a
//! partner ends the scan: it and everything after it stay literal.

use std::fmt;

/// Inline markup kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormatType {
    Bold,
    Italics,
    Superscript,
}

/// Delimiter table in tie-break priority order.
pub const DELIMITERS: [(char, FormatType); 3] = [
    ('*', FormatType::Bold),
    ('_', FormatType::Italics),
    ('^', FormatType::Superscript),
];

impl FormatType {
    #[must_use]
    pub const fn delimiter(self) -> char {
        match self {
            Self::Bold => '*',
            Self::Italics => '_',
            Self::Superscript => '^',
        }
    }

    #[must_use]
    pub const fn from_delimiter(c: char) -> Option<Self> {
        match c {
            '*' => Some(Self::Bold),
            '_' => Some(Self::Italics),
            '^' => Some(Self::Superscript),
            _ => None,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Bold => "bold",
            Self::Italics => "italics",
            Self::Superscript => "superscript",
        }
    }
}

impl fmt::Display for FormatType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A delimited run of text.
///
/// `start` and `end` are byte offsets of the opening and closing delimiter.
/// Both delimiters are the same single-byte character and `end > start`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormatSpan {
    pub start: usize,
    pub end: usize,
    pub kind: FormatType,
}

impl FormatSpan {
    /// Text strictly between the two delimiters. Empty for `**`.
    #[must_use]
    pub fn inner<'a>(&self, text: &'a str) -> &'a str {
        &text[self.start + 1..self.end]
    }

    /// Offset just past the closing delimiter.
    #[must_use]
    pub const fn next_offset(&self) -> usize {
        self.end + 1
    }
}

/// Find the next span at or after byte offset `from`.
///
/// Returns `None` when no delimiter remains, when the leftmost delimiter has
/// no closing partner, or when `from` is not a valid offset into `text`.
#[must_use]
pub fn next_span(text: &str, from: usize) -> Option<FormatSpan> {
    let rest = text.get(from..)?;

    // `min_by_key` keeps the first of equal keys, so table order breaks ties.
    let (start, delimiter, kind) = DELIMITERS
        .iter()
        .filter_map(|&(c, kind)| rest.find(c).map(|i| (from + i, c, kind)))
        .min_by_key(|&(start, ..)| start)?;

    let close = text[start + 1..].find(delimiter)?;

    Some(FormatSpan {
        start,
        end: start + 1 + close,
        kind,
    })
}

/// Iterator over the spans [`crate::format`] would consume, in order.
#[must_use]
pub fn spans(text: &str) -> Spans<'_> {
    Spans {
        text,
        cursor: Some(0),
    }
}

/// Iterator returned by [`spans`].
#[derive(Debug, Clone)]
pub struct Spans<'a> {
    text: &'a str,
    cursor: Option<usize>,
}

impl Iterator for Spans<'_> {
    type Item = FormatSpan;

    fn next(&mut self) -> Option<FormatSpan> {
        let span = next_span(self.text, self.cursor?);
        self.cursor = span.map(|s| s.next_offset());
        span
    }
}
