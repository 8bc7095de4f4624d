//! Inline markup formatting and chunking engine.
//!
//! Outbound bot replies are written in a tiny, channel-neutral markup
//! language: `*bold*`, `_italics_` and `^superscript^`. Rendering a reply for
//! a channel happens in three steps:
//!
//! 1. [`escape`] neutralises characters that collide with the channel syntax.
//! 2. [`format`] scans for markup spans with [`next_span`] and hands each
//!    span's inner text to a [`MarkupRenderer`].
//! 3. [`split`] cuts the rendered text into ordered, size-bounded chunks on a
//!    boundary token so every chunk can be sent as its own message.
//!
//! Every function here is pure and synchronous.

pub mod chunk;
pub mod escape;
pub mod format;
pub mod renderer;
pub mod scanner;

pub use {
    chunk::{DEFAULT_MAX_CHUNK_LEN, split},
    escape::{ESCAPED_CHARS, escape, needs_escape},
    format::{format, format_with},
    renderer::{FnRenderer, IdentityRenderer, MarkupRenderer},
    scanner::{DELIMITERS, FormatSpan, FormatType, Spans, next_span, spans},
};
