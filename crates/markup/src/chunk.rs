//! Split rendered text into delivery-sized chunks.

use tracing::{debug, warn};

/// Default chunk limit in bytes. Telegram rejects messages above 4096.
pub const DEFAULT_MAX_CHUNK_LEN: usize = 4000;

/// Split `text` into ordered chunks shorter than `max_len` bytes.
///
/// The text is first cut right after every occurrence of `boundary`; each
/// resulting piece keeps its trailing boundary. Pieces are then packed
/// greedily: a piece joins the current chunk while the combined length stays
/// strictly below `max_len`, otherwise the chunk is emitted and a new one
/// starts with that piece. An empty `boundary` makes every `char` a piece.
///
/// Pieces are never cut further. A single piece of `max_len` bytes or more
/// becomes its own oversized chunk rather than being truncated.
///
/// Concatenating the returned chunks always yields `text` again.
#[must_use]
pub fn split(text: &str, boundary: &str, max_len: usize) -> Vec<String> {
    let mut chunks = Vec::new();
    let mut current = String::new();

    for piece in pieces(text, boundary) {
        if current.len() + piece.len() < max_len {
            current.push_str(piece);
            continue;
        }
        if !current.is_empty() {
            push_chunk(&mut chunks, std::mem::take(&mut current), max_len);
        }
        current.push_str(piece);
    }
    if !current.is_empty() {
        push_chunk(&mut chunks, current, max_len);
    }

    debug!(
        input_len = text.len(),
        max_len,
        chunks = chunks.len(),
        "split message into chunks"
    );
    chunks
}

fn push_chunk(chunks: &mut Vec<String>, chunk: String, max_len: usize) {
    if chunk.len() >= max_len {
        warn!(
            chunk_index = chunks.len(),
            chunk_len = chunk.len(),
            max_len,
            "chunk exceeds limit: no boundary inside a single piece"
        );
    }
    chunks.push(chunk);
}

fn pieces<'a, 'b>(text: &'a str, boundary: &'b str) -> SplitAfter<'a, 'b> {
    SplitAfter {
        rest: text,
        boundary,
    }
}

/// Yields slices that each end right after an occurrence of `boundary`,
/// followed by whatever remains.
struct SplitAfter<'a, 'b> {
    rest: &'a str,
    boundary: &'b str,
}

impl<'a> Iterator for SplitAfter<'a, '_> {
    type Item = &'a str;

    fn next(&mut self) -> Option<&'a str> {
        if self.rest.is_empty() {
            return None;
        }
        let cut = if self.boundary.is_empty() {
            self.rest.chars().next().map_or(self.rest.len(), char::len_utf8)
        } else {
            self.rest
                .find(self.boundary)
                .map_or(self.rest.len(), |i| i + self.boundary.len())
        };
        let (piece, rest) = self.rest.split_at(cut);
        self.rest = rest;
        Some(piece)
    }
}
