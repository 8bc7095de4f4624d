use tracing::trace;

use crate::{
    renderer::{FnRenderer, MarkupRenderer},
    scanner::next_span,
};

/// Escape `text`, then replace every markup span with the renderer's output.
///
/// The scan is a single left-to-right pass. Rendered output is inserted as-is
/// and never scanned again; text after an unmatched delimiter is copied
/// through literally.
pub fn format<R>(text: &str, renderer: &R) -> String
where
    R: MarkupRenderer + ?Sized,
{
    let escaped = renderer.escape(text);
    let mut out = String::with_capacity(escaped.len());
    let mut cursor = 0;
    let mut rendered_spans = 0usize;

    while let Some(span) = next_span(&escaped, cursor) {
        out.push_str(&escaped[cursor..span.start]);
        out.push_str(&renderer.render(span.kind, span.inner(&escaped)));
        cursor = span.next_offset();
        rendered_spans += 1;
    }
    out.push_str(&escaped[cursor..]);

    trace!(
        input_len = text.len(),
        output_len = out.len(),
        spans = rendered_spans,
        "formatted markup"
    );
    out
}

/// [`format`] with the four transformations given as closures.
pub fn format_with<E, B, I, S>(
    text: &str,
    escape: E,
    bold: B,
    italics: I,
    superscript: S,
) -> String
where
    E: Fn(&str) -> String + Send + Sync,
    B: Fn(&str) -> String + Send + Sync,
    I: Fn(&str) -> String + Send + Sync,
    S: Fn(&str) -> String + Send + Sync,
{
    format(text, &FnRenderer::new(escape, bold, italics, superscript))
}
