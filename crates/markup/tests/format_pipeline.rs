#![allow(clippy::unwrap_used, clippy::expect_used)]
use botmux_markup::{FnRenderer, FormatType, MarkupRenderer, format, split, spans};

/// Minimal HTML flavour, enough to check the pipeline without Telegram.
struct Html;

impl MarkupRenderer for Html {
    fn escape(&self, text: &str) -> String {
        text.replace('&', "&amp;")
            .replace('<', "&lt;")
            .replace('>', "&gt;")
    }

    fn bold(&self, text: &str) -> String {
        format!("<b>{text}</b>")
    }

    fn italics(&self, text: &str) -> String {
        format!("<i>{text}</i>")
    }

    fn superscript(&self, text: &str) -> String {
        format!("<sup>{text}</sup>")
    }
}

#[test]
fn renders_then_splits_a_reply() {
    let message = "*Psalm 23*\n^1^The Lord is my shepherd; I shall not want.\n\
                   ^2^He makes me lie down in green pastures.\n_a psalm of David_";
    let rendered = format(message, &Html);
    assert!(rendered.starts_with("<b>Psalm 23</b>\n<sup>1</sup>The Lord"));
    assert!(rendered.ends_with("<i>a psalm of David</i>"));

    let chunks = split(&rendered, "\n", 64);
    assert_eq!(chunks.concat(), rendered);
    assert_eq!(chunks.len(), 4);
    assert_eq!(chunks[0], "<b>Psalm 23</b>\n");
}

#[test]
fn custom_escape_is_applied_to_literal_text_only() {
    assert_eq!(format("a < b, *c & d*", &Html), "a &lt; b, <b>c &amp; d</b>");
}

#[test]
fn scanner_and_formatter_agree_on_spans() {
    let message = "x^2^ + *y* = _z_";
    let kinds: Vec<FormatType> = spans(message).map(|s| s.kind).collect();
    assert_eq!(kinds, vec![
        FormatType::Superscript,
        FormatType::Bold,
        FormatType::Italics
    ]);

    let counted = FnRenderer::new(
        |s: &str| s.to_owned(),
        |_: &str| "B".to_owned(),
        |_: &str| "I".to_owned(),
        |_: &str| "S".to_owned(),
    );
    assert_eq!(format(message, &counted), "xS + B = I");
}

#[test]
fn markdown_escape_survives_chunking() {
    let renderer = FnRenderer::escaped(
        |s: &str| format!("*{s}*"),
        |s: &str| format!("_{s}_"),
        |s: &str| s.to_owned(),
    );
    let rendered = format("One. Two! (three)", &renderer);
    assert_eq!(rendered, "One\\. Two\\! \\(three\\)");
    assert_eq!(split(&rendered, " ", 8), vec![
        "One\\. ",
        "Two\\! ",
        "\\(three\\)"
    ]);
}
