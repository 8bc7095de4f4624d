use {
    botmux_channels::{ChunkSink, ReplyTarget, deliver_chunks},
    botmux_markup::split,
    tracing::debug,
};

use crate::{
    Result,
    config::{ParseMode, TelegramFormatConfig},
    markdown::TelegramMarkdownV2,
};

/// A reply ready for the Bot API: the `parse_mode` to post with and the
/// message chunks, in send order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedReply {
    pub parse_mode: ParseMode,
    pub chunks: Vec<String>,
}

/// Render `message` for Telegram and split it into sendable chunks.
///
/// In [`ParseMode::MarkdownV2`] the message goes through the botmux markup
/// formatter. In [`ParseMode::Html`] it is taken as-is. Either way the result
/// is split on `config.boundary` below `config.max_message_len` bytes.
#[must_use]
pub fn render_reply(message: &str, config: &TelegramFormatConfig) -> RenderedReply {
    let text = match config.parse_mode {
        ParseMode::MarkdownV2 => {
            TelegramMarkdownV2::with_superscript(config.superscript_policy).render_message(message)
        },
        ParseMode::Html => message.to_owned(),
    };
    let chunks = split(&text, &config.boundary, config.max_message_len);
    debug!(
        parse_mode = config.parse_mode.as_api_str(),
        chunks = chunks.len(),
        "rendered telegram reply"
    );
    RenderedReply {
        parse_mode: config.parse_mode,
        chunks,
    }
}

/// Renders replies and sends them through a [`ChunkSink`].
///
/// The sink is expected to post each chunk with
/// `config().parse_mode.as_api_str()` as the Bot API `parse_mode`.
pub struct TelegramOutbound<S> {
    sink: S,
    config: TelegramFormatConfig,
}

impl<S: ChunkSink> TelegramOutbound<S> {
    /// Wrap `sink`, rejecting an invalid `config`.
    pub fn new(sink: S, config: TelegramFormatConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { sink, config })
    }

    pub fn config(&self) -> &TelegramFormatConfig {
        &self.config
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Render `message` and deliver every chunk to `target`, in order.
    ///
    /// Returns the number of chunks sent. Delivery stops at the first
    /// failing chunk.
    pub async fn send_reply(&self, target: &ReplyTarget, message: &str) -> Result<usize> {
        let reply = render_reply(message, &self.config);
        Ok(deliver_chunks(&self.sink, target, &reply.chunks).await?)
    }
}
