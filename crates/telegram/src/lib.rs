//! Telegram rendering for botmux replies.
//!
//! Renders channel-neutral markup into Telegram MarkdownV2, splits the result
//! into message-sized chunks and hands them, in order, to a
//! [`botmux_channels::ChunkSink`].

pub mod config;
pub mod error;
pub mod markdown;
pub mod outbound;

pub use {
    config::{ParseMode, TelegramFormatConfig, load_config},
    error::{Error, Result},
    markdown::{
        SuperscriptPolicy, TELEGRAM_MAX_MESSAGE_LEN, TelegramMarkdownV2, superscript_digits,
    },
    outbound::{RenderedReply, TelegramOutbound, render_reply},
};
