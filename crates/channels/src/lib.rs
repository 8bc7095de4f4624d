//! Channel-side plumbing for rendered replies.
//!
//! A channel (Telegram, ...) renders a reply into ordered chunks with
//! `botmux-markup`, then hands them to a [`ChunkSink`] through
//! [`deliver_chunks`], which sends them one at a time and stops at the first
//! failure.

pub mod delivery;
pub mod error;
pub mod plugin;
pub mod registry;

pub use {
    delivery::deliver_chunks,
    error::{Error, Result},
    plugin::{ChunkSink, ReplyTarget},
    registry::RendererRegistry,
};
