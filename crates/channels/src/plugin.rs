use {
    async_trait::async_trait,
    serde::{Deserialize, Serialize},
};

use crate::Result;

/// Where every chunk of one reply is sent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReplyTarget {
    /// Chat/peer ID to send the reply to.
    pub chat_id: String,
    /// Inbound message the reply answers, if the channel threads replies.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reply_to_message_id: Option<String>,
}

impl ReplyTarget {
    pub fn new(chat_id: impl Into<String>) -> Self {
        Self {
            chat_id: chat_id.into(),
            reply_to_message_id: None,
        }
    }

    #[must_use]
    pub fn replying_to(mut self, message_id: impl Into<String>) -> Self {
        self.reply_to_message_id = Some(message_id.into());
        self
    }
}

/// Sends one already-rendered chunk as its own wire message.
///
/// The transport behind it (HTTP, a test buffer, stdout) is up to the
/// implementation. Ordering is handled by [`crate::deliver_chunks`].
#[async_trait]
pub trait ChunkSink: Send + Sync {
    async fn send_chunk(&self, target: &ReplyTarget, chunk: &str) -> Result<()>;
}

#[allow(clippy::unwrap_used, clippy::expect_used)]
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reply_target_serializes_without_empty_reply_id() {
        let json = serde_json::to_value(ReplyTarget::new("42")).unwrap();
        assert_eq!(json, serde_json::json!({ "chat_id": "42" }));
    }

    #[test]
    fn reply_target_roundtrips_reply_id() {
        let target = ReplyTarget::new("42").replying_to("9876");
        let json = serde_json::to_string(&target).unwrap();
        let back: ReplyTarget = serde_json::from_str(&json).unwrap();
        assert_eq!(back, target);
        assert_eq!(back.reply_to_message_id.as_deref(), Some("9876"));
    }

    #[test]
    fn sink_is_object_safe() {
        fn _accepts(_: &dyn ChunkSink) {}
    }
}
