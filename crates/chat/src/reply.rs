use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ReplyError {
    #[error("reply delivery failed: {0}")]
    Delivery(String),
    #[error("reply token was rejected by the platform: {0}")]
    TokenRejected(String),
}

/// Outbound delivery port. The message is opaque text to the sender; the
/// reply token correlates it with the inbound event.
#[async_trait]
pub trait ReplySender: Send + Sync {
    async fn send(&self, reply_token: &str, text: &str) -> Result<(), ReplyError>;
}

/// Placeholder delivery used until a platform client is wired in. Logs and
/// discards.
#[derive(Default)]
pub struct NoopReplySender;

#[async_trait]
impl ReplySender for NoopReplySender {
    async fn send(&self, reply_token: &str, text: &str) -> Result<(), ReplyError> {
        tracing::info!(
            event_name = "egress.chat.reply_discarded",
            reply_token = %reply_token,
            text_len = text.len(),
            "noop reply sender discarded outgoing message"
        );
        Ok(())
    }
}
