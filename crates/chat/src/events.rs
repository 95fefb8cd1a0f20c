use std::{collections::HashMap, sync::Arc};

use async_trait::async_trait;
use thiserror::Error;
use tracing::debug;

use crate::queue::{DeferredQueue, QueueError, ReplyTask};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChatEnvelope {
    pub envelope_id: String,
    pub event: ChatEvent,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ChatEvent {
    TextMessage(TextMessageEvent),
    Unsupported { event_type: String },
}

impl ChatEvent {
    pub fn event_type(&self) -> ChatEventType {
        match self {
            Self::TextMessage(_) => ChatEventType::TextMessage,
            Self::Unsupported { .. } => ChatEventType::Unsupported,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum ChatEventType {
    TextMessage,
    Unsupported,
}

/// A user message plus the opaque token the platform expects back when
/// replying to it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TextMessageEvent {
    pub reply_token: String,
    pub user_id: String,
    pub text: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EventContext {
    pub correlation_id: String,
}

impl Default for EventContext {
    fn default() -> Self {
        Self { correlation_id: "unknown-correlation-id".to_owned() }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum HandlerResult {
    Enqueued,
    Processed,
    Ignored,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum EventHandlerError {
    #[error(transparent)]
    Enqueue(#[from] QueueError),
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum DispatchError {
    #[error(transparent)]
    Handler(#[from] EventHandlerError),
}

#[async_trait]
pub trait EventHandler: Send + Sync {
    fn event_type(&self) -> ChatEventType;
    async fn handle(
        &self,
        envelope: &ChatEnvelope,
        ctx: &EventContext,
    ) -> Result<HandlerResult, EventHandlerError>;
}

#[derive(Default)]
pub struct EventDispatcher {
    handlers: HashMap<ChatEventType, Arc<dyn EventHandler>>,
}

impl EventDispatcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register<H>(&mut self, handler: H)
    where
        H: EventHandler + 'static,
    {
        self.handlers.insert(handler.event_type(), Arc::new(handler));
    }

    pub async fn dispatch(
        &self,
        envelope: &ChatEnvelope,
        ctx: &EventContext,
    ) -> Result<HandlerResult, DispatchError> {
        let Some(handler) = self.handlers.get(&envelope.event.event_type()) else {
            return Ok(HandlerResult::Ignored);
        };

        handler.handle(envelope, ctx).await.map_err(DispatchError::from)
    }

    pub fn handler_count(&self) -> usize {
        self.handlers.len()
    }
}

/// Inbound text handler. Does no engine work: every message becomes a
/// [`ReplyTask`] so the comparison runs outside the inbound path.
pub struct TextMessageHandler<Q> {
    queue: Q,
}

impl<Q> TextMessageHandler<Q>
where
    Q: DeferredQueue,
{
    pub fn new(queue: Q) -> Self {
        Self { queue }
    }
}

#[async_trait]
impl<Q> EventHandler for TextMessageHandler<Q>
where
    Q: DeferredQueue + 'static,
{
    fn event_type(&self) -> ChatEventType {
        ChatEventType::TextMessage
    }

    async fn handle(
        &self,
        envelope: &ChatEnvelope,
        ctx: &EventContext,
    ) -> Result<HandlerResult, EventHandlerError> {
        let ChatEvent::TextMessage(event) = &envelope.event else {
            return Ok(HandlerResult::Ignored);
        };

        self.queue
            .enqueue(ReplyTask {
                reply_token: event.reply_token.clone(),
                text: event.text.clone(),
            })
            .await?;

        debug!(
            event_name = "ingress.chat.task_enqueued",
            envelope_id = %envelope.envelope_id,
            correlation_id = %ctx.correlation_id,
            "deferred reply task enqueued"
        );
        Ok(HandlerResult::Enqueued)
    }
}
