use std::sync::Arc;

use async_trait::async_trait;
use thiserror::Error;
use tokio::sync::mpsc;
use tracing::{info, warn};

use crate::reply::ReplySender;
use crate::service::DealService;

/// One deferred unit of work: the raw message text and the token needed to
/// answer it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ReplyTask {
    pub reply_token: String,
    pub text: String,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum QueueError {
    #[error("deferred queue is closed")]
    Closed,
}

#[async_trait]
pub trait DeferredQueue: Send + Sync {
    async fn enqueue(&self, task: ReplyTask) -> Result<(), QueueError>;
}

/// In-process queue over a bounded tokio channel.
#[derive(Clone)]
pub struct MpscQueue {
    sender: mpsc::Sender<ReplyTask>,
}

impl MpscQueue {
    pub fn bounded(capacity: usize) -> (Self, mpsc::Receiver<ReplyTask>) {
        let (sender, receiver) = mpsc::channel(capacity);
        (Self { sender }, receiver)
    }
}

#[async_trait]
impl DeferredQueue for MpscQueue {
    async fn enqueue(&self, task: ReplyTask) -> Result<(), QueueError> {
        self.sender.send(task).await.map_err(|_| QueueError::Closed)
    }
}

/// Drains the deferred queue: run the engine, map failures to the fallback
/// message, deliver. A failed task never stops the loop.
pub struct ReplyWorker {
    receiver: mpsc::Receiver<ReplyTask>,
    service: Arc<dyn DealService>,
    sender: Arc<dyn ReplySender>,
}

impl ReplyWorker {
    pub fn new(
        receiver: mpsc::Receiver<ReplyTask>,
        service: Arc<dyn DealService>,
        sender: Arc<dyn ReplySender>,
    ) -> Self {
        Self { receiver, service, sender }
    }

    /// Runs until the queue side is dropped.
    pub async fn run(mut self) {
        while let Some(task) = self.receiver.recv().await {
            self.process(task).await;
        }
        info!(event_name = "worker.reply.stopped", "deferred queue closed; reply worker stopping");
    }

    async fn process(&self, task: ReplyTask) {
        let reply_text = match self.service.best_deal(&task.text) {
            Ok(message) => message,
            Err(error) => {
                info!(
                    event_name = "worker.reply.engine_error",
                    error_class = error.class(),
                    error = %error,
                    "engine returned a recoverable error; replying with fallback"
                );
                self.service.fallback_message()
            }
        };

        if let Err(error) = self.sender.send(&task.reply_token, &reply_text).await {
            warn!(
                event_name = "worker.reply.delivery_failed",
                error = %error,
                "reply delivery failed; continuing worker loop"
            );
        }
    }
}
