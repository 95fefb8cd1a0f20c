use std::sync::Arc;

use dealcheck_chat::events::{EventDispatcher, TextMessageHandler};
use dealcheck_chat::queue::{MpscQueue, ReplyWorker};
use dealcheck_chat::reply::{NoopReplySender, ReplySender};
use dealcheck_chat::service::EngineDealService;
use dealcheck_chat::transport::{ChatRunner, ChatTransport, NoopChatTransport, ReconnectPolicy};
use dealcheck_core::config::{AppConfig, ConfigError};
use thiserror::Error;
use tracing::info;

const REPLY_QUEUE_CAPACITY: usize = 64;

pub struct Application {
    pub config: AppConfig,
    pub runner: ChatRunner,
    pub worker: ReplyWorker,
}

#[derive(Debug, Error)]
pub enum BootstrapError {
    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// Wires the pipeline: transport → dispatcher → deferred queue → worker →
/// reply sender. Transport and sender default to noop ports until a platform
/// client is plugged in.
pub fn bootstrap_with_config(config: AppConfig) -> Result<Application, BootstrapError> {
    info!(
        event_name = "system.bootstrap.start",
        correlation_id = "bootstrap",
        currency_marker = %config.locale.currency_marker,
        "starting application bootstrap"
    );

    let transport: Arc<dyn ChatTransport> = Arc::new(NoopChatTransport);
    let sender: Arc<dyn ReplySender> = Arc::new(NoopReplySender);
    build(config, transport, sender)
}

pub fn build(
    config: AppConfig,
    transport: Arc<dyn ChatTransport>,
    sender: Arc<dyn ReplySender>,
) -> Result<Application, BootstrapError> {
    let service = Arc::new(EngineDealService::new(
        config.locale.currency_marker.clone(),
        config.locale.catalog.clone(),
    ));

    let (queue, receiver) = MpscQueue::bounded(REPLY_QUEUE_CAPACITY);
    let mut dispatcher = EventDispatcher::new();
    dispatcher.register(TextMessageHandler::new(queue));

    let worker = ReplyWorker::new(receiver, service, sender);
    let runner = ChatRunner::new(transport, dispatcher, ReconnectPolicy::default());

    info!(
        event_name = "system.bootstrap.wired",
        correlation_id = "bootstrap",
        queue_capacity = REPLY_QUEUE_CAPACITY,
        "event pipeline wired"
    );

    Ok(Application { config, runner, worker })
}
