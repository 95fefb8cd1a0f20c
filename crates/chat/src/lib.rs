//! Chat Integration - the infrastructure glue around the comparison engine
//!
//! This crate keeps the engine pure by pushing every side effect behind a
//! narrow port:
//! - **Events** (`events`) - inbound envelopes and the dispatcher
//! - **Queue** (`queue`) - deferred reply tasks and the worker that runs them
//! - **Service** (`service`) - the engine port invoked from the worker
//! - **Reply** (`reply`) - outbound delivery port
//! - **Transport** (`transport`) - connection loop with reconnection logic
//!
//! # Architecture
//!
//! ```text
//! Chat Events → ChatRunner → EventDispatcher → DeferredQueue
//!                                                   ↓
//!                        ReplySender ← ReplyWorker (DealService)
//! ```
//!
//! The inbound path never runs the engine; text messages are acknowledged and
//! enqueued, and the worker computes and replies off the latency-sensitive
//! path.

pub mod events;
pub mod queue;
pub mod reply;
pub mod service;
pub mod transport;
