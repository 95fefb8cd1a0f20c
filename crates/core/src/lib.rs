//! Dealcheck Core - unit-price comparison engine
//!
//! Extracts priced goods from free-form text, normalizes them to a unit price,
//! ranks them, and composes a human-readable verdict:
//! - **Engine** (`engine`) - parse → price → rank → compose pipeline
//! - **Catalog** (`catalog`) - externalized message templates (Japanese defaults)
//! - **Config** (`config`) - layered configuration with secret handling
//! - **Errors** (`errors`) - recoverable engine error taxonomy
//!
//! The engine is synchronous, deterministic, and stateless between
//! invocations; delivery concerns live in the `dealcheck-chat` crate.

pub mod catalog;
pub mod config;
pub mod engine;
pub mod errors;

pub use catalog::MessageCatalog;
pub use engine::{compute_best_deal, ParsedItem, PricedItem};
pub use errors::EngineError;
