//! The parse → price → rank → compose pipeline.
//!
//! Every step is synchronous and side-effect-free; the only process-wide state
//! is the compiled pair pattern in [`parser`]. One invocation owns its item
//! list end to end, so concurrent calls need no coordination.

pub mod composer;
pub mod model;
pub mod parser;
pub mod pricing;

pub use model::{ParsedItem, PricedItem};

use crate::catalog::MessageCatalog;
use crate::errors::EngineError;

/// Core entry point: which good in `text` is cheapest per unit, and by how
/// much, phrased with `catalog`'s templates.
pub fn compute_best_deal(
    text: &str,
    currency_marker: &str,
    catalog: &MessageCatalog,
) -> Result<String, EngineError> {
    let parsed = parser::parse(text, currency_marker)?;
    let priced = parsed.into_iter().map(pricing::price_item).collect::<Result<Vec<_>, _>>()?;
    let ranked = pricing::rank(priced);
    composer::compose(&ranked, catalog)
}
