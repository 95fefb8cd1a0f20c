use thiserror::Error;

/// Recoverable failures of the comparison engine. None of these are fatal to
/// the hosting process; callers map them to a user-visible fallback message.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum EngineError {
    #[error("no quantity/price pairs recognized in input text")]
    NoItemsRecognized,
    #[error("item quantity must be positive, got {quantity}")]
    InvalidQuantity { quantity: f64 },
    #[error("ranked item list is empty")]
    InsufficientItems,
}

impl EngineError {
    /// Stable machine-readable class name, used by the CLI outcome payload
    /// and structured logs.
    pub fn class(&self) -> &'static str {
        match self {
            Self::NoItemsRecognized => "no_items_recognized",
            Self::InvalidQuantity { .. } => "invalid_quantity",
            Self::InsufficientItems => "insufficient_items",
        }
    }
}
