use dealcheck_core::{compute_best_deal, EngineError, MessageCatalog};

/// Port through which the worker asks "which of these is the better deal".
/// Synchronous: the engine is pure and the worker owns the async context.
pub trait DealService: Send + Sync {
    fn best_deal(&self, text: &str) -> Result<String, EngineError>;

    /// The user-visible reply when `best_deal` fails. Errors never cross the
    /// reply channel as crashes.
    fn fallback_message(&self) -> String;
}

/// Binds the core engine to one configured currency marker and catalog.
pub struct EngineDealService {
    currency_marker: String,
    catalog: MessageCatalog,
}

impl EngineDealService {
    pub fn new(currency_marker: impl Into<String>, catalog: MessageCatalog) -> Self {
        Self { currency_marker: currency_marker.into(), catalog }
    }
}

impl DealService for EngineDealService {
    fn best_deal(&self, text: &str) -> Result<String, EngineError> {
        compute_best_deal(text, &self.currency_marker, &self.catalog)
    }

    fn fallback_message(&self) -> String {
        self.catalog.fallback.clone()
    }
}

#[cfg(test)]
mod tests {
    use dealcheck_core::{EngineError, MessageCatalog};

    use super::{DealService, EngineDealService};

    #[test]
    fn service_runs_the_engine_with_its_configured_marker() {
        let service = EngineDealService::new("円", MessageCatalog::default());

        let message = service.best_deal("500ml 150円 350ml 128円").expect("message");
        assert_eq!(message, "500mlの方が90mlオトク");
    }

    #[test]
    fn service_reports_engine_errors_as_values() {
        let service = EngineDealService::new("円", MessageCatalog::default());

        assert_eq!(service.best_deal("no numbers here"), Err(EngineError::NoItemsRecognized));
        assert_eq!(service.fallback_message(), "エラー");
    }
}
