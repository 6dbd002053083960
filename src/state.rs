//! Shared application state injected into handlers.

use std::sync::Arc;

use crate::application::services::TaxService;
use crate::infrastructure::rates::StaticRateTable;

/// Tax service backed by the compiled-in rate table.
pub type DefaultTaxService = TaxService<StaticRateTable>;

/// Handler state. Cheap to clone; everything inside is read-only.
#[derive(Clone)]
pub struct AppState {
    pub tax_service: Arc<DefaultTaxService>,
}

impl AppState {
    pub fn new(tax_service: Arc<DefaultTaxService>) -> Self {
        Self { tax_service }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(Arc::new(TaxService::new(Arc::new(StaticRateTable::new()))))
    }
}
