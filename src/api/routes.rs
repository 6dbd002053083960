//! API route configuration.

use crate::api::handlers::{calculate_tax_handler, health_handler};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

/// Versioned API routes, nested under `/api/v1` by [`crate::routes::app_router`].
///
/// # Endpoints
///
/// - `POST /calculate-tax` - Compute sales tax for an address and items
/// - `GET  /health`        - Static service health
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/calculate-tax", post(calculate_tax_handler))
        .route("/health", get(health_handler))
}
