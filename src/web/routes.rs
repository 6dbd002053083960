//! Web page route configuration.

use crate::state::AppState;
use crate::web::handlers::index_handler;
use axum::{Router, routing::get};

/// Public HTML pages.
///
/// # Endpoints
///
/// - `GET /` - Tax calculator form and rate table
pub fn routes() -> Router<AppState> {
    Router::new().route("/", get(index_handler))
}
