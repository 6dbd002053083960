//! Handler for health check endpoint.

use axum::Json;

use crate::api::dto::health::HealthResponse;

/// Returns a fixed health payload.
///
/// # Endpoint
///
/// `GET /api/v1/health`
///
/// # Response
///
/// ```json
/// {
///   "status": "healthy",
///   "service": "tax-calculation-api",
///   "version": "1.0.0"
/// }
/// ```
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}
