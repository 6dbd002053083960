//! Cross-origin access for browser clients.

use axum::http::{Method, header};
use tower_http::cors::{Any, CorsLayer};

/// Allows any origin to call the API with JSON bodies.
///
/// Preflight `OPTIONS` requests are answered by the layer itself.
pub fn layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE])
}
