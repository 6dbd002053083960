//! Top-level router configuration combining API and web routes.
//!
//! # Route Structure
//!
//! - `GET  /`                        - Calculator page
//! - `POST /api/v1/calculate-tax`    - Tax calculation
//! - `GET  /api/v1/health`           - Static health payload
//! - `/static/*`                     - Static assets
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **CORS** - Any origin may call the API
//! - **Rate limiting** - Per-IP token bucket on `/api/v1` (configurable)

use crate::api;
use crate::api::middleware::{cors, rate_limit, tracing};
use crate::config::Config;
use crate::state::AppState;
use crate::web;
use anyhow::Result;
use axum::Router;
use tower::ServiceBuilder;
use tower_http::services::ServeDir;

/// Constructs the application router with all routes and middleware.
///
/// # Errors
///
/// Returns an error if the rate limiter settings in `config` are invalid.
pub fn app_router(state: AppState, config: &Config) -> Result<Router> {
    let mut api_router = api::routes::routes();
    if config.rate_limit_enabled {
        api_router = api_router.layer(rate_limit::layer(
            config.rate_limit_replenish_ms,
            config.rate_limit_burst,
        )?);
    }

    let router = Router::new()
        .merge(web::routes::routes())
        .nest("/api/v1", api_router)
        .nest_service("/static", ServeDir::new(&config.static_dir))
        .with_state(state)
        .layer(
            ServiceBuilder::new()
                .layer(tracing::layer())
                .layer(cors::layer()),
        );

    Ok(router)
}
