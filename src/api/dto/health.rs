//! DTOs for health check endpoint.

use serde::Serialize;

/// Service name reported by the health endpoint.
pub const SERVICE_NAME: &str = "tax-calculation-api";

/// Fixed health status payload.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub service: &'static str,
    pub version: &'static str,
}

impl HealthResponse {
    pub fn healthy() -> Self {
        Self {
            status: "healthy",
            service: SERVICE_NAME,
            version: env!("CARGO_PKG_VERSION"),
        }
    }
}
