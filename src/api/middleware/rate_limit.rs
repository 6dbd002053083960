//! Per-client rate limiting using a token bucket.

use anyhow::{Context, Result};
use governor::clock::QuantaInstant;
use governor::middleware::NoOpMiddleware;
use std::sync::Arc;
use tower_governor::{
    GovernorLayer, governor::GovernorConfigBuilder, key_extractor::PeerIpKeyExtractor,
};

/// Rate limiter keyed by the peer IP of the connection.
pub type RateLimitLayer =
    GovernorLayer<PeerIpKeyExtractor, NoOpMiddleware<QuantaInstant>, axum::body::Body>;

/// Creates a rate limiter for the public API.
///
/// # Limits
///
/// - **Replenish**: one request every `replenish_ms` milliseconds
/// - **Burst**: up to `burst_size` requests at once
///
/// Requests exceeding the limit receive `429 Too Many Requests`.
///
/// The peer address comes from `ConnectInfo`, so the router must be served
/// with `into_make_service_with_connect_info::<SocketAddr>()`.
///
/// # Errors
///
/// Returns an error if either value is zero.
pub fn layer(replenish_ms: u64, burst_size: u32) -> Result<RateLimitLayer> {
    let governor_conf = GovernorConfigBuilder::default()
        .per_millisecond(replenish_ms)
        .burst_size(burst_size)
        .finish()
        .context("Rate limit replenish interval and burst size must be non-zero")?;

    Ok(GovernorLayer::new(Arc::new(governor_conf)))
}
