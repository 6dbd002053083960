//! Application configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup and validated before the server starts.
//!
//! ```bash
//! export PORT="8080"
//! export LOG_FORMAT="json"
//! ```
//!
//! ## Optional Variables
//!
//! - `LISTEN` - Full bind address, overrides `PORT` (e.g. `127.0.0.1:9000`)
//! - `PORT` - Port bound on all interfaces (default: `8080`)
//! - `RUST_LOG` - Log level (default: `info`)
//! - `LOG_FORMAT` - Log format: `text` or `json` (default: `text`)
//! - `STATIC_DIR` - Directory served under `/static` (default: `static`)
//! - `RATE_LIMIT_ENABLED` - Per-IP throttling of `/api/v1` (default: `true`)
//! - `RATE_LIMIT_REPLENISH_MS` - Milliseconds to regain one request (default: 100)
//! - `RATE_LIMIT_BURST` - Requests allowed at once (default: 100)

use anyhow::{Context, Result};
use std::env;
use std::net::SocketAddr;

const DEFAULT_PORT: u16 = 8080;

/// Service configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub listen_addr: String,
    pub log_level: String,
    pub log_format: String,
    pub static_dir: String,
    pub rate_limit_enabled: bool,
    /// Interval in milliseconds after which one request is returned to the bucket.
    pub rate_limit_replenish_ms: u64,
    pub rate_limit_burst: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            listen_addr: format!("0.0.0.0:{DEFAULT_PORT}"),
            log_level: "info".to_string(),
            log_format: "text".to_string(),
            static_dir: "static".to_string(),
            rate_limit_enabled: true,
            rate_limit_replenish_ms: 100,
            rate_limit_burst: 100,
        }
    }
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if `PORT` is set but is not a valid port number.
    pub fn from_env() -> Result<Self> {
        let defaults = Self::default();

        let listen_addr = Self::load_listen_addr()?;
        let log_level = env::var("RUST_LOG").unwrap_or(defaults.log_level);
        let log_format = env::var("LOG_FORMAT").unwrap_or(defaults.log_format);
        let static_dir = env::var("STATIC_DIR").unwrap_or(defaults.static_dir);

        let rate_limit_enabled = env::var("RATE_LIMIT_ENABLED")
            .map(|v| v.eq_ignore_ascii_case("true") || v == "1")
            .unwrap_or(defaults.rate_limit_enabled);

        let rate_limit_replenish_ms = env::var("RATE_LIMIT_REPLENISH_MS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(defaults.rate_limit_replenish_ms);

        let rate_limit_burst = env::var("RATE_LIMIT_BURST")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(defaults.rate_limit_burst);

        Ok(Self {
            listen_addr,
            log_level,
            log_format,
            static_dir,
            rate_limit_enabled,
            rate_limit_replenish_ms,
            rate_limit_burst,
        })
    }

    /// Resolves the bind address.
    ///
    /// Priority:
    /// 1. `LISTEN` environment variable
    /// 2. `0.0.0.0:{PORT}`, with `PORT` defaulting to 8080
    fn load_listen_addr() -> Result<String> {
        if let Ok(listen) = env::var("LISTEN") {
            return Ok(listen);
        }

        let port = match env::var("PORT") {
            Ok(port) => port
                .parse::<u16>()
                .with_context(|| format!("PORT must be a valid port number, got '{port}'"))?,
            Err(_) => DEFAULT_PORT,
        };

        Ok(format!("0.0.0.0:{port}"))
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `log_format` is not `text` or `json`
    /// - `listen_addr` is not a `host:port` socket address
    /// - rate limiting is enabled with a zero interval or burst size
    pub fn validate(&self) -> Result<()> {
        if self.log_format != "text" && self.log_format != "json" {
            anyhow::bail!(
                "LOG_FORMAT must be 'text' or 'json', got '{}'",
                self.log_format
            );
        }

        if !self.listen_addr.contains(':') {
            anyhow::bail!(
                "LISTEN must be in format 'host:port', got '{}'",
                self.listen_addr
            );
        }

        self.listen_addr
            .parse::<SocketAddr>()
            .with_context(|| format!("LISTEN is not a valid socket address: '{}'", self.listen_addr))?;

        if self.rate_limit_enabled {
            if self.rate_limit_replenish_ms == 0 {
                anyhow::bail!("RATE_LIMIT_REPLENISH_MS must be greater than 0");
            }
            if self.rate_limit_burst == 0 {
                anyhow::bail!("RATE_LIMIT_BURST must be greater than 0");
            }
        }

        Ok(())
    }

    /// Logs a configuration summary.
    pub fn print_summary(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Listen address: {}", self.listen_addr);
        tracing::info!("  Static files: {}", self.static_dir);
        tracing::info!("  Log level: {}", self.log_level);
        tracing::info!("  Log format: {}", self.log_format);

        if self.rate_limit_enabled {
            tracing::info!(
                "  Rate limit: 1 request / {}ms, burst {}",
                self.rate_limit_replenish_ms,
                self.rate_limit_burst
            );
        } else {
            tracing::info!("  Rate limit: disabled");
        }
    }
}

/// Loads and validates configuration from environment variables.
///
/// # Errors
///
/// Returns an error if a variable is malformed or validation fails.
///
/// # Note
///
/// This function expects environment variables to be already loaded
/// (e.g., via `dotenvy::dotenv()` in `main.rs`).
pub fn load_from_env() -> Result<Config> {
    let config = Config::from_env()?;
    config.validate()?;
    Ok(config)
}
