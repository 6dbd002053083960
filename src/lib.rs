//! # Tax Calculation API
//!
//! A small stateless service that computes US sales tax for a shipping
//! address and a list of items, built with Axum.
//!
//! ## Architecture
//!
//! - **Domain Layer** ([`domain`]) - Entities, validation rules, rate lookup trait
//! - **Application Layer** ([`application`]) - The tax calculation service
//! - **Infrastructure Layer** ([`infrastructure`]) - Static state rate table
//! - **API Layer** ([`api`]) - REST handlers, DTOs, and middleware
//! - **Web Layer** ([`web`]) - HTML calculator page
//!
//! ## Quick Start
//!
//! ```bash
//! cargo run
//! curl -s localhost:8080/api/v1/calculate-tax \
//!   -H 'Content-Type: application/json' \
//!   -d '{"address":{"street":"1 Main St","city":"Albany","state":"NY","country":"US","zipcode":"12207"},
//!        "items":[{"id":"1","name":"Widget","price":100.00,"quantity":2}]}'
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].
//! See [`config`] module for available options.

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;
pub mod utils;

pub mod config;
pub mod server;

pub mod routes;
pub mod web;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::TaxService;
    pub use crate::domain::entities::{Address, Item, ItemTaxDetail, TaxRequest, TaxResponse};
    pub use crate::domain::normalization::normalize_request;
    pub use crate::domain::{RateProvider, ValidationError};
    pub use crate::error::AppError;
    pub use crate::infrastructure::rates::StaticRateTable;
    pub use crate::state::AppState;
}
