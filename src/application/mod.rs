//! Application layer services implementing business logic.
//!
//! Services consume domain traits and provide a clean API for HTTP handlers
//! and the CLI.
//!
//! # Available Services
//!
//! - [`services::tax_service::TaxService`] - Sales tax calculation
pub mod services;
