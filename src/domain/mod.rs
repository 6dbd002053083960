//! Domain layer: entities, validation rules and the rate lookup contract.
//!
//! Nothing in this layer performs I/O. The calculator lives in
//! [`crate::application::services`], the concrete rate table in
//! [`crate::infrastructure::rates`].
//!
//! # Request Flow
//!
//! 1. [`normalization::normalize_request`] merges `postal_code` into `zipcode`
//! 2. [`validation::validate_request`] checks business rules
//! 3. [`crate::application::services::TaxService`] resolves the rate through a
//!    [`rate_provider::RateProvider`] and computes the breakdown

pub mod entities;
pub mod error;
pub mod normalization;
pub mod rate_provider;
pub mod validation;

pub use error::ValidationError;
pub use rate_provider::RateProvider;

#[cfg(test)]
pub use rate_provider::MockRateProvider;
