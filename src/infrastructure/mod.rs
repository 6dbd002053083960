//! Infrastructure layer providing concrete implementations of domain traits.
//!
//! # Modules
//!
//! - [`rates`] - Static US state rate table implementing [`crate::domain::RateProvider`]

pub mod rates;
