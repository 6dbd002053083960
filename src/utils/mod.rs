//! Utility functions shared across layers.
//!
//! - [`rounding`] - Currency and percentage rounding, decimal serialization

pub mod rounding;
