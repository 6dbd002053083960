//! Tax rate sources.

pub mod static_table;

pub use static_table::{DEFAULT_RATE, StaticRateTable};
