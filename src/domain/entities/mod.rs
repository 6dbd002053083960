//! Core domain entities for tax calculation.
//!
//! All entities are created per request and discarded once the response has
//! been serialized.
//!
//! # Entity Types
//!
//! - [`Address`] - Shipping address (jurisdiction source)
//! - [`Item`] - A purchased line item
//! - [`TaxRequest`] - Address plus ordered items
//! - [`ItemTaxDetail`] - Derived per-item breakdown
//! - [`TaxResponse`] - Derived totals and breakdowns

pub mod address;
pub mod item;
pub mod tax;

pub use address::Address;
pub use item::Item;
pub use tax::{ItemTaxDetail, TaxRequest, TaxResponse};
