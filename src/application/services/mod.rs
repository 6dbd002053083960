//! Business logic services for the application layer.

pub mod tax_service;

pub use tax_service::TaxService;
