//! Data Transfer Objects for API responses.
//!
//! Tax requests and responses are serialized straight from the domain
//! entities in [`crate::domain::entities`]; error bodies live in
//! [`crate::error::ErrorBody`].

pub mod health;
