//! Web layer for the browser-based calculator page.
//!
//! Uses Askama templates for server-side rendering; the form itself talks to
//! the JSON API from `static/app.js`.
//!
//! # Modules
//!
//! - [`handlers`] - Template rendering handlers
//! - [`routes`] - Page route configuration

pub mod handlers;
pub mod routes;
