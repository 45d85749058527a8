//! HTTP handlers
//!
//! Axum request handlers for the API endpoints.

pub mod businesses;

pub use businesses::list_businesses;
