//! Domain layer
//!
//! Contains pure business logic with no external dependencies.
//! - `entities`: Value types for businesses and their opening hours
//! - `open_now`: The "is this business open" predicate
//! - `ports`: Trait definitions for external dependencies

pub mod entities;
pub mod open_now;
pub mod ports;
