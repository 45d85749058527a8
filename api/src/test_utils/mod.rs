//! Test utilities
//!
//! Manual mock implementations and test fixtures for unit testing.
//!
//! Manual mocks keep the port traits free of test-only attributes and let a
//! test control exactly what storage returns.

pub mod fixtures;
pub mod mocks;

pub use fixtures::*;
pub use mocks::*;
