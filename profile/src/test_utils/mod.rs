//! Test utilities
//!
//! Manual mock implementations and test fixtures for unit testing.
//!
//! The mocks keep everything in memory and expose their internals so tests
//! can check exactly what was written, and when.

pub mod fixtures;
pub mod mocks;

pub use fixtures::*;
pub use mocks::*;
