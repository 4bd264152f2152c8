//! Test utilities
//!
//! Manual mock implementations and test fixtures for unit testing.
//!
//! Manual mocks keep failure injection and call recording explicit, and let
//! a test hold a store call pending to observe in-flight state.

pub mod fixtures;
pub mod mocks;

pub use fixtures::*;
pub use mocks::*;
