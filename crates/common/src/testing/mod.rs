//! Deterministic helpers for tests
//!
//! Compiled for this crate's own tests and, through the `test-utils`
//! feature, for the tests of downstream crates.

pub mod time;

pub use time::MockClock;
