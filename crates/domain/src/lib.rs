//! # Gameshelf Domain
//!
//! Business domain types for Gameshelf.
//!
//! This crate contains:
//! - The game record produced by metadata lookups
//! - Domain error types and Result definitions
//! - Configuration structures and their validation
//!
//! ## Architecture
//! - No dependencies on other Gameshelf crates
//! - Pure data structures, no I/O

pub mod config;
pub mod errors;
pub mod types;

// Re-export commonly used items
pub use config::*;
pub use errors::*;
pub use types::*;
