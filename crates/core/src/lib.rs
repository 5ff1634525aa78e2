//! # Gameshelf Core
//!
//! Pure business logic layer - no infrastructure dependencies.
//!
//! This crate contains:
//! - Port interfaces (traits) for game metadata sources
//! - Use cases built on those ports
//!
//! ## Architecture Principles
//! - Only depends on `gameshelf-domain`
//! - No HTTP or platform code
//! - All external dependencies via traits

pub mod catalog;

pub use catalog::ports::GameMetadataSource;
pub use catalog::CatalogService;
