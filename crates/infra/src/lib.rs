//! # Gameshelf Infrastructure
//!
//! Infrastructure implementations of core domain ports.
//!
//! This crate contains:
//! - The shared HTTP client
//! - Configuration loading (environment variables, JSON/TOML files)
//! - The IGDB integration (authenticated client, service, payload mapping)
//!
//! ## Architecture
//! - Implements traits defined in `gameshelf-core`
//! - Contains all "impure" code (network and filesystem I/O)

pub mod config;
pub mod errors;
pub mod http;
pub mod integrations;

// Re-export commonly used items
pub use errors::InfraError;
pub use http::{HttpClient, HttpClientBuilder};
pub use integrations::igdb::{IgdbClient, IgdbService, RequestOptions};
