//! Common utilities shared across Gameshelf crates.
//!
//! - `auth`: OAuth2 client-credentials flow and the bearer token cache
//! - `time`: clock abstraction so expiry logic can be driven in tests
//! - `testing`: deterministic helpers (feature `test-utils`)

#![forbid(unsafe_code)]
#![warn(rust_2018_idioms)]
#![warn(clippy::all, clippy::perf, clippy::complexity, clippy::suspicious)]

pub mod auth;
pub mod time;

// Testing utilities
// ---------------------------------------------------------------
#[cfg(any(feature = "test-utils", test))]
pub mod testing;

// Re-export commonly used types and traits for convenience
pub use auth::{
    AuthError, ClientCredentialsClient, MemoryTokenStore, MokaTokenStore, TokenCache, TokenGrant,
    TokenIssuer, TokenStore,
};
pub use time::{Clock, SystemClock};
