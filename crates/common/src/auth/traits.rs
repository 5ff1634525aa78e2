//! Traits for token issuing and token storage
//!
//! These traits let [`super::TokenCache`] be tested without a network or a
//! real clock, and let applications pick the backing store.

use std::time::Duration;

use async_trait::async_trait;

use super::client::AuthError;
use super::types::TokenGrant;

/// Something that can obtain a fresh access token
#[async_trait]
pub trait TokenIssuer: Send + Sync {
    /// Request a new token grant from the authorization server
    ///
    /// # Errors
    /// Returns `AuthError` if the request fails or the response is unusable.
    async fn issue_token(&self) -> Result<TokenGrant, AuthError>;
}

/// Key-value capability with per-entry time-to-live
///
/// Implementations must never return a value after its TTL has elapsed.
pub trait TokenStore: Send + Sync {
    /// Value stored under `key`, if present and unexpired
    fn get(&self, key: &str) -> Option<String>;

    /// Store `value` under `key` for `ttl`
    ///
    /// A zero `ttl` removes any existing entry instead of storing.
    fn put(&self, key: &str, value: String, ttl: Duration);
}
