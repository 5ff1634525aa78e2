//! Read-through bearer token cache
//!
//! Holds one token under [`TOKEN_CACHE_KEY`]. The token is cached for
//! `expires_in - 300` seconds so it is never served within five minutes of
//! its real expiry.

use std::sync::Arc;
use std::time::Duration;

use tracing::{debug, info, instrument};

use super::client::AuthError;
use super::traits::{TokenIssuer, TokenStore};

/// Fixed key the access token is cached under
pub const TOKEN_CACHE_KEY: &str = "igdb_api_token";

/// Seconds subtracted from `expires_in` before caching
pub const EXPIRY_SAFETY_MARGIN_SECONDS: i64 = 300;

/// Bearer token cache over an injected [`TokenStore`]
pub struct TokenCache<I: TokenIssuer, S: TokenStore> {
    issuer: I,
    store: Arc<S>,
}

impl<I: TokenIssuer, S: TokenStore> TokenCache<I, S> {
    /// Create a cache that obtains tokens from `issuer` and keeps them in
    /// `store`
    pub fn new(issuer: I, store: Arc<S>) -> Self {
        Self { issuer, store }
    }

    /// The underlying store
    pub fn store(&self) -> &Arc<S> {
        &self.store
    }

    /// Return the cached token, authenticating first on a miss
    ///
    /// # Errors
    /// Propagates the issuer's `AuthError`; nothing is cached in that case.
    #[instrument(skip(self))]
    pub async fn get_or_refresh(&self) -> Result<String, AuthError> {
        if let Some(token) = self.store.get(TOKEN_CACHE_KEY) {
            debug!("access token cache hit");
            return Ok(token);
        }

        debug!("access token cache miss, authenticating");
        let grant = self.issuer.issue_token().await?;

        match cache_ttl(grant.expires_in) {
            Some(ttl) => {
                self.store.put(TOKEN_CACHE_KEY, grant.access_token.clone(), ttl);
                info!(ttl_seconds = ttl.as_secs(), "cached access token");
            }
            None => {
                debug!(
                    expires_in = grant.expires_in,
                    "token lifetime within safety margin, not caching"
                );
            }
        }

        Ok(grant.access_token)
    }
}

/// TTL for a token that lives `expires_in` seconds, or `None` if it would
/// not be positive
pub fn cache_ttl(expires_in: i64) -> Option<Duration> {
    let seconds = expires_in.saturating_sub(EXPIRY_SAFETY_MARGIN_SECONDS);
    u64::try_from(seconds).ok().filter(|s| *s > 0).map(Duration::from_secs)
}
