//! Access token seam for the IGDB client

use async_trait::async_trait;
use gameshelf_common::auth::{TokenCache, TokenIssuer, TokenStore};
use gameshelf_domain::{GameshelfError, Result};

use crate::errors::InfraError;

/// Trait for providing access tokens
///
/// Lets tests hand the client a fixed token instead of running the OAuth
/// flow.
#[async_trait]
pub trait AccessTokenProvider: Send + Sync {
    /// Get a valid access token, authenticating if needed
    async fn access_token(&self) -> Result<String>;
}

#[async_trait]
impl<I, S> AccessTokenProvider for TokenCache<I, S>
where
    I: TokenIssuer,
    S: TokenStore,
{
    async fn access_token(&self) -> Result<String> {
        self.get_or_refresh().await.map_err(|e| GameshelfError::from(InfraError::from(e)))
    }
}
