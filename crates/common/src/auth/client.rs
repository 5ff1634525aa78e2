//! OAuth 2.0 client-credentials client
//!
//! Exchanges a client id/secret for an access token at `<auth_url>/token`
//! (RFC 6749 §4.4). No user is involved and no refresh token is issued; a
//! new grant is simply requested when the cached one expires.

use async_trait::async_trait;
use reqwest::Client;
use thiserror::Error;
use tracing::{debug, info, instrument};
use url::Url;

use super::traits::TokenIssuer;
use super::types::{TokenGrant, TokenResponse};

/// Error type for token acquisition
#[derive(Debug, Error)]
pub enum AuthError {
    /// Transport-level failure talking to the token endpoint
    #[error("token request failed: {0}")]
    RequestFailed(#[from] reqwest::Error),

    /// Token endpoint answered with a non-success status
    #[error("token endpoint returned status {status}: {body}")]
    Rejected { status: u16, body: String },

    /// Body could not be decoded as a token response
    #[error("failed to retrieve access token: response is not valid JSON ({0})")]
    MalformedResponse(String),

    /// Body decoded but carried no `access_token`
    #[error("failed to retrieve access token: response lacks access_token")]
    MissingAccessToken,

    /// Token endpoint URL could not be built
    #[error("invalid token endpoint: {0}")]
    ConfigError(String),
}

/// Client-credentials token client
///
/// Shares the caller's `reqwest::Client` so that auth and API calls reuse
/// one connection pool.
#[derive(Clone)]
pub struct ClientCredentialsClient {
    http: Client,
    token_url: Url,
    client_id: String,
    client_secret: String,
}

impl ClientCredentialsClient {
    /// Create a client for the token endpoint under `auth_url`
    ///
    /// # Errors
    /// Returns `AuthError::ConfigError` if `auth_url` is not a valid URL.
    pub fn new(
        http: Client,
        auth_url: &str,
        client_id: impl Into<String>,
        client_secret: impl Into<String>,
    ) -> Result<Self, AuthError> {
        let token_url = token_endpoint(auth_url)?;
        Ok(Self {
            http,
            token_url,
            client_id: client_id.into(),
            client_secret: client_secret.into(),
        })
    }

    /// Full URL that tokens are requested from
    pub fn token_url(&self) -> &Url {
        &self.token_url
    }

    /// Request a new access token
    ///
    /// # Errors
    /// - `RequestFailed` on DNS/connect/TLS/timeout failures
    /// - `Rejected` on a non-2xx status
    /// - `MalformedResponse` / `MissingAccessToken` on an unusable body
    #[instrument(skip(self), fields(token_url = %self.token_url))]
    pub async fn request_token(&self) -> Result<TokenGrant, AuthError> {
        debug!("requesting client-credentials token");

        let response = self
            .http
            .post(self.token_url.clone())
            .form(&[
                ("client_id", self.client_id.as_str()),
                ("client_secret", self.client_secret.as_str()),
                ("grant_type", "client_credentials"),
            ])
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            return Err(AuthError::Rejected { status: status.as_u16(), body });
        }

        let grant = TokenResponse::parse(&body)?;
        info!(expires_in = grant.expires_in, "obtained access token");
        Ok(grant)
    }
}

impl std::fmt::Debug for ClientCredentialsClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClientCredentialsClient")
            .field("token_url", &self.token_url.as_str())
            .field("client_id", &self.client_id)
            .finish_non_exhaustive()
    }
}

#[async_trait]
impl TokenIssuer for ClientCredentialsClient {
    async fn issue_token(&self) -> Result<TokenGrant, AuthError> {
        self.request_token().await
    }
}

fn token_endpoint(auth_url: &str) -> Result<Url, AuthError> {
    let joined = format!("{}/token", auth_url.trim_end_matches('/'));
    Url::parse(&joined).map_err(|e| AuthError::ConfigError(format!("{auth_url}: {e}")))
}
