//! Authenticated IGDB API client

use std::sync::Arc;
use std::time::Duration;

use gameshelf_common::auth::{ClientCredentialsClient, MokaTokenStore, TokenCache, TokenStore};
use gameshelf_domain::{GameshelfError, IgdbConfig, Result};
use reqwest::header::{HeaderMap, HeaderName, HeaderValue, AUTHORIZATION};
use reqwest::{Method, Response, StatusCode};
use tracing::{debug, instrument, warn};
use url::Url;

use super::auth::AccessTokenProvider;
use crate::errors::InfraError;
use crate::http::HttpClient;

/// Path segment prepended to every resource
pub const API_VERSION_PREFIX: &str = "v4/";

const CLIENT_ID_HEADER: &str = "client-id";

/// Per-request options supplied by the caller
#[derive(Debug, Clone, Default)]
pub struct RequestOptions {
    /// Extra headers; applied after the mandatory ones, so a caller value
    /// for `Client-ID` or `Authorization` replaces the mandatory value
    pub headers: HeaderMap,
    /// Raw request body (IGDB query language)
    pub body: Option<String>,
}

impl RequestOptions {
    /// Options carrying only a body
    pub fn with_body(body: impl Into<String>) -> Self {
        Self { headers: HeaderMap::new(), body: Some(body.into()) }
    }

    /// Add a header
    #[must_use]
    pub fn header(mut self, name: HeaderName, value: HeaderValue) -> Self {
        self.headers.insert(name, value);
        self
    }
}

/// IGDB API client
///
/// Every request carries `Client-ID` and a bearer token obtained from the
/// [`AccessTokenProvider`]. Non-2xx responses are returned as errors:
/// 401/403 as [`GameshelfError::Auth`], anything else as
/// [`GameshelfError::Http`] with the response body.
pub struct IgdbClient {
    http: HttpClient,
    base_url: Url,
    client_id: HeaderValue,
    auth: Arc<dyn AccessTokenProvider>,
}

impl IgdbClient {
    /// Create a client that authenticates with the configured credentials
    /// and caches its token in a [`MokaTokenStore`]
    ///
    /// # Errors
    /// Returns `GameshelfError::Config` if the configuration is invalid. No
    /// network request is made.
    pub fn new(config: &IgdbConfig) -> Result<Self> {
        Self::with_store(config, Arc::new(MokaTokenStore::new()))
    }

    /// Create a client whose token cache uses `store`
    ///
    /// # Errors
    /// Returns `GameshelfError::Config` if the configuration is invalid.
    pub fn with_store<S>(config: &IgdbConfig, store: Arc<S>) -> Result<Self>
    where
        S: TokenStore + 'static,
    {
        config.validate()?;
        let http = build_http_client(config)?;

        let issuer = ClientCredentialsClient::new(
            http.inner().clone(),
            &config.auth_url,
            config.client_id.clone(),
            config.client_secret.clone(),
        )
        .map_err(|e| GameshelfError::from(InfraError::from(e)))?;

        let auth: Arc<dyn AccessTokenProvider> = Arc::new(TokenCache::new(issuer, store));
        Self::assemble(config, http, auth)
    }

    /// Create a client with a custom token provider
    ///
    /// # Errors
    /// Returns `GameshelfError::Config` if the configuration is invalid.
    pub fn with_token_provider(
        config: &IgdbConfig,
        auth: Arc<dyn AccessTokenProvider>,
    ) -> Result<Self> {
        config.validate()?;
        let http = build_http_client(config)?;
        Self::assemble(config, http, auth)
    }

    fn assemble(
        config: &IgdbConfig,
        http: HttpClient,
        auth: Arc<dyn AccessTokenProvider>,
    ) -> Result<Self> {
        let base_url = directory_url(&config.base_url)?;
        let client_id = HeaderValue::from_str(&config.client_id)
            .map_err(|e| GameshelfError::config(format!("client id is not a valid header: {e}")))?;

        Ok(Self { http, base_url, client_id, auth })
    }

    /// Base URL requests are resolved against (always ends with `/`)
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Full URL for `path` under the API version prefix
    ///
    /// # Errors
    /// Returns `GameshelfError::Internal` if the path cannot be joined.
    pub fn endpoint(&self, path: &str) -> Result<Url> {
        let relative = format!("{API_VERSION_PREFIX}{}", path.trim_start_matches('/'));
        self.base_url
            .join(&relative)
            .map_err(|e| GameshelfError::internal(format!("cannot build URL for '{path}': {e}")))
    }

    /// Send an authenticated request to `v4/<path>`
    ///
    /// # Errors
    /// - `Auth` if no token can be obtained or the API answers 401/403
    /// - `Network` on transport failures
    /// - `Http` on any other non-2xx status
    #[instrument(skip(self, options))]
    pub async fn request(
        &self,
        method: Method,
        path: &str,
        options: RequestOptions,
    ) -> Result<Response> {
        let token = self.auth.access_token().await?;
        let url = self.endpoint(path)?;

        let mut headers = HeaderMap::new();
        headers.insert(HeaderName::from_static(CLIENT_ID_HEADER), self.client_id.clone());
        headers.insert(AUTHORIZATION, bearer(&token)?);
        for (name, value) in &options.headers {
            headers.insert(name.clone(), value.clone());
        }

        let mut builder = self.http.request(method, url).headers(headers);
        if let Some(body) = options.body {
            builder = builder.body(body);
        }

        let response = self.http.send(builder).await?;
        let status = response.status();
        if status.is_success() {
            debug!(%status, "IGDB request succeeded");
            return Ok(response);
        }

        let body = error_body(status, response.text().await);
        warn!(%status, "IGDB request returned error status");
        Err(status_error(status, body))
    }
}

fn build_http_client(config: &IgdbConfig) -> Result<HttpClient> {
    HttpClient::builder().timeout(Duration::from_secs(config.timeout_seconds)).build()
}

/// Parse `raw` and make sure relative joins append to its path
fn directory_url(raw: &str) -> Result<Url> {
    let mut url = Url::parse(raw)
        .map_err(|e| GameshelfError::config(format!("base URL '{raw}' is invalid: {e}")))?;
    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
    Ok(url)
}

fn bearer(token: &str) -> Result<HeaderValue> {
    let mut value = HeaderValue::from_str(&format!("Bearer {token}"))
        .map_err(|_| GameshelfError::auth("access token contains invalid header characters"))?;
    value.set_sensitive(true);
    Ok(value)
}

/// Body of an error response; a body that cannot be read is logged and
/// reported as empty
fn error_body(status: StatusCode, body: reqwest::Result<String>) -> String {
    match body {
        Ok(body) => body,
        Err(e) => {
            warn!(%status, error = %e, "failed to read IGDB error response body");
            String::new()
        }
    }
}

fn status_error(status: StatusCode, body: String) -> GameshelfError {
    if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
        let message = if body.is_empty() {
            format!("IGDB rejected credentials with status {status}")
        } else {
            format!("IGDB rejected credentials with status {status}: {body}")
        };
        GameshelfError::auth(message)
    } else {
        GameshelfError::Http { status: status.as_u16(), body }
    }
}
