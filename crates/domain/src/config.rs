//! Configuration structures for the IGDB integration

use serde::{Deserialize, Serialize};
use url::Url;

use crate::errors::{GameshelfError, Result};

/// Default timeout applied to every outbound request
pub const DEFAULT_TIMEOUT_SECONDS: u64 = 30;

/// IGDB API and Twitch OAuth settings
///
/// All four string values are required. `timeout_seconds` falls back to
/// [`DEFAULT_TIMEOUT_SECONDS`] when omitted from a config file.
#[derive(Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct IgdbConfig {
    /// Base URL of the IGDB API (e.g., "https://api.igdb.com/")
    pub base_url: String,
    /// Twitch OAuth base URL; `/token` is appended for client-credentials
    pub auth_url: String,
    pub client_id: String,
    pub client_secret: String,
    #[serde(default = "default_timeout_seconds")]
    pub timeout_seconds: u64,
}

fn default_timeout_seconds() -> u64 {
    DEFAULT_TIMEOUT_SECONDS
}

impl IgdbConfig {
    /// Create a config with the default request timeout
    pub fn new(
        base_url: impl Into<String>,
        auth_url: impl Into<String>,
        client_id: impl Into<String>,
        client_secret: impl Into<String>,
    ) -> Self {
        Self {
            base_url: base_url.into(),
            auth_url: auth_url.into(),
            client_id: client_id.into(),
            client_secret: client_secret.into(),
            timeout_seconds: DEFAULT_TIMEOUT_SECONDS,
        }
    }

    /// Check that every required value is present and both URLs parse
    ///
    /// # Errors
    /// Returns `GameshelfError::Config` naming the first offending field.
    pub fn validate(&self) -> Result<()> {
        parse_url("base URL", &self.base_url)?;
        parse_url("auth URL", &self.auth_url)?;

        if self.client_id.trim().is_empty() || self.client_secret.trim().is_empty() {
            return Err(GameshelfError::config(
                "client id or client secret is missing from the configuration",
            ));
        }

        if self.timeout_seconds == 0 {
            return Err(GameshelfError::config("timeout_seconds must be greater than zero"));
        }

        Ok(())
    }
}

// The secret must never end up in logs.
impl std::fmt::Debug for IgdbConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("IgdbConfig")
            .field("base_url", &self.base_url)
            .field("auth_url", &self.auth_url)
            .field("client_id", &self.client_id)
            .field("client_secret", &"<redacted>")
            .field("timeout_seconds", &self.timeout_seconds)
            .finish()
    }
}

fn parse_url(name: &str, value: &str) -> Result<Url> {
    if value.trim().is_empty() {
        return Err(GameshelfError::config(format!("{name} is missing from the configuration")));
    }

    Url::parse(value)
        .map_err(|e| GameshelfError::config(format!("{name} '{value}' is invalid: {e}")))
}
