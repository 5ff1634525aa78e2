//! OAuth2 token response types

use serde::Deserialize;

use super::client::AuthError;

/// Lifetime assumed when the token endpoint omits `expires_in`
pub const DEFAULT_EXPIRES_IN_SECONDS: i64 = 3600;

/// Raw token endpoint response
///
/// Every field is optional here so that a missing `access_token` surfaces
/// as [`AuthError::MissingAccessToken`] rather than a generic parse error.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TokenResponse {
    #[serde(default)]
    pub access_token: Option<String>,
    #[serde(default)]
    pub expires_in: Option<i64>,
    #[serde(default)]
    pub token_type: Option<String>,
}

impl TokenResponse {
    /// Decode a token endpoint body
    ///
    /// # Errors
    /// - `AuthError::MalformedResponse` if `body` is not a JSON object
    /// - `AuthError::MissingAccessToken` if `access_token` is absent or empty
    pub fn parse(body: &str) -> Result<TokenGrant, AuthError> {
        let response: TokenResponse =
            serde_json::from_str(body).map_err(|e| AuthError::MalformedResponse(e.to_string()))?;
        response.into_grant()
    }

    /// Validate the response and apply the default lifetime
    ///
    /// # Errors
    /// Returns `AuthError::MissingAccessToken` if no usable token is present.
    pub fn into_grant(self) -> Result<TokenGrant, AuthError> {
        let access_token = self
            .access_token
            .filter(|token| !token.is_empty())
            .ok_or(AuthError::MissingAccessToken)?;

        Ok(TokenGrant {
            access_token,
            expires_in: self.expires_in.unwrap_or(DEFAULT_EXPIRES_IN_SECONDS),
        })
    }
}

/// A usable access token and its advertised lifetime in seconds
#[derive(Clone, PartialEq, Eq)]
pub struct TokenGrant {
    pub access_token: String,
    pub expires_in: i64,
}

impl std::fmt::Debug for TokenGrant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenGrant")
            .field("access_token", &"<redacted>")
            .field("expires_in", &self.expires_in)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_full_response() {
        let grant = TokenResponse::parse(
            r#"{"access_token":"abc","expires_in":5000,"token_type":"bearer"}"#,
        )
        .unwrap();
        assert_eq!(grant.access_token, "abc");
        assert_eq!(grant.expires_in, 5000);
    }

    #[test]
    fn defaults_expires_in() {
        let grant = TokenResponse::parse(r#"{"access_token":"abc"}"#).unwrap();
        assert_eq!(grant.expires_in, DEFAULT_EXPIRES_IN_SECONDS);
    }

    #[test]
    fn null_expires_in_uses_default() {
        let grant = TokenResponse::parse(r#"{"access_token":"abc","expires_in":null}"#).unwrap();
        assert_eq!(grant.expires_in, 3600);
    }

    #[test]
    fn missing_token_is_rejected() {
        let err = TokenResponse::parse(r#"{"expires_in":3600}"#).unwrap_err();
        assert!(matches!(err, AuthError::MissingAccessToken));
    }

    #[test]
    fn empty_token_is_rejected() {
        let err = TokenResponse::parse(r#"{"access_token":""}"#).unwrap_err();
        assert!(matches!(err, AuthError::MissingAccessToken));
    }

    #[test]
    fn invalid_json_is_malformed() {
        let err = TokenResponse::parse("<html>bad gateway</html>").unwrap_err();
        assert!(matches!(err, AuthError::MalformedResponse(_)));

        let err = TokenResponse::parse(r#"["abc"]"#).unwrap_err();
        assert!(matches!(err, AuthError::MalformedResponse(_)));
    }

    #[test]
    fn debug_redacts_token() {
        let grant = TokenGrant { access_token: "secret-token".into(), expires_in: 60 };
        assert!(!format!("{grant:?}").contains("secret-token"));
    }
}
