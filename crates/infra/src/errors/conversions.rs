//! Conversions from external infrastructure errors into domain errors.

use gameshelf_common::auth::AuthError;
use gameshelf_domain::GameshelfError;
use reqwest::Error as HttpError;
use thiserror::Error;

/// Error newtype that keeps conversions on the infrastructure side and can be
/// converted back into the domain error.
#[derive(Debug, Error)]
#[error(transparent)]
pub struct InfraError(pub GameshelfError);

impl From<InfraError> for GameshelfError {
    fn from(value: InfraError) -> Self {
        value.0
    }
}

impl From<GameshelfError> for InfraError {
    fn from(value: GameshelfError) -> Self {
        InfraError(value)
    }
}

/// Extension trait to make the conversion logic explicit in tests and within
/// this module.
trait IntoGameshelfError {
    fn into_gameshelf(self) -> GameshelfError;
}

/* -------------------------------------------------------------------------- */
/* reqwest::Error → GameshelfError */
/* -------------------------------------------------------------------------- */

impl IntoGameshelfError for HttpError {
    fn into_gameshelf(self) -> GameshelfError {
        if self.is_timeout() {
            return GameshelfError::network(format!("HTTP request timed out: {self}"));
        }

        if self.is_connect() {
            return GameshelfError::network(format!("HTTP connection failure: {self}"));
        }

        if self.is_builder() {
            return GameshelfError::internal(format!("failed to build HTTP request: {self}"));
        }

        if self.is_decode() {
            return GameshelfError::decode(self.to_string());
        }

        if let Some(status) = self.status() {
            return match status.as_u16() {
                code @ (401 | 403) => GameshelfError::auth(format!("HTTP {code}")),
                code => GameshelfError::Http { status: code, body: String::new() },
            };
        }

        GameshelfError::network(self.to_string())
    }
}

impl From<HttpError> for InfraError {
    fn from(value: HttpError) -> Self {
        InfraError(value.into_gameshelf())
    }
}

/* -------------------------------------------------------------------------- */
/* AuthError → GameshelfError */
/* -------------------------------------------------------------------------- */

impl IntoGameshelfError for AuthError {
    fn into_gameshelf(self) -> GameshelfError {
        match self {
            AuthError::RequestFailed(err) => match err.into_gameshelf() {
                GameshelfError::Network { message } => {
                    GameshelfError::network(format!("token request failed: {message}"))
                }
                other => other,
            },
            AuthError::ConfigError(message) => GameshelfError::config(message),
            other => GameshelfError::auth(other.to_string()),
        }
    }
}

impl From<AuthError> for InfraError {
    fn from(value: AuthError) -> Self {
        InfraError(value.into_gameshelf())
    }
}

/* -------------------------------------------------------------------------- */
/* Tests */
/* -------------------------------------------------------------------------- */
