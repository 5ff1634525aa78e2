//! Error types used throughout the application

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Main error type for Gameshelf
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum GameshelfError {
    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Authentication error: {message}")]
    Auth { message: String },

    #[error("Network error: {message}")]
    Network { message: String },

    #[error("HTTP status {status}: {body}")]
    Http { status: u16, body: String },

    #[error("Decode error: {message}")]
    Decode { message: String },

    #[error("Internal error: {message}")]
    Internal { message: String },
}

impl GameshelfError {
    /// Build a [`GameshelfError::Config`]
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config { message: message.into() }
    }

    /// Build a [`GameshelfError::Auth`]
    pub fn auth(message: impl Into<String>) -> Self {
        Self::Auth { message: message.into() }
    }

    /// Build a [`GameshelfError::Network`]
    pub fn network(message: impl Into<String>) -> Self {
        Self::Network { message: message.into() }
    }

    /// Build a [`GameshelfError::Decode`]
    pub fn decode(message: impl Into<String>) -> Self {
        Self::Decode { message: message.into() }
    }

    /// Build a [`GameshelfError::Internal`]
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal { message: message.into() }
    }

    /// HTTP status carried by the error, if any
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Http { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Result type alias for Gameshelf operations
pub type Result<T> = std::result::Result<T, GameshelfError>;
