//! Error types for the admission data service.

use thiserror::Error;

/// Result type for data service operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while talking to the admission backend.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// The request never produced a response.
    #[error("request failed: {reason}")]
    Transport { reason: String },

    /// The backend answered with a non-success status.
    #[error("backend returned {status} for {url}")]
    Status { status: u16, url: String },

    /// The requested resource does not exist.
    #[error("{what} not found")]
    NotFound { what: String },

    /// The response body did not match the expected shape.
    #[error("invalid response: {reason}")]
    Decode { reason: String },

    /// Configuration error.
    #[error("configuration error: {reason}")]
    Config { reason: String },
}

impl Error {
    pub fn transport(reason: impl Into<String>) -> Self {
        Self::Transport {
            reason: reason.into(),
        }
    }

    pub fn decode(reason: impl Into<String>) -> Self {
        Self::Decode {
            reason: reason.into(),
        }
    }

    pub fn not_found(what: impl Into<String>) -> Self {
        Self::NotFound { what: what.into() }
    }

    pub fn config(reason: impl Into<String>) -> Self {
        Self::Config {
            reason: reason.into(),
        }
    }
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            Self::decode(err.to_string())
        } else {
            Self::transport(err.to_string())
        }
    }
}
