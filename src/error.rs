//! Error types and handling.

use thiserror::Error;

/// Application-wide error type
#[derive(Error, Debug)]
pub enum AppError {
    /// HTTP transport failure (connection refused, timeout, bad TLS)
    #[error("Erreur réseau: {0}")]
    Http(#[from] reqwest::Error),

    /// Server answered with a non-success status
    #[error("{0}")]
    Fetch(String),

    /// Requested record does not exist
    #[error("{0}")]
    NotFound(String),

    /// Form input rejected before submission
    #[error("{0}")]
    Validation(String),
}

/// Result type alias for AppError
pub type Result<T> = std::result::Result<T, AppError>;

impl AppError {
    /// Create a fetch error with message
    pub fn fetch(msg: impl Into<String>) -> Self {
        Self::Fetch(msg.into())
    }

    /// Create a not found error with message
    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }

    /// Create a validation error with message
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }
}
