//! Error types for the API client

use thiserror::Error;
use tremendous_crypto::CryptoError;

/// Result type alias for API operations
pub type ApiResult<T> = Result<T, ApiError>;

/// API client errors
///
/// Resource operations never return these: their outcome is always an
/// [`crate::response::ApiResponse`], including HTTP 4xx/5xx and
/// transport failures. Only construction and local signing can fail
/// with an `ApiError`.
#[derive(Error, Debug)]
pub enum ApiError {
    /// Configuration error (missing or empty token/base address)
    #[error("Configuration error: {0}")]
    Config(String),

    /// The underlying HTTP client could not be built
    #[error("HTTP client error: {0}")]
    Http(#[from] reqwest::Error),

    /// Embed-token signing failed
    #[error("Signing error: {0}")]
    Signing(#[from] CryptoError),
}

impl ApiError {
    /// Create a configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }
}
