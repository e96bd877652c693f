//! Error types for the crypto crate.

use thiserror::Error;

/// Result type alias for crypto operations.
pub type Result<T> = std::result::Result<T, CryptoError>;

/// Errors that can occur during crypto operations.
#[derive(Debug, Error)]
pub enum CryptoError {
    /// Token is not in the expected compact form
    #[error("Malformed token: {0}")]
    Malformed(String),

    /// Signature verification failed
    #[error("Signature mismatch")]
    SignatureMismatch,

    /// Encoding error
    #[error("Encoding error: {0}")]
    Encoding(String),
}
