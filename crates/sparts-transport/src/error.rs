//! Transport-specific error types

use thiserror::Error;

/// Result type alias for transport operations
pub type TransportResult<T> = std::result::Result<T, TransportError>;

/// Errors raised by the ledger transport layer
#[derive(Debug, Error)]
pub enum TransportError {
    /// The configured ledger address could not be parsed into a URL
    #[error("Invalid ledger address: {0}")]
    InvalidAddress(String),

    /// Connection, DNS, or timeout failure; the underlying error is
    /// propagated verbatim so the caller can report the network condition
    #[error("Transport error: {0}")]
    Http(String),

    /// HTTP succeeded but the body was not valid JSON for the expected
    /// shape; distinct from [`TransportError::Http`] so user-facing messages
    /// can point at the ledger service rather than the network
    #[error("Ledger response may not be properly formatted: {0}")]
    MalformedResponse(String),

    /// A request payload could not be encoded
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl From<reqwest::Error> for TransportError {
    fn from(err: reqwest::Error) -> Self {
        TransportError::Http(err.to_string())
    }
}
