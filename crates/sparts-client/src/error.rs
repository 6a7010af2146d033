//! Service-layer error types
//!
//! This module maps core, cache, and transport errors into one client-facing
//! error while keeping the failure classes apart: precondition
//! (configuration, malformed input), transport, protocol
//! (malformed-response, not-confirmed), and not-found.

use sparts_cache::CacheError;
use sparts_core::CoreError;
use sparts_transport::TransportError;
use thiserror::Error;

/// Result type alias for client operations
pub type ClientResult<T> = std::result::Result<T, ClientError>;

/// Client-facing error type
#[derive(Debug, Error)]
pub enum ClientError {
    /// Missing or unusable local configuration; detected before any network
    /// call
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Input failed structural UUID validation; detected before any network
    /// call
    #[error("'{0}' is not a valid UUID")]
    InvalidUuid(String),

    /// The ledger has no record for the requested identifier
    #[error("Part not found: {0}")]
    NotFound(String),

    /// Network-level failure, propagated unchanged from the transport
    #[error("Transport error: {0}")]
    Transport(String),

    /// HTTP succeeded but the reply was not shaped as expected; check the
    /// ledger service rather than the network
    #[error("Ledger response may not be properly formatted: {0}")]
    MalformedResponse(String),

    /// The ledger replied without confirming the operation
    #[error("Operation not confirmed by ledger (status '{status}')")]
    NotConfirmed { status: String },

    /// Local cache failure
    #[error("Cache error: {0}")]
    Cache(String),

    /// Encoding or decoding failure on a locally built value
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl From<TransportError> for ClientError {
    fn from(err: TransportError) -> Self {
        match err {
            TransportError::InvalidAddress(msg) => ClientError::Configuration(msg),
            TransportError::Http(msg) => ClientError::Transport(msg),
            TransportError::MalformedResponse(msg) => ClientError::MalformedResponse(msg),
            TransportError::Serialization(msg) => ClientError::Serialization(msg),
        }
    }
}

impl From<CacheError> for ClientError {
    fn from(err: CacheError) -> Self {
        match err {
            CacheError::Lock(msg) => ClientError::Cache(msg),
            CacheError::Serialization(msg) => ClientError::Serialization(msg),
        }
    }
}

impl From<CoreError> for ClientError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::InvalidUuid(s) => ClientError::InvalidUuid(s),
            CoreError::Serialization(msg) => ClientError::Serialization(msg),
        }
    }
}

impl From<serde_json::Error> for ClientError {
    fn from(err: serde_json::Error) -> Self {
        ClientError::Serialization(err.to_string())
    }
}

impl From<config::ConfigError> for ClientError {
    fn from(err: config::ConfigError) -> Self {
        ClientError::Configuration(err.to_string())
    }
}
