//! Cache-specific error types

use thiserror::Error;

/// Result type alias for cache operations
pub type CacheResult<T> = std::result::Result<T, CacheError>;

/// Errors raised by the local cache layer
#[derive(Debug, Error)]
pub enum CacheError {
    /// The guarding lock was poisoned by a panicking writer
    #[error("Cache lock poisoned: {0}")]
    Lock(String),

    /// Cached data could not be encoded or decoded
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl From<serde_json::Error> for CacheError {
    fn from(err: serde_json::Error) -> Self {
        CacheError::Serialization(err.to_string())
    }
}
