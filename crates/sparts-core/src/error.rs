//! Error types for core domain operations

use thiserror::Error;

/// Result type alias for core operations
pub type Result<T> = std::result::Result<T, CoreError>;

/// Errors raised by the core domain layer
#[derive(Debug, Error)]
pub enum CoreError {
    /// A string that was expected to be a canonical UUID is not one
    #[error("'{0}' is not a valid UUID")]
    InvalidUuid(String),

    /// A wire payload could not be encoded or decoded
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl From<serde_json::Error> for CoreError {
    fn from(err: serde_json::Error) -> Self {
        CoreError::Serialization(err.to_string())
    }
}
