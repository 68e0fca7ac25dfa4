//! Client error types.

use thiserror::Error;

/// Result type for client operations
pub type ClientResult<T> = Result<T, ClientError>;

/// Client errors
#[derive(Debug, Error)]
pub enum ClientError {
    /// Network or serialization failure while talking to the service
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),
}
