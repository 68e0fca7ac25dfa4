//! CLI-specific error types.

use thiserror::Error;

use crate::client::ClientError;

/// Result type for CLI commands
pub type CliResult<T> = Result<T, CliError>;

/// CLI errors
#[derive(Debug, Error)]
pub enum CliError {
    /// Server failed to bind or serve
    #[error("server error: {0}")]
    Server(#[from] std::io::Error),

    /// Client call against the service failed
    #[error("client error: {0}")]
    Client(#[from] ClientError),

    /// The service answered, but not with the expected outcome
    #[error("scenario failed at step: {0}")]
    Scenario(String),
}
