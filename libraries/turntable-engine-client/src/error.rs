//! Error types for the engine client.

use thiserror::Error;
use turntable_core::CoreError;

/// Result type for client operations.
pub type Result<T> = std::result::Result<T, ClientError>;

/// Errors from talking to the playback daemon.
#[derive(Debug, Error)]
pub enum ClientError {
    /// The configured base URL is not usable.
    #[error("Invalid daemon URL: {0}")]
    InvalidUrl(String),

    /// The daemon could not be reached at all (refused, timed out).
    #[error("Daemon unreachable: {0}")]
    ServerUnreachable(String),

    /// The daemon answered with a non-success status.
    #[error("Daemon error {status}: {message}")]
    ServerError {
        /// HTTP status code
        status: u16,
        /// Response body, if any
        message: String,
    },

    /// The daemon's response body did not parse.
    #[error("Failed to parse response: {0}")]
    ParseError(String),

    /// Transport-level request failure.
    #[error("Request error: {0}")]
    Request(#[from] reqwest::Error),
}

impl From<ClientError> for CoreError {
    fn from(err: ClientError) -> Self {
        match err {
            ClientError::ServerUnreachable(msg) => CoreError::network(msg),
            ClientError::Request(e) => CoreError::network(e.to_string()),
            other => CoreError::engine(other.to_string()),
        }
    }
}
