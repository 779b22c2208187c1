//! Error types for the Skillet client.

use thiserror::Error;

/// Result type for Skillet client operations.
pub type Result<T> = std::result::Result<T, ClientError>;

/// Skillet client errors.
#[derive(Debug, Error)]
pub enum ClientError {
    /// Configuration error (missing base URL, missing user id)
    #[error("Configuration error: {0}")]
    Config(String),

    /// Network error (connection failed, timeout)
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// API error (non-2xx response)
    #[error("API error ({status}): {message}")]
    Api { status: u16, message: String },

    /// Parse error (invalid JSON, unexpected response shape)
    #[error("Parse error: {0}")]
    Parse(String),
}
