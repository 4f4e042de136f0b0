//! Error types for the host request loop.

use thiserror::Error;

/// Result type alias for the host module.
pub type Result<T> = std::result::Result<T, HostError>;

/// Errors that end the host request loop.
#[derive(Error, Debug)]
pub enum HostError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to encode response: {0}")]
    Encode(#[from] serde_json::Error),
}
