use thiserror::Error;

/// Errors that can occur when talking to the item store.
///
/// The `Display` output of every variant is the underlying description,
/// unprefixed, because it is surfaced to the user as-is.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StoreError {
    #[error("{0}")]
    ScanFailed(String),
    #[error("{0}")]
    ConnectionFailed(String),
}

/// Result type for store operations.
pub type Result<T> = std::result::Result<T, StoreError>;
