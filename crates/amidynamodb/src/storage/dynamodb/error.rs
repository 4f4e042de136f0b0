//! DynamoDB error mapping.
//!
//! Maps AWS SDK errors to `StoreError` from `amidynamodb_core::storage`.

use std::fmt::Debug;

use amidynamodb_core::storage::StoreError;
use aws_sdk_dynamodb::error::{DisplayErrorContext, SdkError};
use aws_sdk_dynamodb::operation::scan::ScanError;

/// Map a Scan SDK error to StoreError.
///
/// The message is the full SDK error chain, unmodified.
pub fn map_scan_error<R: Debug + Send + Sync + 'static>(err: SdkError<ScanError, R>) -> StoreError {
    let message = DisplayErrorContext(&err).to_string();

    let kind = match err.as_service_error() {
        Some(ScanError::ResourceNotFoundException(_)) => "table not found",
        Some(ScanError::ProvisionedThroughputExceededException(_)) => "throughput exceeded",
        Some(ScanError::RequestLimitExceeded(_)) => "request limit exceeded",
        Some(ScanError::InternalServerError(_)) => "internal server error",
        Some(_) => "service error",
        None => {
            tracing::warn!(error = %message, "DynamoDB scan did not reach the service");
            return StoreError::ConnectionFailed(message);
        }
    };

    tracing::warn!(kind, error = %message, "DynamoDB scan failed");
    StoreError::ScanFailed(message)
}
