//! DynamoDB store backend implementation.
//!
//! This module provides a DynamoDB-based implementation of the `ScanStore`
//! trait using `aws-sdk-dynamodb`.

mod client;
mod conversions;
mod error;
mod store;

pub use client::{create_client, AwsConfig};
pub use store::{DynamoDbStore, DynamoDbStoreFactory};
