//! Store backend implementations.
//!
//! This module provides concrete implementations of the
//! `amidynamodb_core::storage::ScanStore` trait.
//!
//! # Feature Flags
//!
//! - `dynamodb` (default): AWS DynamoDB backend using `aws-sdk-dynamodb`
//!
//! The in-memory backend is always available and is used by the tests.
//!
//! # Examples
//!
//! Build without the AWS SDK:
//! ```bash
//! cargo build -p amidynamodb --no-default-features
//! ```

#[cfg(feature = "dynamodb")]
pub mod dynamodb;

pub mod inmemory;

#[cfg(feature = "dynamodb")]
pub use dynamodb::{DynamoDbStore, DynamoDbStoreFactory};

pub use inmemory::InMemoryStore;
