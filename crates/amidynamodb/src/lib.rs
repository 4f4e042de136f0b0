//! Terraform provider that reads AMI IDs from AWS DynamoDB tables.
//!
//! The provider exposes a single data source, `amidynamodb_get_item`. The
//! pure parts (value coercion, the read operation, diagnostics, schemas) live
//! in `amidynamodb_core`; this crate wires them to DynamoDB and to the host.

pub mod config;
pub mod data_source;
pub mod error;
pub mod host;
pub mod provider;
pub mod storage;
