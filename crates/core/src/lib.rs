//! Core types and pure logic for the amidynamodb Terraform provider.
//!
//! Nothing in this crate talks to AWS. The item store is reached through the
//! [`storage::ScanStore`] trait, implemented by the provider crate.

pub mod diagnostics;
pub mod provider;
pub mod query;
pub mod schema;
pub mod storage;
