//! In-memory store backend for testing.
//!
//! The store returns the items it was seeded with, or a seeded error, for
//! every scan. Filter expressions are not evaluated. Every request is
//! recorded so tests can assert on what would have been sent to DynamoDB.
//!
//! # Example
//!
//! ```rust,ignore
//! use amidynamodb::storage::inmemory::InMemoryStore;
//!
//! let store = InMemoryStore::with_items(vec![item]);
//! // Use store for testing...
//! ```

mod store;

pub use store::InMemoryStore;
