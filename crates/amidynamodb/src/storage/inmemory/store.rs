//! In-memory store implementation.

use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use amidynamodb_core::storage::{Item, Result, ScanRequest, ScanStore, StoreError};

use crate::provider::StoreFactory;

/// In-memory store for testing.
#[derive(Debug, Clone, Default)]
pub struct InMemoryStore {
    items: Arc<RwLock<Vec<Item>>>,
    failure: Arc<RwLock<Option<StoreError>>>,
    requests: Arc<RwLock<Vec<ScanRequest>>>,
}

impl InMemoryStore {
    /// Creates a new empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store that answers every scan with `items`.
    pub fn with_items(items: Vec<Item>) -> Self {
        Self {
            items: Arc::new(RwLock::new(items)),
            ..Self::default()
        }
    }

    /// Creates a store whose scans fail with `error`.
    pub fn failing(error: StoreError) -> Self {
        Self {
            failure: Arc::new(RwLock::new(Some(error))),
            ..Self::default()
        }
    }

    /// Returns every scan request received so far.
    pub async fn requests(&self) -> Vec<ScanRequest> {
        self.requests.read().await.clone()
    }
}

#[async_trait]
impl ScanStore for InMemoryStore {
    async fn scan(&self, request: &ScanRequest) -> Result<Vec<Item>> {
        self.requests.write().await.push(request.clone());

        if let Some(error) = self.failure.read().await.clone() {
            return Err(error);
        }

        Ok(self.items.read().await.clone())
    }
}

/// Every configured provider shares this store, whatever the region.
#[async_trait]
impl StoreFactory for InMemoryStore {
    async fn create_store(&self, region: &str) -> Arc<dyn ScanStore> {
        tracing::debug!(region, "Using in-memory store");
        Arc::new(self.clone())
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use amidynamodb_core::storage::ItemValue;

    use super::*;

    fn sample_request() -> ScanRequest {
        ScanRequest::new("amis", "ami = :a", HashMap::new())
    }

    #[tokio::test]
    async fn test_empty_store_returns_no_items() {
        let store = InMemoryStore::new();

        let items = store.scan(&sample_request()).await.unwrap();

        assert!(items.is_empty());
    }

    #[tokio::test]
    async fn test_returns_seeded_items_in_order() {
        let first = HashMap::from([("ami".to_string(), ItemValue::S("ami-1".to_string()))]);
        let second = HashMap::from([("ami".to_string(), ItemValue::S("ami-2".to_string()))]);
        let store = InMemoryStore::with_items(vec![first.clone(), second.clone()]);

        let items = store.scan(&sample_request()).await.unwrap();

        assert_eq!(items, vec![first, second]);
    }

    #[tokio::test]
    async fn test_failing_store_returns_error() {
        let store = InMemoryStore::failing(StoreError::ScanFailed("timeout".to_string()));

        let err = store.scan(&sample_request()).await.unwrap_err();

        assert_eq!(err.to_string(), "timeout");
    }

    #[tokio::test]
    async fn test_records_requests() {
        let store = InMemoryStore::new();

        store.scan(&sample_request()).await.unwrap();
        store.scan(&sample_request()).await.unwrap();

        let requests = store.requests().await;
        assert_eq!(requests.len(), 2);
        assert_eq!(requests[0].table_name, "amis");
    }

    #[tokio::test]
    async fn test_factory_stores_share_state() {
        let store = InMemoryStore::new();
        let created = store.create_store("us-east-1").await;

        created.scan(&sample_request()).await.unwrap();

        assert_eq!(store.requests().await.len(), 1);
    }
}
