use async_trait::async_trait;

use super::{Item, Result, ScanRequest};

/// A store that can evaluate a filtered scan over a table.
///
/// Implementations are shared between concurrent reads behind an `Arc`.
#[async_trait]
pub trait ScanStore: Send + Sync {
    /// Scans `request.table_name` and returns every item matching the filter.
    ///
    /// Item order is whatever the store returns.
    async fn scan(&self, request: &ScanRequest) -> Result<Vec<Item>>;
}
