//! DynamoDB store implementation.
//!
//! Implements `ScanStore` from `amidynamodb_core::storage` using DynamoDB.

use std::sync::Arc;

use async_trait::async_trait;
use aws_sdk_dynamodb::Client;

use amidynamodb_core::storage::{Item, Result, ScanRequest, ScanStore};

use crate::provider::StoreFactory;

use super::client::{create_client, AwsConfig};
use super::conversions::{attributes_to_item, scan_expression_attribute_values};
use super::error::map_scan_error;

/// DynamoDB-based store.
///
/// Cloning is cheap; clones share the underlying SDK client.
#[derive(Debug, Clone)]
pub struct DynamoDbStore {
    client: Client,
}

impl DynamoDbStore {
    /// Creates a new store with the given DynamoDB client.
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    /// Creates a new store from AWS configuration.
    pub async fn connect(config: &AwsConfig) -> Self {
        tracing::debug!(target_env = %config.target_display(), "Creating DynamoDB client");
        Self::new(create_client(config).await)
    }
}

#[async_trait]
impl ScanStore for DynamoDbStore {
    async fn scan(&self, request: &ScanRequest) -> Result<Vec<Item>> {
        let values = scan_expression_attribute_values(&request.expression_attribute_values);

        let output = self
            .client
            .scan()
            .table_name(&request.table_name)
            .filter_expression(&request.filter_expression)
            .set_expression_attribute_values(values)
            .set_expression_attribute_names(request.expression_attribute_names.clone())
            .set_projection_expression(request.projection_expression.clone())
            .send()
            .await
            .map_err(map_scan_error)?;

        Ok(output.items().iter().map(attributes_to_item).collect())
    }
}

/// Creates a `DynamoDbStore` for the region the provider is configured with.
#[derive(Debug, Clone, Default)]
pub struct DynamoDbStoreFactory {
    /// Custom endpoint URL (for local DynamoDB).
    pub endpoint_url: Option<String>,
}

impl DynamoDbStoreFactory {
    pub fn new(endpoint_url: Option<String>) -> Self {
        Self { endpoint_url }
    }
}

#[async_trait]
impl StoreFactory for DynamoDbStoreFactory {
    async fn create_store(&self, region: &str) -> Arc<dyn ScanStore> {
        let config = AwsConfig::new(region).with_endpoint_url(self.endpoint_url.clone());
        Arc::new(DynamoDbStore::connect(&config).await)
    }
}
