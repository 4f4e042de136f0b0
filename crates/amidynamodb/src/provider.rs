//! The `amidynamodb` provider: metadata, schema and configuration.

use std::sync::Arc;

use async_trait::async_trait;

use amidynamodb_core::diagnostics::Diagnostics;
use amidynamodb_core::provider::{ProviderConfig, PROVIDER_TYPE_NAME};
use amidynamodb_core::schema::{Attribute, Schema};
use amidynamodb_core::storage::ScanStore;

use crate::data_source::{DataSource, GetItemDataSource};

/// Builds the store handed to data sources once the region is known.
#[async_trait]
pub trait StoreFactory: Send + Sync {
    async fn create_store(&self, region: &str) -> Arc<dyn ScanStore>;
}

/// Data the provider hands to its data sources after a successful configure.
#[derive(Clone)]
pub struct ProviderData {
    pub store: Arc<dyn ScanStore>,
}

impl std::fmt::Debug for ProviderData {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProviderData").finish_non_exhaustive()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProviderMetadata {
    pub type_name: String,
    pub version: String,
}

/// Result of configuring the provider.
#[derive(Debug, Default)]
pub struct ConfigureResponse {
    pub diagnostics: Diagnostics,
    /// Set only when configuration succeeded.
    pub provider_data: Option<ProviderData>,
}

/// Constructor for a data source, one per supported type.
pub type DataSourceFactory = fn() -> Box<dyn DataSource>;

pub struct AmiDynamoProvider {
    version: String,
    store_factory: Arc<dyn StoreFactory>,
}

impl AmiDynamoProvider {
    pub fn new(version: impl Into<String>, store_factory: Arc<dyn StoreFactory>) -> Self {
        Self {
            version: version.into(),
            store_factory,
        }
    }

    /// Returns the provider type name and version.
    pub fn metadata(&self) -> ProviderMetadata {
        ProviderMetadata {
            type_name: PROVIDER_TYPE_NAME.to_string(),
            version: self.version.clone(),
        }
    }

    /// Defines the provider-level schema for configuration data.
    pub fn schema(&self) -> Schema {
        Schema::new(
            "AMI DynamoDB provider that implements obtaining the AWS AMI ID value from AWS DynamoDB tables for further deployment of EC2 instances.",
        )
        .with_attribute("region", Attribute::required_string("AWS Region"))
    }

    /// Validates the provider block and builds the store for data sources.
    pub async fn configure(&self, config: &serde_json::Value) -> ConfigureResponse {
        tracing::info!("Configuring amidynamodb client");
        let mut response = ConfigureResponse::default();

        response.diagnostics.append(self.schema().validate(config));
        if response.diagnostics.has_error() {
            return response;
        }

        let config: ProviderConfig = match serde_json::from_value(config.clone()) {
            Ok(config) => config,
            Err(err) => {
                response
                    .diagnostics
                    .add_error("Invalid Provider Configuration", err.to_string());
                return response;
            }
        };

        let region = match config.validated_region() {
            Ok(region) => region,
            Err(diags) => {
                response.diagnostics.append(diags);
                return response;
            }
        };

        tracing::info!(region, "Configuring region");

        let store = self.store_factory.create_store(region).await;
        response.provider_data = Some(ProviderData { store });

        tracing::info!(success = true, "Configured amidynamodb client");
        response
    }

    /// Defines the data sources implemented in the provider.
    pub fn data_sources(&self) -> Vec<DataSourceFactory> {
        vec![GetItemDataSource::boxed as DataSourceFactory]
    }

    /// Instantiates the data source with the given full type name.
    pub fn data_source(&self, type_name: &str) -> Option<Box<dyn DataSource>> {
        self.data_sources()
            .into_iter()
            .map(|factory| factory())
            .find(|data_source| data_source.type_name(PROVIDER_TYPE_NAME) == type_name)
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use amidynamodb_core::diagnostics::AttributePath;

    use super::*;
    use crate::storage::InMemoryStore;

    fn provider() -> AmiDynamoProvider {
        AmiDynamoProvider::new("0.1.0", Arc::new(InMemoryStore::new()))
    }

    #[test]
    fn test_metadata() {
        let metadata = provider().metadata();
        assert_eq!(metadata.type_name, "amidynamodb");
        assert_eq!(metadata.version, "0.1.0");
    }

    #[test]
    fn test_schema_requires_region() {
        let schema = provider().schema();
        let region = &schema.attributes["region"];

        assert!(region.required);
        assert_eq!(region.description, "AWS Region");
        assert_eq!(schema.attributes.len(), 1);
    }

    #[tokio::test]
    async fn test_configure_with_region() {
        let response = provider().configure(&json!({"region": "eu-west-1"})).await;

        assert!(response.diagnostics.is_empty());
        assert!(response.provider_data.is_some());
    }

    #[tokio::test]
    async fn test_configure_without_region() {
        let response = provider().configure(&json!({})).await;

        assert!(response.diagnostics.has_error());
        assert!(response.provider_data.is_none());
        let diag = response.diagnostics.iter().next().unwrap();
        assert_eq!(diag.attribute, Some(AttributePath::root("region")));
    }

    #[tokio::test]
    async fn test_configure_with_empty_region() {
        let response = provider().configure(&json!({"region": ""})).await;

        assert!(response.provider_data.is_none());
        let diag = response.diagnostics.iter().next().unwrap();
        assert_eq!(diag.summary, "Missing AWS Region");
        assert_eq!(diag.attribute, Some(AttributePath::root("region")));
    }

    #[test]
    fn test_single_data_source() {
        let provider = provider();

        assert_eq!(provider.data_sources().len(), 1);
        assert!(provider.data_source("amidynamodb_get_item").is_some());
        assert!(provider.data_source("amidynamodb_other").is_none());
    }
}
