//! The `get_item` data source.
//!
//! Scans a DynamoDB table with a user supplied filter and exposes the `ami`
//! attribute of the first matching item as `ami_id`.

use std::collections::HashMap;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use amidynamodb_core::diagnostics::Diagnostics;
use amidynamodb_core::provider::data_source_type_name;
use amidynamodb_core::query::{read_ami_id, ConfigValue, QueryInput, QueryOutcome};
use amidynamodb_core::schema::{Attribute, AttributeType, Schema};

use crate::provider::ProviderData;

/// A read-only data source served by the provider.
#[async_trait]
pub trait DataSource: Send + Sync {
    /// Full type name, derived from the provider type name.
    fn type_name(&self, provider_type_name: &str) -> String;

    fn schema(&self) -> Schema;

    /// Receives the provider data. `None` means the provider has not been
    /// configured yet.
    fn configure(&mut self, provider_data: Option<&ProviderData>);

    async fn read(&self, config: &serde_json::Value) -> ReadResponse;
}

/// Result of reading a data source.
#[derive(Debug, Default, Clone, PartialEq, Serialize)]
pub struct ReadResponse {
    /// New state; `None` leaves whatever state the host already held.
    pub state: Option<serde_json::Value>,
    pub diagnostics: Diagnostics,
}

/// Configuration and state of `amidynamodb_get_item`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GetItemModel {
    pub table_name: String,
    pub filter_expression: String,
    pub expression_attribute_values: HashMap<String, ConfigValue>,
    #[serde(default)]
    pub ami_id: Option<String>,
}

impl GetItemModel {
    fn query_input(&self) -> QueryInput {
        QueryInput {
            table_name: self.table_name.clone(),
            filter_expression: self.filter_expression.clone(),
            substitutions: self.expression_attribute_values.clone(),
        }
    }
}

#[derive(Debug, Default)]
pub struct GetItemDataSource {
    provider_data: Option<ProviderData>,
}

impl GetItemDataSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn boxed() -> Box<dyn DataSource> {
        Box::new(Self::new())
    }
}

#[async_trait]
impl DataSource for GetItemDataSource {
    fn type_name(&self, provider_type_name: &str) -> String {
        data_source_type_name(provider_type_name, "get_item")
    }

    fn schema(&self) -> Schema {
        Schema::new("Interface with amidynamodb API")
            .with_attribute(
                "table_name",
                Attribute::required_string("AWS DynamoDB table name"),
            )
            .with_attribute(
                "filter_expression",
                Attribute::required_string("AWS DynamoDB the condition(s) an attribute(s) must meet"),
            )
            .with_attribute(
                "expression_attribute_values",
                Attribute::required_map(
                    AttributeType::String,
                    "One or more substitution tokens for attribute names in an expression.",
                ),
            )
            .with_attribute(
                "ami_id",
                Attribute::computed_string("The return value of the AWS AMI ID from the DynamoDB table"),
            )
    }

    fn configure(&mut self, provider_data: Option<&ProviderData>) {
        if let Some(data) = provider_data {
            self.provider_data = Some(data.clone());
        }
    }

    async fn read(&self, config: &serde_json::Value) -> ReadResponse {
        tracing::info!("Preparing to read item data source");
        let mut response = ReadResponse::default();

        response.diagnostics.append(self.schema().validate(config));
        if response.diagnostics.has_error() {
            return response;
        }

        let mut state: GetItemModel = match serde_json::from_value(config.clone()) {
            Ok(model) => model,
            Err(err) => {
                response
                    .diagnostics
                    .add_error("Invalid Data Source Configuration", err.to_string());
                return response;
            }
        };

        let Some(provider_data) = &self.provider_data else {
            tracing::error!("Unable to prepare AWS DynamoDB client");
            response.diagnostics.add_error(
                "Unconfigured DynamoDB client",
                "The data source was read before the provider was configured.",
            );
            return response;
        };

        match read_ami_id(provider_data.store.as_ref(), &state.query_input()).await {
            QueryOutcome::Found { ami_id } => {
                tracing::debug!(ami_id = %ami_id, "Found matching item");
                state.ami_id = Some(ami_id);
                match serde_json::to_value(&state) {
                    Ok(value) => response.state = Some(value),
                    Err(err) => response
                        .diagnostics
                        .add_error("Unable to Set State", err.to_string()),
                }
            }
            QueryOutcome::NotFound => {
                response
                    .diagnostics
                    .add_warning("No matching items found in the DynamoDB table.", "");
            }
            QueryOutcome::Failed { message } => {
                tracing::error!(error = %message, "Unable to read item");
                response.diagnostics.add_error("Unable to Read Item", message);
            }
        }

        response
    }
}
