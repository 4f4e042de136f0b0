//! Provider-level configuration.

use serde::{Deserialize, Serialize};

use crate::diagnostics::{AttributePath, Diagnostics};

/// Provider type name, also the prefix of every data source type name.
pub const PROVIDER_TYPE_NAME: &str = "amidynamodb";

/// Registry address the provider is published under.
pub const PROVIDER_ADDRESS: &str = "registry.terraform.io/dyudin0821/terraform-provider-amidynamodb";

/// The `provider "amidynamodb" {}` block.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProviderConfig {
    #[serde(default)]
    pub region: Option<String>,
}

impl ProviderConfig {
    /// Returns the configured region, or an attribute error if it is
    /// missing or empty.
    pub fn validated_region(&self) -> Result<&str, Diagnostics> {
        match self.region.as_deref() {
            Some(region) if !region.is_empty() => Ok(region),
            _ => {
                let mut diags = Diagnostics::new();
                diags.add_attribute_error(
                    AttributePath::root("region"),
                    "Missing AWS Region",
                    "The provider cannot create the AWS API client as there is a missing or empty value for the amidynamodb AWS Region.",
                );
                Err(diags)
            }
        }
    }
}

/// Full type name of a data source, e.g. `amidynamodb_get_item`.
pub fn data_source_type_name(provider_type_name: &str, suffix: &str) -> String {
    format!("{}_{}", provider_type_name, suffix)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_region_present() {
        let config = ProviderConfig {
            region: Some("eu-west-1".to_string()),
        };
        assert_eq!(config.validated_region().unwrap(), "eu-west-1");
    }

    #[test]
    fn test_missing_region_is_attribute_error() {
        let diags = ProviderConfig::default().validated_region().unwrap_err();

        assert!(diags.has_error());
        let diag = diags.iter().next().unwrap();
        assert_eq!(diag.summary, "Missing AWS Region");
        assert_eq!(diag.attribute, Some(AttributePath::root("region")));
    }

    #[test]
    fn test_empty_region_is_attribute_error() {
        let config = ProviderConfig {
            region: Some(String::new()),
        };
        assert!(config.validated_region().is_err());
    }

    #[test]
    fn test_data_source_type_name() {
        assert_eq!(
            data_source_type_name(PROVIDER_TYPE_NAME, "get_item"),
            "amidynamodb_get_item"
        );
    }
}
