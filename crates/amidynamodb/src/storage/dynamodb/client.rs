//! AWS SDK client setup.

use aws_sdk_dynamodb::Client;

/// AWS client configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AwsConfig {
    /// Custom endpoint URL (for local DynamoDB).
    pub endpoint_url: Option<String>,
    /// AWS region.
    pub region: String,
}

impl AwsConfig {
    /// Configuration for `region` against the real AWS endpoint.
    pub fn new(region: impl Into<String>) -> Self {
        Self {
            endpoint_url: None,
            region: region.into(),
        }
    }

    /// Overrides the endpoint URL.
    pub fn with_endpoint_url(mut self, endpoint_url: Option<String>) -> Self {
        self.endpoint_url = endpoint_url;
        self
    }

    /// Returns a display string for the target environment.
    pub fn target_display(&self) -> String {
        match &self.endpoint_url {
            Some(url) => format!("Local DynamoDB ({})", url),
            None => format!("AWS DynamoDB (region: {})", self.region),
        }
    }
}

/// Creates a DynamoDB client with the given configuration.
///
/// Credentials come from the SDK default chain.
pub async fn create_client(config: &AwsConfig) -> Client {
    let mut sdk_config_loader = aws_config::defaults(aws_config::BehaviorVersion::latest())
        .region(aws_config::Region::new(config.region.clone()));

    if let Some(endpoint) = &config.endpoint_url {
        sdk_config_loader = sdk_config_loader.endpoint_url(endpoint);
    }

    let sdk_config = sdk_config_loader.load().await;
    Client::new(&sdk_config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_target_display_remote() {
        let config = AwsConfig {
            endpoint_url: None,
            region: "eu-central-1".to_string(),
        };
        assert_eq!(
            config.target_display(),
            "AWS DynamoDB (region: eu-central-1)"
        );
    }

    #[test]
    fn test_target_display_local() {
        let config = AwsConfig::new("us-east-1")
            .with_endpoint_url(Some("http://localhost:8000".to_string()));

        assert_eq!(
            config.target_display(),
            "Local DynamoDB (http://localhost:8000)"
        );
    }
}
