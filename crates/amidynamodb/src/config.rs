use std::env;

/// Process configuration loaded from environment variables.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Config {
    /// Custom DynamoDB endpoint, e.g. a local DynamoDB (default: none)
    pub endpoint_url: Option<String>,
    /// Emit logs as JSON instead of human readable lines (default: false)
    pub log_json: bool,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Environment variables:
    /// - `AWS_ENDPOINT_URL` - DynamoDB endpoint override (default: unset)
    /// - `AMIDYNAMODB_LOG_FORMAT` - `json` for JSON logs (default: text)
    pub fn from_env() -> Self {
        Self::from_vars(
            env::var("AWS_ENDPOINT_URL").ok(),
            env::var("AMIDYNAMODB_LOG_FORMAT").ok(),
        )
    }

    fn from_vars(endpoint_url: Option<String>, log_format: Option<String>) -> Self {
        Self {
            endpoint_url: endpoint_url.filter(|url| !url.is_empty()),
            log_json: log_format.is_some_and(|format| format.eq_ignore_ascii_case("json")),
        }
    }

    /// Default tracing filter when `RUST_LOG` is not set.
    pub fn default_log_filter(debug: bool) -> &'static str {
        if debug {
            "amidynamodb=debug,amidynamodb_core=debug"
        } else {
            "amidynamodb=info,amidynamodb_core=info"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::from_vars(None, None);

        assert_eq!(config.endpoint_url, None);
        assert!(!config.log_json);
    }

    #[test]
    fn test_empty_endpoint_is_ignored() {
        let config = Config::from_vars(Some(String::new()), None);
        assert_eq!(config.endpoint_url, None);
    }

    #[test]
    fn test_endpoint_and_json_logs() {
        let config = Config::from_vars(
            Some("http://localhost:8000".to_string()),
            Some("JSON".to_string()),
        );

        assert_eq!(config.endpoint_url.as_deref(), Some("http://localhost:8000"));
        assert!(config.log_json);
    }

    #[test]
    fn test_default_log_filter() {
        assert!(Config::default_log_filter(true).contains("debug"));
        assert!(Config::default_log_filter(false).contains("info"));
    }
}
