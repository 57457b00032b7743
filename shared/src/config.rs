use std::env;

/// Fallback for any configuration value that is unset or empty.
pub const DEFAULT_VALUE: &str = "unknown";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub environment: String,
    pub s3_bucket: String,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the config from an arbitrary key lookup, applying the same
    /// defaults as [`AppConfig::from_env`].
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let get = |key: &str| {
            lookup(key)
                .filter(|v| !v.is_empty())
                .unwrap_or_else(|| DEFAULT_VALUE.to_string())
        };

        Self {
            environment: get("ENVIRONMENT"),
            s3_bucket: get("S3_BUCKET"),
        }
    }

    pub fn message(&self) -> String {
        format!("Hello from {} environment!", self.environment)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_unset() {
        let config = AppConfig::from_lookup(lookup_from(&[]));
        assert_eq!(config.environment, "unknown");
        assert_eq!(config.s3_bucket, "unknown");
    }

    #[test]
    fn test_empty_values_fall_back() {
        let config = AppConfig::from_lookup(lookup_from(&[("ENVIRONMENT", ""), ("S3_BUCKET", "")]));
        assert_eq!(config.environment, DEFAULT_VALUE);
        assert_eq!(config.s3_bucket, DEFAULT_VALUE);
    }

    #[test]
    fn test_reads_both_values() {
        let config = AppConfig::from_lookup(lookup_from(&[
            ("ENVIRONMENT", "staging"),
            ("S3_BUCKET", "my-bucket"),
        ]));
        assert_eq!(
            config,
            AppConfig {
                environment: "staging".to_string(),
                s3_bucket: "my-bucket".to_string(),
            }
        );
    }

    #[test]
    fn test_message() {
        let config = AppConfig::from_lookup(lookup_from(&[("ENVIRONMENT", "prod")]));
        assert_eq!(config.message(), "Hello from prod environment!");

        let config = AppConfig::from_lookup(lookup_from(&[]));
        assert_eq!(config.message(), "Hello from unknown environment!");
    }
}
