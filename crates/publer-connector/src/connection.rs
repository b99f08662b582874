use crate::error::{ConnectorError, ConnectorResult};
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

/// Production origin of the Publer API.
pub const DEFAULT_BASE_URL: &str = "https://app.publer.com";

/// Timeout configuration for the underlying HTTP client.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimeoutConfig {
    pub connect_ms: u64,
    pub total_ms: u64,
}

impl Default for TimeoutConfig {
    fn default() -> Self {
        Self {
            connect_ms: 10_000, // 10 seconds
            total_ms: 60_000,   // 60 seconds
        }
    }
}

/// Connection configuration for the Publer connector. The base URL is
/// overridable so tests and staging environments can point elsewhere.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PublerConnection {
    #[serde(default = "default_base_url")]
    pub base_url: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub timeout_config: Option<TimeoutConfig>,
}

impl PublerConnection {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self { base_url: base_url.into(), timeout_config: None }
    }

    /// Build a connection configuration from raw JSON supplied by the host.
    pub fn from_json(value: JsonValue) -> ConnectorResult<Self> {
        let connection: Self = serde_json::from_value(value).map_err(|err| {
            ConnectorError::InvalidConfig(format!("Invalid connection config: {}", err))
        })?;
        connection.validate()?;
        Ok(connection)
    }

    pub fn validate(&self) -> ConnectorResult<()> {
        if !self.base_url.starts_with("http://") && !self.base_url.starts_with("https://") {
            return Err(ConnectorError::InvalidConfig(
                "base_url must begin with http:// or https://".into(),
            ));
        }
        Ok(())
    }
}

impl Default for PublerConnection {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn from_json_applies_default_base_url() {
        let connection = PublerConnection::from_json(json!({})).unwrap();
        assert_eq!(connection.base_url, DEFAULT_BASE_URL);
        assert!(connection.timeout_config.is_none());
    }

    #[test]
    fn from_json_reads_timeouts() {
        let connection = PublerConnection::from_json(json!({
            "base_url": "http://localhost:8080",
            "timeout_config": { "connect_ms": 500, "total_ms": 2000 }
        }))
        .unwrap();
        assert_eq!(connection.base_url, "http://localhost:8080");
        let timeouts = connection.timeout_config.unwrap();
        assert_eq!(timeouts.connect_ms, 500);
        assert_eq!(timeouts.total_ms, 2000);
    }

    #[test]
    fn rejects_base_url_without_scheme() {
        let err = PublerConnection::from_json(json!({ "base_url": "app.publer.com" })).unwrap_err();
        assert!(matches!(err, ConnectorError::InvalidConfig(_)));
    }
}
