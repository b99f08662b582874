//! Request descriptions and URL assembly.

use crate::error::{ConnectorError, ConnectorResult};
use indexmap::IndexMap;
use reqwest::Method;
use serde_json::Value as JsonValue;
use url::Url;

/// A fully-described HTTP request against the Publer API. Built fresh
/// per item and never reused across items.
#[derive(Debug, Clone)]
pub struct RequestSpec {
    pub method: Method,
    /// Path below the connection's base URL, e.g. `/api/v1/accounts`.
    pub path: String,
    /// Headers beyond the authorization and accept headers the client
    /// attaches itself. Names are sent exactly as spelled here.
    pub headers: IndexMap<String, String>,
    pub query: IndexMap<String, String>,
    pub body: Option<JsonValue>,
}

impl RequestSpec {
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            headers: IndexMap::new(),
            query: IndexMap::new(),
            body: None,
        }
    }

    pub fn get(path: impl Into<String>) -> Self {
        Self::new(Method::GET, path)
    }

    pub fn post(path: impl Into<String>) -> Self {
        Self::new(Method::POST, path)
    }

    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }

    pub fn query(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.insert(key.into(), value.into());
        self
    }

    /// Append a query pair only when the source value is non-empty.
    /// Empty-string query values are never emitted.
    pub fn query_opt(self, key: impl Into<String>, value: Option<&str>) -> Self {
        match value.map(str::trim).filter(|v| !v.is_empty()) {
            Some(v) => self.query(key, v),
            None => self,
        }
    }

    pub fn json_body(mut self, body: JsonValue) -> Self {
        self.body = Some(body);
        self
    }
}

/// Join a base URL with a request path, normalizing slashes and
/// percent-encoding path characters.
pub fn join_url(base_url: &str, path: &str) -> ConnectorResult<String> {
    let mut base = Url::parse(base_url).map_err(|e| {
        ConnectorError::InvalidConfig(format!("Invalid base URL '{}': {}", base_url, e))
    })?;

    if path.is_empty() {
        return Ok(base.to_string());
    }

    let joined = if path.starts_with('/') {
        base.join(path)
    } else {
        // Relative path: ensure the base path ends with '/' so the last
        // segment is not replaced.
        let base_path = base.path();
        if !base_path.ends_with('/') {
            base.set_path(&format!("{}/", base_path));
        }
        base.join(path)
    }
    .map_err(|e| {
        ConnectorError::InvalidConfig(format!(
            "Failed to join URL '{}' with path '{}': {}",
            base_url, path, e
        ))
    })?;

    Ok(joined.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn joins_base_and_path_variants() {
        assert_eq!(
            join_url("https://app.publer.com", "/api/v1/accounts").unwrap(),
            "https://app.publer.com/api/v1/accounts"
        );
        assert_eq!(
            join_url("https://app.publer.com/", "/api/v1/accounts").unwrap(),
            "https://app.publer.com/api/v1/accounts"
        );
        assert_eq!(
            join_url("http://localhost:8080", "/api/v1/users/me").unwrap(),
            "http://localhost:8080/api/v1/users/me"
        );
    }

    #[test]
    fn encodes_path_segments() {
        assert_eq!(
            join_url("https://app.publer.com", "/api/v1/job_status/id with space").unwrap(),
            "https://app.publer.com/api/v1/job_status/id%20with%20space"
        );
    }

    #[test]
    fn rejects_invalid_base_urls() {
        assert!(join_url("not-a-url", "/path").is_err());
        assert!(join_url("", "/path").is_err());
    }

    #[test]
    fn query_opt_skips_empty_values() {
        let spec = RequestSpec::get("/api/v1/competitors/acc/analytics")
            .query_opt("from", None)
            .query_opt("to", Some(""))
            .query_opt("competitor_id", Some("  "))
            .query_opt("query", Some("coffee"));

        assert_eq!(spec.query.len(), 1);
        assert_eq!(spec.query.get("query").map(String::as_str), Some("coffee"));
    }

    #[test]
    fn builder_collects_headers_query_and_body() {
        let spec = RequestSpec::post("/api/v1/media/from-url")
            .header("Publer-Workspace-Id", "ws-1")
            .query("workspace_id", "ws-1")
            .json_body(json!({ "url": "https://example.com/a.jpg" }));

        assert_eq!(spec.method, Method::POST);
        assert_eq!(spec.headers.get("Publer-Workspace-Id").map(String::as_str), Some("ws-1"));
        assert_eq!(spec.query.get("workspace_id").map(String::as_str), Some("ws-1"));
        assert!(spec.body.is_some());
    }
}
