//! HTTP transport for the Publer API.

use crate::connection::PublerConnection;
use crate::error::{ConnectorError, ConnectorResult};
use crate::request::{join_url, RequestSpec};
use publer_core::{sanitize_json_value, Credential};
use serde_json::Value as JsonValue;
use std::time::Duration;
use url::Url;

/// Publer uses a custom authorization scheme token instead of the
/// standard `Bearer`.
pub const AUTH_SCHEME: &str = "Bearer-API";

/// Header carrying the workspace scope on scoped endpoints.
pub const WORKSPACE_HEADER: &str = "Publer-Workspace-Id";

/// Thin wrapper over `reqwest` that attaches authentication and decodes
/// JSON responses.
#[derive(Debug, Clone)]
pub struct PublerClient {
    http: reqwest::Client,
    base_url: String,
}

impl PublerClient {
    /// Client against the production origin with default timeouts.
    pub fn new() -> ConnectorResult<Self> {
        Self::from_connection(&PublerConnection::default())
    }

    pub fn from_connection(connection: &PublerConnection) -> ConnectorResult<Self> {
        connection.validate()?;
        let timeouts = connection.timeout_config.clone().unwrap_or_default();
        let http = reqwest::Client::builder()
            .connect_timeout(Duration::from_millis(timeouts.connect_ms))
            .timeout(Duration::from_millis(timeouts.total_ms))
            .build()?;

        Ok(Self { http, base_url: connection.base_url.trim_end_matches('/').to_string() })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Execute one request. Non-success statuses and undecodable bodies
    /// surface as transport errors.
    pub async fn send(
        &self,
        credential: &Credential,
        spec: &RequestSpec,
    ) -> ConnectorResult<JsonValue> {
        let mut url = Url::parse(&join_url(&self.base_url, &spec.path)?)
            .map_err(|e| ConnectorError::InvalidConfig(format!("Invalid request URL: {}", e)))?;

        for (key, value) in &spec.query {
            url.query_pairs_mut().append_pair(key, value);
        }

        let mut request = self
            .http
            .request(spec.method.clone(), url.clone())
            .header("Authorization", format!("{} {}", AUTH_SCHEME, credential.api_token))
            .header("Accept", "application/json");

        for (name, value) in &spec.headers {
            request = request.header(name.as_str(), value.as_str());
        }

        if let Some(body) = &spec.body {
            request = request.json(body);
        }

        tracing::debug!(
            method = %spec.method,
            url = %url,
            headers = %sanitize_json_value(&header_debug(spec)),
            "dispatching request"
        );

        let response = request.send().await?;
        let status = response.status();
        let body_text = response.text().await?;

        if !status.is_success() {
            return Err(ConnectorError::Status {
                status: status.as_u16(),
                message: snippet(&body_text),
            });
        }

        if body_text.is_empty() {
            return Ok(JsonValue::Null);
        }

        serde_json::from_str(&body_text)
            .map_err(|e| ConnectorError::Decode(format!("{} (body: {})", e, snippet(&body_text))))
    }
}

fn header_debug(spec: &RequestSpec) -> JsonValue {
    let mut map = serde_json::Map::new();
    map.insert("authorization".into(), JsonValue::String(AUTH_SCHEME.into()));
    for (name, value) in &spec.headers {
        map.insert(name.clone(), JsonValue::String(value.clone()));
    }
    JsonValue::Object(map)
}

fn snippet(body: &str) -> String {
    const MAX: usize = 256;
    if body.len() <= MAX {
        body.to_string()
    } else {
        let mut end = MAX;
        while !body.is_char_boundary(end) {
            end -= 1;
        }
        format!("{}...", &body[..end])
    }
}
