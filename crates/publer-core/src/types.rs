use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;
use std::collections::HashMap;

/// Credential supplied by the host runtime. Read-only for the whole batch.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Credential {
    /// API token used for the `Bearer-API` authorization header.
    pub api_token: String,
    /// Default workspace id for workspace-scoped endpoints.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub workspace_id: Option<String>,
}

impl Credential {
    pub fn new(api_token: impl Into<String>) -> Self {
        Self { api_token: api_token.into(), workspace_id: None }
    }

    pub fn with_workspace(mut self, workspace_id: impl Into<String>) -> Self {
        self.workspace_id = Some(workspace_id.into());
        self
    }

    /// Workspace id, treating an empty or whitespace-only value as absent.
    pub fn workspace(&self) -> Option<&str> {
        self.workspace_id.as_deref().map(str::trim).filter(|ws| !ws.is_empty())
    }

    pub fn has_token(&self) -> bool {
        !self.api_token.trim().is_empty()
    }
}

/// Value of one declared action parameter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ParamValue {
    String(String),
    Integer(i64),
    Bool(bool),
    List(Vec<String>),
}

impl ParamValue {
    pub fn as_str(&self) -> Option<&str> {
        match self {
            ParamValue::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            ParamValue::Integer(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            ParamValue::Bool(b) => Some(*b),
            _ => None,
        }
    }
}

impl From<&str> for ParamValue {
    fn from(value: &str) -> Self {
        ParamValue::String(value.to_string())
    }
}

impl From<String> for ParamValue {
    fn from(value: String) -> Self {
        ParamValue::String(value)
    }
}

impl From<i64> for ParamValue {
    fn from(value: i64) -> Self {
        ParamValue::Integer(value)
    }
}

impl From<i32> for ParamValue {
    fn from(value: i32) -> Self {
        ParamValue::Integer(value.into())
    }
}

impl From<bool> for ParamValue {
    fn from(value: bool) -> Self {
        ParamValue::Bool(value)
    }
}

impl From<Vec<String>> for ParamValue {
    fn from(value: Vec<String>) -> Self {
        ParamValue::List(value)
    }
}

impl From<Vec<&str>> for ParamValue {
    fn from(value: Vec<&str>) -> Self {
        ParamValue::List(value.into_iter().map(String::from).collect())
    }
}

/// Host-side source of per-item parameter values.
pub trait ParamsProvider: Send + Sync {
    /// Value of the parameter `name` for the item at `item_index`, if the
    /// host supplied one. Declared defaults are applied by the caller.
    fn param(&self, name: &str, item_index: usize) -> Option<ParamValue>;
}

/// In-memory [`ParamsProvider`] with per-item maps and a shared fallback
/// map consulted for every index.
#[derive(Debug, Clone, Default)]
pub struct StaticParams {
    items: Vec<HashMap<String, ParamValue>>,
    shared: HashMap<String, ParamValue>,
}

impl StaticParams {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a map of parameter values for the next item index.
    pub fn item<K, V>(mut self, entries: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<ParamValue>,
    {
        self.items.push(entries.into_iter().map(|(k, v)| (k.into(), v.into())).collect());
        self
    }

    /// Set values that apply to every item unless overridden per item.
    pub fn shared<K, V>(mut self, entries: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<ParamValue>,
    {
        self.shared.extend(entries.into_iter().map(|(k, v)| (k.into(), v.into())));
        self
    }
}

impl ParamsProvider for StaticParams {
    fn param(&self, name: &str, item_index: usize) -> Option<ParamValue> {
        self.items
            .get(item_index)
            .and_then(|item| item.get(name))
            .or_else(|| self.shared.get(name))
            .cloned()
    }
}

/// One unit of input data flowing through a batch execution. Opaque to
/// the executor; its position in the batch is its index.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct InputItem {
    pub json: JsonValue,
}

impl InputItem {
    pub fn new(json: JsonValue) -> Self {
        Self { json }
    }
}

impl From<JsonValue> for InputItem {
    fn from(json: JsonValue) -> Self {
        Self { json }
    }
}

/// Output record produced for exactly one input item. Never mutated
/// after creation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutputItem {
    pub json: JsonValue,
    /// Index of the originating input item.
    pub paired_item: usize,
}

impl OutputItem {
    pub fn success(json: JsonValue, paired_item: usize) -> Self {
        Self { json, paired_item }
    }

    /// Error payload produced when a per-item failure is degraded by the
    /// continue-on-fail policy.
    pub fn failure(message: impl Into<String>, paired_item: usize) -> Self {
        let message = message.into();
        Self { json: serde_json::json!({ "error": message }), paired_item }
    }

    pub fn is_error(&self) -> bool {
        self.json.get("error").is_some()
    }

    pub fn error_message(&self) -> Option<&str> {
        self.json.get("error").and_then(JsonValue::as_str)
    }
}

/// Ordered output of a batch execution: one [`OutputItem`] per processed
/// input item, order identical to input order.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ExecutionResult {
    pub items: Vec<OutputItem>,
}

impl ExecutionResult {
    pub fn push(&mut self, item: OutputItem) {
        self.items.push(item);
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &OutputItem> {
        self.items.iter()
    }
}

impl IntoIterator for ExecutionResult {
    type Item = OutputItem;
    type IntoIter = std::vec::IntoIter<OutputItem>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}
