//! Parameter schemas and per-item resolution.
//!
//! Every action declares its parameters as [`ParameterDef`]s. For each
//! input item the executor resolves the declarations against the host's
//! [`ParamsProvider`] into a [`ParamSet`]: declared defaults fill absent
//! optional parameters, and an absent required parameter is a validation
//! error scoped to that item.

use crate::error::{ConnectorError, ConnectorResult};
use indexmap::IndexMap;
use publer_core::{ParamValue, ParamsProvider};
use serde::{Deserialize, Serialize};

/// Declared type of an action parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ParameterKind {
    String,
    Number,
    Boolean,
    Options,
    DateTime,
    MultiValue,
}

/// One declared parameter of an action schema.
#[derive(Debug, Clone)]
pub struct ParameterDef {
    pub name: &'static str,
    pub kind: ParameterKind,
    pub required: bool,
    pub default: Option<ParamValue>,
    /// Allowed values for [`ParameterKind::Options`] parameters.
    pub options: &'static [&'static str],
    /// Visibility rule: the parameter only applies when another
    /// parameter holds one of the listed values.
    pub show_when: Option<(&'static str, &'static [&'static str])>,
}

impl ParameterDef {
    pub fn new(name: &'static str, kind: ParameterKind) -> Self {
        Self { name, kind, required: false, default: None, options: &[], show_when: None }
    }

    pub fn string(name: &'static str) -> Self {
        Self::new(name, ParameterKind::String)
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub fn default_value(mut self, value: impl Into<ParamValue>) -> Self {
        self.default = Some(value.into());
        self
    }

    pub fn options(mut self, options: &'static [&'static str]) -> Self {
        self.options = options;
        self
    }

    pub fn show_when(mut self, field: &'static str, values: &'static [&'static str]) -> Self {
        self.show_when = Some((field, values));
        self
    }

    fn visible_in(&self, values: &IndexMap<String, ParamValue>) -> bool {
        match self.show_when {
            None => true,
            Some((field, allowed)) => values
                .get(field)
                .and_then(ParamValue::as_str)
                .map(|value| allowed.contains(&value))
                .unwrap_or(false),
        }
    }
}

/// Parameters resolved for one input item.
#[derive(Debug, Clone)]
pub struct ParamSet {
    values: IndexMap<String, ParamValue>,
}

impl ParamSet {
    /// Resolve `defs` against the provider for one item index.
    pub fn resolve(
        defs: &[ParameterDef],
        provider: &dyn ParamsProvider,
        item_index: usize,
    ) -> ConnectorResult<Self> {
        let mut values = IndexMap::new();
        for def in defs {
            if let Some(value) = provider.param(def.name, item_index) {
                values.insert(def.name.to_string(), value);
            }
        }

        for def in defs {
            if values.contains_key(def.name) {
                continue;
            }
            if let Some(default) = &def.default {
                values.insert(def.name.to_string(), default.clone());
            } else if def.required && def.visible_in(&values) {
                return Err(ConnectorError::validation(format!(
                    "parameter '{}' is required",
                    def.name
                )));
            }
        }

        Ok(Self { values })
    }

    pub fn get(&self, name: &str) -> Option<&ParamValue> {
        self.values.get(name)
    }

    /// Trimmed, non-empty string value; a validation error otherwise.
    pub fn required_string(&self, name: &str) -> ConnectorResult<&str> {
        self.optional_string(name)
            .ok_or_else(|| ConnectorError::validation(format!("parameter '{}' is required", name)))
    }

    /// Trimmed string value; `None` when absent, empty or whitespace-only.
    pub fn optional_string(&self, name: &str) -> Option<&str> {
        self.values
            .get(name)
            .and_then(ParamValue::as_str)
            .map(str::trim)
            .filter(|s| !s.is_empty())
    }

    /// Integer value, tolerating stringified numbers from the host.
    pub fn integer(&self, name: &str, fallback: i64) -> i64 {
        match self.values.get(name) {
            Some(ParamValue::Integer(n)) => *n,
            Some(ParamValue::String(s)) => s.trim().parse().unwrap_or(fallback),
            _ => fallback,
        }
    }

    pub fn optional_bool(&self, name: &str) -> Option<bool> {
        self.values.get(name).and_then(ParamValue::as_bool)
    }

    /// Cleaned identifier list for the parameter, empty when absent.
    pub fn id_list(&self, name: &str) -> Vec<String> {
        self.values.get(name).map(clean_id_list).unwrap_or_default()
    }
}

/// Normalize an identifier-list parameter. Both representations are
/// accepted: a comma-separated string or a structured list. Entries are
/// trimmed of surrounding whitespace and empty entries dropped.
pub fn clean_id_list(value: &ParamValue) -> Vec<String> {
    let raw: Vec<&str> = match value {
        ParamValue::String(s) => s.split(',').collect(),
        ParamValue::List(items) => items.iter().map(String::as_str).collect(),
        _ => Vec::new(),
    };

    raw.into_iter().map(str::trim).filter(|entry| !entry.is_empty()).map(String::from).collect()
}
