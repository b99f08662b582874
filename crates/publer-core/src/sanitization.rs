//! Utilities for sanitizing sensitive data in logs and error messages

use serde_json::{Map, Value as JsonValue};

/// Fields that should be masked in logs and error messages
const SENSITIVE_FIELDS: &[&str] =
    &["api_token", "token", "authorization", "password", "secret", "api_key", "credential"];

/// Additional patterns to check (case-insensitive)
const SENSITIVE_PATTERNS: &[&str] = &["_token", "_secret", "_key"];

/// Sanitized placeholder for sensitive values
const SANITIZED_PLACEHOLDER: &str = "***REDACTED***";

/// Check if a field name indicates sensitive data
pub fn is_sensitive_field(field_name: &str) -> bool {
    let field_lower = field_name.to_lowercase();

    if SENSITIVE_FIELDS.iter().any(|&sensitive| field_lower == sensitive) {
        return true;
    }

    SENSITIVE_PATTERNS.iter().any(|&pattern| field_lower.contains(pattern))
}

/// Sanitize a JSON value by replacing sensitive fields with placeholders
pub fn sanitize_json_value(value: &JsonValue) -> JsonValue {
    match value {
        JsonValue::Object(map) => {
            let sanitized_map: Map<String, JsonValue> = map
                .iter()
                .map(|(key, val)| {
                    let sanitized_val = if is_sensitive_field(key) {
                        match val {
                            JsonValue::Object(_) | JsonValue::Array(_) => sanitize_json_value(val),
                            _ => JsonValue::String(SANITIZED_PLACEHOLDER.to_string()),
                        }
                    } else {
                        sanitize_json_value(val)
                    };
                    (key.clone(), sanitized_val)
                })
                .collect();
            JsonValue::Object(sanitized_map)
        }
        JsonValue::Array(arr) => JsonValue::Array(arr.iter().map(sanitize_json_value).collect()),
        other => other.clone(),
    }
}
