use super::{PublerAction, WorkspaceRequirement};
use crate::error::{ConnectorError, ConnectorResult};
use crate::params::{ParamSet, ParameterDef, ParameterKind};
use crate::request::RequestSpec;
use serde_json::{json, Map, Value as JsonValue};

/// Imports media files into the Publer library from URLs. Accepts a
/// single `mediaUrl` or a `media` list; at least one URL must survive
/// cleaning.
pub struct MediaImportFromUrl;

impl PublerAction for MediaImportFromUrl {
    fn name(&self) -> &'static str {
        "media_import_from_url"
    }

    fn parameters(&self) -> Vec<ParameterDef> {
        vec![
            ParameterDef::string("mediaUrl"),
            ParameterDef::new("media", ParameterKind::MultiValue),
            ParameterDef::string("fileName"),
            ParameterDef::string("folderId"),
            ParameterDef::string("caption"),
            ParameterDef::string("source"),
            ParameterDef::string("uploadType"),
            ParameterDef::new("directUpload", ParameterKind::Boolean),
            ParameterDef::new("inLibrary", ParameterKind::Boolean),
        ]
    }

    fn workspace(&self) -> WorkspaceRequirement {
        WorkspaceRequirement::Header
    }

    fn build_request(&self, params: &ParamSet) -> ConnectorResult<RequestSpec> {
        let mut urls: Vec<String> =
            params.optional_string("mediaUrl").map(|url| vec![url.to_string()]).unwrap_or_default();
        urls.extend(params.id_list("media"));

        if urls.is_empty() {
            return Err(ConnectorError::validation("Media URL is required"));
        }

        let mut body = Map::new();
        match urls.as_slice() {
            [single] => {
                body.insert("url".into(), JsonValue::String(single.clone()));
            }
            many => {
                let entries: Vec<JsonValue> = many.iter().map(|url| json!({ "url": url })).collect();
                body.insert("media".into(), JsonValue::Array(entries));
            }
        }

        let string_fields = [
            ("fileName", "file_name"),
            ("folderId", "folder_id"),
            ("caption", "caption"),
            ("source", "source"),
            ("uploadType", "upload_type"),
        ];
        for (param, key) in string_fields {
            if let Some(value) = params.optional_string(param) {
                body.insert(key.into(), JsonValue::String(value.to_string()));
            }
        }

        if let Some(direct_upload) = params.optional_bool("directUpload") {
            body.insert("direct_upload".into(), JsonValue::Bool(direct_upload));
        }
        if let Some(in_library) = params.optional_bool("inLibrary") {
            body.insert("in_library".into(), JsonValue::Bool(in_library));
        }

        Ok(RequestSpec::post("/api/v1/media/from-url").json_body(JsonValue::Object(body)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use publer_core::{ParamValue, StaticParams};

    fn build(provider: &StaticParams) -> ConnectorResult<RequestSpec> {
        let set = ParamSet::resolve(&MediaImportFromUrl.parameters(), provider, 0)?;
        MediaImportFromUrl.build_request(&set)
    }

    #[test]
    fn single_url_produces_flat_body() {
        let provider = StaticParams::new().item([
            ("mediaUrl", "https://example.com/image.jpg"),
            ("fileName", "my-image.jpg"),
            ("folderId", "folder-1"),
        ]);
        let spec = build(&provider).unwrap();
        assert_eq!(
            spec.body.unwrap(),
            json!({
                "url": "https://example.com/image.jpg",
                "file_name": "my-image.jpg",
                "folder_id": "folder-1"
            })
        );
    }

    #[test]
    fn multiple_urls_produce_media_array() {
        let provider = StaticParams::new().item([(
            "media",
            ParamValue::from(vec!["https://a.test/1.jpg", "https://a.test/2.jpg"]),
        )]);
        let spec = build(&provider).unwrap();
        assert_eq!(
            spec.body.unwrap(),
            json!({
                "media": [
                    { "url": "https://a.test/1.jpg" },
                    { "url": "https://a.test/2.jpg" }
                ]
            })
        );
    }

    #[test]
    fn boolean_flags_are_only_sent_when_supplied() {
        let provider = StaticParams::new().item([
            ("mediaUrl", ParamValue::from("https://a.test/1.jpg")),
            ("directUpload", ParamValue::from(true)),
        ]);
        let body = build(&provider).unwrap().body.unwrap();
        assert_eq!(body.get("direct_upload"), Some(&json!(true)));
        assert_eq!(body.get("in_library"), None);
    }

    #[test]
    fn missing_media_url_is_a_validation_error() {
        let provider = StaticParams::new().item([("media", ParamValue::from("  , ,"))]);
        let err = build(&provider).unwrap_err();
        assert!(matches!(err, ConnectorError::Validation(_)));
    }
}
