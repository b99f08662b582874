use super::{PublerAction, WorkspaceRequirement};
use crate::error::ConnectorResult;
use crate::params::{ParamSet, ParameterDef, ParameterKind};
use crate::request::RequestSpec;

pub const SORT_FIELDS: &[&str] = &[
    "followers",
    "reach",
    "engagement",
    "posts_count",
    "videos_count",
    "photos_count",
    "links_count",
    "statuses_count",
];

/// Lists the competitor accounts tracked for a social account.
pub struct ListCompetitors;

impl PublerAction for ListCompetitors {
    fn name(&self) -> &'static str {
        "list_competitors"
    }

    fn parameters(&self) -> Vec<ParameterDef> {
        vec![ParameterDef::string("accountId").required()]
    }

    fn workspace(&self) -> WorkspaceRequirement {
        WorkspaceRequirement::Header
    }

    fn build_request(&self, params: &ParamSet) -> ConnectorResult<RequestSpec> {
        let account_id = params.required_string("accountId")?;
        Ok(RequestSpec::get(format!("/api/v1/competitors/{}", account_id)))
    }
}

/// Retrieves analytics data for competitor accounts, with optional
/// filtering, pagination and sorting.
pub struct CompetitorAnalytics;

impl PublerAction for CompetitorAnalytics {
    fn name(&self) -> &'static str {
        "competitor_analytics"
    }

    fn parameters(&self) -> Vec<ParameterDef> {
        vec![
            ParameterDef::string("accountId").required(),
            ParameterDef::string("competitorId"),
            ParameterDef::string("query"),
            ParameterDef::string("from"),
            ParameterDef::string("to"),
            ParameterDef::new("page", ParameterKind::Number).default_value(0),
            ParameterDef::new("sortBy", ParameterKind::Options)
                .options(SORT_FIELDS)
                .default_value("followers"),
            ParameterDef::new("sortType", ParameterKind::Options)
                .options(&["asc", "desc"])
                .default_value("asc"),
        ]
    }

    fn workspace(&self) -> WorkspaceRequirement {
        WorkspaceRequirement::Header
    }

    fn build_request(&self, params: &ParamSet) -> ConnectorResult<RequestSpec> {
        let account_id = params.required_string("accountId")?;
        let spec = RequestSpec::get(format!("/api/v1/competitors/{}/analytics", account_id))
            .query_opt("competitor_id", params.optional_string("competitorId"))
            .query_opt("query", params.optional_string("query"))
            .query_opt("from", params.optional_string("from"))
            .query_opt("to", params.optional_string("to"))
            .query("page", params.integer("page", 0).to_string())
            .query_opt("sort_by", params.optional_string("sortBy"))
            .query_opt("sort_type", params.optional_string("sortType"));
        Ok(spec)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use publer_core::StaticParams;

    fn resolve(action: &dyn PublerAction, provider: &StaticParams) -> ParamSet {
        ParamSet::resolve(&action.parameters(), provider, 0).unwrap()
    }

    #[test]
    fn analytics_omits_empty_filter_fields() {
        let provider = StaticParams::new().item([("accountId", "acc-1")]);
        let spec = CompetitorAnalytics.build_request(&resolve(&CompetitorAnalytics, &provider)).unwrap();

        assert_eq!(spec.path, "/api/v1/competitors/acc-1/analytics");
        assert!(!spec.query.contains_key("from"));
        assert!(!spec.query.contains_key("to"));
        assert!(!spec.query.contains_key("competitor_id"));
        assert!(!spec.query.contains_key("query"));
        // Defaults are always sent.
        assert_eq!(spec.query.get("page").map(String::as_str), Some("0"));
        assert_eq!(spec.query.get("sort_by").map(String::as_str), Some("followers"));
        assert_eq!(spec.query.get("sort_type").map(String::as_str), Some("asc"));
    }

    #[test]
    fn analytics_forwards_supplied_filters() {
        let provider = StaticParams::new().item([
            ("accountId", "acc-1"),
            ("competitorId", "comp-9"),
            ("from", "2024-01-01"),
            ("to", "2024-12-31"),
        ]);
        let spec = CompetitorAnalytics.build_request(&resolve(&CompetitorAnalytics, &provider)).unwrap();

        assert_eq!(spec.query.get("competitor_id").map(String::as_str), Some("comp-9"));
        assert_eq!(spec.query.get("from").map(String::as_str), Some("2024-01-01"));
        assert_eq!(spec.query.get("to").map(String::as_str), Some("2024-12-31"));
    }

    #[test]
    fn competitor_list_interpolates_account_id() {
        let provider = StaticParams::new().item([("accountId", "acc-7")]);
        let spec = ListCompetitors.build_request(&resolve(&ListCompetitors, &provider)).unwrap();
        assert_eq!(spec.path, "/api/v1/competitors/acc-7");
        assert!(spec.query.is_empty());
    }

    #[test]
    fn competitor_list_requires_account_id() {
        let provider = StaticParams::new();
        let err = ParamSet::resolve(&ListCompetitors.parameters(), &provider, 0).unwrap_err();
        assert!(err.to_string().contains("accountId"));
    }
}
