//! The action catalog: one descriptor per callable Publer capability.

pub mod accounts;
pub mod competitors;
pub mod jobs;
pub mod media;
pub mod posts;
pub mod users;
pub mod workspaces;

use crate::error::ConnectorResult;
use crate::params::{ParamSet, ParameterDef};
use crate::request::RequestSpec;
use serde::{Deserialize, Serialize};

pub use posts::{ContentType, MediaKind, Network, NetworkContent, PostState};

/// How an action transmits the workspace scope, if the endpoint is
/// scoped at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WorkspaceRequirement {
    /// Endpoint is not workspace-scoped.
    None,
    /// Required; sent as the `Publer-Workspace-Id` header.
    Header,
    /// Sent as the header when the credential carries a workspace id,
    /// omitted otherwise.
    OptionalHeader,
    /// Required; sent as the `workspace_id` query parameter.
    Query,
}

impl WorkspaceRequirement {
    pub fn is_required(self) -> bool {
        matches!(self, Self::Header | Self::Query)
    }
}

/// Descriptor for one callable action: parameter schema plus request
/// construction. The batch executor drives it once per input item.
pub trait PublerAction: Send + Sync {
    /// Stable action name used in logs and host-side configuration.
    fn name(&self) -> &'static str;

    /// Declared parameter schema, resolved per item by the executor.
    fn parameters(&self) -> Vec<ParameterDef>;

    fn workspace(&self) -> WorkspaceRequirement;

    /// Build the request for one item from its resolved parameters.
    /// Workspace scope is attached by the executor afterwards.
    fn build_request(&self, params: &ParamSet) -> ConnectorResult<RequestSpec>;
}

/// Every action this connector exposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActionKind {
    ListAccounts,
    ListCompetitors,
    CompetitorAnalytics,
    JobStatus,
    CurrentUser,
    ListWorkspaces,
    MediaImportFromUrl,
    SchedulePost,
}

impl ActionKind {
    pub const ALL: [ActionKind; 8] = [
        ActionKind::ListAccounts,
        ActionKind::ListCompetitors,
        ActionKind::CompetitorAnalytics,
        ActionKind::JobStatus,
        ActionKind::CurrentUser,
        ActionKind::ListWorkspaces,
        ActionKind::MediaImportFromUrl,
        ActionKind::SchedulePost,
    ];

    /// The descriptor backing this action kind.
    pub fn action(self) -> &'static dyn PublerAction {
        match self {
            ActionKind::ListAccounts => &accounts::ListAccounts,
            ActionKind::ListCompetitors => &competitors::ListCompetitors,
            ActionKind::CompetitorAnalytics => &competitors::CompetitorAnalytics,
            ActionKind::JobStatus => &jobs::JobStatus,
            ActionKind::CurrentUser => &users::CurrentUser,
            ActionKind::ListWorkspaces => &workspaces::ListWorkspaces,
            ActionKind::MediaImportFromUrl => &media::MediaImportFromUrl,
            ActionKind::SchedulePost => &posts::SchedulePost,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_kind_has_a_descriptor_with_a_distinct_name() {
        let mut names: Vec<&str> = ActionKind::ALL.iter().map(|k| k.action().name()).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), ActionKind::ALL.len());
    }

    #[test]
    fn action_kind_serializes_snake_case() {
        let json = serde_json::to_string(&ActionKind::MediaImportFromUrl).unwrap();
        assert_eq!(json, "\"media_import_from_url\"");
        let kind: ActionKind = serde_json::from_str("\"schedule_post\"").unwrap();
        assert_eq!(kind, ActionKind::SchedulePost);
    }
}
