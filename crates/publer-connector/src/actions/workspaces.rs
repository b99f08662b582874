use super::{PublerAction, WorkspaceRequirement};
use crate::error::ConnectorResult;
use crate::params::{ParamSet, ParameterDef};
use crate::request::RequestSpec;

/// Lists all workspaces accessible to the authenticated user.
pub struct ListWorkspaces;

impl PublerAction for ListWorkspaces {
    fn name(&self) -> &'static str {
        "list_workspaces"
    }

    fn parameters(&self) -> Vec<ParameterDef> {
        Vec::new()
    }

    fn workspace(&self) -> WorkspaceRequirement {
        WorkspaceRequirement::None
    }

    fn build_request(&self, _params: &ParamSet) -> ConnectorResult<RequestSpec> {
        Ok(RequestSpec::get("/api/v1/workspaces"))
    }
}
