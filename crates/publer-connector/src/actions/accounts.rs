use super::{PublerAction, WorkspaceRequirement};
use crate::error::ConnectorResult;
use crate::params::{ParamSet, ParameterDef};
use crate::request::RequestSpec;

/// Lists the social media accounts connected to the workspace.
pub struct ListAccounts;

impl PublerAction for ListAccounts {
    fn name(&self) -> &'static str {
        "list_accounts"
    }

    fn parameters(&self) -> Vec<ParameterDef> {
        Vec::new()
    }

    fn workspace(&self) -> WorkspaceRequirement {
        WorkspaceRequirement::Query
    }

    fn build_request(&self, _params: &ParamSet) -> ConnectorResult<RequestSpec> {
        Ok(RequestSpec::get("/api/v1/accounts"))
    }
}
