use super::{PublerAction, WorkspaceRequirement};
use crate::error::ConnectorResult;
use crate::params::{ParamSet, ParameterDef};
use crate::request::RequestSpec;

/// Fetches the profile of the authenticated user.
pub struct CurrentUser;

impl PublerAction for CurrentUser {
    fn name(&self) -> &'static str {
        "current_user"
    }

    fn parameters(&self) -> Vec<ParameterDef> {
        Vec::new()
    }

    fn workspace(&self) -> WorkspaceRequirement {
        WorkspaceRequirement::None
    }

    fn build_request(&self, _params: &ParamSet) -> ConnectorResult<RequestSpec> {
        Ok(RequestSpec::get("/api/v1/users/me"))
    }
}
