use super::{PublerAction, WorkspaceRequirement};
use crate::error::ConnectorResult;
use crate::params::{ParamSet, ParameterDef};
use crate::request::RequestSpec;

/// Checks the status of an async job (media imports, bulk scheduling).
pub struct JobStatus;

impl PublerAction for JobStatus {
    fn name(&self) -> &'static str {
        "job_status"
    }

    fn parameters(&self) -> Vec<ParameterDef> {
        vec![ParameterDef::string("jobId").required()]
    }

    fn workspace(&self) -> WorkspaceRequirement {
        WorkspaceRequirement::OptionalHeader
    }

    fn build_request(&self, params: &ParamSet) -> ConnectorResult<RequestSpec> {
        let job_id = params.required_string("jobId")?;
        Ok(RequestSpec::get(format!("/api/v1/job_status/{}", job_id)))
    }
}
