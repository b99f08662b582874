//! Batch execution: drives one action over a sequence of input items.

use crate::actions::{PublerAction, WorkspaceRequirement};
use crate::client::{PublerClient, WORKSPACE_HEADER};
use crate::error::{ConnectorError, ConnectorResult};
use crate::params::{ParamSet, ParameterDef};
use publer_core::{Credential, ExecutionResult, InputItem, OutputItem, ParamsProvider};
use serde_json::Value as JsonValue;

/// Per-batch execution policy.
#[derive(Debug, Clone, Copy, Default)]
pub struct ExecutionOptions {
    /// Degrade per-item failures to `{error}` output payloads instead of
    /// aborting the batch. Configuration errors abort regardless.
    pub continue_on_fail: bool,
}

/// Executes an action once per input item, strictly in input order.
///
/// Items never run concurrently: each HTTP call completes (or fails)
/// before the next item begins, and every output item is tagged with the
/// index of the input item that produced it.
pub struct BatchExecutor<'a> {
    client: &'a PublerClient,
    options: ExecutionOptions,
}

impl<'a> BatchExecutor<'a> {
    pub fn new(client: &'a PublerClient) -> Self {
        Self { client, options: ExecutionOptions::default() }
    }

    pub fn with_options(client: &'a PublerClient, options: ExecutionOptions) -> Self {
        Self { client, options }
    }

    pub fn continue_on_fail(mut self, continue_on_fail: bool) -> Self {
        self.options.continue_on_fail = continue_on_fail;
        self
    }

    /// Run `action` over `items`, producing one output item per input
    /// item. Credential preconditions are checked before any item is
    /// processed; their failure aborts with no partial output.
    pub async fn execute(
        &self,
        action: &dyn PublerAction,
        items: &[InputItem],
        credential: &Credential,
        params: &dyn ParamsProvider,
    ) -> ConnectorResult<ExecutionResult> {
        let execution_id = uuid::Uuid::new_v4();

        if !credential.has_token() {
            return Err(ConnectorError::configuration("API Token is required"));
        }
        let workspace = resolve_workspace(action.workspace(), credential)?;

        tracing::info!(
            %execution_id,
            action = action.name(),
            item_count = items.len(),
            "starting batch execution"
        );

        let defs = action.parameters();
        let mut result = ExecutionResult::default();

        for item_index in 0..items.len() {
            match self.run_item(action, &defs, item_index, credential, workspace, params).await {
                Ok(payload) => result.push(OutputItem::success(payload, item_index)),
                Err(err) if err.is_fatal() => {
                    tracing::error!(%execution_id, item_index, error = %err, "fatal error");
                    return Err(err);
                }
                Err(err) if self.options.continue_on_fail => {
                    tracing::warn!(%execution_id, item_index, error = %err, "item failed; continuing");
                    result.push(OutputItem::failure(err.to_string(), item_index));
                }
                Err(err) => {
                    tracing::error!(%execution_id, item_index, error = %err, "item failed; aborting batch");
                    return Err(err);
                }
            }
        }

        tracing::info!(%execution_id, processed = result.len(), "batch execution completed");
        Ok(result)
    }

    async fn run_item(
        &self,
        action: &dyn PublerAction,
        defs: &[ParameterDef],
        item_index: usize,
        credential: &Credential,
        workspace: Option<&str>,
        params: &dyn ParamsProvider,
    ) -> ConnectorResult<JsonValue> {
        let set = ParamSet::resolve(defs, params, item_index)?;
        let mut spec = action.build_request(&set)?;

        if let Some(workspace) = workspace {
            spec = match action.workspace() {
                WorkspaceRequirement::Query => spec.query("workspace_id", workspace),
                WorkspaceRequirement::Header | WorkspaceRequirement::OptionalHeader => {
                    spec.header(WORKSPACE_HEADER, workspace)
                }
                WorkspaceRequirement::None => spec,
            };
        }

        tracing::debug!(item_index, method = %spec.method, path = %spec.path, "executing item");
        self.client.send(credential, &spec).await
    }
}

fn resolve_workspace<'c>(
    requirement: WorkspaceRequirement,
    credential: &'c Credential,
) -> ConnectorResult<Option<&'c str>> {
    match requirement {
        WorkspaceRequirement::None => Ok(None),
        WorkspaceRequirement::OptionalHeader => Ok(credential.workspace()),
        WorkspaceRequirement::Header | WorkspaceRequirement::Query => credential
            .workspace()
            .map(Some)
            .ok_or_else(|| ConnectorError::configuration("Workspace ID is required for this operation")),
    }
}
