use reqwest::Method;

use super::types::{
    CreateScriptRequest, EdgeScript, EdgeScriptCode, ScriptListOptions, ScriptListResponse,
    ScriptStatistics, StatisticsOptions, UpdateCodeRequest, UpdateScriptRequest,
};
use super::{ScriptingClient, script_path};
use crate::error::Result;
use crate::types::QueryBuilder;

const SCRIPTS: &str = "/compute/script";

/// Script lifecycle, obtained from [`ScriptingClient::scripts`].
#[derive(Debug, Clone, Copy)]
pub struct ScriptService<'a> {
    client: &'a ScriptingClient,
}

impl<'a> ScriptService<'a> {
    pub(crate) fn new(client: &'a ScriptingClient) -> Self {
        Self { client }
    }

    pub async fn list(&self, opts: Option<&ScriptListOptions>) -> Result<ScriptListResponse> {
        let path = match opts {
            Some(opts) => opts.to_query().append_to(SCRIPTS),
            None => SCRIPTS.to_string(),
        };
        self.client.core.get(&path).await
    }

    pub async fn get(&self, script_id: i64) -> Result<EdgeScript> {
        self.client.core.get(&script_path(script_id)).await
    }

    pub async fn create(&self, req: &CreateScriptRequest) -> Result<EdgeScript> {
        self.client.core.send_json(Method::POST, SCRIPTS, req).await
    }

    pub async fn update(&self, script_id: i64, req: &UpdateScriptRequest) -> Result<EdgeScript> {
        self.client
            .core
            .send_json(Method::POST, &script_path(script_id), req)
            .await
    }

    /// Delete a script, optionally together with the pull zones linked to it.
    pub async fn delete(&self, script_id: i64, delete_linked_pull_zones: bool) -> Result<()> {
        let path = QueryBuilder::new()
            .flag("deleteLinkedPullZones", delete_linked_pull_zones)
            .append_to(&script_path(script_id));
        self.client.core.delete(&path).await
    }

    pub async fn statistics(
        &self,
        script_id: i64,
        opts: Option<&StatisticsOptions>,
    ) -> Result<ScriptStatistics> {
        let base = format!("{}/statistics", script_path(script_id));
        let path = opts.map_or_else(|| base.clone(), |o| o.to_query().append_to(&base));
        self.client.core.get(&path).await
    }

    pub async fn rotate_deployment_key(&self, script_id: i64) -> Result<()> {
        self.client
            .core
            .execute_unit::<()>(
                Method::POST,
                &format!("{}/deploymentKey/rotate", script_path(script_id)),
                None,
            )
            .await
    }
}

/// Source code of one script.
#[derive(Debug, Clone, Copy)]
pub struct CodeService<'a> {
    client: &'a ScriptingClient,
    script_id: i64,
}

impl<'a> CodeService<'a> {
    pub(crate) fn new(client: &'a ScriptingClient, script_id: i64) -> Self {
        Self { client, script_id }
    }

    fn path(&self) -> String {
        format!("{}/code", script_path(self.script_id))
    }

    pub async fn get(&self) -> Result<EdgeScriptCode> {
        self.client.core.get(&self.path()).await
    }

    /// Replace the draft code. Publishing is a separate step.
    pub async fn set(&self, code: impl Into<String>) -> Result<()> {
        let req = UpdateCodeRequest { code: code.into() };
        self.client
            .core
            .execute_unit(Method::POST, &self.path(), Some(&req))
            .await
    }
}
