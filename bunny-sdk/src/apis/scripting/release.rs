use reqwest::Method;

use super::types::{
    EdgeScriptRelease, PublishReleaseRequest, ReleaseListOptions, ReleaseListResponse,
};
use super::{ScriptingClient, script_path};
use crate::error::Result;
use crate::types::path_escape;

#[derive(Debug, Clone, Copy)]
pub struct ReleaseService<'a> {
    client: &'a ScriptingClient,
    script_id: i64,
}

impl<'a> ReleaseService<'a> {
    pub(crate) fn new(client: &'a ScriptingClient, script_id: i64) -> Self {
        Self { client, script_id }
    }

    pub async fn list(&self, opts: Option<ReleaseListOptions>) -> Result<ReleaseListResponse> {
        let base = format!("{}/releases", script_path(self.script_id));
        let path = opts.map_or_else(|| base.clone(), |o| o.to_query().append_to(&base));
        self.client.core.get(&path).await
    }

    pub async fn active(&self) -> Result<EdgeScriptRelease> {
        self.client
            .core
            .get(&format!("{}/releases/active", script_path(self.script_id)))
            .await
    }

    /// Publish the current draft code as a new release.
    pub async fn publish(&self, req: &PublishReleaseRequest) -> Result<()> {
        self.client
            .core
            .execute_unit(
                Method::POST,
                &format!("{}/publish", script_path(self.script_id)),
                Some(req),
            )
            .await
    }

    /// Republish an earlier release.
    pub async fn publish_uuid(&self, uuid: &str, req: &PublishReleaseRequest) -> Result<()> {
        self.client
            .core
            .execute_unit(
                Method::POST,
                &format!(
                    "{}/publish/{}",
                    script_path(self.script_id),
                    path_escape(uuid)
                ),
                Some(req),
            )
            .await
    }
}
