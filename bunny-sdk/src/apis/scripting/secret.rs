use reqwest::Method;

use super::types::{EdgeScriptSecret, SecretListResponse, SecretRequest, UpdateSecretRequest};
use super::{ScriptingClient, script_path};
use crate::error::Result;

/// Secrets of one script. Values are write-only.
#[derive(Debug, Clone, Copy)]
pub struct SecretService<'a> {
    client: &'a ScriptingClient,
    script_id: i64,
}

impl<'a> SecretService<'a> {
    pub(crate) fn new(client: &'a ScriptingClient, script_id: i64) -> Self {
        Self { client, script_id }
    }

    fn base(&self) -> String {
        format!("{}/secrets", script_path(self.script_id))
    }

    pub async fn list(&self) -> Result<SecretListResponse> {
        self.client.core.get(&self.base()).await
    }

    pub async fn add(&self, req: &SecretRequest) -> Result<EdgeScriptSecret> {
        self.client
            .core
            .send_json(Method::POST, &self.base(), req)
            .await
    }

    pub async fn update(
        &self,
        secret_id: i64,
        req: &UpdateSecretRequest,
    ) -> Result<EdgeScriptSecret> {
        self.client
            .core
            .send_json(Method::POST, &format!("{}/{secret_id}", self.base()), req)
            .await
    }

    /// Create or update by name. `None` when the server answers 204
    /// (existing secret updated).
    pub async fn upsert(&self, req: &SecretRequest) -> Result<Option<EdgeScriptSecret>> {
        self.client
            .core
            .execute(Method::PUT, &self.base(), Some(req))
            .await
    }

    pub async fn delete(&self, secret_id: i64) -> Result<()> {
        self.client
            .core
            .delete(&format!("{}/{secret_id}", self.base()))
            .await
    }
}
