use reqwest::Method;

use super::types::{
    AddVariableRequest, EdgeScriptVariable, UpdateVariableRequest, UpsertVariableRequest,
};
use super::{ScriptingClient, script_path};
use crate::error::Result;

/// Environment variables of one script.
#[derive(Debug, Clone, Copy)]
pub struct VariableService<'a> {
    client: &'a ScriptingClient,
    script_id: i64,
}

impl<'a> VariableService<'a> {
    pub(crate) fn new(client: &'a ScriptingClient, script_id: i64) -> Self {
        Self { client, script_id }
    }

    fn base(&self) -> String {
        format!("{}/variables", script_path(self.script_id))
    }

    pub async fn add(&self, req: &AddVariableRequest) -> Result<EdgeScriptVariable> {
        self.client
            .core
            .send_json(Method::POST, &format!("{}/add", self.base()), req)
            .await
    }

    pub async fn get(&self, variable_id: i64) -> Result<EdgeScriptVariable> {
        self.client
            .core
            .get(&format!("{}/{variable_id}", self.base()))
            .await
    }

    pub async fn update(
        &self,
        variable_id: i64,
        req: &UpdateVariableRequest,
    ) -> Result<EdgeScriptVariable> {
        self.client
            .core
            .send_json(Method::POST, &format!("{}/{variable_id}", self.base()), req)
            .await
    }

    /// Create or update by name; 204 yields `None`.
    pub async fn upsert(&self, req: &UpsertVariableRequest) -> Result<Option<EdgeScriptVariable>> {
        self.client
            .core
            .execute(Method::PUT, &self.base(), Some(req))
            .await
    }

    pub async fn delete(&self, variable_id: i64) -> Result<()> {
        self.client
            .core
            .delete(&format!("{}/{variable_id}", self.base()))
            .await
    }
}
