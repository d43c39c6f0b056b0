use reqwest::Method;
use serde_json::json;

use super::types::{
    AccessList, AccessListConfig, AccessListEntry, AccessListEntryKey, AccessListEntryUpdate,
    AccessListEnums, AddAccessListEntryRequest, UpdateAccessListConfigRequest,
};
use super::{ShieldClient, zone_path};
use crate::error::Result;

/// Allow, block and challenge lists of one Shield zone.
#[derive(Debug, Clone, Copy)]
pub struct AccessListService<'a> {
    client: &'a ShieldClient,
    zone_id: &'a str,
}

impl<'a> AccessListService<'a> {
    pub(crate) fn new(client: &'a ShieldClient, zone_id: &'a str) -> Self {
        Self { client, zone_id }
    }

    fn path(&self) -> String {
        format!("{}/access-lists", zone_path(self.zone_id))
    }

    pub async fn get(&self) -> Result<AccessList> {
        self.client.core.get(&self.path()).await
    }

    pub async fn add(&self, req: &AddAccessListEntryRequest) -> Result<AccessListEntry> {
        self.client
            .core
            .send_json(Method::POST, &self.path(), req)
            .await
    }

    pub async fn update(&self, updates: &[AccessListEntryUpdate]) -> Result<()> {
        self.client
            .core
            .execute_unit(
                Method::PATCH,
                &self.path(),
                Some(&json!({ "Updates": updates })),
            )
            .await
    }

    /// Remove entries in one call. The entries travel in the DELETE body.
    pub async fn delete(&self, entries: &[AccessListEntryKey]) -> Result<()> {
        self.client
            .core
            .execute_unit(
                Method::DELETE,
                &self.path(),
                Some(&json!({ "Entries": entries })),
            )
            .await
    }

    pub async fn enums(&self) -> Result<AccessListEnums> {
        self.client
            .core
            .get(&format!("{}/enums", self.path()))
            .await
    }

    pub async fn update_config(
        &self,
        req: &UpdateAccessListConfigRequest,
    ) -> Result<AccessListConfig> {
        self.client
            .core
            .send_json(
                Method::PATCH,
                &format!("{}/configurations", self.path()),
                req,
            )
            .await
    }
}
