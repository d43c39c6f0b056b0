//! Storage zone management

use reqwest::Method;
use serde_json::json;

use super::StorageClient;
use super::types::{
    AvailabilityResponse, CreateZoneRequest, ResetPasswordResponse,
    ResetReadOnlyPasswordResponse, UpdateZoneRequest, Zone, ZoneListOptions, ZoneListResponse,
};
use crate::error::Result;
use crate::types::path_escape;

/// Storage zone operations, obtained from [`StorageClient::zones`].
#[derive(Debug, Clone, Copy)]
pub struct ZoneService<'a> {
    client: &'a StorageClient,
}

impl<'a> ZoneService<'a> {
    pub(crate) fn new(client: &'a StorageClient) -> Self {
        Self { client }
    }

    /// List storage zones. `CurrentPage` in the response is zero-based.
    pub async fn list(&self, opts: Option<&ZoneListOptions>) -> Result<ZoneListResponse> {
        let path = match opts {
            Some(opts) => opts.to_query().append_to("/storagezone"),
            None => "/storagezone".to_string(),
        };
        self.client.core.get(&path).await
    }

    pub async fn get(&self, zone_id: i64) -> Result<Zone> {
        self.client.core.get(&format!("/storagezone/{zone_id}")).await
    }

    pub async fn create(&self, req: &CreateZoneRequest) -> Result<Zone> {
        self.client
            .core
            .send_json(Method::POST, "/storagezone", req)
            .await
    }

    /// Update zone settings. Bunny uses POST for updates.
    pub async fn update(&self, zone_id: i64, req: &UpdateZoneRequest) -> Result<Zone> {
        self.client
            .core
            .send_json(Method::POST, &format!("/storagezone/{zone_id}"), req)
            .await
    }

    /// Permanently delete a zone and its files.
    pub async fn delete(&self, zone_id: i64) -> Result<()> {
        self.client
            .core
            .delete(&format!("/storagezone/{zone_id}"))
            .await
    }

    pub async fn check_availability(&self, name: &str) -> Result<AvailabilityResponse> {
        let path = format!("/storagezone/checkavailability/{}", path_escape(name));
        self.client.core.get(&path).await
    }

    pub async fn reset_password(&self, zone_id: i64) -> Result<ResetPasswordResponse> {
        self.client
            .core
            .send_json(
                Method::POST,
                &format!("/storagezone/{zone_id}/resetPassword"),
                &json!({}),
            )
            .await
    }

    pub async fn reset_read_only_password(
        &self,
        zone_id: i64,
    ) -> Result<ResetReadOnlyPasswordResponse> {
        self.client
            .core
            .send_json(
                Method::POST,
                &format!("/storagezone/{zone_id}/resetReadOnlyPassword"),
                &json!({}),
            )
            .await
    }
}
