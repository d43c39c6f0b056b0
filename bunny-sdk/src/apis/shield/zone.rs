use reqwest::Method;

use super::types::{
    CreateZoneRequest, PullZoneMappingResponse, ShieldZone, UpdateZoneRequest, ZoneListResponse,
};
use super::{ShieldClient, zone_path};
use crate::error::Result;

#[derive(Debug, Clone, Copy)]
pub struct ZoneService<'a> {
    client: &'a ShieldClient,
}

impl<'a> ZoneService<'a> {
    pub(crate) fn new(client: &'a ShieldClient) -> Self {
        Self { client }
    }

    pub async fn list(&self) -> Result<ZoneListResponse> {
        self.client.core.get("/shield/zones").await
    }

    pub async fn create(&self, req: &CreateZoneRequest) -> Result<ShieldZone> {
        self.client
            .core
            .send_json(Method::POST, "/shield/zone", req)
            .await
    }

    pub async fn get(&self, zone_id: &str) -> Result<ShieldZone> {
        self.client.core.get(&zone_path(zone_id)).await
    }

    pub async fn update(&self, zone_id: &str, req: &UpdateZoneRequest) -> Result<ShieldZone> {
        self.client
            .core
            .send_json(Method::PATCH, &zone_path(zone_id), req)
            .await
    }

    /// Shield zone protecting the given pull zone.
    pub async fn by_pull_zone(&self, pull_zone_id: i64) -> Result<ShieldZone> {
        self.client
            .core
            .get(&format!("/shield/zone/pullzone/{pull_zone_id}"))
            .await
    }

    pub async fn pull_zone_mapping(&self) -> Result<PullZoneMappingResponse> {
        self.client.core.get("/shield/zones/pullzone-mapping").await
    }
}
