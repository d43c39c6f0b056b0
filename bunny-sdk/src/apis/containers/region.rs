use reqwest::Method;

use super::types::{
    CursorOptions, OptimalRegionResponse, RegionListResponse, RegionSettings,
    UpdateRegionSettingsRequest,
};
use super::{ContainersClient, app_path, with_cursor};
use crate::error::Result;
use crate::types::QueryBuilder;

#[derive(Debug, Clone, Copy)]
pub struct RegionService<'a> {
    client: &'a ContainersClient,
}

impl<'a> RegionService<'a> {
    pub(crate) fn new(client: &'a ContainersClient) -> Self {
        Self { client }
    }

    pub async fn list(&self, opts: Option<&CursorOptions>) -> Result<RegionListResponse> {
        self.client.core.get(&with_cursor("/regions", opts)).await
    }

    /// Closest region to the caller, or to the CDN server identified by
    /// `cdn_server_token`.
    pub async fn optimal(&self, cdn_server_token: Option<&str>) -> Result<OptimalRegionResponse> {
        let path = QueryBuilder::new()
            .text("cdnServerToken", cdn_server_token)
            .append_to("/regions/optimal");
        self.client.core.get(&path).await
    }
}

#[derive(Debug, Clone, Copy)]
pub struct RegionSettingsService<'a> {
    client: &'a ContainersClient,
    app_id: &'a str,
}

impl<'a> RegionSettingsService<'a> {
    pub(crate) fn new(client: &'a ContainersClient, app_id: &'a str) -> Self {
        Self { client, app_id }
    }

    fn path(&self) -> String {
        format!("{}/region-settings", app_path(self.app_id))
    }

    pub async fn get(&self) -> Result<RegionSettings> {
        self.client.core.get(&self.path()).await
    }

    pub async fn update(&self, req: &UpdateRegionSettingsRequest) -> Result<()> {
        self.client
            .core
            .execute_unit(Method::PUT, &self.path(), Some(req))
            .await
    }
}
