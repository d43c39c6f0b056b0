//! Per-zone bot detection and upload scanning settings

use reqwest::Method;

use super::types::{
    BotDetectionSettings, UpdateBotDetectionRequest, UpdateUploadScanningRequest,
    UploadScanningConfig,
};
use super::{ShieldClient, zone_path};
use crate::error::Result;

#[derive(Debug, Clone, Copy)]
pub struct BotDetectionService<'a> {
    client: &'a ShieldClient,
    zone_id: &'a str,
}

impl<'a> BotDetectionService<'a> {
    pub(crate) fn new(client: &'a ShieldClient, zone_id: &'a str) -> Self {
        Self { client, zone_id }
    }

    fn path(&self) -> String {
        format!("{}/bot-detection", zone_path(self.zone_id))
    }

    pub async fn get(&self) -> Result<BotDetectionSettings> {
        self.client.core.get(&self.path()).await
    }

    pub async fn update(&self, req: &UpdateBotDetectionRequest) -> Result<BotDetectionSettings> {
        self.client
            .core
            .send_json(Method::PATCH, &self.path(), req)
            .await
    }
}

#[derive(Debug, Clone, Copy)]
pub struct UploadScanningService<'a> {
    client: &'a ShieldClient,
    zone_id: &'a str,
}

impl<'a> UploadScanningService<'a> {
    pub(crate) fn new(client: &'a ShieldClient, zone_id: &'a str) -> Self {
        Self { client, zone_id }
    }

    fn path(&self) -> String {
        format!("{}/upload-scanning", zone_path(self.zone_id))
    }

    pub async fn get(&self) -> Result<UploadScanningConfig> {
        self.client.core.get(&self.path()).await
    }

    pub async fn update(&self, req: &UpdateUploadScanningRequest) -> Result<UploadScanningConfig> {
        self.client
            .core
            .send_json(Method::PATCH, &self.path(), req)
            .await
    }
}
