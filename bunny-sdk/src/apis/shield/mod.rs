//! Shield: zones, WAF, access lists, rate limits, bot detection, upload
//! scanning, metrics and event logs
//!
//! All calls run against `https://api.bunny.net/shield` with the account API
//! key. Zone-scoped services take the Shield zone id.

mod access_list;
mod metrics;
mod misc;
mod protection;
mod rate_limit;
mod types;
mod waf;
mod zone;

pub use access_list::AccessListService;
pub use metrics::{EventLogService, MetricsService};
pub use misc::{DdosService, PromoService};
pub use protection::{BotDetectionService, UploadScanningService};
pub use rate_limit::RateLimitService;
pub use types::*;
pub use waf::WafService;
pub use zone::ZoneService;

use crate::config::ClientConfig;
use crate::error::ApiArea;
use crate::http_client::ApiCore;
use crate::types::path_escape;

pub(crate) const SHIELD_API_BASE: &str = "https://api.bunny.net";

/// Shield API client.
#[derive(Debug, Clone)]
pub struct ShieldClient {
    pub(crate) core: ApiCore,
}

impl ShieldClient {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self::with_config(api_key, &ClientConfig::default())
    }

    pub fn with_config(api_key: impl Into<String>, config: &ClientConfig) -> Self {
        Self {
            core: config.build_core(ApiArea::Shield, SHIELD_API_BASE, &api_key.into()),
        }
    }

    pub fn zones(&self) -> ZoneService<'_> {
        ZoneService::new(self)
    }

    pub fn waf(&self) -> WafService<'_> {
        WafService::new(self)
    }

    pub fn access_lists<'a>(&'a self, zone_id: &'a str) -> AccessListService<'a> {
        AccessListService::new(self, zone_id)
    }

    pub fn rate_limits(&self) -> RateLimitService<'_> {
        RateLimitService::new(self)
    }

    pub fn bot_detection<'a>(&'a self, zone_id: &'a str) -> BotDetectionService<'a> {
        BotDetectionService::new(self, zone_id)
    }

    pub fn upload_scanning<'a>(&'a self, zone_id: &'a str) -> UploadScanningService<'a> {
        UploadScanningService::new(self, zone_id)
    }

    pub fn metrics(&self) -> MetricsService<'_> {
        MetricsService::new(self)
    }

    pub fn event_logs(&self) -> EventLogService<'_> {
        EventLogService::new(self)
    }

    pub fn ddos(&self) -> DdosService<'_> {
        DdosService::new(self)
    }

    pub fn promo(&self) -> PromoService<'_> {
        PromoService::new(self)
    }
}

pub(crate) fn zone_path(zone_id: &str) -> String {
    format!("/shield/zone/{}", path_escape(zone_id))
}
