//! Storage: zone management and edge storage files
//!
//! Zone management runs against `https://api.bunny.net` with the account API
//! key. File operations run against the regional edge storage endpoint with
//! the zone password, see [`EdgeStorageClient`].

mod file;
mod types;
mod zone;

pub use file::EdgeStorageClient;
pub use types::{
    AvailabilityResponse, CreateZoneRequest, Region, ResetPasswordResponse,
    ResetReadOnlyPasswordResponse, StorageObject, UpdateZoneRequest, UploadOptions, Zone,
    ZoneListOptions, ZoneListResponse, sha256_checksum,
};
pub use zone::ZoneService;

use crate::config::ClientConfig;
use crate::error::ApiArea;
use crate::http_client::ApiCore;

pub(crate) const STORAGE_API_BASE: &str = "https://api.bunny.net";

/// Storage zone management client.
#[derive(Debug, Clone)]
pub struct StorageClient {
    pub(crate) core: ApiCore,
}

impl StorageClient {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self::with_config(api_key, &ClientConfig::default())
    }

    pub fn with_config(api_key: impl Into<String>, config: &ClientConfig) -> Self {
        Self {
            core: config.build_core(ApiArea::Storage, STORAGE_API_BASE, &api_key.into()),
        }
    }

    pub fn zones(&self) -> ZoneService<'_> {
        ZoneService::new(self)
    }
}
