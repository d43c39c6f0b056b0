//! Storage API type definitions

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use crate::types::{QueryBuilder, has_more_storage};
use crate::utils::datetime::BunnyTime;

/// Storage zone.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct Zone {
    pub id: i64,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub read_only_password: Option<String>,
    pub region: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub replication_regions: Option<Vec<String>>,
    pub storage_used: i64,
    pub files_stored: i64,
    pub date_modified: BunnyTime,
    pub deleted: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pull_zones: Option<Vec<i64>>,
    #[serde(rename = "OriginUrl", skip_serializing_if = "Option::is_none")]
    pub origin_url: Option<String>,
    #[serde(rename = "Custom404FilePath", skip_serializing_if = "Option::is_none")]
    pub custom_404_file_path: Option<String>,
    #[serde(rename = "Rewrite404To200")]
    pub rewrite_404_to_200: bool,
}

/// File or directory entry in an edge storage listing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct StorageObject {
    pub guid: String,
    pub storage_zone_name: String,
    pub path: String,
    pub object_name: String,
    pub length: i64,
    pub last_changed: BunnyTime,
    pub is_directory: bool,
    pub date_created: BunnyTime,
    pub server_id: i64,
    pub storage_zone_id: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub checksum: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content_type: Option<String>,
}

/// One page of storage zones. `current_page` is zero-based.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct ZoneListResponse {
    pub items: Vec<Zone>,
    pub total_items: u64,
    pub current_page: u32,
    pub page_size: u32,
}

impl ZoneListResponse {
    pub fn has_more(&self) -> bool {
        has_more_storage(self.current_page, self.page_size, self.total_items)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CreateZoneRequest {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub replication_regions: Vec<String>,
    #[serde(rename = "OriginUrl", skip_serializing_if = "Option::is_none")]
    pub origin_url: Option<String>,
}

/// Partial update; unset fields are left unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct UpdateZoneRequest {
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub replication_regions: Vec<String>,
    #[serde(rename = "OriginUrl", skip_serializing_if = "Option::is_none")]
    pub origin_url: Option<String>,
    #[serde(rename = "Custom404FilePath", skip_serializing_if = "Option::is_none")]
    pub custom_404_file_path: Option<String>,
    #[serde(rename = "Rewrite404To200", skip_serializing_if = "Option::is_none")]
    pub rewrite_404_to_200: Option<bool>,
}

/// Storage zone list parameters. Zero/false/`None` values are omitted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ZoneListOptions {
    pub page: u32,
    pub per_page: u32,
    pub include_deleted: bool,
    pub search: Option<String>,
}

impl ZoneListOptions {
    pub(crate) fn to_query(&self) -> QueryBuilder {
        QueryBuilder::new()
            .uint("page", self.page)
            .uint("perPage", self.per_page)
            .flag("includeDeleted", self.include_deleted)
            .text("search", self.search.as_deref())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct AvailabilityResponse {
    pub available: bool,
    pub name: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct ResetPasswordResponse {
    pub id: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    pub success: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct ResetReadOnlyPasswordResponse {
    pub id: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub read_only_password: Option<String>,
    pub success: bool,
}

/// Per-upload settings for edge storage.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UploadOptions {
    /// Uppercase hex SHA-256 of the payload, sent as the `Checksum` header.
    pub checksum: Option<String>,
    /// MIME type; `application/octet-stream` when unset.
    pub content_type: Option<String>,
}

impl UploadOptions {
    /// Options whose checksum is computed from `data`.
    pub fn with_checksum_of(data: &[u8]) -> Self {
        Self {
            checksum: Some(sha256_checksum(data)),
            content_type: None,
        }
    }

    #[must_use]
    pub fn content_type(mut self, content_type: impl Into<String>) -> Self {
        self.content_type = Some(content_type.into());
        self
    }
}

/// Uppercase hex SHA-256, the format edge storage expects in `Checksum`.
pub fn sha256_checksum(data: &[u8]) -> String {
    hex::encode_upper(Sha256::digest(data))
}

/// Edge storage region.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Region {
    /// Falkenstein, Germany.
    #[default]
    De,
    /// New York.
    Ny,
    /// Los Angeles.
    La,
    /// Singapore.
    Sg,
    /// Sydney.
    Syd,
    /// Stockholm.
    Se,
    /// Sao Paulo.
    Br,
    /// Johannesburg.
    Jh,
    /// London.
    Uk,
}

impl Region {
    pub const ALL: [Self; 9] = [
        Self::De,
        Self::Ny,
        Self::La,
        Self::Sg,
        Self::Syd,
        Self::Se,
        Self::Br,
        Self::Jh,
        Self::Uk,
    ];

    pub const fn code(self) -> &'static str {
        match self {
            Self::De => "de",
            Self::Ny => "ny",
            Self::La => "la",
            Self::Sg => "sg",
            Self::Syd => "syd",
            Self::Se => "se",
            Self::Br => "br",
            Self::Jh => "jh",
            Self::Uk => "uk",
        }
    }

    /// Edge storage endpoint for the region.
    pub fn base_url(self) -> String {
        match self {
            Self::De => "https://storage.bunnycdn.com".to_string(),
            other => format!("https://{}.storage.bunnycdn.com", other.code()),
        }
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Region {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|r| r.code().eq_ignore_ascii_case(s))
            .ok_or_else(|| format!("unknown storage region: {s}"))
    }
}
