//! Stream API type definitions
//!
//! Stream speaks `camelCase` JSON. List envelopes reuse the crate-wide
//! [`PaginatedResponse`](crate::types::PaginatedResponse), whose
//! `current_page` is one-based.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::types::{ListOptions, PaginatedResponse, QueryBuilder};
use crate::utils::datetime::BunnyTime;

pub type VideoListResponse = PaginatedResponse<Video>;
pub type CollectionListResponse = PaginatedResponse<Collection>;
pub type LibraryListResponse = PaginatedResponse<Library>;

/// Processing state of a video.
///
/// States added by the service later land in `Other` with their wire text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VideoState {
    Created,
    Processing,
    Finished,
    Error,
    #[default]
    Unknown,
    #[serde(untagged)]
    Other(String),
}

// ============ Videos ============

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Video {
    pub video_id: String,
    pub video_library_id: i64,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub upload_date: BunnyTime,
    pub views: i64,
    /// Seconds.
    pub duration: i64,
    pub width: i64,
    pub height: i64,
    pub state: VideoState,
    pub framerate: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub video_codec: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub audio_codec: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub collection_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thumbnail_file_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preview_image_urls: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub moments: Option<Vec<Moment>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub chapters: Option<Vec<Chapter>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub captions: Option<Vec<Caption>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meta_tags: Option<Vec<MetaTag>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transcoding_messages: Option<Vec<serde_json::Value>>,
}

/// Labeled point on the timeline; `timestamp` in milliseconds.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Moment {
    pub id: String,
    pub label: String,
    pub timestamp: i64,
}

/// Chapter bounds in milliseconds.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Chapter {
    pub id: String,
    pub title: String,
    pub start: i64,
    pub end: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Caption {
    pub srclang: String,
    pub label: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MetaTag {
    pub property: String,
    pub value: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateVideoRequest {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub collection_id: Option<String>,
    /// Milliseconds into the video.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thumbnail_time: Option<i64>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateVideoRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub collection_id: Option<String>,
}

/// Ask Stream to download a video from a remote URL.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FetchVideoRequest {
    pub url: String,
    #[serde(skip_serializing_if = "HashMap::is_empty", default)]
    pub headers: HashMap<String, String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FetchVideoResponse {
    pub video_id: String,
    pub state: VideoState,
    pub upload_date: BunnyTime,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReencodeRequest {
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub resolutions: Vec<Resolution>,
}

/// Height in pixels and bitrate in kbps.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Resolution {
    pub resolution: u32,
    pub bitrate: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddCaptionRequest {
    /// ISO 639-1 language code.
    pub srclang: String,
    pub label: String,
    /// Base64 encoded VTT/SRT content.
    pub captions_file: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SetThumbnailRequest {
    /// Milliseconds into the video.
    pub thumbnail_time: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SetThumbnailResponse {
    pub video_id: String,
    pub thumbnail_file_name: String,
    pub thumbnail_url: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct HeatmapData {
    pub video_id: String,
    pub heatmap_data: Vec<HeatmapPoint>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct HeatmapPoint {
    pub timestamp: i64,
    pub watch_time: i64,
    pub percentage: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct VideoStatistics {
    pub video_id: String,
    pub views: i64,
    pub engagement_rate: f64,
    pub average_watch_time: i64,
    pub total_watch_time: i64,
    pub unique_viewers: i64,
    pub device_types: HashMap<String, i64>,
    pub countries: Vec<CountryViews>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PlaybackInfo {
    pub video_id: String,
    pub playback_url: String,
    pub hls_url: String,
    pub dash_url: String,
    pub caption_tracks: Vec<CaptionTrack>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CaptionTrack {
    pub srclang: String,
    pub label: String,
    pub url: String,
}

/// Video list parameters.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VideoListOptions {
    pub page: u32,
    pub items_per_page: u32,
    pub search: Option<String>,
    pub collection: Option<String>,
    pub order_by: Option<String>,
    pub include_thumbnails: bool,
}

impl VideoListOptions {
    pub(crate) fn to_query(&self) -> QueryBuilder {
        QueryBuilder::new()
            .uint("page", self.page)
            .uint("itemsPerPage", self.items_per_page)
            .text("search", self.search.as_deref())
            .text("collection", self.collection.as_deref())
            .text("orderBy", self.order_by.as_deref())
            .flag("includeThumbnails", self.include_thumbnails)
    }
}

/// Date range for statistics endpoints (ISO 8601 dates).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StatisticsOptions {
    pub date_from: Option<String>,
    pub date_to: Option<String>,
}

impl StatisticsOptions {
    pub(crate) fn to_query(&self) -> QueryBuilder {
        QueryBuilder::new()
            .text("dateFrom", self.date_from.as_deref())
            .text("dateTo", self.date_to.as_deref())
    }
}

// ============ Video maintenance ============

/// Envelope shared by the maintenance endpoints.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct StatusResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    pub status_code: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CleanupResolutionsOptions {
    /// Comma separated list, e.g. `240p,360p`.
    pub resolutions_to_delete: Option<String>,
    pub delete_non_configured_resolutions: bool,
    pub delete_original: bool,
    pub delete_mp4_files: bool,
    pub dry_run: bool,
}

impl CleanupResolutionsOptions {
    pub(crate) fn to_query(&self) -> QueryBuilder {
        QueryBuilder::new()
            .text("resolutionsToDelete", self.resolutions_to_delete.as_deref())
            .flag(
                "deleteNonConfiguredResolutions",
                self.delete_non_configured_resolutions,
            )
            .flag("deleteOriginal", self.delete_original)
            .flag("deleteMp4Files", self.delete_mp4_files)
            .flag("dryRun", self.dry_run)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResolutionReference {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resolution: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub codec: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct VideoStorageObject {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    pub size: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resolution: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ResolutionsInfoData {
    pub video_id: String,
    pub video_library_id: i64,
    pub available_resolutions: Vec<String>,
    pub configured_resolutions: Vec<String>,
    pub playlist_resolutions: Vec<ResolutionReference>,
    pub storage_resolutions: Vec<ResolutionReference>,
    pub mp4_resolutions: Vec<ResolutionReference>,
    pub storage_objects: Vec<VideoStorageObject>,
    pub old_resolutions: Vec<VideoStorageObject>,
    pub has_both_old_and_new_resolution_format: bool,
    pub has_original: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ResolutionsInfoResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    pub status_code: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<ResolutionsInfoData>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EncodedResolution {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub codec: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resolution: Option<String>,
    pub size: i64,
}

/// Storage breakdown in bytes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct StorageSizeData {
    pub encoded: Vec<EncodedResolution>,
    pub thumbnails: i64,
    pub previews: i64,
    pub originals: i64,
    pub mp4_fallback: i64,
    pub miscellaneous: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub calculated_at: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct StorageSizeResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    pub status_code: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<StorageSizeData>,
}

/// Optional AI generation switches; `None` leaves the library default.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TranscribeRequest {
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub target_languages: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub generate_title: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub generate_description: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub generate_chapters: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub generate_moments: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_language: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SmartActionsRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub generate_title: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub generate_description: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub generate_chapters: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub generate_moments: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_language: Option<String>,
}

// ============ Libraries ============

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Library {
    pub library_id: i64,
    pub name: String,
    pub date_created: BunnyTime,
    pub storage_used: i64,
    #[serde(rename = "storageLimitGB")]
    pub storage_limit_gb: i64,
    pub video_cache_expiration_days: i64,
    pub video_count: i64,
    pub collections: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub replication_regions: Option<Vec<String>>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateLibraryRequest {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub video_cache_expiration_days: Option<i64>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateLibraryRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub video_cache_expiration_days: Option<i64>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LibraryStatistics {
    pub library_id: i64,
    pub total_views: i64,
    pub total_watch_time: i64,
    pub video_count: i64,
    pub bandwidth: i64,
    pub top_videos: Vec<TopVideo>,
    pub views_by_country: Vec<CountryViews>,
    pub views_by_device: HashMap<String, i64>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TopVideo {
    pub video_id: String,
    pub title: String,
    pub views: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CountryViews {
    pub country: String,
    pub views: i64,
}

// ============ Collections ============

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Collection {
    pub video_library_id: i64,
    pub guid: String,
    pub name: String,
    pub video_count: i64,
    pub total_size: i64,
    #[serde(rename = "previewVideoIds", skip_serializing_if = "Option::is_none")]
    pub preview_video_ids: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preview_image_urls: Option<Vec<String>>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CollectionRequest {
    pub name: String,
}

/// Collection list parameters.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CollectionListOptions {
    pub list: ListOptions,
    pub include_thumbnails: bool,
}

impl CollectionListOptions {
    pub(crate) fn to_query(&self) -> QueryBuilder {
        self.list
            .to_query()
            .flag("includeThumbnails", self.include_thumbnails)
    }
}

// ============ oEmbed ============

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OEmbedOptions {
    pub url: String,
    pub max_width: u32,
    pub max_height: u32,
    pub token: Option<String>,
    /// Unix timestamp for signed URLs.
    pub expires: i64,
}

impl OEmbedOptions {
    pub(crate) fn to_query(&self) -> QueryBuilder {
        QueryBuilder::new()
            .text("url", Some(&self.url))
            .uint("maxWidth", self.max_width)
            .uint("maxHeight", self.max_height)
            .text("token", self.token.as_deref())
            .int("expires", self.expires)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OEmbedResponse {
    pub version: String,
    pub title: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub thumbnail_url: String,
    pub width: i64,
    pub height: i64,
    pub html: String,
    pub provider_name: String,
    pub provider_url: String,
}
