use reqwest::Method;

use super::StreamClient;
use super::types::{
    AddCaptionRequest, CleanupResolutionsOptions, CreateVideoRequest, FetchVideoRequest,
    FetchVideoResponse, HeatmapData, PlaybackInfo, ReencodeRequest, ResolutionsInfoResponse,
    SetThumbnailRequest, SetThumbnailResponse, SmartActionsRequest, StatisticsOptions,
    StatusResponse, StorageSizeResponse, TranscribeRequest, UpdateVideoRequest, Video,
    VideoListOptions, VideoListResponse, VideoStatistics,
};
use crate::error::Result;
use crate::transport::RequestBody;
use crate::types::{QueryBuilder, path_escape};

/// Videos inside one library (video API host).
#[derive(Debug, Clone, Copy)]
pub struct VideoService<'a> {
    client: &'a StreamClient,
    library_id: i64,
}

impl<'a> VideoService<'a> {
    pub(crate) fn new(client: &'a StreamClient, library_id: i64) -> Self {
        Self { client, library_id }
    }

    fn base(&self) -> String {
        format!("/library/{}/videos", self.library_id)
    }

    fn item(&self, video_id: &str) -> String {
        format!("{}/{}", self.base(), path_escape(video_id))
    }

    pub async fn list(&self, opts: Option<&VideoListOptions>) -> Result<VideoListResponse> {
        let base = self.base();
        let path = opts.map_or_else(|| base.clone(), |o| o.to_query().append_to(&base));
        self.client.video.get(&path).await
    }

    pub async fn get(&self, video_id: &str) -> Result<Video> {
        self.client.video.get(&self.item(video_id)).await
    }

    /// Create the video record. Upload the file afterwards with [`Self::upload`].
    pub async fn create(&self, req: &CreateVideoRequest) -> Result<Video> {
        self.client
            .video
            .send_json(Method::POST, &self.base(), req)
            .await
    }

    pub async fn update(&self, video_id: &str, req: &UpdateVideoRequest) -> Result<Video> {
        self.client
            .video
            .send_json(Method::POST, &self.item(video_id), req)
            .await
    }

    pub async fn delete(&self, video_id: &str) -> Result<()> {
        self.client.video.delete(&self.item(video_id)).await
    }

    /// Upload the binary for an existing video record as
    /// `application/octet-stream`.
    pub async fn upload(&self, video_id: &str, body: impl Into<RequestBody>) -> Result<()> {
        self.client
            .video
            .raw(Method::PUT, &self.item(video_id))
            .body(body.into(), "application/octet-stream")
            .send()
            .await
            .map(drop)
    }

    /// Have Stream download the video from a remote URL.
    pub async fn fetch(&self, req: &FetchVideoRequest) -> Result<FetchVideoResponse> {
        self.client
            .video
            .send_json(Method::POST, &format!("{}/fetch", self.base()), req)
            .await
    }

    pub async fn reencode(&self, video_id: &str, req: &ReencodeRequest) -> Result<()> {
        self.client
            .video
            .execute_unit(
                Method::POST,
                &format!("{}/reencode", self.item(video_id)),
                Some(req),
            )
            .await
    }

    pub async fn add_caption(&self, video_id: &str, req: &AddCaptionRequest) -> Result<()> {
        self.client
            .video
            .execute_unit(
                Method::POST,
                &format!("{}/captions", self.item(video_id)),
                Some(req),
            )
            .await
    }

    pub async fn delete_caption(&self, video_id: &str, srclang: &str) -> Result<()> {
        self.client
            .video
            .delete(&format!(
                "{}/captions/{}",
                self.item(video_id),
                path_escape(srclang)
            ))
            .await
    }

    pub async fn set_thumbnail(
        &self,
        video_id: &str,
        req: &SetThumbnailRequest,
    ) -> Result<SetThumbnailResponse> {
        self.client
            .video
            .send_json(
                Method::POST,
                &format!("{}/thumbnail", self.item(video_id)),
                req,
            )
            .await
    }

    pub async fn heatmap(&self, video_id: &str) -> Result<HeatmapData> {
        self.client
            .video
            .get(&format!("{}/heatmap", self.item(video_id)))
            .await
    }

    pub async fn statistics(
        &self,
        video_id: &str,
        opts: Option<&StatisticsOptions>,
    ) -> Result<VideoStatistics> {
        let base = format!("{}/statistics", self.item(video_id));
        let path = opts.map_or_else(|| base.clone(), |o| o.to_query().append_to(&base));
        self.client.video.get(&path).await
    }

    pub async fn playback_info(&self, video_id: &str) -> Result<PlaybackInfo> {
        self.client
            .video
            .get(&format!("{}/play", self.item(video_id)))
            .await
    }

    // ============ Maintenance ============

    /// Available, configured and stored resolutions of a video.
    pub async fn resolutions(&self, video_id: &str) -> Result<ResolutionsInfoResponse> {
        self.client
            .video
            .get(&format!("{}/resolutions", self.item(video_id)))
            .await
    }

    /// Remove encoded renditions. Use `dry_run` to preview.
    pub async fn cleanup_resolutions(
        &self,
        video_id: &str,
        opts: &CleanupResolutionsOptions,
    ) -> Result<StatusResponse> {
        let path = opts
            .to_query()
            .append_to(&format!("{}/resolutions/cleanup", self.item(video_id)));
        self.client.video.send_empty(Method::POST, &path).await
    }

    pub async fn storage_size(&self, video_id: &str) -> Result<StorageSizeResponse> {
        self.client
            .video
            .get(&format!("{}/storage-size", self.item(video_id)))
            .await
    }

    /// Repackage the video into the current output format.
    pub async fn repackage(&self, video_id: &str, keep_original_files: bool) -> Result<Video> {
        let path = QueryBuilder::new()
            .flag("keepOriginalFiles", keep_original_files)
            .append_to(&format!("{}/repackage", self.item(video_id)));
        self.client.video.send_empty(Method::POST, &path).await
    }

    /// Generate captions; `force` re-runs an existing transcription.
    pub async fn transcribe(
        &self,
        video_id: &str,
        req: &TranscribeRequest,
        force: bool,
    ) -> Result<StatusResponse> {
        let path = QueryBuilder::new()
            .flag("force", force)
            .append_to(&format!("{}/transcribe", self.item(video_id)));
        self.client.video.send_json(Method::POST, &path, req).await
    }

    /// Trigger AI generated title, description, chapters or moments.
    pub async fn smart_actions(
        &self,
        video_id: &str,
        req: &SmartActionsRequest,
    ) -> Result<StatusResponse> {
        self.client
            .video
            .send_json(Method::POST, &format!("{}/smart", self.item(video_id)), req)
            .await
    }
}
