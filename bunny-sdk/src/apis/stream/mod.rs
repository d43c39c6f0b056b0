//! Stream: video libraries, videos, collections and oEmbed
//!
//! Library management runs against the account API (`api.bunny.net`);
//! everything inside a library runs against the video API
//! (`video.bunnycdn.com`). Library-scoped calls need the library API key.

mod collection;
mod library;
mod oembed;
mod types;
mod video;

pub use collection::CollectionService;
pub use library::LibraryService;
pub use oembed::OEmbedService;
pub use types::*;
pub use video::VideoService;

use crate::config::ClientConfig;
use crate::error::ApiArea;
use crate::http_client::ApiCore;

pub(crate) const STREAM_API_BASE: &str = "https://api.bunny.net";
pub(crate) const STREAM_VIDEO_BASE: &str = "https://video.bunnycdn.com";

/// Stream API client.
///
/// `ClientConfig::base_url` overrides the management host; use
/// [`StreamClient::with_video_base_url`] for the video host.
#[derive(Debug, Clone)]
pub struct StreamClient {
    pub(crate) core: ApiCore,
    pub(crate) video: ApiCore,
}

impl StreamClient {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self::with_config(api_key, &ClientConfig::default())
    }

    pub fn with_config(api_key: impl Into<String>, config: &ClientConfig) -> Self {
        let core = config.build_core(ApiArea::Stream, STREAM_API_BASE, &api_key.into());
        let video = core.rebased(STREAM_VIDEO_BASE);
        Self { core, video }
    }

    #[must_use]
    pub fn with_video_base_url(mut self, base_url: &str) -> Self {
        self.video = self.video.rebased(base_url);
        self
    }

    pub fn libraries(&self) -> LibraryService<'_> {
        LibraryService::new(self)
    }

    pub fn videos(&self, library_id: i64) -> VideoService<'_> {
        VideoService::new(self, library_id)
    }

    pub fn collections(&self, library_id: i64) -> CollectionService<'_> {
        CollectionService::new(self, library_id)
    }

    pub fn oembed(&self) -> OEmbedService<'_> {
        OEmbedService::new(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn management_and_video_hosts() {
        let client = StreamClient::new("key");
        assert_eq!(client.core.base_url(), STREAM_API_BASE);
        assert_eq!(client.video.base_url(), STREAM_VIDEO_BASE);

        let client = StreamClient::with_config("key", &ClientConfig::new().base_url("http://mgmt"))
            .with_video_base_url("http://video");
        assert_eq!(client.core.base_url(), "http://mgmt");
        assert_eq!(client.video.base_url(), "http://video");
    }
}
