use super::StreamClient;
use super::types::{OEmbedOptions, OEmbedResponse};
use crate::error::Result;

/// oEmbed lookups for embedding videos in third-party pages.
#[derive(Debug, Clone, Copy)]
pub struct OEmbedService<'a> {
    client: &'a StreamClient,
}

impl<'a> OEmbedService<'a> {
    pub(crate) fn new(client: &'a StreamClient) -> Self {
        Self { client }
    }

    pub async fn get(&self, opts: Option<&OEmbedOptions>) -> Result<OEmbedResponse> {
        let path = opts.map_or_else(
            || "/OEmbed".to_string(),
            |o| o.to_query().append_to("/OEmbed"),
        );
        self.client.video.get(&path).await
    }
}
