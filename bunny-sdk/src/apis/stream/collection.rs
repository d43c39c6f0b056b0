use reqwest::Method;

use super::StreamClient;
use super::types::{Collection, CollectionListOptions, CollectionListResponse, CollectionRequest};
use crate::error::Result;
use crate::types::path_escape;

/// Collections inside one library (video API host).
#[derive(Debug, Clone, Copy)]
pub struct CollectionService<'a> {
    client: &'a StreamClient,
    library_id: i64,
}

impl<'a> CollectionService<'a> {
    pub(crate) fn new(client: &'a StreamClient, library_id: i64) -> Self {
        Self { client, library_id }
    }

    fn base(&self) -> String {
        format!("/library/{}/collections", self.library_id)
    }

    fn item(&self, collection_id: &str) -> String {
        format!("{}/{}", self.base(), path_escape(collection_id))
    }

    pub async fn list(&self, opts: Option<&CollectionListOptions>) -> Result<CollectionListResponse> {
        let base = self.base();
        let path = opts.map_or_else(|| base.clone(), |o| o.to_query().append_to(&base));
        self.client.video.get(&path).await
    }

    pub async fn get(&self, collection_id: &str) -> Result<Collection> {
        self.client.video.get(&self.item(collection_id)).await
    }

    pub async fn create(&self, req: &CollectionRequest) -> Result<Collection> {
        self.client
            .video
            .send_json(Method::POST, &self.base(), req)
            .await
    }

    pub async fn update(&self, collection_id: &str, req: &CollectionRequest) -> Result<Collection> {
        self.client
            .video
            .send_json(Method::POST, &self.item(collection_id), req)
            .await
    }

    pub async fn delete(&self, collection_id: &str) -> Result<()> {
        self.client.video.delete(&self.item(collection_id)).await
    }
}
