use reqwest::Method;

use super::StreamClient;
use super::types::{
    CreateLibraryRequest, Library, LibraryListResponse, LibraryStatistics, StatisticsOptions,
    UpdateLibraryRequest,
};
use crate::error::Result;
use crate::types::ListOptions;

/// Video library management (account API host).
#[derive(Debug, Clone, Copy)]
pub struct LibraryService<'a> {
    client: &'a StreamClient,
}

impl<'a> LibraryService<'a> {
    pub(crate) fn new(client: &'a StreamClient) -> Self {
        Self { client }
    }

    pub async fn list(&self, opts: Option<&ListOptions>) -> Result<LibraryListResponse> {
        let path = opts.map_or_else(
            || "/library".to_string(),
            |o| o.to_query().append_to("/library"),
        );
        self.client.core.get(&path).await
    }

    pub async fn get(&self, library_id: i64) -> Result<Library> {
        self.client.core.get(&format!("/library/{library_id}")).await
    }

    pub async fn create(&self, req: &CreateLibraryRequest) -> Result<Library> {
        self.client.core.send_json(Method::POST, "/library", req).await
    }

    pub async fn update(&self, library_id: i64, req: &UpdateLibraryRequest) -> Result<Library> {
        self.client
            .core
            .send_json(Method::POST, &format!("/library/{library_id}"), req)
            .await
    }

    pub async fn delete(&self, library_id: i64) -> Result<()> {
        self.client
            .core
            .delete(&format!("/library/{library_id}"))
            .await
    }

    pub async fn statistics(
        &self,
        library_id: i64,
        opts: Option<&StatisticsOptions>,
    ) -> Result<LibraryStatistics> {
        let base = format!("/library/{library_id}/statistics");
        let path = opts.map_or_else(|| base.clone(), |o| o.to_query().append_to(&base));
        self.client.core.get(&path).await
    }
}
