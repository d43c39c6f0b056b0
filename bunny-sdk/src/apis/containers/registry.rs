use reqwest::Method;

use super::ContainersClient;
use super::types::{
    ConfigSuggestions, ContainerImage, ContainerRegistry, ImageDigest, ImageRef, ImageTag,
    RegistryDeleteResponse, RegistryListResponse, RegistryOperationResponse, RegistryRequest,
    SearchPublicImagesRequest,
};
use crate::error::Result;

/// Image registries and image discovery.
#[derive(Debug, Clone, Copy)]
pub struct RegistryService<'a> {
    client: &'a ContainersClient,
}

impl<'a> RegistryService<'a> {
    pub(crate) fn new(client: &'a ContainersClient) -> Self {
        Self { client }
    }

    pub async fn list(&self) -> Result<RegistryListResponse> {
        self.client.core.get("/registries").await
    }

    pub async fn get(&self, registry_id: i64) -> Result<ContainerRegistry> {
        self.client
            .core
            .get(&format!("/registries/{registry_id}"))
            .await
    }

    pub async fn create(&self, req: &RegistryRequest) -> Result<RegistryOperationResponse> {
        self.client
            .core
            .send_json(Method::POST, "/registries", req)
            .await
    }

    pub async fn update(
        &self,
        registry_id: i64,
        req: &RegistryRequest,
    ) -> Result<RegistryOperationResponse> {
        self.client
            .core
            .send_json(Method::PUT, &format!("/registries/{registry_id}"), req)
            .await
    }

    /// Delete a registry. A registry still in use is reported through the
    /// response status, not as an error.
    pub async fn delete(&self, registry_id: i64) -> Result<RegistryDeleteResponse> {
        self.client
            .core
            .send_empty(Method::DELETE, &format!("/registries/{registry_id}"))
            .await
    }

    pub async fn images(&self, registry_id: &str) -> Result<Vec<ContainerImage>> {
        let body = serde_json::json!({ "registryId": registry_id });
        self.client
            .core
            .send_json(Method::POST, "/registries/images", &body)
            .await
    }

    pub async fn tags(&self, image: &ImageRef) -> Result<Vec<ImageTag>> {
        let body = ImageRef {
            tag: None,
            ..image.clone()
        };
        self.client
            .core
            .send_json(Method::POST, "/registries/tags", &body)
            .await
    }

    pub async fn digest(&self, image: &ImageRef) -> Result<ImageDigest> {
        self.client
            .core
            .send_json(Method::POST, "/registries/digest", image)
            .await
    }

    /// Ports and environment variables suggested for an image.
    pub async fn config_suggestions(&self, image: &ImageRef) -> Result<ConfigSuggestions> {
        self.client
            .core
            .send_json(Method::POST, "/registries/config-suggestions", image)
            .await
    }

    pub async fn search_public_images(
        &self,
        req: &SearchPublicImagesRequest,
    ) -> Result<Vec<ContainerImage>> {
        self.client
            .core
            .send_json(Method::POST, "/registries/public-images/search", req)
            .await
    }
}
