use reqwest::Method;

use super::types::{
    IdResponse, UpdateVolumeRequest, VolumeInstanceIdsResponse, VolumeListResponse,
    VolumeNameResponse,
};
use super::{ContainersClient, app_path};
use crate::error::Result;
use crate::types::path_escape;

/// Persistent volumes of one application.
#[derive(Debug, Clone, Copy)]
pub struct VolumeService<'a> {
    client: &'a ContainersClient,
    app_id: &'a str,
}

impl<'a> VolumeService<'a> {
    pub(crate) fn new(client: &'a ContainersClient, app_id: &'a str) -> Self {
        Self { client, app_id }
    }

    fn item(&self, volume_id: &str) -> String {
        format!(
            "{}/volumes/{}",
            app_path(self.app_id),
            path_escape(volume_id)
        )
    }

    pub async fn list(&self) -> Result<VolumeListResponse> {
        self.client
            .core
            .get(&format!("{}/volumes", app_path(self.app_id)))
            .await
    }

    /// Rename or resize. Volumes can only grow.
    pub async fn update(
        &self,
        volume_id: &str,
        req: &UpdateVolumeRequest,
    ) -> Result<UpdateVolumeRequest> {
        self.client
            .core
            .send_json(Method::PATCH, &self.item(volume_id), req)
            .await
    }

    pub async fn detach(&self, volume_id: &str) -> Result<VolumeNameResponse> {
        self.client
            .core
            .send_empty(Method::POST, &format!("{}/detach", self.item(volume_id)))
            .await
    }

    pub async fn delete_instance(&self, volume_id: &str, instance_id: &str) -> Result<IdResponse> {
        let path = format!(
            "{}/instances/{}",
            self.item(volume_id),
            path_escape(instance_id)
        );
        self.client.core.send_empty(Method::DELETE, &path).await
    }

    /// Delete every instance of the volume.
    pub async fn delete_all(&self, volume_id: &str) -> Result<VolumeInstanceIdsResponse> {
        self.client
            .core
            .send_empty(Method::DELETE, &self.item(volume_id))
            .await
    }
}
