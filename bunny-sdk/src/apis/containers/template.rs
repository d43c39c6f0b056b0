use std::collections::HashMap;

use reqwest::Method;

use super::types::{
    ContainerTemplate, CreateContainerTemplateRequest, EndpointListResponse, EndpointRequest,
    IdResponse, PatchContainerTemplateRequest,
};
use super::{ContainersClient, app_path};
use crate::error::Result;
use crate::types::path_escape;

/// Container templates of one application.
#[derive(Debug, Clone, Copy)]
pub struct ContainerTemplateService<'a> {
    client: &'a ContainersClient,
    app_id: &'a str,
}

impl<'a> ContainerTemplateService<'a> {
    pub(crate) fn new(client: &'a ContainersClient, app_id: &'a str) -> Self {
        Self { client, app_id }
    }

    fn item(&self, container_id: &str) -> String {
        format!(
            "{}/containers/{}",
            app_path(self.app_id),
            path_escape(container_id)
        )
    }

    pub async fn get(&self, container_id: &str) -> Result<ContainerTemplate> {
        self.client.core.get(&self.item(container_id)).await
    }

    pub async fn create(&self, req: &CreateContainerTemplateRequest) -> Result<ContainerTemplate> {
        self.client
            .core
            .send_json(
                Method::POST,
                &format!("{}/containers", app_path(self.app_id)),
                req,
            )
            .await
    }

    pub async fn patch(
        &self,
        container_id: &str,
        req: &PatchContainerTemplateRequest,
    ) -> Result<ContainerTemplate> {
        self.client
            .core
            .send_json(Method::PATCH, &self.item(container_id), req)
            .await
    }

    pub async fn delete(&self, container_id: &str) -> Result<()> {
        self.client.core.delete(&self.item(container_id)).await
    }

    /// Replace all environment variables of the container.
    pub async fn set_environment_variables(
        &self,
        container_id: &str,
        vars: &HashMap<String, String>,
    ) -> Result<ContainerTemplate> {
        self.client
            .core
            .send_json(
                Method::PUT,
                &format!("{}/env", self.item(container_id)),
                vars,
            )
            .await
    }
}

/// Public endpoints of one application.
#[derive(Debug, Clone, Copy)]
pub struct EndpointService<'a> {
    client: &'a ContainersClient,
    app_id: &'a str,
}

impl<'a> EndpointService<'a> {
    pub(crate) fn new(client: &'a ContainersClient, app_id: &'a str) -> Self {
        Self { client, app_id }
    }

    fn item(&self, endpoint_id: &str) -> String {
        format!(
            "{}/endpoints/{}",
            app_path(self.app_id),
            path_escape(endpoint_id)
        )
    }

    pub async fn list(&self) -> Result<EndpointListResponse> {
        self.client
            .core
            .get(&format!("{}/endpoints", app_path(self.app_id)))
            .await
    }

    /// Expose a container through a new endpoint.
    pub async fn create(&self, container_id: &str, req: &EndpointRequest) -> Result<IdResponse> {
        let path = format!(
            "{}/containers/{}/endpoints",
            app_path(self.app_id),
            path_escape(container_id)
        );
        self.client.core.send_json(Method::POST, &path, req).await
    }

    pub async fn update(&self, endpoint_id: &str, req: &EndpointRequest) -> Result<()> {
        self.client
            .core
            .execute_unit(Method::PUT, &self.item(endpoint_id), Some(req))
            .await
    }

    pub async fn delete(&self, endpoint_id: &str) -> Result<()> {
        self.client.core.delete(&self.item(endpoint_id)).await
    }
}
