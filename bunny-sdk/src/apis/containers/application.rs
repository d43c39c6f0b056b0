use reqwest::Method;

use super::types::{
    Application, ApplicationListResponse, ApplicationOverview, ApplicationRequest,
    ApplicationStatistics, AutoScaling, CursorOptions, IdResponse, PatchApplicationRequest,
    StatisticsOptions,
};
use super::{ContainersClient, app_path, with_cursor};
use crate::error::Result;
use crate::types::path_escape;

/// Application lifecycle, obtained from [`ContainersClient::applications`].
#[derive(Debug, Clone, Copy)]
pub struct ApplicationService<'a> {
    client: &'a ContainersClient,
}

impl<'a> ApplicationService<'a> {
    pub(crate) fn new(client: &'a ContainersClient) -> Self {
        Self { client }
    }

    pub async fn list(&self, opts: Option<&CursorOptions>) -> Result<ApplicationListResponse> {
        self.client.core.get(&with_cursor("/apps", opts)).await
    }

    pub async fn get(&self, app_id: &str) -> Result<Application> {
        self.client.core.get(&app_path(app_id)).await
    }

    pub async fn create(&self, req: &ApplicationRequest) -> Result<IdResponse> {
        self.client.core.send_json(Method::POST, "/apps", req).await
    }

    /// Replace the whole application definition.
    pub async fn update(&self, app_id: &str, req: &ApplicationRequest) -> Result<IdResponse> {
        self.client
            .core
            .send_json(Method::PUT, &app_path(app_id), req)
            .await
    }

    /// Change only the fields that are set.
    pub async fn patch(&self, app_id: &str, req: &PatchApplicationRequest) -> Result<IdResponse> {
        self.client
            .core
            .send_json(Method::PATCH, &app_path(app_id), req)
            .await
    }

    pub async fn delete(&self, app_id: &str) -> Result<()> {
        self.client.core.delete(&app_path(app_id)).await
    }

    pub async fn deploy(&self, app_id: &str) -> Result<()> {
        self.action(app_id, "deploy").await
    }

    pub async fn undeploy(&self, app_id: &str) -> Result<()> {
        self.action(app_id, "undeploy").await
    }

    pub async fn restart(&self, app_id: &str) -> Result<()> {
        self.action(app_id, "restart").await
    }

    async fn action(&self, app_id: &str, action: &str) -> Result<()> {
        self.client
            .core
            .execute_unit::<()>(
                Method::POST,
                &format!("{}/{action}", app_path(app_id)),
                None,
            )
            .await
    }

    pub async fn overview(&self, app_id: &str) -> Result<ApplicationOverview> {
        self.client
            .core
            .get(&format!("{}/overview", app_path(app_id)))
            .await
    }

    pub async fn statistics(
        &self,
        app_id: &str,
        opts: &StatisticsOptions,
    ) -> Result<ApplicationStatistics> {
        let path = opts
            .to_query()
            .append_to(&format!("{}/statistics", app_path(app_id)));
        self.client.core.get(&path).await
    }
}

#[derive(Debug, Clone, Copy)]
pub struct AutoscalingService<'a> {
    client: &'a ContainersClient,
    app_id: &'a str,
}

impl<'a> AutoscalingService<'a> {
    pub(crate) fn new(client: &'a ContainersClient, app_id: &'a str) -> Self {
        Self { client, app_id }
    }

    fn path(&self) -> String {
        format!("{}/autoscaling", app_path(self.app_id))
    }

    pub async fn get(&self) -> Result<AutoScaling> {
        self.client.core.get(&self.path()).await
    }

    pub async fn update(&self, settings: &AutoScaling) -> Result<()> {
        self.client
            .core
            .execute_unit(Method::PUT, &self.path(), Some(settings))
            .await
    }
}

#[derive(Debug, Clone, Copy)]
pub struct PodService<'a> {
    client: &'a ContainersClient,
    app_id: &'a str,
}

impl<'a> PodService<'a> {
    pub(crate) fn new(client: &'a ContainersClient, app_id: &'a str) -> Self {
        Self { client, app_id }
    }

    /// Kill the pod and let the scheduler start a fresh one.
    pub async fn recreate(&self, pod_id: &str) -> Result<()> {
        let path = format!(
            "{}/pods/{}/recreate",
            app_path(self.app_id),
            path_escape(pod_id)
        );
        self.client
            .core
            .execute_unit::<()>(Method::POST, &path, None)
            .await
    }
}
