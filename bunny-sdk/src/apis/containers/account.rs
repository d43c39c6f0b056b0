//! Account-wide services: limits, nodes and log forwarding

use reqwest::Method;

use super::types::{
    CursorOptions, LogForwardingConfig, LogForwardingListResponse, LogForwardingRequest,
    NodeListResponse, UserLimits,
};
use super::{ContainersClient, with_cursor};
use crate::error::Result;
use crate::types::path_escape;

#[derive(Debug, Clone, Copy)]
pub struct LimitsService<'a> {
    client: &'a ContainersClient,
}

impl<'a> LimitsService<'a> {
    pub(crate) fn new(client: &'a ContainersClient) -> Self {
        Self { client }
    }

    pub async fn get(&self) -> Result<UserLimits> {
        self.client.core.get("/limits").await
    }
}

#[derive(Debug, Clone, Copy)]
pub struct NodeService<'a> {
    client: &'a ContainersClient,
}

impl<'a> NodeService<'a> {
    pub(crate) fn new(client: &'a ContainersClient) -> Self {
        Self { client }
    }

    /// Node addresses, cursor paginated.
    pub async fn list(&self, opts: Option<&CursorOptions>) -> Result<NodeListResponse> {
        self.client.core.get(&with_cursor("/nodes", opts)).await
    }
}

/// Syslog forwarding, one configuration per application.
#[derive(Debug, Clone, Copy)]
pub struct LogForwardingService<'a> {
    client: &'a ContainersClient,
}

impl<'a> LogForwardingService<'a> {
    pub(crate) fn new(client: &'a ContainersClient) -> Self {
        Self { client }
    }

    fn item(app_id: &str) -> String {
        format!("/log/forwarding/{}", path_escape(app_id))
    }

    pub async fn list(&self) -> Result<LogForwardingListResponse> {
        self.client.core.get("/log/forwarding").await
    }

    pub async fn get(&self, app_id: &str) -> Result<LogForwardingConfig> {
        self.client.core.get(&Self::item(app_id)).await
    }

    pub async fn create(&self, req: &LogForwardingRequest) -> Result<LogForwardingConfig> {
        self.client
            .core
            .send_json(Method::POST, "/log/forwarding", req)
            .await
    }

    pub async fn update(
        &self,
        app_id: &str,
        req: &LogForwardingRequest,
    ) -> Result<LogForwardingConfig> {
        self.client
            .core
            .send_json(Method::PUT, &Self::item(app_id), req)
            .await
    }

    pub async fn delete(&self, app_id: &str) -> Result<()> {
        self.client.core.delete(&Self::item(app_id)).await
    }
}
