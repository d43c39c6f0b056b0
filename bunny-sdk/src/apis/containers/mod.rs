//! Magic Containers: applications, registries, templates, endpoints, regions,
//! volumes and log forwarding
//!
//! Base URL `https://api.bunny.net/mc`, account API key, `camelCase` JSON.
//! Lists are cursor paginated, see [`CursorPage`].

mod account;
mod application;
mod registry;
mod region;
mod template;
mod types;
mod volume;

pub use account::{LimitsService, LogForwardingService, NodeService};
pub use application::{ApplicationService, AutoscalingService, PodService};
pub use registry::RegistryService;
pub use region::{RegionService, RegionSettingsService};
pub use template::{ContainerTemplateService, EndpointService};
pub use types::*;
pub use volume::VolumeService;

use crate::config::ClientConfig;
use crate::error::ApiArea;
use crate::http_client::ApiCore;
use crate::types::path_escape;

pub(crate) const CONTAINERS_API_BASE: &str = "https://api.bunny.net/mc";

/// Magic Containers API client.
#[derive(Debug, Clone)]
pub struct ContainersClient {
    pub(crate) core: ApiCore,
}

impl ContainersClient {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self::with_config(api_key, &ClientConfig::default())
    }

    pub fn with_config(api_key: impl Into<String>, config: &ClientConfig) -> Self {
        Self {
            core: config.build_core(ApiArea::Containers, CONTAINERS_API_BASE, &api_key.into()),
        }
    }

    pub fn applications(&self) -> ApplicationService<'_> {
        ApplicationService::new(self)
    }

    pub fn registries(&self) -> RegistryService<'_> {
        RegistryService::new(self)
    }

    pub fn container_templates<'a>(&'a self, app_id: &'a str) -> ContainerTemplateService<'a> {
        ContainerTemplateService::new(self, app_id)
    }

    pub fn endpoints<'a>(&'a self, app_id: &'a str) -> EndpointService<'a> {
        EndpointService::new(self, app_id)
    }

    pub fn autoscaling<'a>(&'a self, app_id: &'a str) -> AutoscalingService<'a> {
        AutoscalingService::new(self, app_id)
    }

    pub fn regions(&self) -> RegionService<'_> {
        RegionService::new(self)
    }

    pub fn region_settings<'a>(&'a self, app_id: &'a str) -> RegionSettingsService<'a> {
        RegionSettingsService::new(self, app_id)
    }

    pub fn limits(&self) -> LimitsService<'_> {
        LimitsService::new(self)
    }

    pub fn nodes(&self) -> NodeService<'_> {
        NodeService::new(self)
    }

    pub fn pods<'a>(&'a self, app_id: &'a str) -> PodService<'a> {
        PodService::new(self, app_id)
    }

    pub fn volumes<'a>(&'a self, app_id: &'a str) -> VolumeService<'a> {
        VolumeService::new(self, app_id)
    }

    pub fn log_forwarding(&self) -> LogForwardingService<'_> {
        LogForwardingService::new(self)
    }
}

pub(crate) fn app_path(app_id: &str) -> String {
    format!("/apps/{}", path_escape(app_id))
}

pub(crate) fn with_cursor(base: &str, opts: Option<&CursorOptions>) -> String {
    opts.map_or_else(|| base.to_string(), |o| o.to_query().append_to(base))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn app_ids_are_escaped() {
        assert_eq!(app_path("abc"), "/apps/abc");
        assert_eq!(app_path("a/b"), "/apps/a%2Fb");
    }

    #[test]
    fn default_base_url() {
        let client = ContainersClient::new("key");
        assert_eq!(client.core.base_url(), CONTAINERS_API_BASE);
    }
}
