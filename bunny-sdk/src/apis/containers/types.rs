//! Magic Containers type definitions (`camelCase` wire format)

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::types::QueryBuilder;

// ============ Enums ============

/// Application status. Values this crate does not know are kept verbatim.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ApplicationStatus {
    Active,
    Progressing,
    Inactive,
    Failing,
    Suspended,
    /// Status not reported.
    #[default]
    Unknown,
    #[serde(untagged)]
    Other(String),
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RuntimeType {
    #[default]
    Shared,
    Reserved,
    #[serde(other)]
    Unknown,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EndpointType {
    #[serde(rename = "CDN")]
    Cdn,
    Anycast,
    PublicIp,
    #[default]
    #[serde(other)]
    Unknown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Protocol {
    Tcp,
    Udp,
    Sctp,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ImagePullPolicy {
    Always,
    IfNotPresent,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RegistryType {
    DockerHub,
    GitHub,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RegistryStatus {
    Saved,
    SecretsValidationFailed,
    UnknownErrorOccured,
    NotFound,
    InvalidInput,
    #[default]
    #[serde(other)]
    Unknown,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RegistryDeleteStatus {
    Removed,
    InUse,
    NotFound,
    #[default]
    #[serde(other)]
    Unknown,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LogForwardingType {
    #[default]
    SyslogUdp,
    SyslogTcp,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LogForwardingFormat {
    #[default]
    SyslogRfc5424,
    SyslogRfc3164,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum VolumeStatus {
    Attached,
    Detached,
    Extending,
    Deleting,
    Creating,
    #[default]
    #[serde(other)]
    Unknown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ProvisioningType {
    Static,
    Dynamic,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StatisticsGranularity {
    #[default]
    Daily,
    Hourly,
    Minute,
}

impl StatisticsGranularity {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Daily => "Daily",
            Self::Hourly => "Hourly",
            Self::Minute => "Minute",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AnycastType {
    #[default]
    IPv4,
}

// ============ Pagination ============

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PaginationMeta {
    pub total_items: u64,
}

/// Cursor-paginated list. Pass `cursor` back as `next_cursor` for the next page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CursorPage<T> {
    pub items: Vec<T>,
    pub meta: PaginationMeta,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cursor: Option<String>,
}

impl<T> Default for CursorPage<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            meta: PaginationMeta::default(),
            cursor: None,
        }
    }
}

impl<T> CursorPage<T> {
    pub fn has_more(&self) -> bool {
        self.cursor.as_deref().is_some_and(|c| !c.is_empty())
    }
}

pub type ApplicationListResponse = CursorPage<ApplicationListItem>;
pub type RegistryListResponse = CursorPage<ContainerRegistry>;
pub type EndpointListResponse = CursorPage<Endpoint>;
pub type RegionListResponse = CursorPage<Region>;
pub type NodeListResponse = CursorPage<String>;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CursorOptions {
    pub next_cursor: Option<String>,
    pub limit: u32,
}

impl CursorOptions {
    pub(crate) fn to_query(&self) -> QueryBuilder {
        QueryBuilder::new()
            .text("nextCursor", self.next_cursor.as_deref())
            .uint("limit", self.limit)
    }
}

// ============ Applications ============

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DisplayEndpoint {
    pub id: Option<String>,
    pub address: Option<String>,
    #[serde(rename = "type")]
    pub kind: EndpointType,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ApplicationListItem {
    pub id: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_endpoint: Option<DisplayEndpoint>,
    pub status: ApplicationStatus,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AutoScaling {
    pub min: u32,
    pub max: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RegionSettings {
    pub allowed_region_ids: Vec<String>,
    pub required_region_ids: Vec<String>,
    pub max_allowed_regions: u32,
    pub node_selectors: HashMap<String, Value>,
    pub provisioning_type: Option<ProvisioningType>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ContainerInstance {
    pub id: Option<String>,
    pub name: Option<String>,
    pub status: Option<String>,
    pub region: Option<String>,
    pub node_name: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Application {
    pub id: String,
    pub name: String,
    pub status: ApplicationStatus,
    pub runtime_type: Option<RuntimeType>,
    pub display_endpoint: Option<DisplayEndpoint>,
    pub region_settings: Option<RegionSettings>,
    pub container_templates: Vec<ContainerTemplate>,
    pub container_instances: Vec<ContainerInstance>,
    pub volumes: Vec<Volume>,
    pub auto_scaling: Option<AutoScaling>,
}

/// New volume, size in GB (1-100).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VolumeRequest {
    pub name: String,
    pub size: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegionSettingsRequest {
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub allowed_region_ids: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub required_region_ids: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_allowed_regions: Option<u32>,
}

/// Full application definition, used by create and update (PUT).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplicationRequest {
    pub name: String,
    pub runtime_type: RuntimeType,
    pub auto_scaling: AutoScaling,
    pub region_settings: RegionSettingsRequest,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub termination_grace_period_seconds: Option<u32>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub container_templates: Vec<CreateContainerTemplateRequest>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub volumes: Vec<VolumeRequest>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PatchApplicationRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub runtime_type: Option<RuntimeType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auto_scaling: Option<AutoScaling>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub region_settings: Option<RegionSettingsRequest>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub container_templates: Vec<CreateContainerTemplateRequest>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub volumes: Vec<VolumeRequest>,
}

/// Bare `{"id": ...}` acknowledgement.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct IdResponse {
    pub id: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MetricValue {
    pub value: f64,
    pub status: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RegionOverview {
    pub id: Option<String>,
    pub name: Option<String>,
    pub instances: u32,
    pub latency: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ApplicationOverview {
    pub target_latency: Option<MetricValue>,
    pub current_latency: Option<MetricValue>,
    pub active_regions: Option<MetricValue>,
    pub active_instances: Option<MetricValue>,
    pub desired_instances: u32,
    pub status: ApplicationStatus,
    #[serde(rename = "averageCPU")]
    pub average_cpu: Option<MetricValue>,
    #[serde(rename = "averageRAM")]
    pub average_ram: Option<MetricValue>,
    pub average_volumes_usage: Option<MetricValue>,
    pub regions: Vec<RegionOverview>,
    pub average_latency: f64,
    pub total_volume_size_in_gb: u32,
    pub monthly_cost: f64,
    pub latency_chart: HashMap<String, Value>,
}

/// Chart series keyed by timestamp. Values vary by chart, so they stay raw JSON.
pub type Chart = HashMap<String, Value>;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ApplicationStatistics {
    pub target_latency_chart: Chart,
    pub active_regions_chart: Chart,
    pub latency_chart: Chart,
    pub cpu_usage_chart: Chart,
    pub ram_usage_chart: Chart,
    pub traffic_chart: Chart,
    pub instances_chart: Chart,
    pub volumes_usage_chart: Chart,
    pub volumes_capacity_chart: Chart,
    pub volumes_split_usage_chart: Chart,
    pub volumes_split_capacity_chart: Chart,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StatisticsOptions {
    pub from_date: Option<String>,
    pub to_date: Option<String>,
    pub granularity: Option<StatisticsGranularity>,
}

impl StatisticsOptions {
    pub(crate) fn to_query(&self) -> QueryBuilder {
        QueryBuilder::new()
            .text("fromDate", self.from_date.as_deref())
            .text("toDate", self.to_date.as_deref())
            .text("granularity", self.granularity.map(StatisticsGranularity::as_str))
    }
}

// ============ Registries ============

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ContainerRegistry {
    pub id: i64,
    pub account_id: Option<String>,
    pub user_id: Option<String>,
    pub namespace_id: Option<String>,
    pub display_name: String,
    pub host_name: Option<String>,
    pub user_name: Option<String>,
    pub first_password_symbols: Option<String>,
    pub last_password_symbols: Option<String>,
    pub created_at: Option<String>,
    pub is_public: bool,
    pub last_updated_at: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PasswordCredentials {
    pub user_name: String,
    pub password: String,
}

/// Create and update share one body.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegistryRequest {
    pub display_name: String,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<RegistryType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password_credentials: Option<PasswordCredentials>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RegistryOperationResponse {
    pub id: i64,
    pub error: Option<String>,
    pub status: RegistryStatus,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RegistryDeleteResponse {
    pub status: RegistryDeleteStatus,
    /// Applications still using the registry when `status` is `InUse`.
    pub applications: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContainerImage {
    pub id: String,
    pub namespace: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ImageTag {
    pub name: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ImageDigest {
    pub image_namespace: Option<String>,
    pub image: Option<String>,
    pub tag: Option<String>,
    pub digest: Option<String>,
}

/// Image coordinates inside a registry. `tag` is ignored when listing tags.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageRef {
    pub registry_id: String,
    pub image_name: String,
    pub image_namespace: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tag: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EndpointSuggestion {
    pub port: u16,
    pub protocol: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EnvironmentVariableSuggestion {
    pub name: Option<String>,
    pub description: Option<String>,
    pub required: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ConfigSuggestions {
    pub endpoint_suggestions: Vec<EndpointSuggestion>,
    pub environment_variables_suggestions: Vec<EnvironmentVariableSuggestion>,
    pub app_name: Option<String>,
    pub description: Option<String>,
    pub instructions: Option<String>,
    pub registry_url: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchPublicImagesRequest {
    pub registry_id: String,
    pub prefix: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
}

// ============ Container templates ============

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnvironmentVariable {
    pub name: String,
    pub value: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EntryPoint {
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub command: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub arguments: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub working_directory: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProbeHttpGet {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    pub port: u16,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scheme: Option<String>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProbeTcpSocket {
    pub port: u16,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProbeExec {
    pub command: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Probe {
    #[serde(rename = "httpGet", skip_serializing_if = "Option::is_none")]
    pub http_get: Option<ProbeHttpGet>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tcp_socket: Option<ProbeTcpSocket>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exec: Option<ProbeExec>,
    pub initial_delay_seconds: u32,
    pub period_seconds: u32,
    pub timeout_seconds: u32,
    pub success_threshold: u32,
    pub failure_threshold: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Probes {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub startup: Option<Probe>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub readiness: Option<Probe>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub liveness: Option<Probe>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct VolumeMount {
    pub volume_name: String,
    pub mount_path: String,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub read_only: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ContainerEndpoint {
    pub id: Option<String>,
    pub display_name: Option<String>,
    #[serde(rename = "type")]
    pub kind: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ContainerTemplate {
    pub id: Option<String>,
    pub name: String,
    pub package_id: Option<String>,
    pub image: Option<String>,
    pub image_name: String,
    pub image_namespace: String,
    pub image_tag: String,
    pub image_registry_id: String,
    pub image_digest: Option<String>,
    pub image_pull_policy: Option<ImagePullPolicy>,
    pub entry_point: Option<EntryPoint>,
    pub probes: Option<Probes>,
    pub environment_variables: Vec<EnvironmentVariable>,
    pub endpoints: Vec<ContainerEndpoint>,
    pub volume_mounts: Vec<VolumeMount>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateContainerTemplateRequest {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    pub image_name: String,
    pub image_namespace: String,
    pub image_tag: String,
    pub image_registry_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_digest: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_pull_policy: Option<ImagePullPolicy>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entry_point: Option<EntryPoint>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub probes: Option<Probes>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub environment_variables: Vec<EnvironmentVariable>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub endpoints: Vec<EndpointRequest>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub volume_mounts: Vec<VolumeMount>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PatchContainerTemplateRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_namespace: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_tag: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_digest: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_registry_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_pull_policy: Option<ImagePullPolicy>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entry_point: Option<EntryPoint>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub probes: Option<Probes>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub environment_variables: Vec<EnvironmentVariable>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub endpoints: Vec<EndpointRequest>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub volume_mounts: Vec<VolumeMount>,
}

// ============ Endpoints ============

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PortMapping {
    pub container_port: u16,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exposed_port: Option<u16>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub protocols: Vec<Protocol>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct StickySessions {
    pub enabled: bool,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub session_headers: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cookie_name: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Endpoint {
    pub id: Option<String>,
    pub display_name: Option<String>,
    pub public_host: Option<String>,
    #[serde(rename = "type")]
    pub kind: EndpointType,
    pub is_ssl_enabled: bool,
    pub pull_zone_id: Option<String>,
    pub port_mappings: Vec<PortMapping>,
    pub container_name: Option<String>,
    pub container_id: Option<String>,
    pub sticky_sessions: Option<StickySessions>,
    #[serde(rename = "internalIpAddresses")]
    pub internal_ip_addresses: Vec<String>,
    #[serde(rename = "publicIpAddresses")]
    pub public_ip_addresses: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CdnEndpointConfig {
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub is_ssl_enabled: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sticky_sessions: Option<StickySessions>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pull_zone_id: Option<i64>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub port_mappings: Vec<PortMapping>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnycastEndpointConfig {
    #[serde(rename = "type")]
    pub kind: AnycastType,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub port_mappings: Vec<PortMapping>,
}

/// Endpoint definition; set exactly one of `cdn` and `anycast`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EndpointRequest {
    pub display_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cdn: Option<CdnEndpointConfig>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub anycast: Option<AnycastEndpointConfig>,
}

// ============ Regions ============

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Region {
    pub id: String,
    pub name: Option<String>,
    pub group: Option<String>,
    pub has_anycast_support: bool,
    pub has_capacity: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OptimalRegionResponse {
    pub region: Option<Region>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateRegionSettingsRequest {
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub allowed_region_ids: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub required_region_ids: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_allowed_regions: Option<u32>,
    #[serde(skip_serializing_if = "HashMap::is_empty")]
    pub node_selectors: HashMap<String, Value>,
}

// ============ Volumes ============

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct VolumeInstance {
    pub id: Option<String>,
    pub attached_pods: Vec<String>,
    pub attached_containers: Vec<String>,
    pub region: Option<String>,
    pub status: VolumeStatus,
    pub size: u32,
    pub usage: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Volume {
    pub id: Option<String>,
    pub name: String,
    pub size: u32,
    pub total_usage: f64,
    pub total_instances_count: u32,
    pub attached_instances_count: u32,
    pub containers_count: u32,
    pub volume_instances: Vec<VolumeInstance>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct VolumeSummary {
    pub total_pods: u32,
    pub total_containers: u32,
    pub total_storage: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VolumeListResponse {
    pub items: Vec<Volume>,
    pub meta: PaginationMeta,
    pub cursor: Option<String>,
    pub summary: Option<VolumeSummary>,
}

/// Rename or grow a volume. Also the shape of the update response.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UpdateVolumeRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<u32>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct VolumeNameResponse {
    pub name: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct VolumeInstanceIdsResponse {
    pub ids: Vec<String>,
}

// ============ Log forwarding ============

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LogForwardingConfig {
    pub id: Option<String>,
    pub app: Option<String>,
    pub product_id: Option<String>,
    #[serde(rename = "type")]
    pub kind: LogForwardingType,
    pub endpoint: String,
    pub port: u16,
    pub created_at: Option<String>,
    pub token: Option<String>,
    pub format: LogForwardingFormat,
    pub enabled: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogForwardingListResponse {
    pub items: Vec<LogForwardingConfig>,
}

/// Create and update share one body.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogForwardingRequest {
    pub app: String,
    #[serde(rename = "type")]
    pub kind: LogForwardingType,
    pub endpoint: String,
    pub port: u16,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
    pub format: LogForwardingFormat,
    pub enabled: bool,
}

// ============ Limits ============

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UserLimits {
    pub max_number_of_applications: u32,
    pub existing_number_of_applications: u32,
    pub max_number_of_regions_per_application: u32,
    pub max_number_of_instances_per_region: u32,
    pub max_number_of_instances_per_application: u32,
    pub max_number_of_volumes_per_application: u32,
    pub max_volume_size: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cursor_query_skips_defaults() {
        assert_eq!(CursorOptions::default().to_query().encode(), "");
        let opts = CursorOptions {
            next_cursor: Some("abc".to_string()),
            limit: 25,
        };
        assert_eq!(opts.to_query().encode(), "nextCursor=abc&limit=25");
    }

    #[test]
    fn statistics_query_uses_granularity_names() {
        let opts = StatisticsOptions {
            from_date: Some("2024-01-01".to_string()),
            to_date: None,
            granularity: Some(StatisticsGranularity::Hourly),
        };
        assert_eq!(
            opts.to_query().encode(),
            "fromDate=2024-01-01&granularity=Hourly"
        );
    }

    #[test]
    fn cursor_page_has_more_follows_cursor() {
        let page: ApplicationListResponse = serde_json::from_str(
            r#"{"items":[{"id":"a1","name":"web","status":"Active"}],"meta":{"totalItems":3},"cursor":"next"}"#,
        )
        .unwrap();
        assert_eq!(page.items[0].status, ApplicationStatus::Active);
        assert_eq!(page.meta.total_items, 3);
        assert!(page.has_more());

        let last: NodeListResponse =
            serde_json::from_str(r#"{"items":["n1"],"meta":{"totalItems":1},"cursor":""}"#)
                .unwrap();
        assert!(!last.has_more());
    }

    #[test]
    fn unknown_status_values_survive_round_trip() {
        let item: ApplicationListItem =
            serde_json::from_str(r#"{"id":"a","name":"b","status":"Hibernating"}"#).unwrap();
        assert_eq!(item.status, ApplicationStatus::Other("Hibernating".to_string()));

        let json = serde_json::to_value(&item).unwrap();
        assert_eq!(json["status"], "Hibernating");
    }

    #[test]
    fn missing_status_is_unknown() {
        let item: ApplicationListItem = serde_json::from_str(r#"{"id":"a"}"#).unwrap();
        assert_eq!(item.status, ApplicationStatus::Unknown);
    }

    #[test]
    fn endpoint_request_shape() {
        let req = EndpointRequest {
            display_name: "public".to_string(),
            cdn: Some(CdnEndpointConfig {
                is_ssl_enabled: true,
                port_mappings: vec![PortMapping {
                    container_port: 8080,
                    exposed_port: None,
                    protocols: vec![Protocol::Tcp],
                }],
                ..Default::default()
            }),
            anycast: None,
        };
        assert_eq!(
            serde_json::to_value(&req).unwrap(),
            serde_json::json!({
                "displayName": "public",
                "cdn": {
                    "isSslEnabled": true,
                    "portMappings": [{"containerPort": 8080, "protocols": ["Tcp"]}]
                }
            })
        );
    }
}
