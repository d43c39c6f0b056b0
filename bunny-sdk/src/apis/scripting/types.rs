//! Edge Scripting API type definitions

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::types::QueryBuilder;
use crate::utils::datetime::BunnyTime;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ScriptType {
    #[serde(rename = "DNS")]
    Dns,
    #[serde(rename = "CDN")]
    #[default]
    Cdn,
    Middleware,
    #[serde(other)]
    Unknown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ReleaseStatus {
    Archived,
    Live,
    #[serde(other)]
    Unknown,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct EdgeScript {
    pub id: i64,
    pub name: Option<String>,
    pub last_modified: BunnyTime,
    pub script_type: ScriptType,
    pub current_release_id: i64,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub edge_script_variables: Vec<EdgeScriptVariable>,
    pub deleted: bool,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub linked_pull_zones: Vec<LinkedPullZone>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub integration: Option<SourceCodeIntegration>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_hostname: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub system_hostname: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deployment_key: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub repository_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub integration_id: Option<i64>,
    pub monthly_cost: f64,
    pub monthly_request_count: i64,
    pub monthly_cpu_time: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct LinkedPullZone {
    pub id: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

/// Git repository backing a script.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct SourceCodeIntegration {
    pub id: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub integration_type: Option<String>,
    #[serde(rename = "RepositoryUrl", skip_serializing_if = "Option::is_none")]
    pub repository_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub branch: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct EdgeScriptRelease {
    pub id: i64,
    pub deleted: bool,
    pub code: Option<String>,
    pub uuid: Option<String>,
    pub note: Option<String>,
    pub author: Option<String>,
    pub author_email: Option<String>,
    pub commit_sha: Option<String>,
    pub status: Option<ReleaseStatus>,
    pub date_released: BunnyTime,
    pub date_published: BunnyTime,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct EdgeScriptSecret {
    pub id: i64,
    pub name: Option<String>,
    pub last_modified: BunnyTime,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct EdgeScriptVariable {
    pub id: i64,
    pub name: Option<String>,
    pub required: bool,
    pub default_value: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct EdgeScriptCode {
    pub code: Option<String>,
    pub last_modified: BunnyTime,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct ScriptStatistics {
    pub total_requests_served: i64,
    pub total_cpu_used: f64,
    pub total_monthly_cost: f64,
    pub average_cpu_time_per_execution: f64,
    pub requests_served_chart: HashMap<String, i64>,
    pub average_cpu_time_chart: HashMap<String, f64>,
    pub total_cpu_time_chart: HashMap<String, f64>,
}

/// Script listing; the server computes `has_more_items`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct ScriptListResponse {
    pub items: Vec<EdgeScript>,
    pub current_page: u32,
    pub total_items: u64,
    pub has_more_items: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct ReleaseListResponse {
    pub items: Vec<EdgeScriptRelease>,
    pub current_page: u32,
    pub total_items: u64,
    pub has_more_items: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct SecretListResponse {
    pub secrets: Vec<EdgeScriptSecret>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScriptListOptions {
    pub page: u32,
    pub per_page: u32,
    pub search: Option<String>,
    pub include_linked_pullzones: bool,
    /// Sent whenever set, including zero.
    pub integration_id: Option<i64>,
}

impl ScriptListOptions {
    pub(crate) fn to_query(&self) -> QueryBuilder {
        QueryBuilder::new()
            .uint("page", self.page)
            .uint("perPage", self.per_page)
            .text("search", self.search.as_deref())
            .flag("includeLinkedPullzones", self.include_linked_pullzones)
            .opt("integrationId", self.integration_id)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StatisticsOptions {
    pub date_from: Option<String>,
    pub date_to: Option<String>,
    pub load_latest: bool,
    pub hourly: bool,
}

impl StatisticsOptions {
    pub(crate) fn to_query(&self) -> QueryBuilder {
        QueryBuilder::new()
            .text("dateFrom", self.date_from.as_deref())
            .text("dateTo", self.date_to.as_deref())
            .flag("loadLatest", self.load_latest)
            .flag("hourly", self.hourly)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReleaseListOptions {
    pub page: u32,
    pub per_page: u32,
}

impl ReleaseListOptions {
    pub(crate) fn to_query(self) -> QueryBuilder {
        QueryBuilder::new()
            .uint("page", self.page)
            .uint("perPage", self.per_page)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CreateScriptRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub script_type: Option<ScriptType>,
    pub create_linked_pull_zone: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub linked_pull_zone_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub integration: Option<SourceCodeIntegration>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct UpdateScriptRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub script_type: Option<ScriptType>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct UpdateCodeRequest {
    pub code: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct PublishReleaseRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

/// Body for add and upsert.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct SecretRequest {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub secret: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct UpdateSecretRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub secret: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct AddVariableRequest {
    pub name: String,
    pub required: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_value: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct UpdateVariableRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_value: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub required: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct UpsertVariableRequest {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub required: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_value: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn script_list_query() {
        let opts = ScriptListOptions {
            page: 1,
            per_page: 20,
            search: Some("edge".to_string()),
            include_linked_pullzones: true,
            integration_id: Some(0),
        };
        assert_eq!(
            opts.to_query().encode(),
            "page=1&perPage=20&search=edge&includeLinkedPullzones=true&integrationId=0"
        );
    }

    #[test]
    fn script_type_wire_names() {
        assert_eq!(serde_json::to_string(&ScriptType::Dns).unwrap(), r#""DNS""#);
        assert_eq!(
            serde_json::to_string(&ScriptType::Middleware).unwrap(),
            r#""Middleware""#
        );
    }

    #[test]
    fn release_decodes_status_and_dates() {
        let r: EdgeScriptRelease = serde_json::from_str(
            r#"{"Id":4,"Uuid":"u-1","Status":"Live","DateReleased":"2024-03-01T08:00:00","DatePublished":""}"#,
        )
        .unwrap();
        assert_eq!(r.status, Some(ReleaseStatus::Live));
        assert!(!r.date_released.is_zero());
        assert!(r.date_published.is_zero());
    }

    #[test]
    fn create_request_always_sends_linked_zone_flag() {
        let json = serde_json::to_string(&CreateScriptRequest::default()).unwrap();
        assert_eq!(json, r#"{"CreateLinkedPullZone":false}"#);
    }
}
