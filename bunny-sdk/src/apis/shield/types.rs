//! Shield type definitions (`PascalCase` wire format)

use serde::{Deserialize, Serialize};

use crate::types::QueryBuilder;

/// `{"Items": [...], "TotalCount": n}` envelope shared by Shield listings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct ShieldList<T> {
    pub items: Vec<T>,
    pub total_count: u64,
}

impl<T> Default for ShieldList<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            total_count: 0,
        }
    }
}

pub type ZoneListResponse = ShieldList<ShieldZone>;
pub type WafRuleListResponse = ShieldList<WafRule>;
pub type CustomRuleListResponse = ShieldList<CustomRule>;
pub type TriggeredRulesResponse = ShieldList<TriggeredRule>;
pub type RateLimitListResponse = ShieldList<RateLimit>;
pub type RateLimitMetricsList = ShieldList<RateLimitMetricsSummary>;
pub type EventLogListResponse = ShieldList<EventLog>;

// ============ Zones ============

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct ShieldZone {
    pub id: String,
    pub name: String,
    pub host_names: Vec<String>,
    pub edge_script_id: Option<String>,
    pub date_created: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CreateZoneRequest {
    pub name: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub host_names: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct UpdateZoneRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub host_names: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct PullZoneMapping {
    pub shield_zone_id: String,
    pub pull_zone_id: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct PullZoneMappingResponse {
    pub items: Vec<PullZoneMapping>,
}

// ============ WAF ============

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct WafRule {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
    pub rule_type: Option<String>,
    pub category: Option<String>,
    pub is_active: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct CustomRule {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
    pub pattern: Option<String>,
    pub action: Option<String>,
    pub shield_zone_id: Option<String>,
    pub is_active: bool,
    pub date_created: Option<String>,
}

/// Full rule body, used by create and replace (PUT).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CustomRuleRequest {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pattern: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub action: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shield_zone_id: Option<String>,
    pub is_active: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct UpdateCustomRuleRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pattern: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub action: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct WafProfile {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
    pub is_default: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct WafProfilesResponse {
    pub items: Vec<WafProfile>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct WafEngineConfigRule {
    pub id: String,
    pub is_active: bool,
    pub action: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct WafEngineConfig {
    pub profile_id: Option<String>,
    pub is_enabled: bool,
    pub analysis_mode: Option<String>,
    pub rules: Vec<WafEngineConfigRule>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct WafEnums {
    pub rule_actions: Vec<String>,
    pub rule_types: Vec<String>,
    pub categories: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct TriggeredRule {
    pub rule_id: String,
    pub rule_name: String,
    pub trigger_count: i64,
    pub last_triggered: Option<String>,
    pub recommended_action: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct TriggeredRuleReviewRequest {
    pub rule_id: String,
    pub action: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct TriggeredRuleReview {
    pub review_id: String,
    pub rule_id: String,
    pub action: String,
    pub comment: Option<String>,
    pub date_submitted: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct AiRecommendation {
    pub rule_id: String,
    pub rule_name: String,
    pub recommendation: String,
    pub confidence: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct AiRecommendationResponse {
    pub recommendations: Vec<AiRecommendation>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct PlanSegment {
    pub plan_id: String,
    pub available_rules: u32,
    pub max_custom_rules: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct PlanSegmentationResponse {
    pub plans: Vec<PlanSegment>,
}

// ============ Access lists ============

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct AccessList {
    pub allowed: Vec<AccessListEntry>,
    pub blocked: Vec<AccessListEntry>,
    pub challenged: Vec<AccessListEntry>,
}

/// Entry in an access list. `kind` is the match type (IP, CIDR, ASN, country).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct AccessListEntry {
    #[serde(rename = "Type")]
    pub kind: String,
    pub value: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub action: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_added: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct AddAccessListEntryRequest {
    #[serde(rename = "Type")]
    pub kind: String,
    pub value: String,
    pub action: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct AccessListEntryUpdate {
    #[serde(rename = "Type")]
    pub kind: String,
    pub value: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub action: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct AccessListEntryKey {
    #[serde(rename = "Type")]
    pub kind: String,
    pub value: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct AccessListEnums {
    pub types: Vec<String>,
    pub actions: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct AccessListConfig {
    pub default_action: Option<String>,
    pub is_enabled: bool,
    pub log_unmatched: bool,
    pub date_updated: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct UpdateAccessListConfigRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_action: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_enabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub log_unmatched: Option<bool>,
}

// ============ Rate limits ============

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct RateLimit {
    pub id: String,
    pub name: String,
    pub path: Option<String>,
    pub requests_per_second: u32,
    pub requests_per_minute: u32,
    pub action: Option<String>,
    pub shield_zone_id: Option<String>,
    pub is_active: bool,
    pub date_created: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CreateRateLimitRequest {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub requests_per_second: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub requests_per_minute: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub action: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shield_zone_id: Option<String>,
    pub is_active: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct UpdateRateLimitRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub requests_per_second: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub requests_per_minute: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub action: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
}

// ============ Zone protection settings ============

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct BotDetectionSettings {
    pub is_enabled: bool,
    pub detection_level: Option<String>,
    pub action: Option<String>,
    pub allowed_bots: Vec<String>,
    pub blocked_bots: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct UpdateBotDetectionRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_enabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detection_level: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub action: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub allowed_bots: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub blocked_bots: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct UploadScanningConfig {
    pub is_enabled: bool,
    pub scan_level: Option<String>,
    pub quarantine_infected: bool,
    pub notify_on_detection: bool,
    pub allowed_file_types: Vec<String>,
    pub max_file_size: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct UpdateUploadScanningRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_enabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scan_level: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quarantine_infected: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notify_on_detection: Option<bool>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub allowed_file_types: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_file_size: Option<i64>,
}

// ============ Metrics ============

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DateRangeOptions {
    pub from: Option<String>,
    pub to: Option<String>,
}

impl DateRangeOptions {
    pub(crate) fn to_query(&self) -> QueryBuilder {
        QueryBuilder::new()
            .text("from", self.from.as_deref())
            .text("to", self.to.as_deref())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MetricsDetailedOptions {
    pub range: DateRangeOptions,
    pub zone_id: Option<String>,
}

impl MetricsDetailedOptions {
    pub(crate) fn to_query(&self) -> QueryBuilder {
        self.range.to_query().text("zoneId", self.zone_id.as_deref())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct DateRange {
    pub from: String,
    pub to: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct MetricsOverview {
    pub total_requests: i64,
    pub blocked_requests: i64,
    pub allowed_requests: i64,
    pub bot_detection_blocks: i64,
    pub rate_limit_blocks: i64,
    pub access_list_blocks: i64,
    pub date_range: DateRange,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct MetricsBreakdown {
    pub bot_detection: i64,
    pub rate_limit: i64,
    pub access_list: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct ZoneMetrics {
    pub zone_id: String,
    pub zone_name: String,
    pub total_requests: i64,
    pub blocked_requests: i64,
    pub allowed_requests: i64,
    pub breakdown: MetricsBreakdown,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct MetricsOverviewDetailed {
    pub zones: Vec<ZoneMetrics>,
    pub date_range: DateRange,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct TopUrlEntry {
    pub url: String,
    pub trigger_count: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct WafRuleMetrics {
    pub rule_id: String,
    pub rule_name: String,
    pub trigger_count: i64,
    pub blocked_count: i64,
    pub allowed_count: i64,
    pub top_urls: Vec<TopUrlEntry>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct TopIpEntry {
    #[serde(rename = "IP")]
    pub ip: String,
    pub block_count: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct RateLimitMetrics {
    pub rule_id: String,
    pub rule_name: String,
    pub path: Option<String>,
    pub blocked_requests: i64,
    #[serde(rename = "TopBlockedIPs")]
    pub top_blocked_ips: Vec<TopIpEntry>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct RateLimitMetricsSummary {
    pub rule_id: String,
    pub rule_name: String,
    pub blocked_requests: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct BotTypeEntry {
    pub bot_type: String,
    pub count: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct BotDetectionMetrics {
    pub zone_id: String,
    pub zone_name: String,
    pub total_bot_requests: i64,
    pub blocked_bots: i64,
    pub challenged_bots: i64,
    pub detection_level: Option<String>,
    pub top_detected_bot_types: Vec<BotTypeEntry>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct UploadScanningMetrics {
    pub zone_id: String,
    pub zone_name: String,
    pub total_scanned_files: i64,
    pub clean_files: i64,
    pub malicious_files: i64,
    pub quarantined_files: i64,
    pub scan_errors: i64,
}

// ============ Event logs ============

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EventLogListOptions {
    pub zone_id: Option<String>,
    pub from: Option<String>,
    pub to: Option<String>,
    pub limit: u32,
    pub offset: u32,
}

impl EventLogListOptions {
    pub(crate) fn to_query(&self) -> QueryBuilder {
        QueryBuilder::new()
            .text("zoneId", self.zone_id.as_deref())
            .text("from", self.from.as_deref())
            .text("to", self.to.as_deref())
            .uint("limit", self.limit)
            .uint("offset", self.offset)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct EventLog {
    pub id: String,
    pub zone_id: String,
    pub timestamp: String,
    pub event_type: String,
    pub rule_id: Option<String>,
    pub rule_name: Option<String>,
    #[serde(rename = "SourceIP")]
    pub source_ip: String,
    pub path: String,
    pub method: String,
    pub action: String,
    pub status_code: u16,
    pub user_agent: Option<String>,
}

// ============ DDoS and promotions ============

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct DdosProfile {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct DdosEnums {
    pub profiles: Vec<DdosProfile>,
    pub triggers: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct Promo {
    pub id: String,
    pub title: String,
    pub description: Option<String>,
    pub valid_until: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct PromoInfo {
    pub current_promos: Vec<Promo>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn event_log_query_order_and_omission() {
        let opts = EventLogListOptions {
            zone_id: Some("z1".to_string()),
            from: Some("2024-01-01".to_string()),
            to: None,
            limit: 50,
            offset: 0,
        };
        assert_eq!(
            opts.to_query().encode(),
            "zoneId=z1&from=2024-01-01&limit=50"
        );
        assert_eq!(EventLogListOptions::default().to_query().encode(), "");
    }

    #[test]
    fn detailed_metrics_query_appends_zone() {
        let opts = MetricsDetailedOptions {
            range: DateRangeOptions {
                from: Some("a".to_string()),
                to: Some("b".to_string()),
            },
            zone_id: Some("z".to_string()),
        };
        assert_eq!(opts.to_query().encode(), "from=a&to=b&zoneId=z");
    }

    #[test]
    fn acronym_fields_use_api_casing() {
        let log: EventLog = serde_json::from_str(
            r#"{"Id":"e1","ZoneId":"z","SourceIP":"203.0.113.9","StatusCode":403}"#,
        )
        .unwrap();
        assert_eq!(log.source_ip, "203.0.113.9");
        assert_eq!(log.status_code, 403);

        let metrics: RateLimitMetrics = serde_json::from_str(
            r#"{"RuleId":"r","TopBlockedIPs":[{"IP":"198.51.100.1","BlockCount":7}]}"#,
        )
        .unwrap();
        assert_eq!(metrics.top_blocked_ips[0].ip, "198.51.100.1");
    }

    #[test]
    fn access_list_entry_uses_type_key() {
        let req = AddAccessListEntryRequest {
            kind: "IP".to_string(),
            value: "192.0.2.1".to_string(),
            action: "Block".to_string(),
            comment: None,
        };
        assert_eq!(
            serde_json::to_string(&req).unwrap(),
            r#"{"Type":"IP","Value":"192.0.2.1","Action":"Block"}"#
        );
    }

    #[test]
    fn list_envelope_decodes() {
        let list: ZoneListResponse =
            serde_json::from_str(r#"{"Items":[{"Id":"s1","Name":"shop"}],"TotalCount":1}"#)
                .unwrap();
        assert_eq!(list.total_count, 1);
        assert_eq!(list.items[0].name, "shop");
        assert!(list.items[0].host_names.is_empty());
    }
}
