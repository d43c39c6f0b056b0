use super::ShieldClient;
use super::types::{
    BotDetectionMetrics, DateRangeOptions, EventLogListOptions, EventLogListResponse,
    MetricsDetailedOptions, MetricsOverview, MetricsOverviewDetailed, RateLimitMetrics,
    RateLimitMetricsList, UploadScanningMetrics, WafRuleMetrics,
};
use crate::error::Result;
use crate::types::path_escape;

/// Aggregated Shield metrics. Every call takes an optional date range.
#[derive(Debug, Clone, Copy)]
pub struct MetricsService<'a> {
    client: &'a ShieldClient,
}

impl<'a> MetricsService<'a> {
    pub(crate) fn new(client: &'a ShieldClient) -> Self {
        Self { client }
    }

    async fn ranged<T>(&self, path: &str, range: Option<&DateRangeOptions>) -> Result<T>
    where
        T: serde::de::DeserializeOwned + Default,
    {
        let path = range.map_or_else(|| path.to_string(), |r| r.to_query().append_to(path));
        self.client.core.get(&path).await
    }

    pub async fn overview(&self, range: Option<&DateRangeOptions>) -> Result<MetricsOverview> {
        self.ranged("/shield/metrics/overview", range).await
    }

    /// Per-zone breakdown, optionally for a single zone.
    pub async fn overview_detailed(
        &self,
        opts: Option<&MetricsDetailedOptions>,
    ) -> Result<MetricsOverviewDetailed> {
        let base = "/shield/metrics/overview-detailed";
        let path = opts.map_or_else(|| base.to_string(), |o| o.to_query().append_to(base));
        self.client.core.get(&path).await
    }

    pub async fn waf_rule(
        &self,
        rule_id: &str,
        range: Option<&DateRangeOptions>,
    ) -> Result<WafRuleMetrics> {
        let path = format!("/shield/metrics/waf-rule/{}", path_escape(rule_id));
        self.ranged(&path, range).await
    }

    pub async fn rate_limit(
        &self,
        rate_limit_id: &str,
        range: Option<&DateRangeOptions>,
    ) -> Result<RateLimitMetrics> {
        let path = format!("/shield/metrics/rate-limit/{}", path_escape(rate_limit_id));
        self.ranged(&path, range).await
    }

    pub async fn rate_limits(
        &self,
        range: Option<&DateRangeOptions>,
    ) -> Result<RateLimitMetricsList> {
        self.ranged("/shield/metrics/rate-limits", range).await
    }

    pub async fn bot_detection(
        &self,
        zone_id: &str,
        range: Option<&DateRangeOptions>,
    ) -> Result<BotDetectionMetrics> {
        let path = format!("/shield/metrics/bot-detection/{}", path_escape(zone_id));
        self.ranged(&path, range).await
    }

    pub async fn upload_scanning(
        &self,
        zone_id: &str,
        range: Option<&DateRangeOptions>,
    ) -> Result<UploadScanningMetrics> {
        let path = format!("/shield/metrics/upload-scanning/{}", path_escape(zone_id));
        self.ranged(&path, range).await
    }
}

#[derive(Debug, Clone, Copy)]
pub struct EventLogService<'a> {
    client: &'a ShieldClient,
}

impl<'a> EventLogService<'a> {
    pub(crate) fn new(client: &'a ShieldClient) -> Self {
        Self { client }
    }

    /// Offset-paginated security events.
    pub async fn list(&self, opts: Option<&EventLogListOptions>) -> Result<EventLogListResponse> {
        let base = "/shield/event-logs";
        let path = opts.map_or_else(|| base.to_string(), |o| o.to_query().append_to(base));
        self.client.core.get(&path).await
    }
}
