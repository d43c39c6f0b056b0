use reqwest::Method;

use super::ShieldClient;
use super::types::{
    AiRecommendationResponse, CustomRule, CustomRuleListResponse, CustomRuleRequest,
    PlanSegmentationResponse, TriggeredRuleReview, TriggeredRuleReviewRequest,
    TriggeredRulesResponse, UpdateCustomRuleRequest, WafEngineConfig, WafEnums,
    WafProfilesResponse, WafRuleListResponse,
};
use crate::error::Result;
use crate::types::{QueryBuilder, path_escape};

const REVIEW_TRIGGERED: &str = "/shield/waf/rules/review-triggered";

/// Managed and custom WAF rules.
#[derive(Debug, Clone, Copy)]
pub struct WafService<'a> {
    client: &'a ShieldClient,
}

impl<'a> WafService<'a> {
    pub(crate) fn new(client: &'a ShieldClient) -> Self {
        Self { client }
    }

    fn custom_rule(rule_id: &str) -> String {
        format!("/shield/waf/custom-rule/{}", path_escape(rule_id))
    }

    pub async fn rules(&self) -> Result<WafRuleListResponse> {
        self.client.core.get("/shield/waf/rules").await
    }

    // ============ Custom rules ============

    pub async fn custom_rules(&self) -> Result<CustomRuleListResponse> {
        self.client.core.get("/shield/waf/custom-rules").await
    }

    pub async fn create_custom_rule(&self, req: &CustomRuleRequest) -> Result<CustomRule> {
        self.client
            .core
            .send_json(Method::POST, "/shield/waf/custom-rule", req)
            .await
    }

    pub async fn get_custom_rule(&self, rule_id: &str) -> Result<CustomRule> {
        self.client.core.get(&Self::custom_rule(rule_id)).await
    }

    pub async fn update_custom_rule(
        &self,
        rule_id: &str,
        req: &UpdateCustomRuleRequest,
    ) -> Result<CustomRule> {
        self.client
            .core
            .send_json(Method::PATCH, &Self::custom_rule(rule_id), req)
            .await
    }

    pub async fn replace_custom_rule(
        &self,
        rule_id: &str,
        req: &CustomRuleRequest,
    ) -> Result<CustomRule> {
        self.client
            .core
            .send_json(Method::PUT, &Self::custom_rule(rule_id), req)
            .await
    }

    pub async fn delete_custom_rule(&self, rule_id: &str) -> Result<()> {
        self.client.core.delete(&Self::custom_rule(rule_id)).await
    }

    // ============ Configuration ============

    pub async fn profiles(&self) -> Result<WafProfilesResponse> {
        self.client.core.get("/shield/waf/profiles").await
    }

    pub async fn engine_config(&self) -> Result<WafEngineConfig> {
        self.client.core.get("/shield/waf/engine-config").await
    }

    pub async fn enums(&self) -> Result<WafEnums> {
        self.client.core.get("/shield/waf/enums").await
    }

    pub async fn plan_segmentation(&self) -> Result<PlanSegmentationResponse> {
        self.client
            .core
            .get("/shield/waf/rules/plan-segmentation")
            .await
    }

    // ============ Triggered rule review ============

    pub async fn triggered_rules(&self) -> Result<TriggeredRulesResponse> {
        self.client.core.get(REVIEW_TRIGGERED).await
    }

    pub async fn submit_review(
        &self,
        req: &TriggeredRuleReviewRequest,
    ) -> Result<TriggeredRuleReview> {
        self.client
            .core
            .send_json(Method::POST, REVIEW_TRIGGERED, req)
            .await
    }

    /// Suggested actions for triggered rules, or for one rule when `rule_id`
    /// is set.
    pub async fn ai_recommendation(&self, rule_id: Option<&str>) -> Result<AiRecommendationResponse> {
        let path = QueryBuilder::new()
            .text("ruleId", rule_id)
            .append_to(&format!("{REVIEW_TRIGGERED}/ai-recommendation"));
        self.client.core.get(&path).await
    }
}
