use reqwest::Method;

use super::ShieldClient;
use super::types::{CreateRateLimitRequest, RateLimit, RateLimitListResponse, UpdateRateLimitRequest};
use crate::error::Result;
use crate::types::path_escape;

#[derive(Debug, Clone, Copy)]
pub struct RateLimitService<'a> {
    client: &'a ShieldClient,
}

impl<'a> RateLimitService<'a> {
    pub(crate) fn new(client: &'a ShieldClient) -> Self {
        Self { client }
    }

    fn item(rate_limit_id: &str) -> String {
        format!("/shield/rate-limit/{}", path_escape(rate_limit_id))
    }

    pub async fn list(&self) -> Result<RateLimitListResponse> {
        self.client.core.get("/shield/rate-limits").await
    }

    pub async fn create(&self, req: &CreateRateLimitRequest) -> Result<RateLimit> {
        self.client
            .core
            .send_json(Method::POST, "/shield/rate-limit", req)
            .await
    }

    pub async fn get(&self, rate_limit_id: &str) -> Result<RateLimit> {
        self.client.core.get(&Self::item(rate_limit_id)).await
    }

    pub async fn update(
        &self,
        rate_limit_id: &str,
        req: &UpdateRateLimitRequest,
    ) -> Result<RateLimit> {
        self.client
            .core
            .send_json(Method::PATCH, &Self::item(rate_limit_id), req)
            .await
    }

    pub async fn delete(&self, rate_limit_id: &str) -> Result<()> {
        self.client.core.delete(&Self::item(rate_limit_id)).await
    }
}
