use super::ShieldClient;
use super::types::{DdosEnums, PromoInfo};
use crate::error::Result;

#[derive(Debug, Clone, Copy)]
pub struct DdosService<'a> {
    client: &'a ShieldClient,
}

impl<'a> DdosService<'a> {
    pub(crate) fn new(client: &'a ShieldClient) -> Self {
        Self { client }
    }

    /// Available `DDoS` profiles and triggers.
    pub async fn enums(&self) -> Result<DdosEnums> {
        self.client.core.get("/shield/ddos/enums").await
    }
}

#[derive(Debug, Clone, Copy)]
pub struct PromoService<'a> {
    client: &'a ShieldClient,
}

impl<'a> PromoService<'a> {
    pub(crate) fn new(client: &'a ShieldClient) -> Self {
        Self { client }
    }

    pub async fn get(&self) -> Result<PromoInfo> {
        self.client.core.get("/shield/promo").await
    }
}
