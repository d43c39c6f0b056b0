use std::fmt;
use std::sync::Arc;

use crate::error::ApiArea;
use crate::http_client::ApiCore;
use crate::transport::{HttpTransport, ReqwestTransport};

/// User agent sent when none is configured.
pub const DEFAULT_USER_AGENT: &str = concat!("bunny-sdk-rust/", env!("CARGO_PKG_VERSION"));

/// Construction-time settings shared by every area client.
///
/// Builder methods are applied in call order; a later call overrides an
/// earlier one. Unset fields fall back to the area's defaults.
///
/// ```rust
/// use bunny_sdk::ClientConfig;
///
/// let config = ClientConfig::new()
///     .user_agent("my-app/1.0")
///     .base_url("http://localhost:8080");
/// ```
#[derive(Clone, Default)]
pub struct ClientConfig {
    transport: Option<Arc<dyn HttpTransport>>,
    user_agent: Option<String>,
    base_url: Option<String>,
}

impl ClientConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Send requests through a custom transport.
    #[must_use]
    pub fn transport<T>(mut self, transport: T) -> Self
    where
        T: HttpTransport + 'static,
    {
        self.transport = Some(Arc::new(transport));
        self
    }

    /// Share an existing transport between several clients.
    #[must_use]
    pub fn shared_transport(mut self, transport: Arc<dyn HttpTransport>) -> Self {
        self.transport = Some(transport);
        self
    }

    #[must_use]
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Override the API base URL, e.g. to point at a mock server.
    #[must_use]
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    pub(crate) fn configured_base_url(&self) -> Option<&str> {
        self.base_url.as_deref()
    }

    pub(crate) fn resolved_user_agent(&self) -> &str {
        self.user_agent.as_deref().unwrap_or(DEFAULT_USER_AGENT)
    }

    /// Configured transport, or a fresh [`ReqwestTransport`].
    pub(crate) fn resolved_transport(&self) -> Arc<dyn HttpTransport> {
        self.transport
            .clone()
            .unwrap_or_else(|| Arc::new(ReqwestTransport::new()))
    }

    /// Pin the transport so clients derived from this config share one
    /// connection pool.
    #[must_use]
    pub(crate) fn with_resolved_transport(mut self) -> Self {
        if self.transport.is_none() {
            self.transport = Some(Arc::new(ReqwestTransport::new()));
        }
        self
    }

    /// Drop the base URL override, e.g. for hosts that are not `api.bunny.net`.
    #[must_use]
    pub(crate) fn without_base_url(mut self) -> Self {
        self.base_url = None;
        self
    }

    /// Build the request pipeline for one API area.
    pub(crate) fn build_core(&self, area: ApiArea, default_base_url: &str, api_key: &str) -> ApiCore {
        ApiCore::new(
            area,
            self.configured_base_url().unwrap_or(default_base_url),
            api_key,
            self.resolved_user_agent(),
            self.resolved_transport(),
        )
    }
}

impl fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientConfig")
            .field("user_agent", &self.user_agent)
            .field("base_url", &self.base_url)
            .field("custom_transport", &self.transport.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = ClientConfig::new();
        assert!(config.resolved_user_agent().starts_with("bunny-sdk-rust/"));
        assert_eq!(config.configured_base_url(), None);
    }

    #[test]
    fn last_write_wins() {
        let config = ClientConfig::new()
            .user_agent("first")
            .base_url("http://a")
            .user_agent("second")
            .base_url("http://b");
        assert_eq!(config.resolved_user_agent(), "second");
        assert_eq!(config.configured_base_url(), Some("http://b"));
    }

    #[test]
    fn build_core_uses_default_base_url() {
        let core = ClientConfig::new().build_core(ApiArea::Shield, "https://api.bunny.net", "k");
        assert_eq!(core.base_url(), "https://api.bunny.net");
        assert_eq!(core.area(), ApiArea::Shield);
    }

    #[test]
    fn resolved_transport_is_shared_after_pinning() {
        let config = ClientConfig::new().with_resolved_transport();
        let a = config.resolved_transport();
        let b = config.resolved_transport();
        assert!(Arc::ptr_eq(&a, &b));
    }
}
