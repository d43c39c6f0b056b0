//! Account-level entry point

use crate::config::ClientConfig;

#[cfg(feature = "containers")]
use crate::apis::containers::ContainersClient;
#[cfg(feature = "scripting")]
use crate::apis::scripting::ScriptingClient;
#[cfg(feature = "shield")]
use crate::apis::shield::ShieldClient;
#[cfg(feature = "storage")]
use crate::apis::storage::{EdgeStorageClient, Region, StorageClient};
#[cfg(feature = "stream")]
use crate::apis::stream::StreamClient;

/// Account API key plus shared settings; hands out area clients.
///
/// Every area client created here shares one transport (and with it one
/// connection pool) and the configured user agent.
///
/// ```rust,no_run
/// use bunny_sdk::BunnyClient;
///
/// # async fn run() -> bunny_sdk::Result<()> {
/// let bunny = BunnyClient::new("account-api-key");
/// let zones = bunny.storage().zones().list(None).await?;
/// println!("{} storage zones", zones.total_items);
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct BunnyClient {
    api_key: String,
    config: ClientConfig,
}

impl BunnyClient {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self::with_config(api_key, ClientConfig::default())
    }

    pub fn with_config(api_key: impl Into<String>, config: ClientConfig) -> Self {
        Self {
            api_key: api_key.into(),
            config: config.with_resolved_transport(),
        }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    #[cfg(feature = "storage")]
    pub fn storage(&self) -> StorageClient {
        StorageClient::with_config(self.api_key.as_str(), &self.config)
    }

    /// File client for one storage zone. Uses the zone password, not the
    /// account key, and always targets the region endpoint.
    #[cfg(feature = "storage")]
    pub fn edge_storage(
        &self,
        zone_name: impl Into<String>,
        password: impl Into<String>,
        region: Region,
    ) -> EdgeStorageClient {
        EdgeStorageClient::with_config(
            zone_name,
            password,
            region,
            &self.config.clone().without_base_url(),
        )
    }

    #[cfg(feature = "stream")]
    pub fn stream(&self) -> StreamClient {
        StreamClient::with_config(self.api_key.as_str(), &self.config)
    }

    #[cfg(feature = "scripting")]
    pub fn scripting(&self) -> ScriptingClient {
        ScriptingClient::with_config(self.api_key.as_str(), &self.config)
    }

    #[cfg(feature = "containers")]
    pub fn containers(&self) -> ContainersClient {
        ContainersClient::with_config(self.api_key.as_str(), &self.config)
    }

    #[cfg(feature = "shield")]
    pub fn shield(&self) -> ShieldClient {
        ShieldClient::with_config(self.api_key.as_str(), &self.config)
    }
}

impl std::fmt::Debug for BunnyClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BunnyClient")
            .field("api_key", &"***")
            .field("config", &self.config)
            .finish()
    }
}

#[cfg(all(test, feature = "all-apis"))]
mod tests {
    use super::*;

    #[test]
    fn area_clients_use_their_default_hosts() {
        let bunny = BunnyClient::new("key");
        assert_eq!(bunny.storage().core.base_url(), "https://api.bunny.net");
        assert_eq!(bunny.containers().core.base_url(), "https://api.bunny.net/mc");
        assert_eq!(
            bunny.stream().video.base_url(),
            "https://video.bunnycdn.com"
        );
    }

    #[test]
    fn base_url_override_skips_edge_storage() {
        let bunny = BunnyClient::with_config("key", ClientConfig::new().base_url("http://mock"));
        assert_eq!(bunny.shield().core.base_url(), "http://mock");
        let files = bunny.edge_storage("zone", "pw", Region::Ny);
        assert_eq!(files.core.base_url(), "https://ny.storage.bunnycdn.com");
    }

    #[test]
    fn debug_hides_key() {
        let rendered = format!("{:?}", BunnyClient::new("secret-key"));
        assert!(!rendered.contains("secret-key"));
    }
}
