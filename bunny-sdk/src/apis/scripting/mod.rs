//! Edge Scripting: scripts, code, releases, secrets and variables
//!
//! All calls run against `https://api.bunny.net/compute/script` with the
//! account API key. List envelopes carry a server-computed `HasMoreItems`.

mod release;
mod script;
mod secret;
mod types;
mod variable;

pub use release::ReleaseService;
pub use script::{CodeService, ScriptService};
pub use secret::SecretService;
pub use types::*;
pub use variable::VariableService;

use crate::config::ClientConfig;
use crate::error::ApiArea;
use crate::http_client::ApiCore;

pub(crate) const SCRIPTING_API_BASE: &str = "https://api.bunny.net";

/// Edge Scripting API client.
#[derive(Debug, Clone)]
pub struct ScriptingClient {
    pub(crate) core: ApiCore,
}

impl ScriptingClient {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self::with_config(api_key, &ClientConfig::default())
    }

    pub fn with_config(api_key: impl Into<String>, config: &ClientConfig) -> Self {
        Self {
            core: config.build_core(ApiArea::Scripting, SCRIPTING_API_BASE, &api_key.into()),
        }
    }

    pub fn scripts(&self) -> ScriptService<'_> {
        ScriptService::new(self)
    }

    pub fn code(&self, script_id: i64) -> CodeService<'_> {
        CodeService::new(self, script_id)
    }

    pub fn releases(&self, script_id: i64) -> ReleaseService<'_> {
        ReleaseService::new(self, script_id)
    }

    pub fn secrets(&self, script_id: i64) -> SecretService<'_> {
        SecretService::new(self, script_id)
    }

    pub fn variables(&self, script_id: i64) -> VariableService<'_> {
        VariableService::new(self, script_id)
    }
}

pub(crate) fn script_path(script_id: i64) -> String {
    format!("/compute/script/{script_id}")
}
