//! Edge storage file operations
//!
//! Files are addressed as `{region endpoint}/{zone}/{path}` and authenticated
//! with the zone password, not the account key.

use bytes::Bytes;
use reqwest::Method;
use reqwest::header::{ACCEPT, HeaderName};

use super::types::{Region, StorageObject, UploadOptions};
use crate::config::ClientConfig;
use crate::error::{ApiArea, Result};
use crate::http_client::ApiCore;
use crate::transport::{RequestBody, ResponseBody};

const OCTET_STREAM: &str = "application/octet-stream";

/// Client for one storage zone's files.
#[derive(Debug, Clone)]
pub struct EdgeStorageClient {
    pub(crate) core: ApiCore,
    zone_name: String,
}

impl EdgeStorageClient {
    /// `password` is the storage zone password (or read-only password).
    pub fn new(zone_name: impl Into<String>, password: impl Into<String>, region: Region) -> Self {
        Self::with_config(zone_name, password, region, &ClientConfig::default())
    }

    /// A `base_url` set on `config` replaces the region endpoint.
    pub fn with_config(
        zone_name: impl Into<String>,
        password: impl Into<String>,
        region: Region,
        config: &ClientConfig,
    ) -> Self {
        Self {
            core: config.build_core(ApiArea::EdgeStorage, &region.base_url(), &password.into()),
            zone_name: zone_name.into(),
        }
    }

    pub fn zone_name(&self) -> &str {
        &self.zone_name
    }

    fn object_path(&self, path: &str) -> String {
        format!("/{}/{}", self.zone_name, path.trim_start_matches('/'))
    }

    /// Upload a file. Missing directories are created by the server.
    pub async fn upload(
        &self,
        path: &str,
        body: impl Into<RequestBody>,
        opts: Option<&UploadOptions>,
    ) -> Result<()> {
        let content_type = opts
            .and_then(|o| o.content_type.as_deref())
            .filter(|ct| !ct.is_empty())
            .unwrap_or(OCTET_STREAM);

        let mut request = self
            .core
            .raw(Method::PUT, &self.object_path(path))
            .body(body.into(), content_type);
        if let Some(checksum) = opts
            .and_then(|o| o.checksum.as_deref())
            .filter(|c| !c.is_empty())
        {
            request = request.header(HeaderName::from_static("checksum"), checksum);
        }

        request.send().await.map(drop)
    }

    /// Download a file as a byte stream. Dropping the stream releases the
    /// connection.
    pub async fn download(&self, path: &str) -> Result<ResponseBody> {
        let response = self
            .core
            .raw(Method::GET, &self.object_path(path))
            .send()
            .await?;
        Ok(response.body)
    }

    /// Download a whole file into memory.
    pub async fn download_bytes(&self, path: &str) -> Result<Bytes> {
        let response = self
            .core
            .raw(Method::GET, &self.object_path(path))
            .send()
            .await?;
        response
            .body
            .bytes()
            .await
            .map_err(|e| self.core.transport_error(e))
    }

    /// List the entries of a directory. A trailing `/` is added if missing.
    pub async fn list(&self, path: &str) -> Result<Vec<StorageObject>> {
        let mut dir = self.object_path(path);
        if !dir.ends_with('/') {
            dir.push('/');
        }
        self.core
            .raw(Method::GET, &dir)
            .header(ACCEPT, "application/json")
            .json()
            .await
    }

    /// Delete a single file. One trailing `/` is stripped.
    pub async fn delete(&self, path: &str) -> Result<()> {
        let file = self.object_path(path.strip_suffix('/').unwrap_or(path));
        self.core.raw(Method::DELETE, &file).send().await.map(drop)
    }

    /// Delete a directory and everything below it.
    pub async fn delete_directory(&self, path: &str) -> Result<()> {
        let mut dir = self.object_path(path);
        if !dir.ends_with('/') {
            dir.push('/');
        }
        self.core.raw(Method::DELETE, &dir).send().await.map(drop)
    }
}
