//! # bunny-sdk
//!
//! Typed async client for the [Bunny.net](https://bunny.net) REST APIs.
//!
//! ## Supported APIs
//!
//! | Area | Feature Flag | Client | Credential |
//! |------|-------------|--------|------------|
//! | Storage zones | `storage` | [`storage::StorageClient`] | Account API key |
//! | Edge storage files | `storage` | [`storage::EdgeStorageClient`] | Zone password |
//! | Stream | `stream` | [`stream::StreamClient`] | Account or library API key |
//! | Edge Scripting | `scripting` | [`scripting::ScriptingClient`] | Account API key |
//! | Magic Containers | `containers` | [`containers::ContainersClient`] | Account API key |
//! | Shield | `shield` | [`shield::ShieldClient`] | Account API key |
//!
//! Every request carries the credential in the `AccessKey` header.
//!
//! ## Feature Flags
//!
//! ### API Selection
//!
//! - **`all-apis`** *(default)*: every area listed above.
//! - **`storage`**, **`stream`**, **`scripting`**, **`containers`**, **`shield`**:
//!   enable a single area.
//!
//! ### TLS Backend
//!
//! - **`native-tls`** *(default)*: the platform's native TLS implementation.
//! - **`rustls`**: rustls. Recommended for cross-compilation and Android targets.
//!
//! ## Quick Start
//!
//! ```toml
//! [dependencies]
//! bunny-sdk = "0.1"
//! ```
//!
//! Or only the areas you need:
//!
//! ```toml
//! [dependencies]
//! bunny-sdk = { version = "0.1", default-features = false, features = ["storage", "rustls"] }
//! ```
//!
//! ## Usage
//!
//! ```rust,no_run
//! use bunny_sdk::BunnyClient;
//! use bunny_sdk::storage::{Region, UploadOptions};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let bunny = BunnyClient::new("account-api-key");
//!
//!     // 1. List storage zones (zero-based pages)
//!     let zones = bunny.storage().zones().list(None).await?;
//!     for zone in &zones.items {
//!         println!("{} in {}", zone.name, zone.region);
//!     }
//!
//!     // 2. Upload a file with a checksum
//!     let files = bunny.edge_storage("assets", "zone-password", Region::De);
//!     let data = b"hello".to_vec();
//!     let opts = UploadOptions::with_checksum_of(&data).content_type("text/plain");
//!     files.upload("docs/hello.txt", data, Some(&opts)).await?;
//!
//!     // 3. List the directory
//!     for object in files.list("docs").await? {
//!         println!("{} ({} bytes)", object.object_name, object.length);
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Custom Transport
//!
//! Requests go through [`HttpTransport`]. The default is [`ReqwestTransport`];
//! tests and proxies can plug in their own via [`ClientConfig::transport`].
//!
//! ## Error Handling
//!
//! Every operation returns [`Result<T, BunnyError>`](BunnyError):
//!
//! - [`BunnyError::NotFound`]: HTTP 404
//! - [`BunnyError::Auth`]: HTTP 401 or 403
//! - [`BunnyError::RateLimited`]: HTTP 429
//! - [`BunnyError::Api`]: any other status of 400 or above
//! - [`BunnyError::Network`] / [`BunnyError::Timeout`]: the request never completed
//!
//! The client never retries. [`BunnyError::is_retryable`] tells the caller
//! whether retrying is sensible.

mod client;
mod config;
mod error;
mod http_client;
mod transport;
mod types;
mod utils;

pub mod apis;

pub use client::BunnyClient;
pub use config::{ClientConfig, DEFAULT_USER_AGENT};
pub use error::{ApiArea, ApiErrorDetails, BunnyError, Result};
pub use transport::{
    ByteStream, HttpRequest, HttpResponse, HttpTransport, ReqwestTransport, RequestBody,
    ResponseBody, TransportError, UploadStream,
};
pub use types::{
    ListOptions, PaginatedResponse, QueryBuilder, has_more_storage, has_more_stream,
};
pub use utils::datetime::{self, BunnyTime, ParseBunnyTimeError};
pub use utils::log_sanitizer;

#[cfg(feature = "containers")]
pub use apis::containers;
#[cfg(feature = "scripting")]
pub use apis::scripting;
#[cfg(feature = "shield")]
pub use apis::shield;
#[cfg(feature = "storage")]
pub use apis::storage;
#[cfg(feature = "stream")]
pub use apis::stream;
