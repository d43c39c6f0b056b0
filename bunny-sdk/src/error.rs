use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Identifies which Bunny.net API surface produced an error.
///
/// Included in every [`BunnyError`] so log lines and error messages can be
/// traced back to the client that issued the request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ApiArea {
    /// Account-level management API (`api.bunny.net`).
    Core,
    /// Storage zone management.
    Storage,
    /// Edge Storage file operations.
    EdgeStorage,
    /// Stream video, library and collection API.
    Stream,
    /// Edge Scripting API.
    Scripting,
    /// Magic Containers API.
    Containers,
    /// Shield / WAF API.
    Shield,
}

impl ApiArea {
    /// Short lowercase label used in log and error output.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Core => "bunny",
            Self::Storage => "storage",
            Self::EdgeStorage => "edge-storage",
            Self::Stream => "stream",
            Self::Scripting => "scripting",
            Self::Containers => "containers",
            Self::Shield => "shield",
        }
    }
}

impl fmt::Display for ApiArea {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Payload shared by every error produced from an HTTP error response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiErrorDetails {
    /// API area that returned the response.
    pub area: ApiArea,
    /// HTTP status code.
    pub status: u16,
    /// Human readable message, either from the error envelope or the raw body.
    pub message: String,
    /// Machine readable error key, if the envelope carried one.
    pub error_key: Option<String>,
    /// Name of the offending request field, if the envelope carried one.
    pub field: Option<String>,
}

impl fmt::Display for ApiErrorDetails {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Self {
            area,
            status,
            message,
            error_key,
            field,
        } = self;
        match (field, error_key) {
            (Some(field), _) => write!(f, "[{area}] {message} (status: {status}, field: {field})"),
            (None, Some(key)) => write!(f, "[{area}] {message} (status: {status}, key: {key})"),
            (None, None) => write!(f, "[{area}] {message} (status: {status})"),
        }
    }
}

/// Unified error type for every client in this crate.
///
/// The first four variants are produced from HTTP responses with status >= 400
/// and all carry the same [`ApiErrorDetails`]; the variant is only a
/// classification tag. The remaining variants cover failures where no usable
/// response exists.
#[derive(Debug, Clone, Error, Serialize, Deserialize)]
#[serde(tag = "code")]
pub enum BunnyError {
    /// HTTP 404.
    #[error("{0}")]
    NotFound(ApiErrorDetails),

    /// HTTP 401 or 403.
    #[error("{0}")]
    Auth(ApiErrorDetails),

    /// HTTP 429.
    #[error("{0}")]
    RateLimited(ApiErrorDetails),

    /// Any other HTTP status >= 400.
    #[error("{0}")]
    Api(ApiErrorDetails),

    /// The transport could not complete the exchange (connection refused,
    /// DNS failure, body read failure, ...).
    #[error("[{area}] Network error: {detail}")]
    Network {
        /// API area of the failed request.
        area: ApiArea,
        /// Error details.
        detail: String,
    },

    /// The transport gave up waiting for the remote side.
    #[error("[{area}] Request timeout: {detail}")]
    Timeout {
        /// API area of the failed request.
        area: ApiArea,
        /// Error details.
        detail: String,
    },

    /// The request could not be encoded. Nothing was sent.
    #[error("[{area}] Serialization error: {detail}")]
    Serialization {
        /// API area of the failed request.
        area: ApiArea,
        /// Details about the serialization failure.
        detail: String,
    },

    /// The response body did not match the expected JSON shape.
    #[error("[{area}] Decode error: {detail}")]
    Decode {
        /// API area of the failed request.
        area: ApiArea,
        /// Details about the decode failure.
        detail: String,
    },
}

/// JSON error envelope returned by the Bunny.net APIs on failed requests.
#[derive(Debug, Deserialize)]
struct ErrorEnvelope {
    #[serde(rename = "Message", default)]
    message: Option<String>,
    #[serde(rename = "ErrorKey", default)]
    error_key: Option<String>,
    #[serde(rename = "Field", default)]
    field: Option<String>,
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

impl BunnyError {
    /// Classify an HTTP error response.
    ///
    /// The body is parsed as the `{"Message", "ErrorKey", "Field"}` envelope.
    /// When that fails, or the message is empty, the raw body text becomes the
    /// message and no key or field is reported.
    pub fn from_status(area: ApiArea, status: u16, body: &[u8]) -> Self {
        let envelope = serde_json::from_slice::<ErrorEnvelope>(body)
            .ok()
            .and_then(|env| {
                let message = non_empty(env.message)?;
                Some((message, non_empty(env.error_key), non_empty(env.field)))
            });

        let (message, error_key, field) = envelope
            .unwrap_or_else(|| (String::from_utf8_lossy(body).into_owned(), None, None));

        Self::from_details(ApiErrorDetails {
            area,
            status,
            message,
            error_key,
            field,
        })
    }

    /// Select the error kind for already-extracted details, purely by status code.
    pub fn from_details(details: ApiErrorDetails) -> Self {
        match details.status {
            404 => Self::NotFound(details),
            401 | 403 => Self::Auth(details),
            429 => Self::RateLimited(details),
            _ => Self::Api(details),
        }
    }

    /// Error details for the four HTTP-derived kinds.
    pub fn details(&self) -> Option<&ApiErrorDetails> {
        match self {
            Self::NotFound(d) | Self::Auth(d) | Self::RateLimited(d) | Self::Api(d) => Some(d),
            _ => None,
        }
    }

    /// HTTP status code, if the error came from a response.
    pub fn status(&self) -> Option<u16> {
        self.details().map(|d| d.status)
    }

    /// API area that produced the error.
    pub fn area(&self) -> ApiArea {
        match self {
            Self::NotFound(d) | Self::Auth(d) | Self::RateLimited(d) | Self::Api(d) => d.area,
            Self::Network { area, .. }
            | Self::Timeout { area, .. }
            | Self::Serialization { area, .. }
            | Self::Decode { area, .. } => *area,
        }
    }

    pub fn is_not_found(&self) -> bool {
        self.status() == Some(404)
    }

    pub fn is_auth_error(&self) -> bool {
        matches!(self.status(), Some(401 | 403))
    }

    pub fn is_rate_limited(&self) -> bool {
        self.status() == Some(429)
    }

    /// `true` for status >= 500 and for 429.
    ///
    /// Informational only: nothing in this crate retries.
    pub fn is_retryable(&self) -> bool {
        matches!(self.status(), Some(s) if s >= 500 || s == 429)
    }

    /// `true` when no HTTP response was received at all.
    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Network { .. } | Self::Timeout { .. })
    }

    /// Whether the error reflects caller input or missing resources rather
    /// than a fault; used to pick the log level.
    pub fn is_expected(&self) -> bool {
        matches!(
            self,
            Self::NotFound(_) | Self::Auth(_) | Self::RateLimited(_)
        ) || matches!(self.status(), Some(400..=499))
    }
}

/// Convenience type alias for `Result<T, BunnyError>`.
pub type Result<T> = std::result::Result<T, BunnyError>;
