//! Transport abstraction
//!
//! Every client sends requests through an [`HttpTransport`]: one request in,
//! one response out. Connection reuse, TLS and timeouts live behind this
//! trait; nothing above it retries or pools.
//!
//! [`ReqwestTransport`] is the default implementation. Tests and callers with
//! special needs (proxies, custom TLS, recording) supply their own.

use std::fmt;
use std::pin::Pin;
use std::task::{Context, Poll};
use std::time::Duration;

use async_trait::async_trait;
use bytes::{Bytes, BytesMut};
use futures::{Stream, TryStreamExt, stream};
use reqwest::Method;
use reqwest::header::HeaderMap;
use thiserror::Error;

/// Connect timeout used by [`ReqwestTransport::new`].
const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

/// Stream of response body chunks.
pub type ByteStream = Pin<Box<dyn Stream<Item = Result<Bytes, TransportError>> + Send>>;

/// Stream of request body chunks supplied by the caller (file or video uploads).
pub type UploadStream =
    Pin<Box<dyn Stream<Item = Result<Bytes, std::io::Error>> + Send + Sync>>;

/// Failure below the HTTP layer: no status code was received.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransportError {
    #[error("{0}")]
    Timeout(String),
    #[error("{0}")]
    Network(String),
}

/// Outgoing request body.
pub enum RequestBody {
    /// Fully buffered payload (JSON documents, small uploads).
    Bytes(Bytes),
    /// Streamed payload, forwarded to the transport chunk by chunk.
    Stream(UploadStream),
}

impl RequestBody {
    pub fn from_stream<S>(stream: S) -> Self
    where
        S: Stream<Item = Result<Bytes, std::io::Error>> + Send + Sync + 'static,
    {
        Self::Stream(Box::pin(stream))
    }

    /// Buffered bytes, if this is not a streamed body.
    pub fn as_bytes(&self) -> Option<&[u8]> {
        match self {
            Self::Bytes(b) => Some(b),
            Self::Stream(_) => None,
        }
    }
}

impl fmt::Debug for RequestBody {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bytes(b) => f.debug_tuple("Bytes").field(&b.len()).finish(),
            Self::Stream(_) => f.write_str("Stream(..)"),
        }
    }
}

impl From<Bytes> for RequestBody {
    fn from(b: Bytes) -> Self {
        Self::Bytes(b)
    }
}

impl From<Vec<u8>> for RequestBody {
    fn from(v: Vec<u8>) -> Self {
        Self::Bytes(Bytes::from(v))
    }
}

impl From<String> for RequestBody {
    fn from(s: String) -> Self {
        Self::Bytes(Bytes::from(s))
    }
}

impl From<&'static [u8]> for RequestBody {
    fn from(b: &'static [u8]) -> Self {
        Self::Bytes(Bytes::from_static(b))
    }
}

impl From<&'static str> for RequestBody {
    fn from(s: &'static str) -> Self {
        Self::Bytes(Bytes::from_static(s.as_bytes()))
    }
}

/// A fully-addressed request handed to the transport.
#[derive(Debug)]
pub struct HttpRequest {
    pub method: Method,
    pub url: String,
    pub headers: HeaderMap,
    pub body: Option<RequestBody>,
}

impl HttpRequest {
    /// Header value as a string, if present and valid ASCII.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }
}

/// Response body as a stream of chunks.
///
/// Dropping the body releases the underlying connection resources without
/// reading the rest.
pub struct ResponseBody {
    stream: ByteStream,
}

impl ResponseBody {
    pub fn from_stream<S>(stream: S) -> Self
    where
        S: Stream<Item = Result<Bytes, TransportError>> + Send + 'static,
    {
        Self {
            stream: Box::pin(stream),
        }
    }

    pub fn empty() -> Self {
        Self::from_stream(stream::empty())
    }

    /// Collect the whole body into memory.
    pub async fn bytes(self) -> Result<Bytes, TransportError> {
        let buf = self
            .stream
            .try_fold(BytesMut::new(), |mut acc, chunk| async move {
                acc.extend_from_slice(&chunk);
                Ok(acc)
            })
            .await?;
        Ok(buf.freeze())
    }

    /// Collect the body and decode it as (lossy) UTF-8.
    pub async fn text(self) -> Result<String, TransportError> {
        let bytes = self.bytes().await?;
        Ok(String::from_utf8_lossy(&bytes).into_owned())
    }

    pub fn into_stream(self) -> ByteStream {
        self.stream
    }
}

impl Stream for ResponseBody {
    type Item = Result<Bytes, TransportError>;

    fn poll_next(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        self.stream.as_mut().poll_next(cx)
    }
}

impl fmt::Debug for ResponseBody {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ResponseBody(..)")
    }
}

impl From<Bytes> for ResponseBody {
    fn from(b: Bytes) -> Self {
        Self::from_stream(stream::once(async move { Ok(b) }))
    }
}

impl From<Vec<u8>> for ResponseBody {
    fn from(v: Vec<u8>) -> Self {
        Self::from(Bytes::from(v))
    }
}

impl From<String> for ResponseBody {
    fn from(s: String) -> Self {
        Self::from(Bytes::from(s))
    }
}

impl From<&'static str> for ResponseBody {
    fn from(s: &'static str) -> Self {
        Self::from(Bytes::from_static(s.as_bytes()))
    }
}

/// Response returned by a transport, before any status handling.
#[derive(Debug)]
pub struct HttpResponse {
    pub status: u16,
    pub headers: HeaderMap,
    pub body: ResponseBody,
}

impl HttpResponse {
    pub fn new(status: u16, body: impl Into<ResponseBody>) -> Self {
        Self {
            status,
            headers: HeaderMap::new(),
            body: body.into(),
        }
    }

    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }
}

/// Sends a single HTTP request.
///
/// Implementations must be shareable across tasks; clients hold them behind
/// an `Arc`.
#[async_trait]
pub trait HttpTransport: Send + Sync {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError>;
}

/// Default transport backed by [`reqwest::Client`].
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: reqwest::Client,
}

impl ReqwestTransport {
    /// Build a transport with a 10 second connect timeout and no overall
    /// request timeout, so long downloads are not cut off.
    pub fn new() -> Self {
        let client = reqwest::Client::builder()
            .connect_timeout(CONNECT_TIMEOUT)
            .build()
            .unwrap_or_else(|e| {
                log::warn!("Failed to build configured HTTP client, using defaults: {e}");
                reqwest::Client::new()
            });
        Self { client }
    }

    /// Wrap a caller-configured client (proxies, timeouts, TLS roots).
    pub fn with_client(client: reqwest::Client) -> Self {
        Self { client }
    }
}

impl Default for ReqwestTransport {
    fn default() -> Self {
        Self::new()
    }
}

fn map_reqwest_error(e: &reqwest::Error) -> TransportError {
    if e.is_timeout() {
        TransportError::Timeout(e.to_string())
    } else {
        TransportError::Network(e.to_string())
    }
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        let HttpRequest {
            method,
            url,
            headers,
            body,
        } = request;

        let mut builder = self.client.request(method, &url).headers(headers);
        if let Some(body) = body {
            builder = builder.body(match body {
                RequestBody::Bytes(b) => reqwest::Body::from(b),
                RequestBody::Stream(s) => reqwest::Body::wrap_stream(s),
            });
        }

        let response = builder.send().await.map_err(|e| map_reqwest_error(&e))?;
        let status = response.status().as_u16();
        let headers = response.headers().clone();
        let body = response.bytes_stream().map_err(|e| map_reqwest_error(&e));

        Ok(HttpResponse {
            status,
            headers,
            body: ResponseBody::from_stream(body),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::StreamExt;

    #[tokio::test]
    async fn response_body_collects_chunks() {
        let chunks = stream::iter(vec![
            Ok(Bytes::from_static(b"hello ")),
            Ok(Bytes::from_static(b"world")),
        ]);
        let body = ResponseBody::from_stream(chunks);
        assert_eq!(body.text().await.unwrap(), "hello world");
    }

    #[tokio::test]
    async fn response_body_propagates_stream_error() {
        let chunks = stream::iter(vec![
            Ok(Bytes::from_static(b"partial")),
            Err(TransportError::Network("reset".to_string())),
        ]);
        let err = ResponseBody::from_stream(chunks).bytes().await.unwrap_err();
        assert_eq!(err, TransportError::Network("reset".to_string()));
    }

    #[tokio::test]
    async fn response_body_is_a_stream() {
        let mut body = ResponseBody::from("abc");
        let first = body.next().await.unwrap().unwrap();
        assert_eq!(&first[..], b"abc");
        assert!(body.next().await.is_none());
    }

    #[test]
    fn request_body_debug_hides_payload() {
        let body = RequestBody::from("secret-ish");
        assert_eq!(format!("{body:?}"), "Bytes(10)");
        assert_eq!(body.as_bytes(), Some(&b"secret-ish"[..]));
    }
}
