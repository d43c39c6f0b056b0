//! Shared request/response pipeline
//!
//! Every area client owns one [`ApiCore`] and every service call goes
//! through it:
//! serialize body → authenticate → send → classify status → decode.
//!
//! # Design principles
//! - **One pipeline, parameterized** - area, base URL, auth header, key and
//!   user agent are data, not separate implementations
//! - **The body is owned by the call** - it is read or dropped on every path
//! - **No policy** - nothing here retries, caches or rate-limits
//!
//! JSON endpoints go through [`ApiCore::execute`] and its wrappers. Octet-stream
//! upload/download goes through [`ApiCore::raw`], which skips JSON handling and
//! hands back the classified response so the body can be streamed.

use std::fmt;
use std::sync::Arc;

use reqwest::Method;
use reqwest::header::{ACCEPT, CONTENT_TYPE, HeaderMap, HeaderName, HeaderValue, USER_AGENT};
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::error::{ApiArea, ApiErrorDetails, BunnyError, Result};
use crate::transport::{HttpRequest, HttpResponse, HttpTransport, RequestBody, TransportError};
use crate::utils::log_sanitizer::truncate_bytes_for_log;

/// Header carrying the API key on every Bunny.net API.
pub(crate) const AUTH_HEADER: &str = "AccessKey";

const APPLICATION_JSON: &str = "application/json";

/// Per-client request pipeline.
#[derive(Clone)]
pub(crate) struct ApiCore {
    area: ApiArea,
    base_url: String,
    auth_header: &'static str,
    api_key: String,
    user_agent: String,
    transport: Arc<dyn HttpTransport>,
}

impl fmt::Debug for ApiCore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ApiCore")
            .field("area", &self.area)
            .field("base_url", &self.base_url)
            .field("user_agent", &self.user_agent)
            .finish_non_exhaustive()
    }
}

impl ApiCore {
    pub(crate) fn new(
        area: ApiArea,
        base_url: &str,
        api_key: &str,
        user_agent: &str,
        transport: Arc<dyn HttpTransport>,
    ) -> Self {
        Self {
            area,
            base_url: base_url.to_string(),
            auth_header: AUTH_HEADER,
            api_key: api_key.to_string(),
            user_agent: user_agent.to_string(),
            transport,
        }
    }

    #[cfg(test)]
    pub(crate) fn area(&self) -> ApiArea {
        self.area
    }

    #[cfg(test)]
    pub(crate) fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Same pipeline, pointed at another base URL (stream video host).
    pub(crate) fn rebased(&self, base_url: &str) -> Self {
        Self {
            base_url: base_url.to_string(),
            ..self.clone()
        }
    }

    /// Base URL + path, no slash normalization.
    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn serialization_error(&self, detail: impl Into<String>) -> BunnyError {
        BunnyError::Serialization {
            area: self.area,
            detail: detail.into(),
        }
    }

    pub(crate) fn transport_error(&self, error: TransportError) -> BunnyError {
        match error {
            TransportError::Timeout(detail) => BunnyError::Timeout {
                area: self.area,
                detail,
            },
            TransportError::Network(detail) => BunnyError::Network {
                area: self.area,
                detail,
            },
        }
    }

    fn header_value(&self, name: &str, value: &str) -> Result<HeaderValue> {
        HeaderValue::from_str(value)
            .map_err(|_| self.serialization_error(format!("invalid value for header {name}")))
    }

    /// Auth and user agent headers; the only headers on every request.
    fn base_headers(&self) -> Result<HeaderMap> {
        let mut headers = HeaderMap::new();
        let mut key = self.header_value(self.auth_header, &self.api_key)?;
        key.set_sensitive(true);
        headers.insert(HeaderName::from_static("accesskey"), key);
        headers.insert(USER_AGENT, self.header_value("User-Agent", &self.user_agent)?);
        Ok(headers)
    }

    // ============ JSON pipeline ============

    /// Run a JSON request.
    ///
    /// Returns `Ok(None)` for 204 No Content (body dropped unread), otherwise
    /// the decoded body.
    pub(crate) async fn execute<B, T>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
    ) -> Result<Option<T>>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let response = self.dispatch_json(method, path, body).await?;
        if response.status == 204 {
            return Ok(None);
        }
        self.decode(response).await.map(Some)
    }

    /// Run a JSON request whose response carries nothing of interest.
    ///
    /// The body is dropped without being read or decoded.
    pub(crate) async fn execute_unit<B>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
    ) -> Result<()>
    where
        B: Serialize + ?Sized,
    {
        self.dispatch_json(method, path, body).await.map(drop)
    }

    async fn dispatch_json<B>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
    ) -> Result<HttpResponse>
    where
        B: Serialize + ?Sized,
    {
        let payload = body
            .map(serde_json::to_vec)
            .transpose()
            .map_err(|e| self.serialization_error(e.to_string()))?;

        let mut headers = self.base_headers()?;
        headers.insert(ACCEPT, HeaderValue::from_static(APPLICATION_JSON));
        if payload.is_some() {
            headers.insert(CONTENT_TYPE, HeaderValue::from_static(APPLICATION_JSON));
        }

        self.send(HttpRequest {
            method,
            url: self.url(path),
            headers,
            body: payload.map(RequestBody::from),
        })
        .await
    }

    /// Send through the transport and classify the status.
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse> {
        let area = self.area;
        log::debug!("[{area}] {} {}", request.method, request.url);

        let response = self
            .transport
            .send(request)
            .await
            .map_err(|e| self.transport_error(e))?;

        log::debug!("[{area}] Response Status: {}", response.status);

        if response.status >= 400 {
            return Err(self.classify(response).await);
        }
        Ok(response)
    }

    async fn classify(&self, response: HttpResponse) -> BunnyError {
        let status = response.status;
        let error = match response.body.bytes().await {
            Ok(body) => BunnyError::from_status(self.area, status, &body),
            Err(_) => BunnyError::from_details(ApiErrorDetails {
                area: self.area,
                status,
                message: "failed to read error response".to_string(),
                error_key: None,
                field: None,
            }),
        };

        if error.is_expected() {
            log::warn!("{error}");
        } else {
            log::error!("{error}");
        }
        error
    }

    async fn decode<T>(&self, response: HttpResponse) -> Result<T>
    where
        T: DeserializeOwned,
    {
        let area = self.area;
        let body = response
            .body
            .bytes()
            .await
            .map_err(|e| self.transport_error(e))?;

        log::debug!("[{area}] Response Body: {}", truncate_bytes_for_log(&body));

        serde_json::from_slice(&body).map_err(|e| {
            log::error!("[{area}] JSON parse failed: {e}");
            log::error!("[{area}] Raw response: {}", truncate_bytes_for_log(&body));
            BunnyError::Decode {
                area,
                detail: e.to_string(),
            }
        })
    }

    // ============ Convenience wrappers ============

    /// GET and decode; 204 yields `T::default()`.
    pub(crate) async fn get<T>(&self, path: &str) -> Result<T>
    where
        T: DeserializeOwned + Default,
    {
        self.execute::<(), T>(Method::GET, path, None)
            .await
            .map(Option::unwrap_or_default)
    }

    /// Send a JSON body and decode the response; 204 yields `T::default()`.
    pub(crate) async fn send_json<B, T>(&self, method: Method, path: &str, body: &B) -> Result<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned + Default,
    {
        self.execute(method, path, Some(body))
            .await
            .map(Option::unwrap_or_default)
    }

    /// Bodyless request with a decoded response; 204 yields `T::default()`.
    pub(crate) async fn send_empty<T>(&self, method: Method, path: &str) -> Result<T>
    where
        T: DeserializeOwned + Default,
    {
        self.execute::<(), T>(method, path, None)
            .await
            .map(Option::unwrap_or_default)
    }

    pub(crate) async fn delete(&self, path: &str) -> Result<()> {
        self.execute_unit::<()>(Method::DELETE, path, None).await
    }

    // ============ Raw pipeline ============

    /// Start a non-JSON request (octet-stream upload or download).
    pub(crate) fn raw(&self, method: Method, path: &str) -> RawRequest<'_> {
        RawRequest {
            core: self,
            method,
            url: self.url(path),
            extra_headers: Vec::new(),
            body: None,
        }
    }
}

/// Builder for requests that bypass JSON encoding.
///
/// Only the auth and user agent headers are added automatically.
pub(crate) struct RawRequest<'a> {
    core: &'a ApiCore,
    method: Method,
    url: String,
    extra_headers: Vec<(HeaderName, String)>,
    body: Option<RequestBody>,
}

impl RawRequest<'_> {
    #[must_use]
    pub(crate) fn header(mut self, name: HeaderName, value: impl Into<String>) -> Self {
        self.extra_headers.push((name, value.into()));
        self
    }

    #[must_use]
    pub(crate) fn body(mut self, body: RequestBody, content_type: &str) -> Self {
        self.body = Some(body);
        self.header(CONTENT_TYPE, content_type)
    }

    /// Send and return the classified response with its body unread.
    pub(crate) async fn send(self) -> Result<HttpResponse> {
        let mut headers = self.core.base_headers()?;
        for (name, value) in &self.extra_headers {
            let value = self.core.header_value(name.as_str(), value)?;
            headers.insert(name.clone(), value);
        }

        self.core
            .send(HttpRequest {
                method: self.method,
                url: self.url,
                headers,
                body: self.body,
            })
            .await
    }

    /// Send and decode the response as JSON.
    pub(crate) async fn json<T>(self) -> Result<T>
    where
        T: DeserializeOwned,
    {
        let core = self.core;
        let response = self.send().await?;
        core.decode(response).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::sync::Mutex;

    /// Replays one canned response and records the request it saw.
    struct OneShot {
        response: Mutex<Option<std::result::Result<HttpResponse, TransportError>>>,
        seen: Mutex<Vec<(Method, String, HeaderMap, Option<Vec<u8>>)>>,
    }

    impl OneShot {
        fn new(response: std::result::Result<HttpResponse, TransportError>) -> Arc<Self> {
            Arc::new(Self {
                response: Mutex::new(Some(response)),
                seen: Mutex::new(Vec::new()),
            })
        }
    }

    #[async_trait]
    impl HttpTransport for OneShot {
        async fn send(
            &self,
            request: HttpRequest,
        ) -> std::result::Result<HttpResponse, TransportError> {
            let body = request.body.as_ref().and_then(|b| b.as_bytes()).map(<[u8]>::to_vec);
            self.seen
                .lock()
                .unwrap()
                .push((request.method, request.url, request.headers, body));
            self.response.lock().unwrap().take().unwrap()
        }
    }

    fn core(transport: Arc<OneShot>) -> ApiCore {
        ApiCore::new(ApiArea::Core, "https://api.example", "key-123", "ua/1", transport)
    }

    #[derive(Debug, Default, serde::Deserialize, PartialEq)]
    struct Thing {
        #[serde(rename = "Id")]
        id: i64,
    }

    #[tokio::test]
    async fn execute_sets_headers_and_decodes() {
        let t = OneShot::new(Ok(HttpResponse::new(200, r#"{"Id":7}"#)));
        let result: Option<Thing> = core(t.clone())
            .execute(Method::POST, "/thing", Some(&serde_json::json!({"Name": "x"})))
            .await
            .unwrap();
        assert_eq!(result, Some(Thing { id: 7 }));

        let seen = t.seen.lock().unwrap();
        let (method, url, headers, body) = &seen[0];
        assert_eq!(method, Method::POST);
        assert_eq!(url, "https://api.example/thing");
        assert_eq!(headers.get("AccessKey").unwrap(), "key-123");
        assert_eq!(headers.get(USER_AGENT).unwrap(), "ua/1");
        assert_eq!(headers.get(ACCEPT).unwrap(), APPLICATION_JSON);
        assert_eq!(headers.get(CONTENT_TYPE).unwrap(), APPLICATION_JSON);
        assert_eq!(body.as_deref(), Some(&br#"{"Name":"x"}"#[..]));
    }

    #[tokio::test]
    async fn no_body_means_no_content_type() {
        let t = OneShot::new(Ok(HttpResponse::new(200, r#"{"Id":1}"#)));
        let _: Thing = core(t.clone()).get("/thing/1").await.unwrap();
        let seen = t.seen.lock().unwrap();
        assert!(seen[0].2.get(CONTENT_TYPE).is_none());
        assert!(seen[0].3.is_none());
    }

    #[tokio::test]
    async fn status_204_yields_none() {
        let t = OneShot::new(Ok(HttpResponse::new(204, "")));
        let result: Option<Thing> = core(t).execute::<(), _>(Method::PUT, "/x", None).await.unwrap();
        assert_eq!(result, None);
    }

    #[tokio::test]
    async fn status_204_defaults_in_wrappers() {
        let t = OneShot::new(Ok(HttpResponse::new(204, "")));
        let result: Thing = core(t).get("/x").await.unwrap();
        assert_eq!(result, Thing::default());
    }

    #[tokio::test]
    async fn execute_unit_ignores_invalid_body() {
        let t = OneShot::new(Ok(HttpResponse::new(200, "definitely not json")));
        core(t).execute_unit::<()>(Method::POST, "/x", None).await.unwrap();
    }

    #[tokio::test]
    async fn decode_failure_is_decode_error() {
        let t = OneShot::new(Ok(HttpResponse::new(200, "not json")));
        let err = core(t).get::<Thing>("/x").await.unwrap_err();
        assert!(matches!(err, BunnyError::Decode { area: ApiArea::Core, .. }));
    }

    #[tokio::test]
    async fn error_status_is_classified() {
        let t = OneShot::new(Ok(HttpResponse::new(404, r#"{"Message":"nope"}"#)));
        let err = core(t).get::<Thing>("/x").await.unwrap_err();
        assert!(err.is_not_found());
        assert_eq!(err.details().unwrap().message, "nope");
    }

    #[tokio::test]
    async fn unreadable_error_body() {
        let body = crate::transport::ResponseBody::from_stream(futures::stream::iter(vec![Err(
            TransportError::Network("reset".to_string()),
        )]));
        let response = HttpResponse {
            status: 500,
            headers: HeaderMap::new(),
            body,
        };
        let t = OneShot::new(Ok(response));
        let err = core(t).get::<Thing>("/x").await.unwrap_err();
        assert_eq!(
            err.details().unwrap().message,
            "failed to read error response"
        );
        assert_eq!(err.status(), Some(500));
    }

    #[tokio::test]
    async fn transport_failures_are_mapped() {
        let t = OneShot::new(Err(TransportError::Timeout("deadline".to_string())));
        let err = core(t).get::<Thing>("/x").await.unwrap_err();
        assert!(matches!(err, BunnyError::Timeout { ref detail, .. } if detail == "deadline"));

        let t = OneShot::new(Err(TransportError::Network("refused".to_string())));
        let err = core(t).get::<Thing>("/x").await.unwrap_err();
        assert!(matches!(err, BunnyError::Network { .. }));
    }

    #[tokio::test]
    async fn serialization_failure_sends_nothing() {
        struct Broken;
        impl Serialize for Broken {
            fn serialize<S: serde::Serializer>(&self, _: S) -> std::result::Result<S::Ok, S::Error> {
                Err(serde::ser::Error::custom("broken"))
            }
        }
        let t = OneShot::new(Ok(HttpResponse::new(200, "{}")));
        let err = core(t.clone())
            .execute_unit(Method::POST, "/x", Some(&Broken))
            .await
            .unwrap_err();
        assert!(matches!(err, BunnyError::Serialization { .. }));
        assert!(t.seen.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn raw_request_only_adds_auth_and_agent() {
        let t = OneShot::new(Ok(HttpResponse::new(201, "")));
        core(t.clone())
            .raw(Method::PUT, "/zone/file.txt")
            .body(RequestBody::from("data"), "text/plain")
            .send()
            .await
            .unwrap();
        let seen = t.seen.lock().unwrap();
        let headers = &seen[0].2;
        assert_eq!(headers.len(), 3);
        assert_eq!(headers.get(CONTENT_TYPE).unwrap(), "text/plain");
        assert!(headers.get(ACCEPT).is_none());
    }

    #[test]
    fn rebased_keeps_credentials() {
        let t = OneShot::new(Ok(HttpResponse::new(200, "")));
        let rebased = core(t).rebased("https://video.example");
        assert_eq!(rebased.base_url(), "https://video.example");
        assert_eq!(rebased.api_key, "key-123");
    }

    #[test]
    fn debug_hides_key() {
        let t = OneShot::new(Ok(HttpResponse::new(200, "")));
        assert!(!format!("{:?}", core(t)).contains("key-123"));
    }
}
