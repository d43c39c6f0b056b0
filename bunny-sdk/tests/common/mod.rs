//! Shared test helpers: a recording mock transport and assertion macros.

#![allow(dead_code)]

use std::collections::VecDeque;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use bunny_sdk::{
    ClientConfig, HttpRequest, HttpResponse, HttpTransport, RequestBody, ResponseBody,
    TransportError,
};
use bytes::Bytes;
use futures::TryStreamExt;

/// Skip a live test when any of the environment variables is missing.
#[macro_export]
macro_rules! skip_if_no_credentials {
    ($($var:expr),+) => {
        $(
            if std::env::var($var).is_err() {
                eprintln!("skipping test: {} is not set", $var);
                return;
            }
        )+
    };
}

/// Assert that an `Option` is `Some` and unwrap it (fails the test otherwise).
#[macro_export]
macro_rules! require_some {
    ($expr:expr $(,)?) => {{
        let opt = $expr;
        assert!(opt.is_some(), "expected Some(..), got None");
        let Some(val) = opt else {
            return;
        };
        val
    }};
    ($expr:expr, $($msg:tt)+) => {{
        let opt = $expr;
        assert!(opt.is_some(), "{}", format_args!($($msg)+));
        let Some(val) = opt else {
            return;
        };
        val
    }};
}

/// Assert that a `Result` is `Ok` and unwrap it (fails the test otherwise).
#[macro_export]
macro_rules! require_ok {
    ($expr:expr $(,)?) => {{
        let res = $expr;
        assert!(res.is_ok(), "expected Ok(..), got {res:?}");
        let Ok(val) = res else {
            return;
        };
        val
    }};
    ($expr:expr, $($msg:tt)+) => {{
        let res = $expr;
        assert!(
            res.is_ok(),
            "{}: {res:?}",
            format_args!($($msg)+)
        );
        let Ok(val) = res else {
            return;
        };
        val
    }};
}

/// A request as the mock transport saw it.
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub method: String,
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub body: Option<Vec<u8>>,
    pub streamed: bool,
}

impl RecordedRequest {
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }

    pub fn body_text(&self) -> String {
        String::from_utf8_lossy(self.body.as_deref().unwrap_or_default()).into_owned()
    }

    pub fn body_json(&self) -> serde_json::Value {
        serde_json::from_slice(self.body.as_deref().unwrap_or(b"null")).unwrap_or_default()
    }
}

enum Reply {
    Response {
        status: u16,
        body: Bytes,
        headers: Vec<(&'static str, String)>,
        released: Option<Arc<AtomicBool>>,
    },
    Fail(TransportError),
}

/// Sets the flag when the response body is consumed or dropped.
struct ReleaseGuard(Arc<AtomicBool>);

impl Drop for ReleaseGuard {
    fn drop(&mut self) {
        self.0.store(true, Ordering::SeqCst);
    }
}

/// Transport that replays canned responses in order and records requests.
#[derive(Default)]
pub struct MockTransport {
    replies: Mutex<VecDeque<Reply>>,
    requests: Mutex<Vec<RecordedRequest>>,
}

impl MockTransport {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn respond(&self, status: u16, body: impl Into<Bytes>) -> &Self {
        self.push(Reply::Response {
            status,
            body: body.into(),
            headers: Vec::new(),
            released: None,
        })
    }

    pub fn respond_json(&self, status: u16, body: &serde_json::Value) -> &Self {
        self.respond(status, body.to_string())
    }

    pub fn respond_with_header(
        &self,
        status: u16,
        body: impl Into<Bytes>,
        name: &'static str,
        value: &str,
    ) -> &Self {
        self.push(Reply::Response {
            status,
            body: body.into(),
            headers: vec![(name, value.to_string())],
            released: None,
        })
    }

    /// Queue a response and return a flag that flips once its body is
    /// released (read to the end or dropped).
    pub fn respond_tracked(&self, status: u16, body: impl Into<Bytes>) -> Arc<AtomicBool> {
        let flag = Arc::new(AtomicBool::new(false));
        self.push(Reply::Response {
            status,
            body: body.into(),
            headers: Vec::new(),
            released: Some(flag.clone()),
        });
        flag
    }

    pub fn fail(&self, error: TransportError) -> &Self {
        self.push(Reply::Fail(error))
    }

    fn push(&self, reply: Reply) -> &Self {
        self.replies.lock().unwrap().push_back(reply);
        self
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn last_request(&self) -> RecordedRequest {
        self.requests
            .lock()
            .unwrap()
            .last()
            .cloned()
            .expect("no request was sent")
    }

    pub fn request_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }
}

#[async_trait]
impl HttpTransport for MockTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        let (body, streamed) = match request.body {
            None => (None, false),
            Some(RequestBody::Bytes(bytes)) => (Some(bytes.to_vec()), false),
            Some(RequestBody::Stream(stream)) => {
                let collected = stream
                    .try_fold(Vec::new(), |mut acc, chunk| async move {
                        acc.extend_from_slice(&chunk);
                        Ok(acc)
                    })
                    .await
                    .map_err(|e| TransportError::Network(e.to_string()))?;
                (Some(collected), true)
            }
        };

        self.requests.lock().unwrap().push(RecordedRequest {
            method: request.method.to_string(),
            url: request.url,
            headers: request
                .headers
                .iter()
                .map(|(k, v)| {
                    (
                        k.as_str().to_string(),
                        v.to_str().unwrap_or_default().to_string(),
                    )
                })
                .collect(),
            body,
            streamed,
        });

        let reply = self.replies.lock().unwrap().pop_front();
        match reply {
            Some(Reply::Response {
                status,
                body,
                headers,
                released,
            }) => {
                let body = match released {
                    Some(flag) => {
                        let guard = ReleaseGuard(flag);
                        ResponseBody::from_stream(futures::stream::once(async move {
                            let _guard = guard;
                            Ok(body)
                        }))
                    }
                    None => ResponseBody::from(body),
                };
                let mut response = HttpResponse::new(status, body);
                for (name, value) in headers {
                    if let Ok(value) = value.parse() {
                        response.headers.insert(name, value);
                    }
                }
                Ok(response)
            }
            Some(Reply::Fail(error)) => Err(error),
            None => Err(TransportError::Network(
                "mock transport has no queued response".to_string(),
            )),
        }
    }
}

/// Config routing every request through `mock`.
pub fn mock_config(mock: &Arc<MockTransport>) -> ClientConfig {
    ClientConfig::new()
        .shared_transport(mock.clone())
        .user_agent("bunny-sdk-tests/1.0")
}

/// Unique name for resources created by live tests.
pub fn unique_name(prefix: &str) -> String {
    let uuid = uuid::Uuid::new_v4();
    format!("{prefix}-{}", &uuid.to_string()[..8])
}
