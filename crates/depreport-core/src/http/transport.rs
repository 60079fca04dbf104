//! Request/response values and the reqwest-backed transport

use crate::config::Secret;
use crate::error::{Error, Result};
use crate::traits::HttpTransport;
use futures::future::BoxFuture;
use serde::Serialize;
use std::time::Duration;

/// User agent sent with every request
pub const USER_AGENT: &str = concat!("depreport/", env!("CARGO_PKG_VERSION"));

/// Media type requested from the API
pub const ACCEPT: &str = "application/vnd.github+json";

/// A fully built POST request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutgoingRequest {
    pub url: String,
    /// Header name/value pairs in send order
    pub headers: Vec<(String, String)>,
    pub body: Vec<u8>,
}

impl OutgoingRequest {
    /// JSON POST authorized with `Authorization: token <token>`
    pub fn json<B: Serialize + ?Sized>(url: &str, token: &Secret, payload: &B) -> Result<Self> {
        let body = serde_json::to_vec(payload)?;
        Ok(Self {
            url: url.to_string(),
            headers: vec![
                ("Accept".into(), ACCEPT.into()),
                ("Authorization".into(), format!("token {}", token.expose())),
                ("Content-Type".into(), "application/json".into()),
                ("User-Agent".into(), USER_AGENT.into()),
            ],
            body,
        })
    }

    /// First header value with this name (case-insensitive)
    pub fn header(&self, name: &str) -> Option<&str> {
        find_header(&self.headers, name)
    }
}

/// A response whose body has been fully read
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IncomingResponse {
    pub status: u16,
    /// Canonical reason phrase for `status`, e.g. `Created`; empty when unknown.
    /// A non-standard phrase sent on the wire is not preserved.
    pub reason: String,
    /// Protocol version as sent on the wire, e.g. `HTTP/1.1`
    pub version: String,
    pub headers: Vec<(String, String)>,
    pub body: Vec<u8>,
}

impl IncomingResponse {
    /// 201 Created, the only success status for both calls
    #[inline]
    pub fn is_created(&self) -> bool {
        self.status == 201
    }

    /// Status text built from the code and its canonical reason,
    /// e.g. `422 Unprocessable Entity`
    pub fn status_text(&self) -> String {
        if self.reason.is_empty() {
            self.status.to_string()
        } else {
            format!("{} {}", self.status, self.reason)
        }
    }

    /// First header value with this name (case-insensitive)
    pub fn header(&self, name: &str) -> Option<&str> {
        find_header(&self.headers, name)
    }

    /// Body as text, lossy
    pub fn body_text(&self) -> std::borrow::Cow<'_, str> {
        String::from_utf8_lossy(&self.body)
    }
}

fn find_header<'h>(headers: &'h [(String, String)], name: &str) -> Option<&'h str> {
    headers
        .iter()
        .find(|(key, _)| key.eq_ignore_ascii_case(name))
        .map(|(_, value)| value.as_str())
}

/// Production transport over `reqwest`
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: reqwest::Client,
}

impl ReqwestTransport {
    /// Build a client with an explicit per-request timeout
    pub fn new(timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| Error::Runtime(format!("failed to build HTTP client: {}", e)))?;
        Ok(Self { client })
    }
}

impl HttpTransport for ReqwestTransport {
    type PostFuture<'a> = BoxFuture<'a, Result<IncomingResponse>>;

    fn post<'a>(&'a self, request: &'a OutgoingRequest) -> Self::PostFuture<'a> {
        Box::pin(async move {
            let mut builder = self.client.post(&request.url);
            for (name, value) in &request.headers {
                builder = builder.header(name.as_str(), value.as_str());
            }

            let response = builder.body(request.body.clone()).send().await?;

            let status = response.status();
            let version = format!("{:?}", response.version());
            let headers = response
                .headers()
                .iter()
                .map(|(name, value)| {
                    (
                        name.as_str().to_string(),
                        String::from_utf8_lossy(value.as_bytes()).into_owned(),
                    )
                })
                .collect();

            // Consumes the response, releasing the connection on every path
            let body = response.bytes().await.map_err(|e| {
                Error::ResponseParse(format!("unable to read response body: {}", e.without_url()))
            })?;

            Ok::<_, Error>(IncomingResponse {
                status: status.as_u16(),
                reason: status.canonical_reason().unwrap_or_default().to_string(),
                version,
                headers,
                body: body.to_vec(),
            })
        })
    }
}
