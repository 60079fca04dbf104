//! Raw HTTP/1.1 style dumps of a request/response exchange

use super::transport::{IncomingResponse, OutgoingRequest};
use std::fmt::{self, Write};

const MASK: &str = "*****";

/// Printable request/response pair.
///
/// The `Authorization` header value is masked; everything else, bodies
/// included, is rendered as sent and received.
pub struct HttpDump<'a> {
    request: &'a OutgoingRequest,
    response: &'a IncomingResponse,
}

impl<'a> HttpDump<'a> {
    pub fn new(request: &'a OutgoingRequest, response: &'a IncomingResponse) -> Self {
        Self { request, response }
    }

    /// Request line, `Host`, headers, blank line, body
    pub fn request_text(&self) -> String {
        let (host, target) = split_url(&self.request.url);
        let mut out = format!("POST {} HTTP/1.1\r\nHost: {}\r\n", target, host);
        for (name, value) in &self.request.headers {
            let value = if name.eq_ignore_ascii_case("authorization") {
                mask_credentials(value)
            } else {
                value.clone()
            };
            let _ = write!(out, "{}: {}\r\n", name, value);
        }
        out.push_str("\r\n");
        out.push_str(&String::from_utf8_lossy(&self.request.body));
        out
    }

    /// Status line, headers, blank line, body
    pub fn response_text(&self) -> String {
        let mut out = format!(
            "{} {}\r\n",
            self.response.version,
            self.response.status_text()
        );
        for (name, value) in &self.response.headers {
            let _ = write!(out, "{}: {}\r\n", name, value);
        }
        out.push_str("\r\n");
        out.push_str(&self.response.body_text());
        out
    }
}

impl fmt::Display for HttpDump<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Request: {}\nResponse: {}",
            self.request_text(),
            self.response_text()
        )
    }
}

/// Whether an exchange must be dumped to standard output
#[inline]
pub fn needs_dump(response: &IncomingResponse, verbose: bool) -> bool {
    verbose || !response.is_created()
}

/// Keep the auth scheme, hide the credentials
fn mask_credentials(value: &str) -> String {
    match value.split_once(' ') {
        Some((scheme, _)) => format!("{} {}", scheme, MASK),
        None => MASK.to_string(),
    }
}

/// Split an absolute URL into (`host[:port]`, `path?query`)
fn split_url(url: &str) -> (String, String) {
    match reqwest::Url::parse(url) {
        Ok(parsed) => {
            let host = match (parsed.host_str(), parsed.port()) {
                (Some(host), Some(port)) => format!("{}:{}", host, port),
                (Some(host), None) => host.to_string(),
                (None, _) => String::new(),
            };
            let target = match parsed.query() {
                Some(query) => format!("{}?{}", parsed.path(), query),
                None => parsed.path().to_string(),
            };
            (host, target)
        }
        Err(_) => (String::new(), url.to_string()),
    }
}
