use http::{HeaderMap, header::AUTHORIZATION};
use std::fmt;

/// Request as delivered by the hosting front end
#[derive(Debug, Clone, Default)]
pub struct IncomingRequest {
    /// Request path without query string
    /// Example: "/search-proxy/search.json"
    pub path: String,

    /// Raw POST body, never parsed by the proxy
    pub body: Vec<u8>,

    /// Inbound headers; only the pass-through set is ever read
    pub headers: HeaderMap,
}

impl IncomingRequest {
    /// Create a request without headers
    pub fn new(path: impl Into<String>, body: impl Into<Vec<u8>>) -> Self {
        Self {
            path: path.into(),
            body: body.into(),
            headers: HeaderMap::new(),
        }
    }

    /// Replace the inbound headers
    pub fn with_headers(mut self, headers: HeaderMap) -> Self {
        self.headers = headers;
        self
    }

    /// Check if the request has a body
    pub fn has_body(&self) -> bool {
        !self.body.is_empty()
    }
}

/// Request sent to the upstream search API (always a POST)
#[derive(Clone)]
pub struct UpstreamRequest {
    /// Absolute upstream URL
    pub url: String,

    /// Authorization, content type and pass-through headers
    pub headers: HeaderMap,

    /// Body after pre-send hooks
    pub body: Vec<u8>,
}

impl fmt::Debug for UpstreamRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let headers: Vec<(&str, &str)> = self
            .headers
            .iter()
            .map(|(name, value)| {
                let value = if name == AUTHORIZATION {
                    "[REDACTED]"
                } else {
                    value.to_str().unwrap_or("")
                };
                (name.as_str(), value)
            })
            .collect();

        f.debug_struct("UpstreamRequest")
            .field("url", &self.url)
            .field("headers", &headers)
            .field("body_len", &self.body.len())
            .finish()
    }
}
