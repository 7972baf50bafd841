//! Upstream search API client
//!
//! Transport failures never surface as errors: they are logged and turned
//! into an empty response so the caller sees the same "no results" shape a
//! dead upstream would have produced.

use http::header::CONTENT_TYPE;
use reqwest::Client;
use std::error::Error as _;
use tracing::{debug, info, warn};

use crate::config::ProxyConfig;
use crate::error::{ProxyError, Result};
use crate::protocol::{ProxyResponse, UpstreamRequest};

/// Status relayed when the upstream call produced no response at all
pub const TRANSPORT_FAILURE_STATUS: u16 = 200;

/// Pooled HTTP client bounded by the configured timeouts
#[derive(Debug, Clone)]
pub struct UpstreamClient {
    http_client: Client,
}

impl UpstreamClient {
    pub fn new(config: &ProxyConfig) -> Result<Self> {
        let mut builder = Client::builder()
            .connect_timeout(config.connect_timeout)
            .timeout(config.request_timeout);

        if let Some(ref outbound) = config.outbound_proxy {
            let proxy = reqwest::Proxy::all(outbound.url())
                .map_err(|e| ProxyError::ClientBuild(e.to_string()))?;
            builder = builder.proxy(proxy);
            info!("Routing upstream calls through outbound proxy {}", outbound.address());
        }

        let http_client = builder
            .build()
            .map_err(|e| ProxyError::ClientBuild(e.to_string()))?;

        Ok(Self { http_client })
    }

    /// POST the request upstream and relay whatever comes back
    pub async fn send(&self, request: UpstreamRequest) -> ProxyResponse {
        let result = self
            .http_client
            .post(&request.url)
            .headers(request.headers)
            .body(request.body)
            .send()
            .await;

        let response = match result {
            Ok(response) => response,
            Err(e) => {
                let (timeout, connect) = (e.is_timeout(), e.is_connect());
                warn!(
                    timeout,
                    connect,
                    "error connecting to upstream search: {}",
                    error_chain(e)
                );
                return ProxyResponse::new(TRANSPORT_FAILURE_STATUS, None, Vec::new());
            }
        };

        let status = response.status().as_u16();
        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);

        match response.bytes().await {
            Ok(body) => {
                debug!("Upstream responded: {} ({} bytes)", status, body.len());
                ProxyResponse::new(status, content_type, body.to_vec())
            }
            Err(e) => {
                let timeout = e.is_timeout();
                warn!(
                    timeout,
                    "error reading upstream search response: {}",
                    error_chain(e)
                );
                ProxyResponse::new(status, content_type, Vec::new())
            }
        }
    }
}

/// Render a transport error with its causes, leaving out the request URL
fn error_chain(error: reqwest::Error) -> String {
    let error = error.without_url();
    let mut message = error.to_string();
    let mut current = error.source();
    while let Some(source) = current {
        message.push_str(": ");
        message.push_str(&source.to_string());
        current = source.source();
    }
    message
}
