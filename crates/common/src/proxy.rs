//! The proxy transaction
//!
//! `ProxyHandler::handle` validates configuration and the inbound request,
//! builds the upstream request with the injected search key, calls the
//! upstream API and relays its response. Every validation step
//! short-circuits with a synthesized `{"errors": [...]}` body; upstream
//! transport failures do not.

use http::header::{AUTHORIZATION, CONTENT_TYPE};
use http::{HeaderMap, HeaderValue};
use secrecy::ExposeSecret;
use tracing::{debug, info, warn};

use crate::config::ProxyConfig;
use crate::constants::UPSTREAM_CONTENT_TYPE;
use crate::error::{ProxyError, Result};
use crate::extensions::Extensions;
use crate::protocol::{IncomingRequest, ProxyResponse, UpstreamRequest};
use crate::upstream::UpstreamClient;
use crate::utils::passthrough_headers;
use crate::validation::{extract_action, has_search_key_prefix};

/// Stateless request handler shared by all concurrent requests
#[derive(Debug, Clone)]
pub struct ProxyHandler {
    config: ProxyConfig,
    extensions: Extensions,
    upstream: UpstreamClient,
}

impl ProxyHandler {
    pub fn new(config: ProxyConfig, extensions: Extensions) -> Result<Self> {
        let upstream = UpstreamClient::new(&config)?;
        Ok(Self {
            config,
            extensions,
            upstream,
        })
    }

    /// Run one proxy transaction
    pub async fn handle(&self, request: IncomingRequest) -> ProxyResponse {
        let mut upstream_request = match self.prepare(request) {
            Ok(upstream_request) => upstream_request,
            Err(e) => {
                warn!(kind = e.kind(), "Rejected search request: {}", e);
                return e.to_response();
            }
        };

        self.extensions.augment_query(&mut upstream_request.body);

        debug!("Forwarding {:?}", upstream_request);

        let mut response = self.upstream.send(upstream_request).await;

        self.extensions.augment_results(&mut response.body);

        info!(
            "Relayed upstream response: status {} ({} bytes)",
            response.status,
            response.body.len()
        );

        response
    }

    /// Validate the request and build its upstream counterpart
    ///
    /// Checks run in a fixed order and the first failure wins: enablement,
    /// required configuration, key shape, body presence, allow-list.
    pub fn prepare(&self, request: IncomingRequest) -> Result<UpstreamRequest> {
        let config = &self.config;

        if !config.enabled {
            return Err(ProxyError::Disabled);
        }

        let search_key = config.search_key.expose_secret();
        if config.endpoint.is_empty() || search_key.is_empty() || config.engine_name.is_empty() {
            return Err(ProxyError::MisconfiguredEnvironment);
        }

        if !has_search_key_prefix(search_key) {
            return Err(ProxyError::InvalidKeyFormat);
        }

        if !request.has_body() {
            return Err(ProxyError::EmptyBody);
        }

        let action = extract_action(&request.path);
        if !config.is_allowed(action) {
            debug!(
                "Blocked action {:?}",
                action.chars().take(50).collect::<String>()
            );
            return Err(ProxyError::EndpointNotAllowed);
        }

        let mut authorization = HeaderValue::from_str(&format!("Bearer {}", search_key))
            .map_err(|_| ProxyError::InvalidKeyFormat)?;
        authorization.set_sensitive(true);

        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, authorization);
        headers.insert(CONTENT_TYPE, HeaderValue::from_static(UPSTREAM_CONTENT_TYPE));
        headers.extend(passthrough_headers(&request.headers));

        debug!("Accepted action {} for engine {}", action, config.engine_segment());

        Ok(UpstreamRequest {
            url: config.upstream_url(action),
            headers,
            body: request.body,
        })
    }
}
