//! Shared utilities for the search proxy Lambda
//!
//! Converts API Gateway proxy events into `IncomingRequest` values and
//! `ProxyResponse` values back into API Gateway responses.

use aws_lambda_events::apigw::{ApiGatewayProxyRequest, ApiGatewayProxyResponse};
use aws_lambda_events::encodings::Body;
use http::HeaderMap;
use http::header::{CONTENT_TYPE, HeaderValue};
use search_proxy_common::{IncomingRequest, ProxyResponse, decode_body, encode_body};
use tracing::warn;

pub mod handlers;

/// Build IncomingRequest from API Gateway event
pub fn build_incoming_request(request: &ApiGatewayProxyRequest) -> IncomingRequest {
    let path = request.path.as_deref().unwrap_or("/");

    let body = match request.body.as_deref() {
        None => Vec::new(),
        Some(b) if request.is_base64_encoded => decode_body(b).unwrap_or_else(|e| {
            warn!("Discarding undecodable base64 body: {}", e);
            Vec::new()
        }),
        Some(b) => b.as_bytes().to_vec(),
    };

    IncomingRequest::new(path, body).with_headers(request.headers.clone())
}

/// Convert ProxyResponse to API Gateway response
///
/// UTF-8 bodies are returned as text, anything else base64-encoded.
pub fn build_api_gateway_response(response: ProxyResponse) -> ApiGatewayProxyResponse {
    let mut headers = HeaderMap::new();
    if let Some(value) = response
        .content_type
        .as_deref()
        .and_then(|ct| HeaderValue::from_str(ct).ok())
    {
        headers.insert(CONTENT_TYPE, value);
    }

    let (body, is_base64_encoded) = if response.body.is_empty() {
        (None, false)
    } else {
        match String::from_utf8(response.body) {
            Ok(text) => (Some(Body::Text(text)), false),
            Err(e) => (Some(Body::Text(encode_body(e.as_bytes()))), true),
        }
    };

    ApiGatewayProxyResponse {
        status_code: response.status as i64,
        headers,
        multi_value_headers: Default::default(),
        body,
        is_base64_encoded,
    }
}
