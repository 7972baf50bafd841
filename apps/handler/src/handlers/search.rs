//! SearchHandler - Handles search proxy requests
//!
//! This module receives the search widget's requests via API Gateway,
//! runs them through the proxy pipeline and returns the upstream search
//! results (or the proxy's own JSON error) to the browser.

use aws_lambda_events::apigw::{ApiGatewayProxyRequest, ApiGatewayProxyResponse};
use lambda_runtime::{Error, LambdaEvent};
use search_proxy_common::ProxyHandler;
use tracing::{Instrument, debug, info_span};

use crate::{build_api_gateway_response, build_incoming_request};

/// Handler for search proxy requests
pub async fn handle_search(
    event: LambdaEvent<ApiGatewayProxyRequest>,
    proxy: &ProxyHandler,
) -> Result<ApiGatewayProxyResponse, Error> {
    let request = event.payload;
    let span = info_span!("search", request_id = %event.context.request_id);

    async move {
        debug!(
            "Processing {} {}",
            request.http_method,
            request.path.as_deref().unwrap_or("/")
        );

        let incoming = build_incoming_request(&request);
        let response = proxy.handle(incoming).await;

        Ok(build_api_gateway_response(response))
    }
    .instrument(span)
    .await
}
