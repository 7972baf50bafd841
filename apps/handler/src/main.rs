//! Search proxy Lambda
//!
//! Serves API Gateway proxy events: every invocation is one search proxy
//! transaction. Configuration is read from the environment at cold start
//! and shared by all invocations of this instance.

use anyhow::Context;
use aws_lambda_events::apigw::ApiGatewayProxyRequest;
use lambda_runtime::{Error, LambdaEvent, run, service_fn};
use search_proxy_common::{Extensions, ProxyConfig, ProxyHandler};
use search_proxy_handler::handlers::handle_search;
use tracing::{info, warn};

#[tokio::main]
async fn main() -> Result<(), Error> {
    // Initialize tracing subscriber for CloudWatch Logs
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .with_target(false)
        .without_time()
        .init();

    info!("Search proxy Lambda starting");

    let config = ProxyConfig::from_env();

    if config.enabled {
        info!(
            "Proxying engine {} (actions: {})",
            config.engine_segment(),
            config.allow_list.join(", ")
        );
    } else {
        warn!("Search proxy is disabled; every request will be refused");
    }

    let proxy = ProxyHandler::new(config, Extensions::new())
        .context("Failed to initialize search proxy")?;

    // Run the Lambda runtime
    run(service_fn(|event: LambdaEvent<ApiGatewayProxyRequest>| {
        handle_search(event, &proxy)
    }))
    .await
}
