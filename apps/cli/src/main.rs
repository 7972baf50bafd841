use anyhow::{Context, Result, anyhow, bail};
use clap::Parser;
use http::{HeaderMap, HeaderName, HeaderValue};
use search_proxy_common::{Extensions, IncomingRequest, ProxyConfig, ProxyHandler};
use std::io::Write;
use std::path::PathBuf;
use std::time::Duration;
use tracing::{debug, info};

/// CLI arguments for the search proxy checker
#[derive(Parser, Debug)]
#[command(name = "spx")]
#[command(
    about = "Send one request through the search proxy using the environment's configuration",
    long_about = None
)]
#[command(version)]
struct Args {
    /// Inbound request path; its last segment names the action
    #[arg(short, long, default_value = "/search-proxy/search.json")]
    path: String,

    /// Request body sent as-is
    #[arg(short, long, conflicts_with = "data_file")]
    data: Option<String>,

    /// Read the request body from a file
    #[arg(long)]
    data_file: Option<PathBuf>,

    /// Inbound header as NAME:VALUE (repeatable)
    #[arg(short = 'H', long = "header", value_parser = parse_header)]
    headers: Vec<HeaderArg>,

    /// Treat the proxy as enabled regardless of SEARCH_PROXY_ENABLED
    #[arg(long)]
    enabled: bool,

    /// Connection timeout in seconds
    #[arg(long, value_parser = clap::value_parser!(u64).range(1..))]
    connect_timeout: Option<u64>,

    /// Request timeout in seconds
    #[arg(long, value_parser = clap::value_parser!(u64).range(1..))]
    request_timeout: Option<u64>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

/// A parsed `NAME:VALUE` header argument
#[derive(Debug, Clone)]
struct HeaderArg {
    name: HeaderName,
    value: HeaderValue,
}

fn parse_header(raw: &str) -> Result<HeaderArg> {
    let (name, value) = raw
        .split_once(':')
        .ok_or_else(|| anyhow!("expected NAME:VALUE, got {:?}", raw))?;

    Ok(HeaderArg {
        name: HeaderName::from_bytes(name.trim().as_bytes()).context("invalid header name")?,
        value: HeaderValue::from_str(value.trim()).context("invalid header value")?,
    })
}

/// Apply command line overrides on top of the environment configuration
fn apply_overrides(mut config: ProxyConfig, args: &Args) -> ProxyConfig {
    if args.enabled {
        config.enabled = true;
    }
    if let Some(secs) = args.connect_timeout {
        config.connect_timeout = Duration::from_secs(secs);
    }
    if let Some(secs) = args.request_timeout {
        config.request_timeout = Duration::from_secs(secs);
    }
    config
}

async fn build_request(args: &Args) -> Result<IncomingRequest> {
    let body = match (&args.data, &args.data_file) {
        (Some(data), _) => data.as_bytes().to_vec(),
        (None, Some(file)) => tokio::fs::read(file)
            .await
            .with_context(|| format!("Failed to read request body from {}", file.display()))?,
        (None, None) => Vec::new(),
    };

    let mut headers = HeaderMap::new();
    for header in &args.headers {
        headers.append(header.name.clone(), header.value.clone());
    }

    Ok(IncomingRequest::new(args.path.clone(), body).with_headers(headers))
}

#[tokio::main]
async fn main() -> Result<()> {
    // Parse CLI arguments
    let args = Args::parse();

    // Initialize logging
    let log_level = if args.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };

    tracing_subscriber::fmt()
        .with_max_level(log_level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    info!("Search proxy checker v{}", env!("CARGO_PKG_VERSION"));

    let config = apply_overrides(ProxyConfig::from_env(), &args);
    debug!("Configuration: {:?}", config);

    let proxy =
        ProxyHandler::new(config, Extensions::new()).context("Failed to build search proxy")?;

    let request = build_request(&args).await?;
    let response = proxy.handle(request).await;

    info!("Status: {}", response.status);
    if let Some(content_type) = &response.content_type {
        info!("Content-Type: {}", content_type);
    }

    let mut stdout = std::io::stdout().lock();
    stdout.write_all(&response.body)?;
    stdout.flush()?;

    if !response.is_success() {
        bail!("Search proxy returned status {}", response.status);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(extra: &[&str]) -> Args {
        let mut argv = vec!["spx"];
        argv.extend_from_slice(extra);
        Args::parse_from(argv)
    }

    #[test]
    fn test_default_args() {
        let args = args(&[]);
        assert_eq!(args.path, "/search-proxy/search.json");
        assert!(args.data.is_none());
        assert!(args.headers.is_empty());
        assert!(!args.enabled);
    }

    #[test]
    fn test_parse_header() {
        let header = parse_header("X-Swiftype-Client: search-ui").unwrap();
        assert_eq!(header.name, "x-swiftype-client");
        assert_eq!(header.value, "search-ui");

        assert!(parse_header("no-separator").is_err());
        assert!(parse_header("bad name: value").is_err());
    }

    #[test]
    fn test_data_conflicts_with_data_file() {
        let result = Args::try_parse_from(["spx", "--data", "{}", "--data-file", "body.json"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_apply_overrides() {
        let mut config = ProxyConfig::new("https://es.example.com", "search-abc123", "mysite");
        config.enabled = false;

        let args = args(&["--enabled", "--connect-timeout", "1", "--request-timeout", "9"]);
        let config = apply_overrides(config, &args);

        assert!(config.enabled);
        assert_eq!(config.connect_timeout, Duration::from_secs(1));
        assert_eq!(config.request_timeout, Duration::from_secs(9));
    }

    #[test]
    fn test_zero_timeouts_are_rejected() {
        assert!(Args::try_parse_from(["spx", "--connect-timeout", "0"]).is_err());
        assert!(Args::try_parse_from(["spx", "--request-timeout", "0"]).is_err());
        assert!(Args::try_parse_from(["spx", "--request-timeout", "1"]).is_ok());
    }

    #[test]
    fn test_apply_overrides_keeps_environment_values() {
        let config = ProxyConfig::new("https://es.example.com", "search-abc123", "mysite");
        let config = apply_overrides(config, &args(&[]));

        assert!(config.enabled);
        assert_eq!(config.connect_timeout, Duration::from_secs(2));
        assert_eq!(config.request_timeout, Duration::from_secs(5));
    }

    #[tokio::test]
    async fn test_build_request() {
        let args = args(&[
            "--path",
            "/proxy/schema.json",
            "--data",
            r#"{"query":"foo"}"#,
            "-H",
            "x-swiftype-client: cli",
        ]);

        let request = build_request(&args).await.unwrap();

        assert_eq!(request.path, "/proxy/schema.json");
        assert_eq!(request.body, br#"{"query":"foo"}"#);
        assert_eq!(request.headers.get("x-swiftype-client").unwrap(), "cli");
    }
}
