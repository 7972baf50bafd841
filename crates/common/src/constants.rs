/// Enables the proxy when set to "true"
pub const ENV_ENABLED: &str = "SEARCH_PROXY_ENABLED";

/// Full upstream base URL, without trailing slash
pub const ENV_ENDPOINT: &str = "APP_SEARCH_ENDPOINT";

/// Secret search key injected as bearer credential
pub const ENV_SEARCH_KEY: &str = "APP_SEARCH_API_SEARCH_KEY";

/// Engine name (prefix) queried on the upstream service
pub const ENV_ENGINE_NAME: &str = "APP_SEARCH_ENGINE_PREFIX";

/// Index name appended to the engine name
pub const ENV_INDEX_NAME: &str = "APP_SEARCH_ENGINE_INDEX_NAME";

/// Route to `engines/{engine}` instead of `engines/{engine}-{index}`
pub const ENV_ENGINE_ONLY: &str = "SEARCH_PROXY_ENGINE_ONLY";

/// Comma-separated list of permitted actions
pub const ENV_ALLOW_LIST: &str = "SEARCH_PROXY_ALLOW_LIST";

/// Connect timeout in seconds
pub const ENV_CONNECT_TIMEOUT_SECS: &str = "SEARCH_PROXY_CONNECT_TIMEOUT_SECS";

/// Total request timeout in seconds
pub const ENV_REQUEST_TIMEOUT_SECS: &str = "SEARCH_PROXY_REQUEST_TIMEOUT_SECS";

/// Outbound network proxy host
pub const ENV_OUTBOUND_PROXY: &str = "SS_OUTBOUND_PROXY";

/// Outbound network proxy port
pub const ENV_OUTBOUND_PROXY_PORT: &str = "SS_OUTBOUND_PROXY_PORT";

/// Every valid search key starts with this prefix
pub const SEARCH_KEY_PREFIX: &str = "search-";

/// Index name used when none is configured
pub const DEFAULT_INDEX_NAME: &str = "content";

/// Actions forwarded when no allow-list is configured
pub const DEFAULT_ALLOW_LIST: &[&str] = &[
    "search",
    "query_suggestion",
    "curations",
    "schema",
    "synonyms",
];

/// Upstream connect timeout (2 seconds)
pub const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 2;

/// Upstream total request timeout (5 seconds)
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 5;

/// Fixed prefix of every upstream API path
pub const UPSTREAM_ENGINES_PATH: &str = "/api/as/v1/engines";

/// Content type sent upstream regardless of what the client declared
pub const UPSTREAM_CONTENT_TYPE: &str = "application/json;charset=utf-8";

/// Content type of error bodies synthesized by the proxy
pub const ERROR_CONTENT_TYPE: &str = "application/json";

/// Suffix stripped from the last path segment
pub const ACTION_SUFFIX: &str = ".json";
