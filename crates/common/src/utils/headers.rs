use http::{HeaderMap, HeaderName, HeaderValue};
use tracing::debug;

use crate::validation::validate_header_value;

/// Client identification headers copied from the inbound request,
/// as (inbound name, upstream name)
const PASSTHROUGH_HEADERS: &[(&str, &str)] = &[
    ("x-swiftype-client", "X-Swiftype-Client"),
    ("x-swiftype-client-version", "X-Swiftype-Client-Version"),
    ("x-swiftype-integration", "x-swiftype-integration"),
    ("x-swiftype-integration-version", "x-swiftype-integration-version"),
];

/// Collect the pass-through headers present on an inbound request
///
/// Header names match case-insensitively. Every other inbound header is
/// dropped, and so is any pass-through value that is not plain text.
pub fn passthrough_headers(inbound: &HeaderMap) -> HeaderMap {
    let mut headers = HeaderMap::new();

    for (inbound_name, upstream_name) in PASSTHROUGH_HEADERS {
        let Some(value) = inbound.get(*inbound_name) else {
            continue;
        };

        let Ok(text) = value.to_str() else {
            debug!("Dropping non-text {} header", inbound_name);
            continue;
        };

        if let Err(e) = validate_header_value(text) {
            debug!("Dropping {} header: {}", inbound_name, e);
            continue;
        }

        if let (Ok(name), Ok(value)) = (
            HeaderName::from_bytes(upstream_name.as_bytes()),
            HeaderValue::from_str(text),
        ) {
            headers.insert(name, value);
        }
    }

    headers
}
