//! Input validation for the proxy pipeline
//!
//! Everything here works on caller-supplied or operator-supplied strings
//! before they can influence the upstream URL or headers.

use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

use crate::constants::{ACTION_SUFFIX, SEARCH_KEY_PREFIX};

/// Regex for configured action names (safe as a single URL path segment)
static ACTION_NAME_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z0-9_]{1,64}$").unwrap());

/// Maximum length for pass-through header values
pub const MAX_HEADER_VALUE_LENGTH: usize = 8192;

/// Validation errors
#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("Invalid action name: {0}")]
    InvalidActionName(String),

    #[error("Header value too long: {0} bytes (max: {1})")]
    HeaderValueTooLong(usize, usize),

    #[error("Invalid header value contains control characters")]
    InvalidHeaderValue,
}

/// Derive the action name from a request path
///
/// Trailing slashes are ignored, the last segment is taken and a single
/// case-sensitive `.json` suffix is removed.
///
/// # Examples
///
/// ```
/// use search_proxy_common::validation::extract_action;
///
/// assert_eq!(extract_action("/search-proxy/search.json"), "search");
/// assert_eq!(extract_action("/search-proxy/search/"), "search");
/// assert_eq!(extract_action("/search-proxy/search.JSON"), "search.JSON");
/// ```
pub fn extract_action(path: &str) -> &str {
    let trimmed = path.trim_end_matches('/');
    let segment = trimmed.rsplit('/').next().unwrap_or_default();
    segment.strip_suffix(ACTION_SUFFIX).unwrap_or(segment)
}

/// Check the search key shape (not a cryptographic check)
pub fn has_search_key_prefix(key: &str) -> bool {
    key.starts_with(SEARCH_KEY_PREFIX)
}

/// Validate an allow-list entry from configuration
///
/// # Examples
///
/// ```
/// use search_proxy_common::validation::validate_action_name;
///
/// assert!(validate_action_name("query_suggestion").is_ok());
/// assert!(validate_action_name("../documents").is_err());
/// ```
pub fn validate_action_name(name: &str) -> Result<(), ValidationError> {
    if !ACTION_NAME_REGEX.is_match(name) {
        return Err(ValidationError::InvalidActionName(
            name.chars().take(50).collect::<String>(), // Limit error message
        ));
    }
    Ok(())
}

/// Validate a pass-through header value
///
/// Values are forwarded verbatim, so anything that would need sanitizing
/// is rejected instead.
pub fn validate_header_value(value: &str) -> Result<(), ValidationError> {
    if value.len() > MAX_HEADER_VALUE_LENGTH {
        return Err(ValidationError::HeaderValueTooLong(
            value.len(),
            MAX_HEADER_VALUE_LENGTH,
        ));
    }

    // Tab is the only control character allowed in HTTP header values
    if value.chars().any(|c| c.is_control() && c != '\t') {
        return Err(ValidationError::InvalidHeaderValue);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_action_with_and_without_suffix() {
        assert_eq!(extract_action("/search-proxy/search.json"), "search");
        assert_eq!(extract_action("/search-proxy/search"), "search");
        assert_eq!(extract_action("/proxy/query_suggestion.json"), "query_suggestion");
    }

    #[test]
    fn test_extract_action_trailing_slashes() {
        assert_eq!(extract_action("/proxy/search/"), "search");
        assert_eq!(extract_action("/proxy/search.json//"), "search");
    }

    #[test]
    fn test_extract_action_edge_cases() {
        assert_eq!(extract_action(""), "");
        assert_eq!(extract_action("/"), "");
        assert_eq!(extract_action("search.json"), "search");
        assert_eq!(extract_action("/proxy/.json"), "");

        // Only one suffix is stripped, and only in lowercase
        assert_eq!(extract_action("/proxy/search.json.json"), "search.json");
        assert_eq!(extract_action("/proxy/search.JSON"), "search.JSON");

        // Earlier segments never matter
        assert_eq!(extract_action("/schema/../admin.json"), "admin");
    }

    #[test]
    fn test_search_key_prefix() {
        assert!(has_search_key_prefix("search-abc123"));
        assert!(has_search_key_prefix("search-"));
        assert!(!has_search_key_prefix("private-abc123"));
        assert!(!has_search_key_prefix("Search-abc123"));
        assert!(!has_search_key_prefix("xsearch-abc123"));
        assert!(!has_search_key_prefix(""));
    }

    #[test]
    fn test_validate_action_name() {
        assert!(validate_action_name("search").is_ok());
        assert!(validate_action_name("query_suggestion").is_ok());
        assert!(validate_action_name("Search2").is_ok());

        assert!(validate_action_name("").is_err());
        assert!(validate_action_name("documents/list").is_err());
        assert!(validate_action_name("search.json").is_err());
        assert!(validate_action_name("search?x=1").is_err());
        assert!(validate_action_name(&"a".repeat(65)).is_err());
    }

    #[test]
    fn test_validate_header_value() {
        assert!(validate_header_value("elastic-app-search-javascript").is_ok());
        assert!(validate_header_value("value\twith\ttabs").is_ok());

        assert!(matches!(
            validate_header_value("value\r\nx-injected: 1"),
            Err(ValidationError::InvalidHeaderValue)
        ));
        assert!(matches!(
            validate_header_value(&"a".repeat(10000)),
            Err(ValidationError::HeaderValueTooLong(10000, MAX_HEADER_VALUE_LENGTH))
        ));
    }
}
