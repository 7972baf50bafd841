use serde::{Deserialize, Serialize};

use crate::constants::ERROR_CONTENT_TYPE;

/// Shape of every error body synthesized by the proxy
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub errors: Vec<String>,
}

/// Response handed back to the hosting front end
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProxyResponse {
    /// HTTP status code (upstream's, or the proxy's own on validation failure)
    pub status: u16,

    /// Content type to send back, when known
    pub content_type: Option<String>,

    /// Opaque body bytes
    pub body: Vec<u8>,
}

impl ProxyResponse {
    /// Create a response relaying an upstream result
    pub fn new(status: u16, content_type: Option<String>, body: Vec<u8>) -> Self {
        Self {
            status,
            content_type,
            body,
        }
    }

    /// Create a `{"errors": [message]}` JSON response
    pub fn error(status: u16, message: &str) -> Self {
        let body = ErrorBody {
            errors: vec![message.to_string()],
        };

        Self {
            status,
            content_type: Some(ERROR_CONTENT_TYPE.to_string()),
            body: serde_json::to_vec(&body).unwrap_or_default(),
        }
    }

    /// Check if the response has a body
    pub fn has_body(&self) -> bool {
        !self.body.is_empty()
    }

    /// Check if the response is successful (2xx status code)
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_response_shape() {
        let res = ProxyResponse::error(500, "No data submitted to search endpoint");

        assert_eq!(res.status, 500);
        assert!(!res.is_success());

        let parsed: ErrorBody = serde_json::from_slice(&res.body).unwrap();
        assert_eq!(parsed.errors, vec!["No data submitted to search endpoint"]);
    }

    #[test]
    fn test_error_response_escapes_message() {
        let res = ProxyResponse::error(500, r#"quote " and \ slash"#);
        let parsed: ErrorBody = serde_json::from_slice(&res.body).unwrap();
        assert_eq!(parsed.errors[0], r#"quote " and \ slash"#);
    }

    #[test]
    fn test_relayed_response() {
        let res = ProxyResponse::new(200, None, Vec::new());
        assert!(res.is_success());
        assert!(!res.has_body());
        assert!(res.content_type.is_none());

        let res = ProxyResponse::new(
            404,
            Some("application/json".to_string()),
            br#"{"errors":["Not found"]}"#.to_vec(),
        );
        assert!(!res.is_success());
        assert!(res.has_body());
    }
}
