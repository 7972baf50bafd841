use thiserror::Error;

use crate::protocol::ProxyResponse;

/// Failures detected by the proxy itself before any upstream call
///
/// Display strings are sent to the client verbatim, so none of them may
/// mention the search key or the upstream endpoint.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ProxyError {
    #[error("Search proxy is not enabled")]
    Disabled,

    #[error("Required environment value not found for search-proxy")]
    MisconfiguredEnvironment,

    #[error("Search key not correctly configured for search-proxy")]
    InvalidKeyFormat,

    #[error("No data submitted to search endpoint")]
    EmptyBody,

    #[error("Attempted to access blocked endpoint")]
    EndpointNotAllowed,

    #[error("Failed to build upstream client: {0}")]
    ClientBuild(String),
}

impl ProxyError {
    /// HTTP status returned to the caller for this failure
    pub fn status_code(&self) -> u16 {
        match self {
            ProxyError::EndpointNotAllowed => 403,
            _ => 500,
        }
    }

    /// Short machine-friendly name used in log fields
    pub fn kind(&self) -> &'static str {
        match self {
            ProxyError::Disabled => "disabled",
            ProxyError::MisconfiguredEnvironment => "misconfigured_environment",
            ProxyError::InvalidKeyFormat => "invalid_key_format",
            ProxyError::EmptyBody => "empty_body",
            ProxyError::EndpointNotAllowed => "endpoint_not_allowed",
            ProxyError::ClientBuild(_) => "client_build",
        }
    }

    /// Synthesize the `{"errors": [...]}` response for this failure
    pub fn to_response(&self) -> ProxyResponse {
        ProxyResponse::error(self.status_code(), &self.to_string())
    }
}

/// Type alias for Results using ProxyError
pub type Result<T> = std::result::Result<T, ProxyError>;
