//! Core of the search proxy
//!
//! This crate provides the configuration, request/response types, validation
//! and the `ProxyHandler` pipeline shared by the Lambda handler and the CLI.

pub mod config;
pub mod constants;
pub mod error;
pub mod extensions;
pub mod protocol;
pub mod proxy;
pub mod upstream;
pub mod utils;
pub mod validation;

// Re-export commonly used types for convenience
pub use config::{OutboundProxy, ProxyConfig};
pub use error::{ProxyError, Result};
pub use extensions::{BodyHook, Extensions};
pub use protocol::{ErrorBody, IncomingRequest, ProxyResponse, UpstreamRequest};
pub use proxy::ProxyHandler;
pub use upstream::UpstreamClient;
pub use utils::{decode_body, encode_body, passthrough_headers};
