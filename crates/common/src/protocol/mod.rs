mod request;
mod response;

pub use request::{IncomingRequest, UpstreamRequest};
pub use response::{ErrorBody, ProxyResponse};
