mod encoding;
mod headers;

pub use encoding::{decode_body, encode_body};
pub use headers::passthrough_headers;
