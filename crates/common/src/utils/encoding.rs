use base64::{Engine as _, engine::general_purpose::STANDARD};

/// Encode a binary response body for API Gateway
pub fn encode_body(body: &[u8]) -> String {
    STANDARD.encode(body)
}

/// Decode a base64 request body delivered by API Gateway
pub fn decode_body(encoded: &str) -> Result<Vec<u8>, base64::DecodeError> {
    STANDARD.decode(encoded)
}
