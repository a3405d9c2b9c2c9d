//! Response body decoding.
//!
//! HAR captures store binary bodies base64-encoded in `content.text`, but the
//! encoding marker is unreliable in the wild, so decoding is lenient: try
//! strict standard base64 first, keep the literal text otherwise. The route
//! taken is tagged on the result instead of being guessed again later.

use base64::{engine::general_purpose, Engine as _};

/// Decoded response body, tagged with the route that produced it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DecodedPayload {
    /// The text was valid standard base64; these are the decoded bytes.
    Base64(Vec<u8>),
    /// Not base64; the text's own bytes are the payload.
    Literal(Vec<u8>),
}

impl DecodedPayload {
    pub fn bytes(&self) -> &[u8] {
        match self {
            DecodedPayload::Base64(b) | DecodedPayload::Literal(b) => b,
        }
    }

    /// Short route label for logs and records.
    pub fn route(&self) -> &'static str {
        match self {
            DecodedPayload::Base64(_) => "base64",
            DecodedPayload::Literal(_) => "literal",
        }
    }
}

/// Decode a captured body text. Total: anything that is not strict
/// standard-alphabet base64 passes through as its literal bytes.
pub fn decode_body(text: &str) -> DecodedPayload {
    match general_purpose::STANDARD.decode(text) {
        Ok(bytes) => DecodedPayload::Base64(bytes),
        Err(_) => DecodedPayload::Literal(text.as_bytes().to_vec()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use base64::engine::general_purpose::STANDARD;

    #[test]
    fn decodes_valid_base64() {
        let decoded = decode_body("aGVsbG8gd29ybGQ=");
        assert_eq!(decoded, DecodedPayload::Base64(b"hello world".to_vec()));
        assert_eq!(decoded.route(), "base64");
    }

    #[test]
    fn base64_round_trip_is_exact() {
        let original: Vec<u8> = (0u8..=255).collect();
        let encoded = STANDARD.encode(&original);
        assert_eq!(decode_body(&encoded), DecodedPayload::Base64(original));
    }

    #[test]
    fn plain_text_degrades_to_literal() {
        let text = "body { margin: 0; }";
        let decoded = decode_body(text);
        assert_eq!(decoded, DecodedPayload::Literal(text.as_bytes().to_vec()));
        assert_eq!(decoded.route(), "literal");
    }

    #[test]
    fn bad_padding_degrades_to_literal() {
        let decoded = decode_body("aGVsbG8");
        assert_eq!(decoded, DecodedPayload::Literal(b"aGVsbG8".to_vec()));
    }

    #[test]
    fn empty_text_is_empty_base64() {
        // Empty string is valid base64 for zero bytes.
        assert_eq!(decode_body(""), DecodedPayload::Base64(Vec::new()));
    }
}
