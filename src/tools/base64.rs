//! Base64 encoding and decoding of UTF-8 text, standard alphabet with
//! padding.

use base64::Engine;
use base64::engine::general_purpose::STANDARD;

use crate::errors::ToolError;

/// Encode the input's UTF-8 bytes as Base64.
pub fn encode(input: &str) -> String {
    STANDARD.encode(input.as_bytes())
}

/// Decode a Base64 string back into UTF-8 text.
///
/// Distinguishes malformed Base64 from a payload that is not valid UTF-8.
pub fn decode(input: &str) -> Result<String, ToolError> {
    let bytes = STANDARD
        .decode(input.trim())
        .map_err(|e| ToolError::InvalidBase64(e.to_string()))?;
    String::from_utf8(bytes).map_err(|e| ToolError::InvalidUtf8(e.to_string()))
}
