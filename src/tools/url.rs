//! Percent-encoding for URL components and full URIs, on top of the
//! `urlencoding` crate.

use crate::errors::ToolError;

/// Separators a full-URI encode must leave intact, plus the unreserved marks.
const URI_UNESCAPED: &str = ";/?:@&=+$,#-_.!~*'()";

/// Percent-encode a single URL component (query value, path segment).
pub fn encode(input: &str) -> String {
    urlencoding::encode(input).into_owned()
}

/// Decode a percent-encoded string.
///
/// Stray `%` sequences that do not form valid escapes pass through verbatim;
/// the decode fails only when the decoded bytes are not valid UTF-8.
pub fn decode(input: &str) -> Result<String, ToolError> {
    urlencoding::decode(input)
        .map(|s| s.into_owned())
        .map_err(|e| ToolError::InvalidUrlEncoding(e.to_string()))
}

/// Percent-encode a full URI, keeping scheme/path/query separators intact.
pub fn encode_uri(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut buf = [0u8; 4];
    for ch in input.chars() {
        if ch.is_ascii_alphanumeric() || URI_UNESCAPED.contains(ch) {
            out.push(ch);
        } else {
            out.push_str(&urlencoding::encode(ch.encode_utf8(&mut buf)));
        }
    }
    out
}
