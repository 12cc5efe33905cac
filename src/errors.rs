//! Error types for the DevTools core crate.
//!
//! This module defines a unified error enumeration used across the diff
//! input guard, the tool transforms (JSON, Base64, URL, timestamp), and the
//! injected clipboard capability. It integrates with `thiserror` to provide
//! rich `Display` implementations.
//!
//! Notes:
//! - Each variant carries contextual details via its message payload.
//! - Transform errors are surfaced to the host unmodified; the caller renders
//!   nothing on failure rather than a partial result.

use thiserror::Error;

#[derive(Error, Debug)]
/// Unified error enumeration for the DevTools core library.
///
/// - Used across tool transforms, input guards and the clipboard capability.
/// - Implements `std::error::Error` via `thiserror`.
pub enum ToolError {
    /// Input text is not valid JSON.
    #[error("invalid JSON: {0}")]
    InvalidJson(String),

    /// Input text is not a valid Base64 string.
    #[error("invalid Base64 string: {0}")]
    InvalidBase64(String),

    /// Decoded bytes are not valid UTF-8 text.
    #[error("decoded data is not valid UTF-8: {0}")]
    InvalidUtf8(String),

    /// Input text is not a valid percent-encoded string.
    #[error("invalid URL-encoded string: {0}")]
    InvalidUrlEncoding(String),

    /// Input text is not a valid Unix timestamp.
    #[error("`{0}` is not a valid Unix timestamp")]
    InvalidTimestamp(String),

    /// One of the date form fields failed validation.
    #[error("{0}")]
    InvalidDateField(String),

    /// Combined input exceeds the configured diff line limit.
    #[error("input too large to diff: {0} lines exceeds limit of {1}")]
    InputTooLarge(usize, usize),

    /// Language tag outside the supported highlighting set.
    #[error("`{0}` is not a supported language")]
    UnknownLanguage(String),

    /// Tool identifier outside the sidebar set.
    #[error("`{0}` is not a known tool")]
    UnknownTool(String),

    /// The host clipboard rejected the write.
    #[error("clipboard write failed: {0}")]
    ClipboardError(String),
}
