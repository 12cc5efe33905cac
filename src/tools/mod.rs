//! Micro-utility text transforms.
//!
//! Each submodule is a set of pure functions from input text to output text:
//! no stored state, no side effects, recomputed from scratch on every call.
//! Failures surface as [`ToolError`](crate::errors::ToolError) and the caller
//! renders nothing (fail closed) rather than a partial result.
//!
//! Modules
//! - `json`: pretty-print and minify via `serde_json`.
//! - `base64`: standard-alphabet Base64 over UTF-8 text.
//! - `url`: percent-encoding for URL components and full URIs.
//! - `timestamp`: Unix timestamp ↔ calendar date conversion.

pub mod base64;
pub mod json;
pub mod timestamp;
pub mod url;
