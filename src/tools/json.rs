//! JSON pretty-printing and minification on top of `serde_json`.

use serde_json::Value;

use crate::errors::ToolError;

fn parse(input: &str) -> Result<Value, ToolError> {
    serde_json::from_str(input).map_err(|e| ToolError::InvalidJson(e.to_string()))
}

/// Re-emit the input JSON with two-space indentation.
pub fn pretty(input: &str) -> Result<String, ToolError> {
    let value = parse(input)?;
    serde_json::to_string_pretty(&value).map_err(|e| ToolError::InvalidJson(e.to_string()))
}

/// Re-emit the input JSON on a single line with no insignificant whitespace.
pub fn minify(input: &str) -> Result<String, ToolError> {
    let value = parse(input)?;
    serde_json::to_string(&value).map_err(|e| ToolError::InvalidJson(e.to_string()))
}
