//! Application state container consumed by the host view layer.
//!
//! All tool state lives in one explicit [`AppState`] value the host passes by
//! reference to its views; derivations (the aligned diff, formatted
//! timestamps) are pure functions recomputed from scratch on every call, so
//! there is nothing to invalidate and the invariants stay trivially
//! checkable. Side-effecting helpers (clipboard) are injected capabilities,
//! keeping this module and its tests free of any UI runtime.

use std::fmt::{self, Display};

use chrono::{DateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};

use crate::config::{AppConfig, DiffConfig};
use crate::diff::{self, AlignedResult, Aligner};
use crate::errors::ToolError;
use crate::highlight::Language;
use crate::tools::timestamp::{DateParts, Rendition};
use crate::tools::{base64, json, timestamp, url};

/// Identifier of one sidebar tool.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ToolId {
    Diff,
    Json,
    Base64,
    Url,
    Timestamp,
}

impl ToolId {
    /// All tools in sidebar order.
    pub const ALL: [ToolId; 5] = [
        ToolId::Diff,
        ToolId::Json,
        ToolId::Base64,
        ToolId::Url,
        ToolId::Timestamp,
    ];

    /// Stable identifier, also the serde wire name.
    pub fn as_str(&self) -> &'static str {
        match self {
            ToolId::Diff => "diff",
            ToolId::Json => "json",
            ToolId::Base64 => "base64",
            ToolId::Url => "url",
            ToolId::Timestamp => "timestamp",
        }
    }

    /// Sidebar display name.
    pub fn name(&self) -> &'static str {
        match self {
            ToolId::Diff => "Diff Viewer",
            ToolId::Json => "JSON Formatter",
            ToolId::Base64 => "Base64 Encoder",
            ToolId::Url => "URL Encoder",
            ToolId::Timestamp => "Timestamp Converter",
        }
    }

    /// Route path within the host shell.
    pub fn path(&self) -> &'static str {
        match self {
            ToolId::Diff => "/diff",
            ToolId::Json => "/json-formatter",
            ToolId::Base64 => "/base64",
            ToolId::Url => "/url",
            ToolId::Timestamp => "/timestamp",
        }
    }

    /// Parses a stable identifier back into a tool id.
    pub fn from_string(s: &str) -> Result<ToolId, ToolError> {
        match s {
            "diff" => Ok(ToolId::Diff),
            "json" => Ok(ToolId::Json),
            "base64" => Ok(ToolId::Base64),
            "url" => Ok(ToolId::Url),
            "timestamp" => Ok(ToolId::Timestamp),
            _ => Err(ToolError::UnknownTool(s.to_string())),
        }
    }
}

impl Display for ToolId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// The diff viewer's two view states. Input shows the two text areas;
/// Result shows the aligned columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DiffView {
    #[default]
    Input,
    Result,
}

/// State backing the diff viewer tool.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiffViewerState {
    pub left_text: String,
    pub right_text: String,
    pub view: DiffView,
    pub language: Language,
}

impl DiffViewerState {
    pub fn new(language: Language) -> Self {
        Self {
            language,
            ..Self::default()
        }
    }

    /// Switch to the result view. Gated on at least one input being
    /// non-empty; returns whether the transition happened.
    pub fn show_diff(&mut self) -> bool {
        if self.left_text.is_empty() && self.right_text.is_empty() {
            return false;
        }
        self.view = DiffView::Result;
        true
    }

    /// Return to the input view.
    pub fn back(&mut self) {
        self.view = DiffView::Input;
    }

    /// Exchange the original and modified texts.
    pub fn swap(&mut self) {
        std::mem::swap(&mut self.left_text, &mut self.right_text);
    }

    /// Drop both texts and return to the input view.
    pub fn clear(&mut self) {
        self.left_text.clear();
        self.right_text.clear();
        self.view = DiffView::Input;
    }

    /// Recompute the full alignment from the current texts.
    ///
    /// Recomputed from scratch on every call; an oversized input fails closed
    /// with no partial alignment.
    pub fn aligned(&self, config: &DiffConfig) -> Result<AlignedResult, ToolError> {
        Aligner::check_input_size(&self.left_text, &self.right_text, config.max_diff_lines)?;
        let aligned = diff::align(&self.left_text, &self.right_text);
        tracing::debug!("aligned diff: {} row pairs", aligned.len());
        Ok(aligned)
    }
}

/// State backing the JSON formatter tool.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct JsonFormatterState {
    pub input: String,
    pub output: String,
    pub error: Option<String>,
}

impl JsonFormatterState {
    pub fn pretty(&mut self) {
        self.run(json::pretty);
    }

    pub fn minify(&mut self) {
        self.run(json::minify);
    }

    /// On failure the output is cleared: no partial result is ever shown.
    fn run(&mut self, op: fn(&str) -> Result<String, ToolError>) {
        match op(&self.input) {
            Ok(out) => {
                self.output = out;
                self.error = None;
            }
            Err(err) => {
                tracing::warn!("JSON transform failed: {err}");
                self.output.clear();
                self.error = Some(err.to_string());
            }
        }
    }

    pub fn clear(&mut self) {
        self.input.clear();
        self.output.clear();
        self.error = None;
    }
}

/// Shared input/output state for the Base64 and URL encoder tools.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EncoderState {
    pub input: String,
    pub output: String,
    pub error: Option<String>,
}

impl EncoderState {
    fn apply<F>(&mut self, op: F)
    where
        F: Fn(&str) -> Result<String, ToolError>,
    {
        match op(&self.input) {
            Ok(out) => {
                self.output = out;
                self.error = None;
            }
            Err(err) => {
                tracing::warn!("encoder transform failed: {err}");
                self.output.clear();
                self.error = Some(err.to_string());
            }
        }
    }

    /// Use the previous output as the next input.
    pub fn swap(&mut self) {
        self.input = std::mem::take(&mut self.output);
        self.error = None;
    }

    pub fn clear(&mut self) {
        self.input.clear();
        self.output.clear();
        self.error = None;
    }
}

/// State backing the timestamp converter tool.
///
/// Stores the resolved instants, not their formatted strings: formatting
/// depends on "now" and the host zone, so it is derived per render via
/// [`TimestampState::ts_rendition`] and [`TimestampState::date_rendition`].
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimestampState {
    pub ts_input: String,
    pub date: DateParts,
    pub ts_instant: Option<DateTime<Utc>>,
    pub date_instant: Option<DateTime<Utc>>,
    pub ts_error: Option<String>,
    pub date_error: Option<String>,
}

impl TimestampState {
    /// Convert the timestamp field to an instant.
    pub fn convert_timestamp(&mut self) {
        match timestamp::parse_timestamp(&self.ts_input) {
            Ok(instant) => {
                self.ts_instant = Some(instant);
                self.ts_error = None;
            }
            Err(err) => {
                self.ts_instant = None;
                self.ts_error = Some(err.to_string());
            }
        }
    }

    /// Resolve the date form fields to an instant in the host zone.
    pub fn convert_date<Tz: TimeZone>(&mut self, tz: &Tz) {
        match self.date.resolve(tz) {
            Ok(instant) => {
                self.date_instant = Some(instant);
                self.date_error = None;
            }
            Err(err) => {
                self.date_instant = None;
                self.date_error = Some(err.to_string());
            }
        }
    }

    /// Formatted result block for the timestamp conversion, if any.
    pub fn ts_rendition<Tz: TimeZone>(&self, now: DateTime<Utc>, tz: &Tz) -> Option<Rendition> {
        self.ts_instant.map(|instant| Rendition::of(instant, now, tz))
    }

    /// Formatted result block for the date conversion, if any.
    pub fn date_rendition<Tz: TimeZone>(&self, now: DateTime<Utc>, tz: &Tz) -> Option<Rendition> {
        self.date_instant.map(|instant| Rendition::of(instant, now, tz))
    }

    /// Reset everything and prefill the date form with the current time.
    pub fn clear<Tz: TimeZone>(&mut self, now: DateTime<Utc>, tz: &Tz) {
        self.ts_input.clear();
        self.date = DateParts::from_instant(now, tz);
        self.ts_instant = None;
        self.date_instant = None;
        self.ts_error = None;
        self.date_error = None;
    }
}

/// The whole application state behind the sidebar shell.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppState {
    pub active_tool: ToolId,
    pub sidebar_collapsed: bool,
    pub diff: DiffViewerState,
    pub json: JsonFormatterState,
    pub base64: EncoderState,
    pub url: EncoderState,
    pub timestamp: TimestampState,
}

impl AppState {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            active_tool: config.default_tool,
            sidebar_collapsed: config.sidebar_collapsed,
            diff: DiffViewerState::new(config.diff.language),
            json: JsonFormatterState::default(),
            base64: EncoderState::default(),
            url: EncoderState::default(),
            timestamp: TimestampState::default(),
        }
    }

    pub fn select_tool(&mut self, tool: ToolId) {
        self.active_tool = tool;
    }

    pub fn toggle_sidebar(&mut self) {
        self.sidebar_collapsed = !self.sidebar_collapsed;
    }

    pub fn encode_base64(&mut self) {
        self.base64.apply(|s| Ok(base64::encode(s)));
    }

    pub fn decode_base64(&mut self) {
        self.base64.apply(base64::decode);
    }

    pub fn encode_url(&mut self) {
        self.url.apply(|s| Ok(url::encode(s)));
    }

    pub fn decode_url(&mut self) {
        self.url.apply(url::decode);
    }

    pub fn encode_url_full(&mut self) {
        self.url.apply(|s| Ok(url::encode_uri(s)));
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(&AppConfig::default())
    }
}

/// Injected clipboard capability.
///
/// The host supplies its platform clipboard; tests use an in-memory one. The
/// write is fire-and-forget with a local outcome and no effect on any tool
/// state.
pub trait Clipboard {
    fn write_text(&mut self, text: &str) -> Result<(), ToolError>;
}

/// Copy `text` through the injected clipboard, reporting whether it landed.
pub fn copy_output(clipboard: &mut dyn Clipboard, text: &str) -> bool {
    match clipboard.write_text(text) {
        Ok(()) => true,
        Err(err) => {
            tracing::warn!("copy to clipboard failed: {err}");
            false
        }
    }
}

/// Character-count label for a panel header: `"123 chars"` or `"Empty"`.
pub fn panel_info(text: &str) -> String {
    if text.is_empty() {
        "Empty".to_string()
    } else {
        format!("{} chars", text.chars().count())
    }
}
