//! DevTools-Core: the engine behind the DevToolsX utility collection. It
//! implements every tool's logic and the shared application state, leaving
//! rendering, routing and styling to the host UI.
//!
//! Goals
//! - Keep every derivation pure: recompute from inputs on each call, cache
//!   nothing, so results are deterministic and trivially testable.
//! - Expose serde-friendly types the host can pass across any UI boundary.
//! - Model side effects (clipboard) as injected capabilities.
//!
//! Core Capabilities
//! - Side-by-side line-diff alignment with empty-row padding and derived
//!   `+N / -M` counts (`diff`).
//! - JSON pretty/minify, Base64 and URL codecs, Unix timestamp ↔ date
//!   conversion (`tools`).
//! - Per-line regex syntax highlighting over a fixed language set
//!   (`highlight`).
//! - The sidebar tool table and all per-tool view state, including the diff
//!   viewer's Input/Result machine (`state`).
//!
//! Modules
//! - `diff`: change records, the aligner, display rows and stats.
//! - `tools`: the pure text transforms, one submodule per tool.
//! - `highlight`: language tags, tokens, the line tokenizer.
//! - `state`: the `AppState` container and clipboard capability.
//! - `config`: host-tunable defaults.
//! - `errors`: unified error types.
//!
//! Typical Usage
//! - Diff two texts: `align(original, modified)` then walk `left`/`right` by
//!   one shared index, styling rows by their kind.
//! - Drive a tool: mutate its state (`AppState`), call its action method, and
//!   render the stored output or error.

pub mod config;
pub mod diff;
pub mod errors;
pub mod highlight;
pub mod state;
pub mod tools;

// Core types and entry points most hosts need.
pub use config::{AppConfig, DiffConfig};
pub use diff::{
    AlignedResult, Aligner, ChangeKind, ChangeRecord, DiffStats, DisplayRow, LineDiffer,
    MyersLineDiffer, RowKind, align,
};
pub use errors::ToolError;
pub use highlight::{Language, LineHighlighter, RegexHighlighter, Token, TokenKind};
pub use state::{AppState, Clipboard, DiffView, ToolId, copy_output};
