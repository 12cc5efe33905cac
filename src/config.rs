use serde::{Deserialize, Serialize};

use crate::diff::Aligner;
use crate::highlight::Language;
use crate::state::ToolId;

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct DiffConfig {
    /// Highlight language preselected in the diff result view.
    pub language: Language,
    /// Combined line-count cap before the aligner refuses the input.
    pub max_diff_lines: usize,
}

impl Default for DiffConfig {
    fn default() -> Self {
        Self {
            language: Language::Json,
            max_diff_lines: Aligner::MAX_DIFF_LINES,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct AppConfig {
    pub default_tool: ToolId,
    pub sidebar_collapsed: bool,
    pub diff: DiffConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            default_tool: ToolId::Diff,
            sidebar_collapsed: false,
            diff: DiffConfig::default(),
        }
    }
}
