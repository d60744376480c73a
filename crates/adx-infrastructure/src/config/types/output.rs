//! Console output configuration types

use serde::{Deserialize, Serialize};

/// Console output configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Force ANSI styling on or off; `None` detects a terminal
    pub ansi: Option<bool>,

    /// Link printed next to the "Validation Framework" banner
    pub validation_docs_url: Option<String>,
}
