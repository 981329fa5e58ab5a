//! Optional project configuration, read from `venture.yaml` at the root.
//!
//! Every field has a default, so a missing file yields a fully usable
//! configuration. Unknown keys are ignored.

use crate::error::Result;
use crate::paths;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Display name used in the greeting and as the default feedback author.
    #[serde(default = "default_user_name")]
    pub user_name: String,

    /// File the journal sink appends to, relative to the root.
    #[serde(default = "default_journal_file")]
    pub journal_file: String,

    /// File the feedback sink appends to, relative to the root.
    #[serde(default = "default_feedback_file")]
    pub feedback_file: String,

    /// Cosmetic pause before the step list renders, in milliseconds.
    /// Purely pacing for a human reader; 0 disables it.
    #[serde(default)]
    pub pacing_ms: u64,
}

fn default_user_name() -> String {
    "John Doe".to_string()
}

fn default_journal_file() -> String {
    paths::DEFAULT_JOURNAL_FILE.to_string()
}

fn default_feedback_file() -> String {
    paths::DEFAULT_FEEDBACK_FILE.to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            user_name: default_user_name(),
            journal_file: default_journal_file(),
            feedback_file: default_feedback_file(),
            pacing_ms: 0,
        }
    }
}

impl Config {
    /// Load `venture.yaml` from the root, falling back to defaults when the
    /// file is absent or empty.
    pub fn load(root: &Path) -> Result<Self> {
        let path = paths::config_path(root);
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(&path)?;
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yaml::from_str(&content)?)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
