use std::path::{Path, PathBuf};

// ---------------------------------------------------------------------------
// File constants
// ---------------------------------------------------------------------------

pub const CONFIG_FILE: &str = "venture.yaml";
pub const DEFAULT_JOURNAL_FILE: &str = "journal_entries.txt";
pub const DEFAULT_FEEDBACK_FILE: &str = "user_feedback.txt";

// ---------------------------------------------------------------------------
// Path helpers
// ---------------------------------------------------------------------------

pub fn config_path(root: &Path) -> PathBuf {
    root.join(CONFIG_FILE)
}

/// Resolve a log file name against the project root.
pub fn log_path(root: &Path, file_name: &str) -> PathBuf {
    root.join(file_name)
}
