//! Append-only text log sinks.
//!
//! Two sinks exist: the progress journal and user feedback. Records are
//! timestamped plain text, written once with no retry and never read back by
//! the tool. A crash mid-write can truncate the last record; the logs are
//! non-critical so that is acceptable.

use crate::config::Config;
use crate::error::Result;
use crate::paths;
use chrono::Local;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::io::Write;
use std::path::{Path, PathBuf};

pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

// ---------------------------------------------------------------------------
// LogSink
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LogSink {
    Journal,
    Feedback,
}

impl LogSink {
    pub fn as_str(self) -> &'static str {
        match self {
            LogSink::Journal => "journal",
            LogSink::Feedback => "feedback",
        }
    }

    pub fn file_name<'a>(self, config: &'a Config) -> &'a str {
        match self {
            LogSink::Journal => &config.journal_file,
            LogSink::Feedback => &config.feedback_file,
        }
    }
}

impl fmt::Display for LogSink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Append
// ---------------------------------------------------------------------------

/// Format one record. Journal records carry only the timestamp; feedback
/// records name their author.
fn format_record(sink: LogSink, timestamp: &str, body: &str, author: &str) -> String {
    match sink {
        LogSink::Journal => format!("\n\n[{timestamp}]\n{body}"),
        LogSink::Feedback => format!("\n\n[{timestamp}] - Feedback from {author}:\n{body}"),
    }
}

/// Append a record to the sink's file under `root`, stamping it with the
/// current local time. Creates the file on first use. One attempt only; IO
/// errors surface to the caller.
pub fn append(
    root: &Path,
    config: &Config,
    sink: LogSink,
    body: &str,
    author: Option<&str>,
) -> Result<PathBuf> {
    let path = paths::log_path(root, sink.file_name(config));
    let timestamp = Local::now().format(TIMESTAMP_FORMAT).to_string();
    let author = author.unwrap_or(&config.user_name);
    let record = format_record(sink, &timestamp, body, author);

    let mut file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)?;
    file.write_all(record.as_bytes())?;
    tracing::debug!(sink = %sink, path = %path.display(), "appended log record");
    Ok(path)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn ts_shape(s: &str) -> bool {
        // YYYY-MM-DD HH:MM:SS
        let bytes = s.as_bytes();
        s.len() == 19
            && bytes[4] == b'-'
            && bytes[7] == b'-'
            && bytes[10] == b' '
            && bytes[13] == b':'
            && bytes[16] == b':'
    }

    #[test]
    fn journal_record_format() {
        let record = format_record(LogSink::Journal, "2024-01-02 03:04:05", "hello", "ignored");
        assert_eq!(record, "\n\n[2024-01-02 03:04:05]\nhello");
    }

    #[test]
    fn feedback_record_format() {
        let record = format_record(
            LogSink::Feedback,
            "2024-01-02 03:04:05",
            "great tool",
            "John Doe",
        );
        assert_eq!(
            record,
            "\n\n[2024-01-02 03:04:05] - Feedback from John Doe:\ngreat tool"
        );
    }

    #[test]
    fn append_creates_file_and_stamps() {
        let dir = TempDir::new().unwrap();
        let config = Config::default();
        let path = append(dir.path(), &config, LogSink::Journal, "hello", None).unwrap();
        assert_eq!(path, dir.path().join("journal_entries.txt"));

        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.starts_with("\n\n["));
        assert!(content.ends_with("hello"));
        let stamp = &content[3..22];
        assert!(ts_shape(stamp), "bad timestamp: {stamp}");
    }

    #[test]
    fn successive_appends_preserve_order() {
        let dir = TempDir::new().unwrap();
        let config = Config::default();
        append(dir.path(), &config, LogSink::Journal, "first", None).unwrap();
        append(dir.path(), &config, LogSink::Journal, "second", None).unwrap();

        let content =
            std::fs::read_to_string(dir.path().join("journal_entries.txt")).unwrap();
        let first = content.find("first").unwrap();
        let second = content.find("second").unwrap();
        assert!(first < second);
    }

    #[test]
    fn feedback_author_defaults_to_config_user() {
        let dir = TempDir::new().unwrap();
        let config = Config {
            user_name: "Ada".to_string(),
            ..Config::default()
        };
        append(dir.path(), &config, LogSink::Feedback, "note", None).unwrap();
        let content = std::fs::read_to_string(dir.path().join("user_feedback.txt")).unwrap();
        assert!(content.contains("- Feedback from Ada:"));
    }

    #[test]
    fn feedback_explicit_author_wins() {
        let dir = TempDir::new().unwrap();
        let config = Config::default();
        append(dir.path(), &config, LogSink::Feedback, "note", Some("Grace")).unwrap();
        let content = std::fs::read_to_string(dir.path().join("user_feedback.txt")).unwrap();
        assert!(content.contains("- Feedback from Grace:"));
    }

    #[test]
    fn configured_file_names_are_honored() {
        let dir = TempDir::new().unwrap();
        let config = Config {
            journal_file: "notes.txt".to_string(),
            ..Config::default()
        };
        append(dir.path(), &config, LogSink::Journal, "entry", None).unwrap();
        assert!(dir.path().join("notes.txt").exists());
    }
}
