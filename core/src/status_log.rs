use crate::traits::LogSink;
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

#[derive(Clone, Copy, Serialize, Deserialize, Debug, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Info,
    Success,
    Warning,
    Error,
}

impl Severity {
    pub fn as_str(self) -> &'static str {
        match self {
            Severity::Info => "info",
            Severity::Success => "success",
            Severity::Warning => "warning",
            Severity::Error => "error",
        }
    }
}

#[derive(Clone, Serialize, Deserialize, Debug, PartialEq, Eq)]
pub struct LogEntry {
    pub text: String,
    pub severity: Severity,
}

/// Append-only log that keeps the newest `max_entries` lines.
#[derive(Debug, Clone)]
pub struct StatusLog {
    pub entries: VecDeque<LogEntry>,
    pub max_entries: usize,
}

impl StatusLog {
    pub fn new(max_entries: usize) -> Self {
        assert!(max_entries > 0, "status log needs room for at least one entry");
        Self {
            entries: VecDeque::with_capacity(max_entries),
            max_entries,
        }
    }

    pub fn append(&mut self, text: String, severity: Severity) {
        self.entries.push_back(LogEntry { text, severity });
        while self.entries.len() > self.max_entries {
            self.entries.pop_front();
        }
    }

    /// Changes the retention limit, dropping the oldest lines if needed.
    pub fn resize(&mut self, max_entries: usize) {
        assert!(max_entries > 0, "status log needs room for at least one entry");
        self.max_entries = max_entries;
        while self.entries.len() > self.max_entries {
            self.entries.pop_front();
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn last(&self) -> Option<&LogEntry> {
        self.entries.back()
    }

    pub fn iter(&self) -> impl Iterator<Item = &LogEntry> {
        self.entries.iter()
    }

    pub fn contains(&self, needle: &str) -> bool {
        self.entries.iter().any(|e| e.text.contains(needle))
    }

    pub fn reset(&mut self) {
        self.entries.clear();
    }
}

impl Default for StatusLog {
    fn default() -> Self {
        Self::new(crate::LOG_CAPACITY)
    }
}

impl LogSink for StatusLog {
    fn append_log_line(&mut self, text: String, severity: Severity) {
        self.append(text, severity);
    }

    fn clear_log(&mut self) {
        self.reset();
    }

    fn set_capacity(&mut self, max_entries: usize) {
        self.resize(max_entries);
    }
}

/// `[HH:MM:SS.mmm]` rendering of a virtual clock reading.
pub fn format_timestamp(ms: u64) -> String {
    let millis = ms % 1000;
    let secs = ms / 1000;
    format!(
        "[{:02}:{:02}:{:02}.{:03}]",
        secs / 3600,
        (secs / 60) % 60,
        secs % 60,
        millis
    )
}
