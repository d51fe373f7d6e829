//! Console logging with consistent formatting
//!
//! All user-facing output of gitsync goes through [`Logger`]. Messages are
//! colored by level and written to stdout, except errors which go to stderr.
//! A logger created with [`Logger::capturing`] also keeps every record in
//! memory so callers (and tests) can inspect what was reported.

use colored::*;
use std::sync::{Arc, Mutex};

/// Severity of a log record
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Info,
    Success,
    Warn,
    Error,
}

/// A single captured log message
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    pub level: Level,
    pub message: String,
}

/// Logger with consistent formatting
///
/// ## Example
///
/// ```rust
/// use gitsync::logger::{Level, Logger};
///
/// let logger = Logger::capturing();
/// logger.info("Executing command in /tmp/repo");
/// logger.warn("Repository directory \"/tmp/gone\" does not exist, skipping");
///
/// assert_eq!(logger.records().len(), 2);
/// assert_eq!(logger.records()[1].level, Level::Warn);
/// assert!(logger.contents().contains("/tmp/gone"));
/// ```
#[derive(Clone, Default)]
pub struct Logger {
    captured: Option<Arc<Mutex<Vec<Record>>>>,
}

impl Logger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a logger that also records every message it prints.
    /// Clones share the same buffer.
    pub fn capturing() -> Self {
        Self {
            captured: Some(Arc::new(Mutex::new(Vec::new()))),
        }
    }

    pub fn info(&self, msg: &str) {
        println!("{} {}", "info".blue().bold(), msg);
        self.record(Level::Info, msg);
    }

    pub fn success(&self, msg: &str) {
        println!("{} {}", "info".blue().bold(), msg.green());
        self.record(Level::Success, msg);
    }

    pub fn warn(&self, msg: &str) {
        println!("{} {}", "warn".yellow().bold(), msg.yellow());
        self.record(Level::Warn, msg);
    }

    pub fn error(&self, msg: &str) {
        eprintln!("{} {}", "error".red().bold(), msg.red());
        self.record(Level::Error, msg);
    }

    /// Captured records in emission order. Empty unless created with [`Logger::capturing`].
    pub fn records(&self) -> Vec<Record> {
        match &self.captured {
            Some(buffer) => buffer.lock().map(|r| r.clone()).unwrap_or_default(),
            None => Vec::new(),
        }
    }

    /// All captured messages joined by newlines
    pub fn contents(&self) -> String {
        self.records()
            .into_iter()
            .map(|r| r.message)
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn record(&self, level: Level, msg: &str) {
        if let Some(buffer) = &self.captured
            && let Ok(mut records) = buffer.lock()
        {
            records.push(Record {
                level,
                message: msg.to_string(),
            });
        }
    }
}
