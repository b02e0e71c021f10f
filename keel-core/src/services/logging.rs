//! Logging service - structured event logging
//!
//! Privacy-safe operational log stored as append-only JSON lines in
//! `events.jsonl`. Event payloads carry operation names and outcomes only;
//! credentials and email addresses are never logged.
//!
//! This service is designed to be used by both the CLI and embedding
//! applications.

use std::fs::OpenOptions;
use std::io::Write as _;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::{Context, Result};
use fs2::FileExt;
use serde::{Deserialize, Serialize};

const EVENTS_FILE: &str = "events.jsonl";

/// Counter for generating unique ids within the same millisecond
static ID_COUNTER: AtomicU64 = AtomicU64::new(0);

/// Generate a unique id based on timestamp + counter
fn generate_id() -> u64 {
    let timestamp = now_ms() as u64;
    // Lower 48 bits for the timestamp, upper 16 for the counter:
    // 65536 unique ids per millisecond.
    let counter = ID_COUNTER.fetch_add(1, Ordering::Relaxed) & 0xFFFF;
    (timestamp << 16) | counter
}

/// Current unix timestamp in milliseconds
fn now_ms() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as i64)
        .unwrap_or(0)
}

/// Detect the current platform
fn detect_platform() -> &'static str {
    if cfg!(target_os = "macos") {
        "macos"
    } else if cfg!(target_os = "windows") {
        "windows"
    } else if cfg!(target_os = "linux") {
        "linux"
    } else {
        "unknown"
    }
}

/// Entry point for the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryPoint {
    Cli,
    App,
}

/// A log event to be recorded
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogEvent {
    pub event: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub success: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration_ms: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl LogEvent {
    pub fn new(event: impl Into<String>) -> Self {
        Self {
            event: event.into(),
            source: None,
            success: None,
            duration_ms: None,
            error: None,
        }
    }

    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }

    pub fn succeeded(mut self) -> Self {
        self.success = Some(true);
        self
    }

    pub fn failed(mut self, error: impl Into<String>) -> Self {
        self.success = Some(false);
        self.error = Some(error.into());
        self
    }

    pub fn with_duration_ms(mut self, duration_ms: i64) -> Self {
        self.duration_ms = Some(duration_ms);
        self
    }
}

/// A recorded log entry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogEntry {
    pub id: u64,
    pub timestamp_ms: i64,
    pub entry_point: EntryPoint,
    pub version: String,
    pub platform: String,
    #[serde(flatten)]
    pub event: LogEvent,
}

/// Structured event logger
pub struct LoggingService {
    path: PathBuf,
    entry_point: EntryPoint,
    version: String,
}

impl LoggingService {
    pub fn new(keel_dir: &Path, entry_point: EntryPoint, version: &str) -> Result<Self> {
        std::fs::create_dir_all(keel_dir)
            .with_context(|| format!("Failed to create log directory {:?}", keel_dir))?;
        Ok(Self {
            path: keel_dir.join(EVENTS_FILE),
            entry_point,
            version: version.to_string(),
        })
    }

    /// Append an event to the log
    pub fn log(&self, event: LogEvent) -> Result<()> {
        let entry = LogEntry {
            id: generate_id(),
            timestamp_ms: now_ms(),
            entry_point: self.entry_point,
            version: self.version.clone(),
            platform: detect_platform().to_string(),
            event,
        };
        let line = serde_json::to_string(&entry)?;

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .with_context(|| format!("Failed to open event log {:?}", self.path))?;
        file.lock_exclusive()?;
        writeln!(file, "{}", line)?;
        Ok(())
    }

    /// The most recent `limit` entries, oldest first
    ///
    /// Unparseable lines (from older versions or torn writes) are skipped.
    pub fn recent(&self, limit: usize) -> Result<Vec<LogEntry>> {
        let content = match std::fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(e.into()),
        };

        let entries: Vec<LogEntry> = content
            .lines()
            .filter_map(|line| serde_json::from_str(line).ok())
            .collect();

        let skip = entries.len().saturating_sub(limit);
        Ok(entries.into_iter().skip(skip).collect())
    }
}
