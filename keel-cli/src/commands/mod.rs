//! CLI command implementations

pub mod demo;
pub mod login;
pub mod logout;
pub mod logs;
pub mod probe;
pub mod status;
pub mod whoami;

use std::path::PathBuf;

use anyhow::{Context, Result};
use keel_core::{EntryPoint, KeelContext, LogEvent, LoggingService};

/// Get the logging service for CLI operations
///
/// Returns None if logging fails to initialize (shouldn't block operations)
pub fn get_logger() -> Option<LoggingService> {
    let keel_dir = get_keel_dir();
    std::fs::create_dir_all(&keel_dir).ok()?;
    LoggingService::new(&keel_dir, EntryPoint::Cli, env!("CARGO_PKG_VERSION")).ok()
}

/// Log an event, ignoring any errors (logging should never break the app)
pub fn log_event(logger: &Option<LoggingService>, event: LogEvent) {
    if let Some(l) = logger {
        let _ = l.log(event);
    }
}

/// Get the keel directory from environment or default
pub fn get_keel_dir() -> PathBuf {
    if let Ok(dir) = std::env::var("KEEL_DIR") {
        PathBuf::from(dir)
    } else {
        dirs::home_dir()
            .expect("Could not find home directory")
            .join(".keel")
    }
}

/// Get or create keel context
pub fn get_context() -> Result<KeelContext> {
    let keel_dir = get_keel_dir();

    std::fs::create_dir_all(&keel_dir)
        .with_context(|| format!("Failed to create keel directory: {:?}", keel_dir))?;

    KeelContext::new(&keel_dir).context("Failed to initialize keel context")
}
