//! Logs command - show recent operational log entries

use anyhow::Result;
use chrono::DateTime;
use keel_core::{EntryPoint, LoggingService};

use super::get_keel_dir;
use crate::output;

pub fn run(limit: usize, json: bool) -> Result<()> {
    let keel_dir = get_keel_dir();
    let service = LoggingService::new(&keel_dir, EntryPoint::Cli, env!("CARGO_PKG_VERSION"))?;
    let entries = service.recent(limit)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&entries)?);
        return Ok(());
    }

    if entries.is_empty() {
        output::info("No log entries.");
        return Ok(());
    }

    let mut table = output::create_table();
    table.set_header(vec!["Time", "Event", "Source", "Outcome"]);
    for entry in &entries {
        let time = DateTime::from_timestamp_millis(entry.timestamp_ms)
            .map(|t| t.format("%Y-%m-%d %H:%M:%S").to_string())
            .unwrap_or_default();
        let outcome = match entry.event.success {
            Some(true) => "ok",
            Some(false) => "failed",
            None => "-",
        };
        table.add_row(vec![
            time.as_str(),
            entry.event.event.as_str(),
            entry.event.source.as_deref().unwrap_or("-"),
            outcome,
        ]);
    }
    println!("{}", table);

    Ok(())
}
