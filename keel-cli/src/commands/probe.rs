//! Probe command - check endpoint reachability

use std::time::Duration;

use anyhow::Result;
use indicatif::ProgressBar;

use super::get_context;
use crate::output;

pub async fn run(json: bool) -> Result<()> {
    let ctx = get_context()?;

    let spinner = if json {
        None
    } else {
        let spinner = ProgressBar::new_spinner();
        spinner.set_message("Probing...");
        spinner.enable_steady_tick(Duration::from_millis(80));
        Some(spinner)
    };

    let status = ctx.status_service.get_status().await?;

    if let Some(spinner) = spinner {
        spinner.finish_and_clear();
    }

    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&serde_json::json!({
                "connected": status.connected,
                "mode": status.mode,
                "endpoint": status.endpoint,
            }))?
        );
        return Ok(());
    }

    if status.connected {
        output::success(&format!("Endpoint reachable ({} mode)", status.mode));
        Ok(())
    } else {
        anyhow::bail!("Endpoint is not reachable")
    }
}
