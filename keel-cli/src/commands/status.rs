//! Status command - show wiring, connectivity and session

use anyhow::Result;
use colored::Colorize;

use super::get_context;
use crate::output;

pub async fn run(json: bool) -> Result<()> {
    let ctx = get_context()?;
    let status = ctx.status_service.get_status().await?;

    if json {
        println!("{}", serde_json::to_string_pretty(&status)?);
        return Ok(());
    }

    println!("{}", "Keel Status".bold());
    println!();

    let mut table = output::create_table();
    table.add_row(vec!["Mode", &status.mode]);
    table.add_row(vec![
        "Endpoint",
        status.endpoint.as_deref().unwrap_or("(not configured)"),
    ]);
    table.add_row(vec![
        "Network",
        if status.connected { "connected" } else { "offline" },
    ]);
    println!("{}", table);
    println!();

    match status.session {
        Some(session) => {
            println!("{}", "Session".bold());
            println!("  {} via {} since {}", session.email, session.source, session.started_at);
        }
        None => output::info("Not signed in."),
    }

    Ok(())
}
