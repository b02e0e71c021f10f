//! Login command - sign in against the configured endpoint

use std::time::{Duration, Instant};

use anyhow::Result;
use dialoguer::Password;
use indicatif::ProgressBar;
use keel_core::ports::UseCase;
use keel_core::{Credentials, LogEvent, OperationResult, User};

use super::{get_context, get_logger, log_event};
use crate::output;

pub async fn run(email: String, password: Option<String>, json: bool) -> Result<()> {
    let ctx = get_context()?;
    let logger = get_logger();

    let password = match password {
        Some(password) => password,
        None => Password::new().with_prompt("Password").interact()?,
    };

    let credentials = Credentials::new(email, password)?;

    let spinner = if json {
        None
    } else {
        let spinner = ProgressBar::new_spinner();
        spinner.set_message("Signing in...");
        spinner.enable_steady_tick(Duration::from_millis(80));
        Some(spinner)
    };

    let started = Instant::now();
    let result = ctx.login.call(credentials).await;
    let duration_ms = started.elapsed().as_millis() as i64;

    if let Some(spinner) = spinner {
        spinner.finish_and_clear();
    }

    let source = if ctx.config.demo_mode { "demo" } else { "http" };
    let event = LogEvent::new("login")
        .with_source(source)
        .with_duration_ms(duration_ms);
    match &result {
        Ok(_) => log_event(&logger, event.succeeded()),
        Err(e) => log_event(&logger, event.failed(e.to_string())),
    }

    if json {
        let op: OperationResult<User> = result.into();
        println!("{}", serde_json::to_string_pretty(&op)?);
        return Ok(());
    }

    let user = result?;
    let name = user.display_name.unwrap_or(user.email);
    output::success(&format!("Signed in as {}", name));
    Ok(())
}
