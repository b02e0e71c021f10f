//! Logout command

use anyhow::Result;
use dialoguer::Confirm;
use keel_core::ports::{NoParamsUseCase, VoidUseCase};
use keel_core::{LogEvent, LogoutParams};

use super::{get_context, get_logger, log_event};
use crate::output;

pub async fn run(everywhere: bool, force: bool) -> Result<()> {
    let ctx = get_context()?;
    let logger = get_logger();

    let Some(user) = ctx.current_user.call().await? else {
        output::info("Not signed in.");
        return Ok(());
    };

    if !force {
        let prompt = format!("Sign out {}?", user.email);
        if !Confirm::new().with_prompt(prompt).default(true).interact()? {
            return Ok(());
        }
    }

    let result = ctx.logout.call(LogoutParams { everywhere }).await;
    match &result {
        Ok(()) => log_event(&logger, LogEvent::new("logout").succeeded()),
        Err(e) => log_event(&logger, LogEvent::new("logout").failed(e.to_string())),
    }
    result?;

    output::success("Signed out");
    Ok(())
}
