//! Whoami command - show the signed-in user

use anyhow::Result;
use keel_core::ports::NoParamsUseCase;

use super::get_context;
use crate::output;

pub async fn run(json: bool) -> Result<()> {
    let ctx = get_context()?;
    let user = ctx.current_user.call().await?;

    if json {
        println!("{}", serde_json::to_string_pretty(&user)?);
        return Ok(());
    }

    match user {
        Some(user) => match user.display_name {
            Some(name) => println!("{} ({})", user.email, name),
            None => println!("{}", user.email),
        },
        None => output::info("Not signed in."),
    }
    Ok(())
}
