//! Demo mode command

use anyhow::Result;
use clap::Subcommand;
use keel_core::config::Config;

use super::get_keel_dir;
use crate::output;

#[derive(Subcommand)]
pub enum DemoCommands {
    /// Enable demo mode
    On,
    /// Disable demo mode
    Off,
    /// Show demo mode status
    Status,
}

pub fn run(command: Option<DemoCommands>) -> Result<()> {
    let keel_dir = get_keel_dir();
    std::fs::create_dir_all(&keel_dir)?;
    let mut config = Config::load(&keel_dir)?;

    match command.unwrap_or(DemoCommands::Status) {
        DemoCommands::On => {
            config.enable_demo_mode();
            config.save(&keel_dir)?;
            output::success("Demo mode enabled");
            println!("Sign in with ada@example.com / demo");
        }
        DemoCommands::Off => {
            config.disable_demo_mode();
            config.save(&keel_dir)?;
            output::success("Demo mode disabled");
        }
        DemoCommands::Status => {
            let state = if config.demo_mode { "on" } else { "off" };
            println!("Demo mode is {}", state);
        }
    }
    Ok(())
}
