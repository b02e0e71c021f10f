//! Keel CLI - account client in your terminal

use std::process::ExitCode;

use anyhow::Result;
use clap::{Parser, Subcommand};

mod commands;
mod output;

use commands::{demo, login, logout, logs, probe, status, whoami};

/// Keel - account client in your terminal
#[derive(Parser)]
#[command(name = "keel", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show wiring, connectivity and session status
    Status {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Sign in to the configured endpoint
    Login {
        /// Email address
        email: String,
        /// Password (prompted when omitted)
        #[arg(short, long)]
        password: Option<String>,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// End the current session
    Logout {
        /// End every session for this user, not just the local one
        #[arg(long)]
        everywhere: bool,
        /// Skip confirmation prompt
        #[arg(long, short)]
        force: bool,
    },

    /// Show the signed-in user
    Whoami {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Check endpoint reachability
    Probe {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Manage demo mode
    Demo {
        #[command(subcommand)]
        command: Option<demo::DemoCommands>,
    },

    /// Show recent operational log entries
    Logs {
        /// Number of entries to show
        #[arg(long, default_value_t = 20)]
        limit: usize,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    output::init_colors();

    let runtime = match tokio::runtime::Runtime::new() {
        Ok(runtime) => runtime,
        Err(e) => {
            eprintln!("{}", e);
            return ExitCode::FAILURE;
        }
    };

    match runtime.block_on(run(cli)) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Status { json } => status::run(json).await,
        Commands::Login { email, password, json } => login::run(email, password, json).await,
        Commands::Logout { everywhere, force } => logout::run(everywhere, force).await,
        Commands::Whoami { json } => whoami::run(json).await,
        Commands::Probe { json } => probe::run(json).await,
        Commands::Demo { command } => demo::run(command),
        Commands::Logs { limit, json } => logs::run(limit, json),
    }
}
