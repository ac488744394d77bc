//! Command-line interface.

pub mod check;
pub mod output;
pub mod run;

use clap::{Parser, Subcommand, ValueEnum};

use crate::core::constants;

/// Sluice - fetch secrets once, hand them to your application.
#[derive(Parser)]
#[command(
    name = "sluice",
    about = "Fetch a secret bundle once, write it out, inject it into the environment and launch your application",
    version,
    after_help = "All settings are read from SLUICE_SM_* and SLUICE_LA_* environment variables."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Log output format
    #[arg(long, global = true, value_enum, default_value_t = LogFormat::Text, env = constants::LOG_FORMAT_ENV)]
    pub log_format: LogFormat,
}

/// Top-level commands.
#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Fetch secrets, write the output file, project env vars and launch (default)
    Run,

    /// Validate configuration and print the plan without fetching secrets
    Check,
}

/// Log line format.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Text,
    Json,
}

/// Execute a command. No subcommand means `run`.
pub fn execute(command: Option<Command>) -> crate::error::Result<()> {
    match command.unwrap_or(Command::Run) {
        Command::Run => run::execute(),
        Command::Check => check::execute(),
    }
}
