//! Sluice - fetch secrets once, hand them to your application.

use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use sluice::cli::output;
use sluice::cli::{execute, Cli, LogFormat};
use sluice::core::constants;
use sluice::error::{ConfigError, Error};

fn main() {
    let cli = Cli::parse();

    // Initialize tracing subscriber with env-filter support
    let filter = EnvFilter::try_from_env(constants::LOG_ENV).unwrap_or_else(|_| {
        if cli.verbose {
            EnvFilter::new("sluice=debug")
        } else {
            EnvFilter::new("sluice=info")
        }
    });

    let registry = tracing_subscriber::registry().with(filter);
    match cli.log_format {
        LogFormat::Json => registry
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .init(),
        LogFormat::Text => registry
            .with(
                fmt::layer()
                    .with_target(false)
                    .without_time()
                    .with_writer(std::io::stderr),
            )
            .init(),
    }

    if let Err(e) = execute(cli.command) {
        let suggestion = match &e {
            Error::Config(ConfigError::UnknownProvider(_)) => {
                Some("set SLUICE_SM_PROVIDER to one of: vault, file, command")
            }
            Error::Config(ConfigError::MissingSetting { .. }) => {
                Some("run: sluice check")
            }
            Error::Projection(_) => {
                Some("directives look like SLUICE_LA_ENV_READ_AND_SET_1=\"secret-field,ENV_NAME\"")
            }
            _ => None,
        };

        output::error(&e.to_string());
        if let Some(hint) = suggestion {
            output::hint(hint);
        }
        std::process::exit(1);
    }
}
