//! Check command.
//!
//! Validates the launcher configuration and prints what a run would do,
//! without fetching secrets or launching anything.

use crate::cli::output;
use crate::core::config::{LauncherConfig, OutputFormat};
use crate::core::env::Environment;
use crate::core::provider::{Backend, SecretManagerConfig};
use crate::error::{ProjectionError, Result};

/// Print the run plan for the current environment.
///
/// # Errors
///
/// Returns the first invalid directive after listing all of them.
pub fn execute() -> Result<()> {
    let env = Environment::capture();
    let secret_manager = SecretManagerConfig::from_env(&env)?;
    let config = LauncherConfig::from_env(&env);

    output::section("Secret manager");
    match &secret_manager {
        Some(sm) => {
            output::kv("provider:", sm.backend.name());
            if let Some(key) = &sm.key {
                output::kv("key:     ", key);
            }
            match &sm.backend {
                Backend::Vault(settings) => output::kv("address: ", &settings.addr),
                Backend::File { path } => output::kv("file:    ", path.display()),
                Backend::Command { command } => output::kv("command: ", command),
            }
        }
        None => output::dimmed("not configured; file and env steps will be skipped"),
    }

    output::section("Output file");
    match &config.out_file {
        Some(path) => {
            output::kv("path:  ", path.display());
            output::kv("format:", &config.out_format);
            if let OutputFormat::Unsupported(tag) = &config.out_format {
                output::list_error(&format!("format '{}' is not supported yet", tag));
            }
        }
        None => output::dimmed("not configured"),
    }

    output::section("Environment");
    let first_error = check_directives(&config);

    output::section("Application");
    match &config.command {
        Some(command) => output::kv("command:", command),
        None => output::dimmed("not configured"),
    }
    println!();

    match first_error {
        Some(e) => Err(e.into()),
        None => {
            output::success("configuration is valid");
            Ok(())
        }
    }
}

/// List every directive; return the first failure.
fn check_directives(config: &LauncherConfig) -> Option<ProjectionError> {
    if config.directives.is_empty() {
        output::dimmed("no directives declared");
        return None;
    }

    let mut first_error = None;
    for raw in &config.directives {
        if raw.is_blank() {
            output::list_item(&format!("{} (empty, skipped)", output::key(&raw.key)));
            continue;
        }
        match raw.parse() {
            Ok(directive) => output::list_item(&format!(
                "{} → {}",
                directive.source,
                output::key(&directive.target)
            )),
            Err(e) => {
                output::list_error(&e.to_string());
                first_error.get_or_insert(e);
            }
        }
    }
    first_error
}
