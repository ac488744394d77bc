//! Run command.
//!
//! Fetches secrets, writes the output file, projects directives into the
//! environment and launches the application, each step when configured.

use tracing::{debug, info};

use crate::core::bundle::SecretCache;
use crate::core::config::LauncherConfig;
use crate::core::env::Environment;
use crate::core::launcher::{launch, LaunchHandle};
use crate::core::materialize::materialize;
use crate::core::projector::project;
use crate::core::provider::SecretManagerConfig;
use crate::error::Result;

/// Run the launcher against the current process environment.
///
/// The "finished" line is logged as soon as the application has been
/// started; the process then waits for the application before exiting so
/// its output is always reported.
pub fn execute() -> Result<()> {
    let handle = run(Environment::capture())?;
    info!("++ Launcher finished.");

    if let Some(handle) = handle {
        handle.wait();
    }
    Ok(())
}

/// One launcher run over an environment snapshot.
///
/// Returns the handle of the launched application, if any.
///
/// # Errors
///
/// Configuration, fetch and projection errors abort the run before
/// anything is launched. File and launch failures are only logged.
pub fn run(mut env: Environment) -> Result<Option<LaunchHandle>> {
    info!("++ Starting launcher");

    let secret_manager = SecretManagerConfig::from_env(&env)?;
    let config = LauncherConfig::from_env(&env);

    match secret_manager {
        Some(secret_manager) => {
            let cache = SecretCache::new(secret_manager.into_fetcher()?);
            let outcome = materialize(&cache, &config)?;
            debug!(?outcome, "materialization done");

            let assignments = project(&cache, &config.directives, &mut env)?;
            let targets: Vec<&str> = assignments.iter().map(|a| a.target.as_str()).collect();
            debug!(count = assignments.len(), ?targets, "projection done");
        }
        None => info!("++ Skipping generating file and env variables as no secret manager is configured"),
    }

    Ok(launch(config.command.as_deref(), &env))
}
