//! Application launch.
//!
//! Runs the configured command line through the platform shell on a
//! background thread. The caller does not wait for it: the run reports
//! completion first and joins the [`LaunchHandle`] just before exiting.

use std::process::{Command, Output};
use std::thread::JoinHandle;
use tracing::{error, info};

use crate::core::env::Environment;
use crate::error::LaunchError;

/// How the child process ended, as reported in the logs.
#[derive(Debug)]
pub enum LaunchOutcome {
    /// Spawn failed or the command exited unsuccessfully.
    Error(LaunchError),
    /// The command wrote to stderr. Stdout is not reported in this case.
    Stderr(String),
    /// Clean run; captured stdout.
    Stdout(String),
}

/// Handle to a launched command.
pub struct LaunchHandle {
    thread: JoinHandle<LaunchOutcome>,
}

impl LaunchHandle {
    /// Wait for the command and its report.
    pub fn wait(self) -> LaunchOutcome {
        self.thread
            .join()
            .unwrap_or_else(|_| LaunchOutcome::Error(LaunchError::Panicked))
    }
}

/// Build a command that runs `line` through the platform shell.
pub(crate) fn shell(line: &str) -> Command {
    #[cfg(windows)]
    {
        let mut cmd = Command::new("cmd");
        cmd.args(["/C", line]);
        cmd
    }

    #[cfg(not(windows))]
    {
        let mut cmd = Command::new("sh");
        cmd.args(["-c", line]);
        cmd
    }
}

/// Launch the configured command with the run's environment.
///
/// Returns `None` when no command is configured. The child sees exactly
/// the variables in `env`: the startup snapshot, including entries that are
/// not valid UTF-8, plus projected secrets.
pub fn launch(command: Option<&str>, env: &Environment) -> Option<LaunchHandle> {
    let Some(line) = command else {
        info!("++ Skipping application launch.");
        return None;
    };

    let mut cmd = shell(line);
    cmd.env_clear().envs(env.merged());

    info!("++ Launching application: {}", line);
    let thread = std::thread::spawn(move || {
        let outcome = classify(cmd.output());
        report(&outcome);
        outcome
    });

    Some(LaunchHandle { thread })
}

fn classify(result: std::io::Result<Output>) -> LaunchOutcome {
    let output = match result {
        Ok(output) => output,
        Err(e) => return LaunchOutcome::Error(LaunchError::Spawn(e)),
    };

    let stderr = String::from_utf8_lossy(&output.stderr);
    if !output.status.success() {
        return LaunchOutcome::Error(LaunchError::Exit {
            status: output.status.to_string(),
            stderr: stderr.trim().to_string(),
        });
    }

    if !stderr.is_empty() {
        return LaunchOutcome::Stderr(stderr.into_owned());
    }

    LaunchOutcome::Stdout(String::from_utf8_lossy(&output.stdout).into_owned())
}

fn report(outcome: &LaunchOutcome) {
    match outcome {
        LaunchOutcome::Error(e) => error!("error: {e}"),
        LaunchOutcome::Stderr(stderr) => info!("stderr: {stderr}"),
        LaunchOutcome::Stdout(stdout) => info!("stdout: {stdout}"),
    }
}
