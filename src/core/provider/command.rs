//! External command backend.
//!
//! Runs a shell command and parses its stdout as a JSON object. Lets any
//! secret manager CLI act as a backend, for example:
//!
//! ```bash
//! export SLUICE_SM_PROVIDER=command
//! export SLUICE_SM_COMMAND="vault kv get -format=json -field=data secret/app1"
//! ```

use tracing::trace;

use super::SecretFetcher;
use crate::core::bundle::SecretBundle;
use crate::core::launcher::shell;
use crate::error::{ProviderError, Result};

/// Fetches the secret bundle from a command's stdout.
pub struct CommandFetcher {
    command: String,
}

impl CommandFetcher {
    pub fn new(command: impl Into<String>) -> Self {
        Self {
            command: command.into(),
        }
    }

    /// Check that the command's program can be found before running it.
    fn check_program(&self) -> std::result::Result<(), ProviderError> {
        let program = self
            .command
            .split_whitespace()
            .next()
            .ok_or_else(|| ProviderError::CommandNotFound(String::new()))?;
        which::which(program).map_err(|_| ProviderError::CommandNotFound(program.to_string()))?;
        Ok(())
    }
}

impl SecretFetcher for CommandFetcher {
    fn name(&self) -> &'static str {
        "command"
    }

    fn fetch(&self) -> Result<SecretBundle> {
        self.check_program()?;
        trace!("running secret command");

        let output = shell(&self.command).output().map_err(ProviderError::Io)?;
        if !output.status.success() {
            return Err(ProviderError::CommandFailed {
                status: output.status.to_string(),
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            }
            .into());
        }

        trace!(stdout_len = output.stdout.len(), "secret command finished");
        let stdout = String::from_utf8_lossy(&output.stdout);
        Ok(SecretBundle::parse(&stdout)?)
    }
}
