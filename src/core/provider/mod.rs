//! Secret backends.
//!
//! Each backend performs one retrieval of a named secret bundle and returns
//! it as a [`SecretBundle`]. Backends are selected by `SLUICE_SM_PROVIDER`.
//!
//! ## Backends
//!
//! - **vault**: HashiCorp Vault KV v2 over HTTP. Feature-gated (`vault`, on by default).
//! - **file**: a local JSON file. Meant for development.
//! - **command**: any shell command that prints a JSON object on stdout.
//!
//! ## Adding a New Backend
//!
//! 1. Implement the `SecretFetcher` trait in a new file
//! 2. Add a variant to `Backend` and read its settings in `SecretManagerConfig::from_env`
//! 3. Construct it in `SecretManagerConfig::into_fetcher`

use std::path::PathBuf;
use tracing::debug;
use zeroize::Zeroizing;

use crate::core::bundle::SecretBundle;
use crate::core::constants;
use crate::core::env::Environment;
use crate::error::{ConfigError, Result};

mod command;
mod file;

#[cfg(feature = "vault")]
pub mod vault;

pub use command::CommandFetcher;
pub use file::FileFetcher;

/// Secret backend trait.
///
/// One call is one backend round-trip. Callers go through
/// [`SecretCache`](crate::core::bundle::SecretCache) to fetch at most once.
pub trait SecretFetcher {
    /// Backend name for logs.
    fn name(&self) -> &'static str;

    /// Retrieve the secret bundle.
    ///
    /// # Errors
    ///
    /// Returns `ProviderError` on authentication, transport or payload failures.
    fn fetch(&self) -> Result<SecretBundle>;
}

impl<T: SecretFetcher + ?Sized> SecretFetcher for Box<T> {
    fn name(&self) -> &'static str {
        (**self).name()
    }

    fn fetch(&self) -> Result<SecretBundle> {
        (**self).fetch()
    }
}

/// Secret manager configuration read from `SLUICE_SM_*`.
#[derive(Debug, Clone)]
pub struct SecretManagerConfig {
    /// Name of the secret bundle.
    pub key: Option<String>,
    pub backend: Backend,
}

/// Backend-specific settings.
#[derive(Debug, Clone)]
pub enum Backend {
    Vault(VaultSettings),
    File { path: PathBuf },
    Command { command: String },
}

impl Backend {
    pub fn name(&self) -> &'static str {
        match self {
            Backend::Vault(_) => "vault",
            Backend::File { .. } => "file",
            Backend::Command { .. } => "command",
        }
    }
}

/// Vault connection settings.
#[derive(Debug, Clone)]
pub struct VaultSettings {
    /// Server address without trailing slash.
    pub addr: String,
    /// KV v2 mount.
    pub mount: String,
    /// Secret path under the mount.
    pub key: String,
    pub auth: VaultAuth,
}

/// How to authenticate against Vault.
#[derive(Clone)]
pub enum VaultAuth {
    Token(Zeroizing<String>),
    UserPass {
        user: String,
        password: Zeroizing<String>,
    },
}

impl std::fmt::Debug for VaultAuth {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            VaultAuth::Token(_) => f.write_str("Token(<redacted>)"),
            VaultAuth::UserPass { user, .. } => f
                .debug_struct("UserPass")
                .field("user", user)
                .field("password", &"<redacted>")
                .finish(),
        }
    }
}

impl SecretManagerConfig {
    /// Read the secret manager settings.
    ///
    /// Returns `Ok(None)` when no provider is configured; the file and
    /// environment steps are then skipped.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` for an unknown provider or missing settings.
    pub fn from_env(env: &Environment) -> std::result::Result<Option<Self>, ConfigError> {
        let Some(provider) = env.non_empty(constants::SM_PROVIDER) else {
            debug!("no secret provider configured");
            return Ok(None);
        };
        let key = env.non_empty(constants::SM_KEY).map(str::to_string);

        let backend = match provider.trim().to_ascii_lowercase().as_str() {
            "vault" => Backend::Vault(VaultSettings::from_env(env)?),
            "file" => Backend::File {
                path: PathBuf::from(require(env, "file", constants::SM_FILE)?),
            },
            "command" => Backend::Command {
                command: require(env, "command", constants::SM_COMMAND)?.to_string(),
            },
            other => return Err(ConfigError::UnknownProvider(other.to_string())),
        };

        debug!(provider = backend.name(), key = ?key, "secret manager configured");
        Ok(Some(Self { key, backend }))
    }

    /// Build the fetcher for the configured backend.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::ProviderDisabled` when the backend was compiled out.
    pub fn into_fetcher(self) -> Result<Box<dyn SecretFetcher>> {
        match self.backend {
            #[cfg(feature = "vault")]
            Backend::Vault(settings) => Ok(Box::new(vault::VaultFetcher::new(settings)?)),
            #[cfg(not(feature = "vault"))]
            Backend::Vault(_) => Err(ConfigError::ProviderDisabled("vault").into()),
            Backend::File { path } => Ok(Box::new(FileFetcher::new(path))),
            Backend::Command { command } => Ok(Box::new(CommandFetcher::new(command))),
        }
    }
}

impl VaultSettings {
    fn from_env(env: &Environment) -> std::result::Result<Self, ConfigError> {
        let addr = require(env, "vault", constants::SM_VAULT_ADDR)?
            .trim_end_matches('/')
            .to_string();
        let key = require(env, "vault", constants::SM_KEY)?
            .trim_matches('/')
            .to_string();
        let mount = env
            .non_empty(constants::SM_VAULT_MOUNT)
            .unwrap_or(constants::DEFAULT_VAULT_MOUNT)
            .trim_matches('/')
            .to_string();

        // A token wins over userpass when both are present.
        let auth = match env.non_empty(constants::SM_VAULT_TOKEN) {
            Some(token) => VaultAuth::Token(Zeroizing::new(token.to_string())),
            None => VaultAuth::UserPass {
                user: require(env, "vault", constants::SM_VAULT_USER)?.to_string(),
                password: Zeroizing::new(
                    require(env, "vault", constants::SM_VAULT_PASS)?.to_string(),
                ),
            },
        };

        Ok(Self {
            addr,
            mount,
            key,
            auth,
        })
    }
}

fn require<'a>(
    env: &'a Environment,
    provider: &'static str,
    key: &'static str,
) -> std::result::Result<&'a str, ConfigError> {
    env.non_empty(key)
        .ok_or(ConfigError::MissingSetting { provider, key })
}
