//! Constants used throughout sluice.
//!
//! Centralizes the recognized environment keys.

/// Secret backend kind (`vault`, `file`, `command`).
pub const SM_PROVIDER: &str = "SLUICE_SM_PROVIDER";

/// Name of the secret bundle to fetch.
pub const SM_KEY: &str = "SLUICE_SM_KEY";

/// Vault server address, e.g. `http://vault:8200`.
pub const SM_VAULT_ADDR: &str = "SLUICE_SM_VAULT_ADDR";

/// Vault token. Takes precedence over user/password login.
pub const SM_VAULT_TOKEN: &str = "SLUICE_SM_VAULT_TOKEN";

/// Vault userpass login user.
pub const SM_VAULT_USER: &str = "SLUICE_SM_VAULT_USER";

/// Vault userpass login password.
pub const SM_VAULT_PASS: &str = "SLUICE_SM_VAULT_PASS";

/// Vault KV v2 mount.
pub const SM_VAULT_MOUNT: &str = "SLUICE_SM_VAULT_MOUNT";

/// JSON file read by the `file` backend.
pub const SM_FILE: &str = "SLUICE_SM_FILE";

/// Shell command run by the `command` backend.
pub const SM_COMMAND: &str = "SLUICE_SM_COMMAND";

/// Default Vault KV v2 mount.
pub const DEFAULT_VAULT_MOUNT: &str = "secret";

/// Path of the materialized secret file.
pub const LA_OUT_FILE: &str = "SLUICE_LA_OUT_FILE";

/// Encoding of the materialized secret file.
pub const LA_OUT_FILE_FORMAT: &str = "SLUICE_LA_OUT_FILE_FORMAT";

/// Prefix of projection directives (`SLUICE_LA_ENV_READ_AND_SET_1="field,ENV"`).
pub const LA_DIRECTIVE_PREFIX: &str = "SLUICE_LA_ENV_READ_AND_SET_";

/// Command line of the application to launch.
pub const LA_CMD_APP: &str = "SLUICE_LA_CMD_APP";

/// Tracing filter directive.
pub const LOG_ENV: &str = "SLUICE_LOG";

/// Log output format (`text` or `json`).
pub const LOG_FORMAT_ENV: &str = "SLUICE_LOG_FORMAT";
