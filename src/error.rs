//! Error types for sluice.
//!
//! Each concern has its own enum; [`Error`] wraps them so callers can use a
//! single `Result` alias and still match on the specific failure.

use std::path::PathBuf;
use thiserror::Error;

/// Top-level error type.
#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Provider(#[from] ProviderError),

    #[error(transparent)]
    Projection(#[from] ProjectionError),

    #[error(transparent)]
    Materialize(#[from] MaterializeError),

    #[error(transparent)]
    Launch(#[from] LaunchError),
}

/// Configuration loading errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("unknown secret provider '{0}' (expected one of: vault, file, command)")]
    UnknownProvider(String),

    #[error("missing required setting {key} for the {provider} provider")]
    MissingSetting {
        provider: &'static str,
        key: &'static str,
    },

    #[error("provider '{0}' is not available in this build (enable the `{0}` feature)")]
    ProviderDisabled(&'static str),
}

/// Secret backend errors.
#[derive(Error, Debug)]
pub enum ProviderError {
    #[error("failed to read secret file {}: {source}", .path.display())]
    ReadFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("secret payload is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("secret payload must be a JSON object, got {0}")]
    NotAnObject(&'static str),

    #[error("secret command not found: {0}")]
    CommandNotFound(String),

    #[error("secret command failed ({status}): {stderr}")]
    CommandFailed { status: String, stderr: String },

    #[error("secret backend authentication failed: {0}")]
    Auth(String),

    #[error("secret not found at {0}")]
    NotFound(String),

    #[error("secret backend request failed: {0}")]
    Request(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Projection directive errors.
///
/// All of these abort the run: a half-applied credential set is never launched.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ProjectionError {
    #[error("directive {key} must have the form field,ENV_NAME (found \"{value}\")")]
    MissingComma { key: String, value: String },

    #[error("directive {key}: {side} name does not match [A-Za-z0-9._-]+ (found \"{value}\")")]
    InvalidName {
        key: String,
        side: Side,
        value: String,
    },

    #[error("retrieved secret does not contain field {field}")]
    MissingField { field: String },
}

/// Which half of a directive failed validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Source,
    Target,
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Side::Source => f.write_str("source"),
            Side::Target => f.write_str("target"),
        }
    }
}

/// Output file errors. Reported and recovered, never fatal.
#[derive(Error, Debug)]
pub enum MaterializeError {
    #[error("output format '{0}' is not supported yet (only json)")]
    UnsupportedFormat(String),

    #[error("failed to serialize secrets: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("failed to write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Child process errors. Reported and recovered, never fatal.
#[derive(Error, Debug)]
pub enum LaunchError {
    #[error("failed to spawn command: {0}")]
    Spawn(#[source] std::io::Error),

    #[error("command exited with {status}{}", stderr_suffix(.stderr))]
    Exit { status: String, stderr: String },

    #[error("launcher thread panicked")]
    Panicked,
}

fn stderr_suffix(stderr: &str) -> String {
    if stderr.is_empty() {
        String::new()
    } else {
        format!(": {stderr}")
    }
}

pub type Result<T> = std::result::Result<T, Error>;
