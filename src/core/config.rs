//! Launcher configuration.
//!
//! Reads the `SLUICE_LA_*` keys once at startup into a typed structure.

use std::fmt;
use std::path::PathBuf;
use tracing::debug;

use crate::core::constants;
use crate::core::directive::RawDirective;
use crate::core::env::Environment;

/// Encoding of the materialized secret file.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Json,
    /// A tag this build cannot write. Reported when materialization runs.
    Unsupported(String),
}

impl OutputFormat {
    /// Parse a format tag. Matching is case-insensitive and ignores surrounding whitespace.
    pub fn parse(tag: &str) -> Self {
        match tag.trim().to_ascii_lowercase().as_str() {
            "json" => OutputFormat::Json,
            _ => OutputFormat::Unsupported(tag.to_string()),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Json => f.write_str("json"),
            OutputFormat::Unsupported(tag) => f.write_str(tag),
        }
    }
}

/// Launcher settings read from `SLUICE_LA_*`.
#[derive(Debug, Clone, Default)]
pub struct LauncherConfig {
    /// Where to materialize the secret bundle.
    pub out_file: Option<PathBuf>,
    pub out_format: OutputFormat,
    /// Every `SLUICE_LA_ENV_READ_AND_SET_*` entry, in key order.
    pub directives: Vec<RawDirective>,
    /// Shell command line of the application to launch.
    pub command: Option<String>,
}

impl LauncherConfig {
    /// Read launcher settings from the environment snapshot.
    ///
    /// Directives are collected verbatim and validated when projection runs,
    /// so a bad directive does not prevent materialization.
    pub fn from_env(env: &Environment) -> Self {
        let out_file = env.non_empty(constants::LA_OUT_FILE).map(PathBuf::from);
        let out_format = env
            .non_empty(constants::LA_OUT_FILE_FORMAT)
            .map(OutputFormat::parse)
            .unwrap_or_default();
        let directives = env
            .with_prefix(constants::LA_DIRECTIVE_PREFIX)
            .map(|(key, value)| RawDirective::new(key, value))
            .collect::<Vec<_>>();
        let command = env.non_empty(constants::LA_CMD_APP).map(str::to_string);

        debug!(
            out_file = ?out_file,
            out_format = %out_format,
            directives = directives.len(),
            command = command.is_some(),
            "launcher config loaded"
        );

        Self {
            out_file,
            out_format,
            directives,
            command,
        }
    }
}
