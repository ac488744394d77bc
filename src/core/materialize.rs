//! Secret file materialization.
//!
//! Writes the secret bundle to the configured output file. Every failure
//! here is reported and swallowed: the file is a convenience, the
//! environment projection is what the launched application depends on.

use serde_json::Value;
use std::path::{Path, PathBuf};
use tracing::{error, info, warn};

use crate::core::bundle::{SecretBundle, SecretCache};
use crate::core::config::{LauncherConfig, OutputFormat};
use crate::core::provider::SecretFetcher;
use crate::core::redact::redact;
use crate::error::{MaterializeError, Result};

/// What the materialization step did.
#[derive(Debug)]
pub enum MaterializeOutcome {
    /// No output file configured.
    Skipped,
    /// File written to the given path.
    Written(PathBuf),
    /// The step failed; the run continues.
    Failed(MaterializeError),
}

/// Write the secret bundle to the configured output file.
///
/// Only a failing secret fetch propagates; everything else is logged and
/// returned as [`MaterializeOutcome::Failed`].
///
/// # Errors
///
/// Returns the fetch error from the cache.
pub fn materialize<F: SecretFetcher>(
    cache: &SecretCache<F>,
    config: &LauncherConfig,
) -> Result<MaterializeOutcome> {
    let Some(path) = config.out_file.as_deref() else {
        info!("++ Skipping out file creation.");
        return Ok(MaterializeOutcome::Skipped);
    };

    let bundle = cache.get()?;

    let outcome = match write_bundle(bundle, &config.out_format, path) {
        Ok(()) => {
            info!(path = %path.display(), "++ File generated successfully.");
            verify(path);
            MaterializeOutcome::Written(path.to_path_buf())
        }
        Err(e) => {
            error!(path = %path.display(), "{e}");
            MaterializeOutcome::Failed(e)
        }
    };
    Ok(outcome)
}

/// Serialize and write. Overwrites any existing file, not atomically.
fn write_bundle(
    bundle: &SecretBundle,
    format: &OutputFormat,
    path: &Path,
) -> std::result::Result<(), MaterializeError> {
    let content = match format {
        OutputFormat::Json => serde_json::to_string(bundle)?,
        OutputFormat::Unsupported(tag) => {
            return Err(MaterializeError::UnsupportedFormat(tag.clone()))
        }
    };

    std::fs::write(path, content).map_err(|source| MaterializeError::Write {
        path: path.to_path_buf(),
        source,
    })
}

/// Read the file back and echo its content redacted.
///
/// Diagnostic only; nothing here can fail the step. Returns whether the
/// file could be read.
fn verify(path: &Path) -> bool {
    match std::fs::read_to_string(path) {
        Ok(contents) => {
            for line in echo(&contents) {
                info!("{line}");
            }
            true
        }
        Err(e) => {
            warn!(path = %path.display(), "---- Could not read back file: {e}");
            false
        }
    }
}

/// Redacted log lines describing the written content.
fn echo(contents: &str) -> Vec<String> {
    match serde_json::from_str::<Value>(contents) {
        Ok(Value::Object(map)) => map
            .iter()
            .map(|(key, value)| {
                let rendered = match value {
                    Value::String(s) => s.clone(),
                    other => other.to_string(),
                };
                format!("---- File content is {} {}", redact(key), redact(&rendered))
            })
            .collect(),
        _ => vec![format!("---- File content is not JSON {}", redact(contents))],
    }
}
