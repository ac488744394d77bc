//! Local JSON file backend.

use std::path::PathBuf;
use tracing::trace;

use super::SecretFetcher;
use crate::core::bundle::SecretBundle;
use crate::error::{ProviderError, Result};

/// Reads the secret bundle from a JSON object on disk.
pub struct FileFetcher {
    path: PathBuf,
}

impl FileFetcher {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl SecretFetcher for FileFetcher {
    fn name(&self) -> &'static str {
        "file"
    }

    fn fetch(&self) -> Result<SecretBundle> {
        trace!(path = %self.path.display(), "reading secret file");
        let contents =
            std::fs::read_to_string(&self.path).map_err(|source| ProviderError::ReadFile {
                path: self.path.clone(),
                source,
            })?;
        Ok(SecretBundle::parse(&contents)?)
    }
}
