//! Test support utilities for sluice integration tests.
//!
//! Provides reusable test environment setup and helper commands.

#![allow(dead_code)]

pub mod assertions;
pub mod commands;
pub mod fixtures;

#[allow(unused_imports)]
pub use assertions::*;
#[allow(unused_imports)]
pub use fixtures::*;

use std::path::PathBuf;
use tempfile::TempDir;

/// Test environment with an isolated temp directory and explicit variables.
///
/// The child process starts from a cleared environment; only `PATH` and
/// the variables set on the `Test` are passed through, so tests never
/// depend on the developer's shell and can run in parallel.
pub struct Test {
    /// Temporary working directory
    pub dir: TempDir,
    /// Variables passed to the sluice process
    pub vars: Vec<(String, String)>,
}

impl Test {
    /// Create a new empty test environment.
    pub fn new() -> Self {
        let dir = TempDir::new().expect("failed to create temp dir");
        Self {
            dir,
            vars: Vec::new(),
        }
    }

    /// Create a test environment backed by a `file` secret provider.
    pub fn with_secrets(json: &str) -> Self {
        let mut t = Self::new();
        let path = t.write("secrets.json", json);
        t.set("SLUICE_SM_PROVIDER", "file");
        t.set("SLUICE_SM_FILE", path.to_str().expect("utf-8 temp path"));
        t
    }

    /// Set a variable for the sluice process.
    pub fn set(&mut self, key: &str, value: &str) -> &mut Self {
        self.vars.push((key.to_string(), value.to_string()));
        self
    }

    /// Declare projection directive number `n`.
    pub fn directive(&mut self, n: usize, value: &str) -> &mut Self {
        self.set(&format!("SLUICE_LA_ENV_READ_AND_SET_{n}"), value)
    }

    /// Write a file into the test directory and return its path.
    pub fn write(&self, name: &str, contents: &str) -> PathBuf {
        let path = self.path(name);
        std::fs::write(&path, contents).expect("failed to write fixture");
        path
    }

    /// Path of a file inside the test directory.
    pub fn path(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }

    /// Read a file from the test directory.
    pub fn read(&self, name: &str) -> String {
        std::fs::read_to_string(self.path(name)).expect("failed to read file")
    }
}
