//! Run-scoped process environment.
//!
//! The launcher never mutates the process-wide environment table. It takes
//! a snapshot at startup, layers projected secrets on top, and hands the
//! merged map to the child process.

use std::collections::BTreeMap;
use std::ffi::{OsStr, OsString};
use tracing::debug;
use zeroize::Zeroizing;

/// Environment snapshot plus the variables projected during this run.
#[derive(Default)]
pub struct Environment {
    base: BTreeMap<String, String>,
    /// Entries that are not valid UTF-8. Never read as configuration, but
    /// passed through to the child unchanged.
    opaque: BTreeMap<OsString, OsString>,
    injected: BTreeMap<String, Zeroizing<String>>,
}

impl Environment {
    /// Capture the current process environment.
    pub fn capture() -> Self {
        Self::from_os_vars(std::env::vars_os())
    }

    /// Build an environment from raw OS pairs.
    ///
    /// Entries whose key or value is not valid UTF-8 are kept for the child
    /// but are invisible to lookups.
    pub fn from_os_vars<I>(vars: I) -> Self
    where
        I: IntoIterator<Item = (OsString, OsString)>,
    {
        let mut env = Self::default();
        for (key, value) in vars {
            match (key.to_str().map(str::to_owned), value.to_str().map(str::to_owned)) {
                (Some(k), Some(v)) => {
                    env.base.insert(k, v);
                }
                _ => {
                    debug!(key = ?key, "non UTF-8 environment entry passed through");
                    env.opaque.insert(key, value);
                }
            }
        }
        env
    }

    /// Build an environment from explicit pairs.
    pub fn from_vars<I, K, V>(vars: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            base: vars
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
            ..Self::default()
        }
    }

    /// Look up a variable, preferring projected values over the snapshot.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.injected
            .get(key)
            .map(|v| v.as_str())
            .or_else(|| self.base.get(key).map(String::as_str))
    }

    /// Look up a variable in the snapshot, treating empty values as absent.
    pub fn non_empty(&self, key: &str) -> Option<&str> {
        self.base.get(key).map(String::as_str).filter(|v| !v.is_empty())
    }

    /// Snapshot entries whose key starts with `prefix`, in key order.
    pub fn with_prefix<'a>(&'a self, prefix: &'a str) -> impl Iterator<Item = (&'a str, &'a str)> {
        self.base
            .range(prefix.to_string()..)
            .take_while(move |(k, _)| k.starts_with(prefix))
            .map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Set a projected variable. Later calls for the same key win.
    pub fn inject(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.injected.insert(key.into(), Zeroizing::new(value.into()));
    }

    /// Names of the variables projected so far.
    pub fn injected_keys(&self) -> impl Iterator<Item = &str> {
        self.injected.keys().map(String::as_str)
    }

    /// Whether anything has been projected.
    pub fn is_augmented(&self) -> bool {
        !self.injected.is_empty()
    }

    /// Every variable the child should see: snapshot overlaid with projections.
    pub fn merged(&self) -> impl Iterator<Item = (&OsStr, &OsStr)> {
        let opaque = self
            .opaque
            .iter()
            .map(|(k, v)| (k.as_os_str(), v.as_os_str()));
        let base = self
            .base
            .iter()
            .filter(|(k, _)| !self.injected.contains_key(*k))
            .map(|(k, v)| (OsStr::new(k), OsStr::new(v)));
        let injected = self
            .injected
            .iter()
            .map(|(k, v)| (OsStr::new(k), OsStr::new(v.as_str())));
        opaque.chain(base).chain(injected)
    }
}

impl std::fmt::Debug for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Environment")
            .field("vars", &(self.base.len() + self.opaque.len()))
            .field("injected", &self.injected.keys().collect::<Vec<_>>())
            .finish()
    }
}
