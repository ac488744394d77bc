//! Secret bundles and the run-scoped fetch cache.

use serde::Serialize;
use serde_json::{Map, Value};
use std::cell::OnceCell;
use std::collections::BTreeMap;
use tracing::{debug, info, warn};

use crate::core::provider::SecretFetcher;
use crate::error::{ProviderError, Result};

/// The key/value fields returned by one backend fetch.
///
/// Values keep their JSON shape so materialization writes them back
/// unchanged; projection renders them as strings.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct SecretBundle {
    fields: BTreeMap<String, Value>,
}

impl SecretBundle {
    /// Build a bundle from a JSON value, which must be an object.
    pub fn from_json(value: Value) -> std::result::Result<Self, ProviderError> {
        match value {
            Value::Object(map) => Ok(Self::from_map(map)),
            other => Err(ProviderError::NotAnObject(json_kind(&other))),
        }
    }

    /// Parse a bundle from JSON text.
    pub fn parse(text: &str) -> std::result::Result<Self, ProviderError> {
        Self::from_json(serde_json::from_str(text)?)
    }

    fn from_map(map: Map<String, Value>) -> Self {
        Self {
            fields: map.into_iter().collect(),
        }
    }

    /// Field rendered as an environment value.
    ///
    /// Strings are returned verbatim, other values as compact JSON.
    /// Falsy fields count as missing and yield `None`: absent, `null`,
    /// `""`, `false` and zero.
    pub fn resolve(&self, field: &str) -> Option<String> {
        match self.fields.get(field)? {
            Value::Null | Value::Bool(false) => None,
            Value::Number(n) if n.as_f64() == Some(0.0) => None,
            Value::String(s) if s.is_empty() => None,
            Value::String(s) => Some(s.clone()),
            other => Some(other.to_string()),
        }
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for SecretBundle {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            fields: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

/// Human-readable JSON type name for error messages.
pub(crate) fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

/// Fetch-once cache in front of a [`SecretFetcher`].
///
/// The first successful [`get`](SecretCache::get) stores the bundle for the
/// rest of the run. A failed fetch stores nothing and the error propagates.
pub struct SecretCache<F> {
    fetcher: F,
    bundle: OnceCell<SecretBundle>,
}

impl<F: SecretFetcher> SecretCache<F> {
    pub fn new(fetcher: F) -> Self {
        Self {
            fetcher,
            bundle: OnceCell::new(),
        }
    }

    /// Return the bundle, fetching it on first use.
    pub fn get(&self) -> Result<&SecretBundle> {
        if let Some(bundle) = self.bundle.get() {
            debug!("secret bundle served from cache");
            return Ok(bundle);
        }

        info!(provider = self.fetcher.name(), "++ Reading secrets from secret manager");
        let bundle = self.fetcher.fetch()?;
        if bundle.is_empty() {
            warn!("secret bundle is empty");
        } else {
            debug!(fields = bundle.len(), "secret bundle fetched");
        }

        Ok(self.bundle.get_or_init(|| bundle))
    }

    /// Whether a fetch has already happened.
    pub fn is_loaded(&self) -> bool {
        self.bundle.get().is_some()
    }

    pub fn fetcher(&self) -> &F {
        &self.fetcher
    }
}
