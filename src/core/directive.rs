//! Projection directives.
//!
//! A directive maps one secret field to one environment variable:
//!
//! ```bash
//! export SLUICE_LA_ENV_READ_AND_SET_1="first-secret,APP_SECRET_1"
//! ```

use crate::error::{ProjectionError, Side};

/// A directive as found in the environment, before validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawDirective {
    /// Environment key that declared it (e.g. `SLUICE_LA_ENV_READ_AND_SET_1`).
    pub key: String,
    /// Unparsed `field,ENV_NAME` value.
    pub value: String,
}

/// A validated `(source, target)` pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectionDirective {
    /// Secret field to read.
    pub source: String,
    /// Environment variable to set.
    pub target: String,
}

impl RawDirective {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }

    /// Whether the directive carries no mapping and should be skipped.
    pub fn is_blank(&self) -> bool {
        self.value.is_empty()
    }

    /// Parse and validate the directive.
    ///
    /// Splits on the first comma; both halves must satisfy the naming policy.
    /// A value such as `a,b,c` leaves `b,c` as the target, which then fails
    /// validation because commas are not allowed in names.
    ///
    /// # Errors
    ///
    /// Returns `ProjectionError::MissingComma` or `ProjectionError::InvalidName`.
    pub fn parse(&self) -> Result<ProjectionDirective, ProjectionError> {
        let (source, target) =
            self.value
                .split_once(',')
                .ok_or_else(|| ProjectionError::MissingComma {
                    key: self.key.clone(),
                    value: self.value.clone(),
                })?;

        self.check(Side::Source, source)?;
        self.check(Side::Target, target)?;

        Ok(ProjectionDirective {
            source: source.to_string(),
            target: target.to_string(),
        })
    }

    fn check(&self, side: Side, name: &str) -> Result<(), ProjectionError> {
        if is_valid_name(name) {
            Ok(())
        } else {
            Err(ProjectionError::InvalidName {
                key: self.key.clone(),
                side,
                value: name.to_string(),
            })
        }
    }
}

/// Naming policy shared by secret fields and target variables.
///
/// Names must be non-empty and contain only ASCII letters, digits,
/// `.`, `_` and `-`.
pub fn is_valid_name(name: &str) -> bool {
    !name.is_empty()
        && name
            .chars()
            .all(|ch| ch.is_ascii_alphanumeric() || matches!(ch, '.' | '_' | '-'))
}
