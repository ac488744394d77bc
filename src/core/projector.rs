//! Environment projection.
//!
//! Resolves every projection directive against the secret bundle and
//! injects the values into the run's [`Environment`]. Any malformed
//! directive or missing field aborts the run before anything is launched.

use tracing::info;

use crate::core::bundle::SecretCache;
use crate::core::directive::{ProjectionDirective, RawDirective};
use crate::core::env::Environment;
use crate::core::provider::SecretFetcher;
use crate::core::redact::redact;
use crate::error::{ProjectionError, Result};

/// One variable set by the projector.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Assignment {
    pub source: String,
    pub target: String,
}

/// Project secret fields into environment variables.
///
/// The bundle is resolved first, even with no directives, so a broken
/// backend fails the run here rather than going unnoticed.
///
/// # Errors
///
/// Returns the fetch error, or a `ProjectionError` for the first bad directive.
pub fn project<F: SecretFetcher>(
    cache: &SecretCache<F>,
    directives: &[RawDirective],
    env: &mut Environment,
) -> Result<Vec<Assignment>> {
    let bundle = cache.get()?;
    let mut assignments = Vec::new();

    for raw in directives {
        if raw.is_blank() {
            continue;
        }

        let ProjectionDirective { source, target } = raw.parse()?;
        let value = bundle
            .resolve(&source)
            .ok_or_else(|| ProjectionError::MissingField {
                field: source.clone(),
            })?;

        info!("++ Setting env variable {} {}", target, redact(&value));
        env.inject(target.clone(), value);
        assignments.push(Assignment { source, target });
    }

    Ok(assignments)
}
