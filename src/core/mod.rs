//! Core library components.
//!
//! This module contains the secret fetching, caching, materialization,
//! projection and launch logic used by the CLI.

pub mod bundle;
pub mod config;
pub mod constants;
pub mod directive;
pub mod env;
pub mod launcher;
pub mod materialize;
pub mod projector;
pub mod provider;
pub mod redact;
