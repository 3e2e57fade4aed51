//! crates/logging/src/tracing_bridge.rs
//! Installation of the global `fmt` subscriber.
//!
//! Library crates only emit events. Binaries and test harnesses that embed
//! the probe call [`init_tracing`] once; later calls leave the first
//! subscriber in place.

use std::io;

use thiserror::Error;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::filter::ParseError;

use super::config::LogConfig;

/// Errors raised while installing the subscriber.
#[derive(Debug, Error)]
pub enum LogError {
    /// The filter directive could not be parsed.
    #[error("invalid log directive {directive:?}: {source}")]
    InvalidDirective {
        /// The rejected directive.
        directive: String,
        /// Parser error.
        #[source]
        source: ParseError,
    },
}

/// Builds the `EnvFilter` for `config`.
pub fn build_filter(config: &LogConfig) -> Result<EnvFilter, LogError> {
    EnvFilter::try_new(&config.directive).map_err(|source| LogError::InvalidDirective {
        directive: config.directive.clone(),
        source,
    })
}

/// Installs a stderr `fmt` subscriber configured by `config`.
///
/// Returns `Ok(true)` when this call installed the subscriber and `Ok(false)`
/// when a global subscriber was already set.
pub fn init_tracing(config: &LogConfig) -> Result<bool, LogError> {
    let filter = build_filter(config)?;

    let installed = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(config.ansi)
        .with_target(config.with_target)
        .with_writer(io::stderr)
        .try_init()
        .is_ok();

    if installed {
        tracing::debug!(directive = %config.directive, "tracing initialised");
    }
    Ok(installed)
}

/// Same as [`init_tracing`] with [`LogConfig::from_env`].
pub fn init_tracing_from_env() -> Result<bool, LogError> {
    init_tracing(&LogConfig::from_env())
}
