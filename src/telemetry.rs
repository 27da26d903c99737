//! Tracing subscriber installation.
//!
//! The library only emits `tracing` events; the host process decides where
//! they go by calling [`init_tracing`] once at startup.

use thiserror::Error;

use crate::config::{LoggingConfig, ValidationError};

/// Errors raised while installing the global subscriber
#[derive(Debug, Error)]
pub enum TelemetryError {
    #[error(transparent)]
    InvalidFilter(#[from] ValidationError),

    #[error("Global subscriber already installed: {0}")]
    AlreadyInitialized(String),
}

/// Install a global `fmt` subscriber filtered by `config.level`.
///
/// # Errors
///
/// - `InvalidFilter` if the directive does not parse
/// - `AlreadyInitialized` if a global subscriber is already set
pub fn init_tracing(config: &LoggingConfig) -> Result<(), TelemetryError> {
    let filter = config.env_filter()?;
    let builder = tracing_subscriber::fmt().with_env_filter(filter);

    let result = if config.json {
        builder.json().with_current_span(false).try_init()
    } else {
        builder.with_target(true).try_init()
    };

    result.map_err(|e| TelemetryError::AlreadyInitialized(e.to_string()))
}
