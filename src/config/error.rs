//! Configuration error types

use thiserror::Error;

/// Errors that can occur during configuration loading
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration loading failed: {0}")]
    LoadError(#[from] config::ConfigError),

    #[error("Validation failed: {0}")]
    ValidationFailed(#[from] ValidationError),
}

/// Errors that can occur during configuration validation
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Required configuration missing: {0}")]
    MissingRequired(&'static str),

    #[error("Invalid database URL format")]
    InvalidDatabaseUrl,

    #[error("Pool max_connections must be at least 1")]
    EmptyPool,

    #[error("Pool size exceeds maximum allowed (100)")]
    PoolSizeTooLarge,

    #[error("Point threshold must be greater than zero: {0}")]
    ZeroThreshold(&'static str),

    #[error("Deciding set points ({deciding}) exceed regular set points ({regular})")]
    DecidingSetTooLong { deciding: u32, regular: u32 },

    #[error("best_of must be an odd number between 1 and {max}, got {value}")]
    InvalidBestOf { value: u8, max: u8 },

    #[error("Invalid log filter directive: {0}")]
    InvalidLogFilter(String),
}
