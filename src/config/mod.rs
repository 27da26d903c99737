//! Application configuration module
//!
//! Type-safe configuration loaded from environment variables using the
//! `config` and `dotenvy` crates. Variables carry the `VOLLEY_STATS` prefix
//! and nested values are separated by double underscores.
//!
//! # Example
//!
//! ```no_run
//! use volley_stats::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! let rules = config.rules.to_rules();
//! println!("Regular sets end at {}", rules.points_to_win);
//! ```

mod database;
mod error;
mod logging;
mod rules;

pub use database::DatabaseConfig;
pub use error::{ConfigError, ValidationError};
pub use logging::LoggingConfig;
pub use rules::MatchRulesConfig;

use serde::Deserialize;

/// Root application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// PostgreSQL connection pool
    pub database: DatabaseConfig,

    /// Scoring thresholds and default match format
    #[serde(default)]
    pub rules: MatchRulesConfig,

    /// Log filter and format
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// Reads a `.env` file if present, then every `VOLLEY_STATS__*` variable:
    ///
    /// - `VOLLEY_STATS__DATABASE__URL=...` -> `database.url = ...`
    /// - `VOLLEY_STATS__RULES__POINTS_TO_WIN=21` -> `rules.points_to_win = 21`
    /// - `VOLLEY_STATS__LOGGING__JSON=true` -> `logging.json = true`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if required variables are missing or values
    /// cannot be parsed into the expected types.
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("VOLLEY_STATS")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate every section.
    ///
    /// # Errors
    ///
    /// Returns the first `ValidationError` found.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.database.validate()?;
        self.rules.validate()?;
        self.logging.validate()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::sync::Mutex;

    // Env vars are process-global; tests that touch them run one at a time.
    static ENV_MUTEX: Mutex<()> = Mutex::new(());

    const VARS: [&str; 6] = [
        "VOLLEY_STATS__DATABASE__URL",
        "VOLLEY_STATS__DATABASE__MAX_CONNECTIONS",
        "VOLLEY_STATS__RULES__POINTS_TO_WIN",
        "VOLLEY_STATS__RULES__DEFAULT_BEST_OF",
        "VOLLEY_STATS__LOGGING__LEVEL",
        "VOLLEY_STATS__LOGGING__JSON",
    ];

    fn set_minimal_env() {
        env::set_var("VOLLEY_STATS__DATABASE__URL", "postgresql://stats@localhost/volley");
    }

    fn clear_env() {
        for var in VARS {
            env::remove_var(var);
        }
    }

    #[test]
    fn loads_minimal_environment_with_defaults() {
        let _guard = ENV_MUTEX.lock().unwrap();
        set_minimal_env();
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert_eq!(config.database.url, "postgresql://stats@localhost/volley");
        assert_eq!(config.rules, MatchRulesConfig::default());
        assert_eq!(config.logging, LoggingConfig::default());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn nested_overrides_are_parsed() {
        let _guard = ENV_MUTEX.lock().unwrap();
        set_minimal_env();
        env::set_var("VOLLEY_STATS__RULES__POINTS_TO_WIN", "21");
        env::set_var("VOLLEY_STATS__RULES__DEFAULT_BEST_OF", "3");
        env::set_var("VOLLEY_STATS__LOGGING__JSON", "true");
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert_eq!(config.rules.points_to_win, 21);
        assert_eq!(config.rules.default_best_of, 3);
        assert!(config.logging.json);
    }

    #[test]
    fn missing_database_url_fails_to_load() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();
        assert!(AppConfig::load().is_err());
    }

    #[test]
    fn validate_reports_bad_rules() {
        let _guard = ENV_MUTEX.lock().unwrap();
        set_minimal_env();
        env::set_var("VOLLEY_STATS__RULES__DEFAULT_BEST_OF", "4");
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert!(matches!(
            config.validate(),
            Err(ValidationError::InvalidBestOf { value: 4, .. })
        ));
    }

    #[test]
    fn validate_reports_empty_pool() {
        let _guard = ENV_MUTEX.lock().unwrap();
        set_minimal_env();
        env::set_var("VOLLEY_STATS__DATABASE__MAX_CONNECTIONS", "0");
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert_eq!(config.database.max_connections, 0);
        assert_eq!(config.validate(), Err(ValidationError::EmptyPool));
    }
}
