//! Picklist configuration module.
//!
//! Configuration is loaded from environment variables with fallback to defaults.
//! A `.env` file in the working directory is read first by `main`.
//!
//! | Variable         | Default           | Notes                              |
//! |------------------|-------------------|------------------------------------|
//! | `APP_ENV`        | `production`      | `development` enables a notice     |
//! | `DB_DRIVER`      | `sqlite`          | only `sqlite` is supported         |
//! | `DB_SOURCE`      | `./picklist.db`   | `:memory:` for a scratch database  |
//! | `RUN_MIGRATIONS` | `true`            |                                    |
//! | `LOG_FORMAT`     | `json`            | `json` or `pretty`                 |

use serde::{Deserialize, Serialize};
use std::env;
use std::path::PathBuf;

use picklist_db::DbConfig;

/// The only database driver this build understands.
pub const SUPPORTED_DRIVER: &str = "sqlite";

/// Picklist configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Deployment environment name
    pub app_env: String,

    /// Database driver (always `sqlite`)
    pub db_driver: String,

    /// Database file path, or `:memory:`
    pub db_source: PathBuf,

    /// Apply embedded migrations on connect
    pub run_migrations: bool,

    /// Log line format on stderr
    pub log_format: LogFormat,
}

/// Log output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    Json,
    Pretty,
}

impl AppConfig {
    /// Load configuration from environment variables.
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let db_driver = lookup("DB_DRIVER").unwrap_or_else(|| SUPPORTED_DRIVER.to_string());
        if !db_driver.eq_ignore_ascii_case(SUPPORTED_DRIVER) {
            return Err(ConfigError::InvalidValue("DB_DRIVER".to_string()));
        }

        let db_source = lookup("DB_SOURCE").unwrap_or_else(|| "./picklist.db".to_string());
        if db_source.trim().is_empty() {
            return Err(ConfigError::MissingRequired("DB_SOURCE".to_string()));
        }

        let config = AppConfig {
            app_env: lookup("APP_ENV").unwrap_or_else(|| "production".to_string()),

            db_driver: SUPPORTED_DRIVER.to_string(),

            db_source: PathBuf::from(db_source),

            run_migrations: lookup("RUN_MIGRATIONS")
                .unwrap_or_else(|| "true".to_string())
                .parse()
                .map_err(|_| ConfigError::InvalidValue("RUN_MIGRATIONS".to_string()))?,

            log_format: match lookup("LOG_FORMAT")
                .unwrap_or_else(|| "json".to_string())
                .to_ascii_lowercase()
                .as_str()
            {
                "json" => LogFormat::Json,
                "pretty" => LogFormat::Pretty,
                _ => return Err(ConfigError::InvalidValue("LOG_FORMAT".to_string())),
            },
        };

        Ok(config)
    }

    /// Replace the database source, e.g. from a `--db` flag.
    pub fn with_db_source(mut self, source: impl Into<PathBuf>) -> Self {
        self.db_source = source.into();
        self
    }

    pub fn is_development(&self) -> bool {
        self.app_env.eq_ignore_ascii_case("development")
    }

    /// Database pool settings derived from this configuration.
    pub fn db_config(&self) -> DbConfig {
        DbConfig::new(&self.db_source).run_migrations(self.run_migrations)
    }
}

/// Configuration error types.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {0}")]
    InvalidValue(String),

    #[error("Missing required configuration: {0}")]
    MissingRequired(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn load(vars: &[(&str, &str)]) -> Result<AppConfig, ConfigError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        AppConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = load(&[]).unwrap();

        assert_eq!(config.app_env, "production");
        assert_eq!(config.db_driver, "sqlite");
        assert_eq!(config.db_source, PathBuf::from("./picklist.db"));
        assert!(config.run_migrations);
        assert_eq!(config.log_format, LogFormat::Json);
        assert!(!config.is_development());
    }

    #[test]
    fn test_overrides() {
        let config = load(&[
            ("APP_ENV", "development"),
            ("DB_SOURCE", ":memory:"),
            ("RUN_MIGRATIONS", "false"),
            ("LOG_FORMAT", "Pretty"),
        ])
        .unwrap();

        assert!(config.is_development());
        assert_eq!(config.db_source, PathBuf::from(":memory:"));
        assert!(!config.run_migrations);
        assert_eq!(config.log_format, LogFormat::Pretty);
        assert!(config.db_config().is_in_memory());
    }

    #[test]
    fn test_unsupported_driver() {
        let err = load(&[("DB_DRIVER", "postgres")]).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue(ref key) if key == "DB_DRIVER"));
    }

    #[test]
    fn test_bad_values() {
        assert!(matches!(
            load(&[("RUN_MIGRATIONS", "maybe")]),
            Err(ConfigError::InvalidValue(_))
        ));
        assert!(matches!(
            load(&[("LOG_FORMAT", "xml")]),
            Err(ConfigError::InvalidValue(_))
        ));
        assert!(matches!(
            load(&[("DB_SOURCE", "  ")]),
            Err(ConfigError::MissingRequired(_))
        ));
    }

    #[test]
    fn test_db_flag_overrides_source() {
        let config = load(&[("DB_SOURCE", "env.db")])
            .unwrap()
            .with_db_source("flag.db");

        assert_eq!(config.db_config().database_path, PathBuf::from("flag.db"));
    }
}
