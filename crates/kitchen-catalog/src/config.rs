//! Catalog configuration.
//!
//! Configuration is loaded from environment variables with fallback to
//! defaults.
//!
//! | Variable | Default |
//! |----------|---------|
//! | `KITCHEN_DATABASE_PATH` | `./kitchen_dev.db` |
//! | `KITCHEN_DB_MAX_CONNECTIONS` | `5` |
//! | `KITCHEN_DB_CONNECT_TIMEOUT_SECS` | `30` |
//! | `KITCHEN_PROFANITY_WORDS` | built-in list |

use serde::{Deserialize, Serialize};
use std::env;
use std::time::Duration;

use kitchen_db::DbConfig;

use crate::profanity::DEFAULT_WORDS;

/// Catalog configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// SQLite file, or `:memory:`
    pub database_path: String,

    /// Pool size, at least 1
    pub db_max_connections: u32,

    /// Pool acquire timeout in seconds
    pub db_connect_timeout_secs: u64,

    /// Banned words for the profanity checker, lowercase
    pub profanity_words: Vec<String>,
}

impl CatalogConfig {
    /// Load configuration from environment variables.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(|key| env::var(key).ok())
    }

    /// Load configuration through `lookup` instead of the process environment.
    pub fn load_from<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_path =
            lookup("KITCHEN_DATABASE_PATH").unwrap_or_else(|| "./kitchen_dev.db".to_string());
        if database_path.trim().is_empty() {
            return Err(ConfigError::MissingRequired(
                "KITCHEN_DATABASE_PATH".to_string(),
            ));
        }

        let db_max_connections: u32 = lookup("KITCHEN_DB_MAX_CONNECTIONS")
            .unwrap_or_else(|| "5".to_string())
            .parse()
            .map_err(|_| ConfigError::InvalidValue("KITCHEN_DB_MAX_CONNECTIONS".to_string()))?;
        if db_max_connections == 0 {
            return Err(ConfigError::InvalidValue(
                "KITCHEN_DB_MAX_CONNECTIONS".to_string(),
            ));
        }

        let db_connect_timeout_secs: u64 = lookup("KITCHEN_DB_CONNECT_TIMEOUT_SECS")
            .unwrap_or_else(|| "30".to_string())
            .parse()
            .map_err(|_| {
                ConfigError::InvalidValue("KITCHEN_DB_CONNECT_TIMEOUT_SECS".to_string())
            })?;

        let profanity_words = match lookup("KITCHEN_PROFANITY_WORDS") {
            Some(raw) => raw
                .split(',')
                .map(|word| word.trim().to_lowercase())
                .filter(|word| !word.is_empty())
                .collect(),
            None => DEFAULT_WORDS.iter().map(|word| word.to_string()).collect(),
        };

        Ok(CatalogConfig {
            database_path,
            db_max_connections,
            db_connect_timeout_secs,
            profanity_words,
        })
    }

    /// Pool settings for [`kitchen_db::Database::new`].
    pub fn db_config(&self) -> DbConfig {
        let config = DbConfig::new(&self.database_path);
        if config.is_in_memory() {
            // One connection per :memory: database, regardless of the setting.
            return DbConfig::in_memory()
                .connect_timeout(Duration::from_secs(self.db_connect_timeout_secs));
        }

        config
            .max_connections(self.db_max_connections)
            .min_connections(1)
            .connect_timeout(Duration::from_secs(self.db_connect_timeout_secs))
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

    fn load(vars: &[(&str, &str)]) -> Result<CatalogConfig, ConfigError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        CatalogConfig::load_from(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = load(&[]).unwrap();

        assert_eq!(config.database_path, "./kitchen_dev.db");
        assert_eq!(config.db_max_connections, 5);
        assert_eq!(config.db_connect_timeout_secs, 30);
        assert_eq!(config.profanity_words.len(), DEFAULT_WORDS.len());
    }

    #[test]
    fn test_overrides() {
        let config = load(&[
            ("KITCHEN_DATABASE_PATH", "/var/lib/kitchen.db"),
            ("KITCHEN_DB_MAX_CONNECTIONS", "12"),
            ("KITCHEN_PROFANITY_WORDS", " Darn, ,HECK "),
        ])
        .unwrap();

        assert_eq!(config.db_max_connections, 12);
        assert_eq!(config.profanity_words, vec!["darn", "heck"]);

        let db = config.db_config();
        assert_eq!(db.max_connections, 12);
        assert!(!db.is_in_memory());
    }

    #[test]
    fn test_invalid_values() {
        let err = load(&[("KITCHEN_DB_MAX_CONNECTIONS", "0")]).unwrap_err();
        assert_eq!(err.to_string(), "Invalid value for KITCHEN_DB_MAX_CONNECTIONS");

        assert!(load(&[("KITCHEN_DB_CONNECT_TIMEOUT_SECS", "soon")]).is_err());
        assert!(matches!(
            load(&[("KITCHEN_DATABASE_PATH", "  ")]),
            Err(ConfigError::MissingRequired(_))
        ));
    }

    #[test]
    fn test_in_memory_database_uses_single_connection() {
        let config = load(&[
            ("KITCHEN_DATABASE_PATH", ":memory:"),
            ("KITCHEN_DB_MAX_CONNECTIONS", "8"),
        ])
        .unwrap();

        let db = config.db_config();
        assert!(db.is_in_memory());
        assert_eq!(db.max_connections, 1);
    }
}
