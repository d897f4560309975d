//! Rewards service configuration module.
//!
//! Configuration is loaded from environment variables with fallback to defaults.

use serde::{Deserialize, Serialize};
use std::env;
use std::path::PathBuf;

use reward_db::DbConfig;

/// Rewards service configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RewardsConfig {
    /// SQLite database file
    pub database_path: PathBuf,

    /// Maximum pooled connections
    pub db_max_connections: u32,

    /// Fallback log filter when RUST_LOG is unset
    pub log_level: String,

    /// Pretty-print the JSON report
    pub report_pretty: bool,
}

impl RewardsConfig {
    /// Load configuration from environment variables.
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let config = RewardsConfig {
            database_path: PathBuf::from(
                lookup("REWARDS_DATABASE_PATH")
                    .unwrap_or_else(|| "./data/rewards.db".to_string()),
            ),

            db_max_connections: lookup("REWARDS_DB_MAX_CONNECTIONS")
                .unwrap_or_else(|| "5".to_string())
                .parse()
                .map_err(|_| ConfigError::InvalidValue("REWARDS_DB_MAX_CONNECTIONS".to_string()))?,

            log_level: lookup("REWARDS_LOG_LEVEL").unwrap_or_else(|| "info".to_string()),

            report_pretty: lookup("REWARDS_REPORT_PRETTY")
                .unwrap_or_else(|| "true".to_string())
                .parse()
                .map_err(|_| ConfigError::InvalidValue("REWARDS_REPORT_PRETTY".to_string()))?,
        };

        if config.db_max_connections == 0 {
            return Err(ConfigError::InvalidValue(
                "REWARDS_DB_MAX_CONNECTIONS".to_string(),
            ));
        }

        if config.database_path.as_os_str().is_empty() {
            return Err(ConfigError::MissingRequired(
                "REWARDS_DATABASE_PATH".to_string(),
            ));
        }

        Ok(config)
    }

    /// Database pool settings derived from this configuration.
    pub fn db_config(&self) -> DbConfig {
        DbConfig::new(&self.database_path)
            .max_connections(self.db_max_connections)
            .min_connections(1)
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

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = RewardsConfig::from_lookup(lookup(&[])).unwrap();

        assert_eq!(config.database_path, PathBuf::from("./data/rewards.db"));
        assert_eq!(config.db_max_connections, 5);
        assert_eq!(config.log_level, "info");
        assert!(config.report_pretty);
    }

    #[test]
    fn test_overrides() {
        let config = RewardsConfig::from_lookup(lookup(&[
            ("REWARDS_DATABASE_PATH", "/tmp/loyalty.db"),
            ("REWARDS_DB_MAX_CONNECTIONS", "12"),
            ("REWARDS_LOG_LEVEL", "debug"),
            ("REWARDS_REPORT_PRETTY", "false"),
        ]))
        .unwrap();

        assert_eq!(config.database_path, PathBuf::from("/tmp/loyalty.db"));
        assert_eq!(config.db_max_connections, 12);
        assert_eq!(config.log_level, "debug");
        assert!(!config.report_pretty);
        assert_eq!(config.db_config().max_connections, 12);
    }

    #[test]
    fn test_invalid_values() {
        let err = RewardsConfig::from_lookup(lookup(&[("REWARDS_DB_MAX_CONNECTIONS", "many")]))
            .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue(ref v) if v == "REWARDS_DB_MAX_CONNECTIONS"));

        let err = RewardsConfig::from_lookup(lookup(&[("REWARDS_DB_MAX_CONNECTIONS", "0")]))
            .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue(_)));

        let err = RewardsConfig::from_lookup(lookup(&[("REWARDS_REPORT_PRETTY", "yes")]))
            .unwrap_err();
        assert_eq!(err.to_string(), "Invalid value for REWARDS_REPORT_PRETTY");
    }

    #[test]
    fn test_empty_database_path() {
        let err = RewardsConfig::from_lookup(lookup(&[("REWARDS_DATABASE_PATH", "")]))
            .unwrap_err();
        assert!(matches!(err, ConfigError::MissingRequired(_)));
    }
}
