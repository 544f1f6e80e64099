use serde::{Deserialize, Serialize};
use std::path::Path;

use super::database::DatabaseConfig;
use super::errors::ConfigError;
use super::logging::LoggingConfig;
use super::rate_limit::RateLimitConfig;
use super::server::ServerConfig;
use super::visits::VisitsConfig;
use crate::pagination::MAX_PAGE_SIZE;

const LOCAL_CONFIG_PATH: &str = "pagevisits.toml";
const SYSTEM_CONFIG_PATH: &str = "/etc/pagevisits/config.toml";

/// Main configuration structure for the page visit service
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,

    #[serde(default)]
    pub database: DatabaseConfig,

    #[serde(default)]
    pub logging: LoggingConfig,

    #[serde(default)]
    pub visits: VisitsConfig,

    #[serde(default)]
    pub rate_limit: RateLimitConfig,
}

impl Config {
    /// Load configuration from file or use defaults
    ///
    /// Priority order:
    /// 1. Explicitly provided path
    /// 2. pagevisits.toml in current directory
    /// 3. /etc/pagevisits/config.toml
    /// 4. Default configuration
    pub fn load(path: Option<&str>, cli_overrides: CliOverrides) -> Result<Self, ConfigError> {
        let mut config = match path.or_else(Self::get_config_path_static) {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };

        config.apply_cli_overrides(cli_overrides);
        config.validate()?;
        Ok(config)
    }

    pub fn from_toml(contents: &str) -> Result<Self, ConfigError> {
        toml::from_str(contents).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    fn from_file(path: &str) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::FileRead(path.to_string(), e.to_string()))?;
        Self::from_toml(&contents)
    }

    fn apply_cli_overrides(&mut self, overrides: CliOverrides) {
        if let Some(port) = overrides.port {
            self.server.port = port;
        }
        if let Some(bind) = overrides.bind_address {
            self.server.bind_address = bind;
        }
        if let Some(db) = overrides.database_path {
            self.database.path = db;
        }
        if let Some(level) = overrides.log_level {
            self.logging.level = level;
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.server.port == 0 {
            return Err(ConfigError::Validation("Server port cannot be 0".to_string()));
        }

        if self.database.path.trim().is_empty() {
            return Err(ConfigError::Validation(
                "Database path cannot be empty".to_string(),
            ));
        }

        if self.database.write_pool_max_connections == 0
            || self.database.read_pool_max_connections == 0
        {
            return Err(ConfigError::Validation(
                "Database pools need at least one connection".to_string(),
            ));
        }

        if self.visits.max_batch_size == 0 {
            return Err(ConfigError::Validation(
                "visits.max_batch_size must be at least 1".to_string(),
            ));
        }

        if !(1..=MAX_PAGE_SIZE).contains(&self.visits.max_page_size) {
            return Err(ConfigError::Validation(format!(
                "visits.max_page_size must be between 1 and {}",
                MAX_PAGE_SIZE
            )));
        }

        if !(1..=self.visits.max_page_size).contains(&self.visits.default_page_size) {
            return Err(ConfigError::Validation(
                "visits.default_page_size must be between 1 and visits.max_page_size".to_string(),
            ));
        }

        let limits = &self.rate_limit;
        if limits.enabled
            && [
                limits.default_per_minute,
                limits.record_per_minute,
                limits.batch_per_minute,
                limits.read_per_minute,
            ]
            .contains(&0)
        {
            return Err(ConfigError::Validation(
                "Rate limits must be at least 1 request per minute".to_string(),
            ));
        }

        if limits.enabled && limits.prune_interval_secs == 0 {
            return Err(ConfigError::Validation(
                "rate_limit.prune_interval_secs must be at least 1".to_string(),
            ));
        }

        Ok(())
    }

    /// Get the path to the configuration file being used
    pub fn get_config_path() -> Option<String> {
        Self::get_config_path_static().map(str::to_string)
    }

    fn get_config_path_static<'a>() -> Option<&'a str> {
        [LOCAL_CONFIG_PATH, SYSTEM_CONFIG_PATH]
            .into_iter()
            .find(|p| Path::new(p).exists())
    }
}

/// Command-line overrides for configuration
#[derive(Debug, Default)]
pub struct CliOverrides {
    pub port: Option<u16>,
    pub bind_address: Option<String>,
    pub database_path: Option<String>,
    pub log_level: Option<String>,
}
