use serde::{Deserialize, Serialize};

use super::database::DatabaseConfig;
use super::errors::ConfigError;
use super::instance::InstanceConfig;
use super::logging::LoggingConfig;
use super::retention::RetentionConfig;
use super::server::ServerConfig;

/// Main configuration structure for Driftwood
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct Config {
    /// HTTP listener configuration
    #[serde(default)]
    pub server: ServerConfig,

    /// Database configuration
    #[serde(default)]
    pub database: DatabaseConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,

    /// Remote content retention
    #[serde(default)]
    pub retention: RetentionConfig,

    /// Published instance metadata
    #[serde(default)]
    pub instance: InstanceConfig,
}

impl Config {
    /// Load configuration from file or use defaults
    ///
    /// Priority order:
    /// 1. Explicitly provided path
    /// 2. driftwood.toml in current directory
    /// 3. /etc/driftwood/config.toml
    /// 4. Default configuration
    pub fn load(path: Option<&str>, cli_overrides: CliOverrides) -> Result<Self, ConfigError> {
        let mut config = if let Some(path) = path {
            Self::from_file(path)?
        } else if let Some(found) = Self::find_config_file() {
            Self::from_file(&found)?
        } else {
            Self::default()
        };

        config.apply_cli_overrides(cli_overrides);
        Ok(config)
    }

    /// Parse configuration from TOML text
    pub fn from_toml(contents: &str) -> Result<Self, ConfigError> {
        toml::from_str(contents).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    fn from_file(path: &str) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::FileRead(path.to_string(), e.to_string()))?;
        Self::from_toml(&contents)
    }

    fn apply_cli_overrides(&mut self, overrides: CliOverrides) {
        if let Some(port) = overrides.web_port {
            self.server.web_port = port;
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

    /// Validate configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.retention.remote_prune_horizon_days == 0 {
            return Err(ConfigError::Validation(
                "retention.remote_prune_horizon_days must be at least 1".to_string(),
            ));
        }

        if self.retention.prune_batch_size == 0 {
            return Err(ConfigError::Validation(
                "retention.prune_batch_size must be at least 1".to_string(),
            ));
        }

        if self.retention.scheduled_prune && self.retention.prune_interval_secs == 0 {
            return Err(ConfigError::Validation(
                "retention.prune_interval_secs cannot be 0 when scheduled_prune is on".to_string(),
            ));
        }

        if self.instance.main_domain.trim().is_empty() {
            return Err(ConfigError::Validation(
                "instance.main_domain cannot be empty".to_string(),
            ));
        }

        if self.database.max_connections == 0 {
            return Err(ConfigError::Validation(
                "database.max_connections cannot be 0".to_string(),
            ));
        }

        Ok(())
    }

    fn find_config_file() -> Option<String> {
        if std::path::Path::new("driftwood.toml").exists() {
            Some("driftwood.toml".to_string())
        } else if std::path::Path::new("/etc/driftwood/config.toml").exists() {
            Some("/etc/driftwood/config.toml".to_string())
        } else {
            None
        }
    }
}

/// Command-line overrides for configuration
#[derive(Debug, Default)]
pub struct CliOverrides {
    pub web_port: Option<u16>,
    pub bind_address: Option<String>,
    pub database_path: Option<String>,
    pub log_level: Option<String>,
}
