use serde::{Deserialize, Serialize};

use super::doh::{DohConfig, DohProvider};
use super::errors::ConfigError;
use super::logging::LoggingConfig;

const LOCAL_CONFIG_PATH: &str = "dohjson.toml";
const SYSTEM_CONFIG_PATH: &str = "/etc/dohjson/config.toml";

/// Main configuration structure for dohjson
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct Config {
    /// Endpoint and HTTP client settings
    #[serde(default)]
    pub doh: DohConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from file or use defaults
    ///
    /// Priority order:
    /// 1. Explicitly provided path
    /// 2. dohjson.toml in current directory
    /// 3. /etc/dohjson/config.toml
    /// 4. Default configuration
    pub fn load(path: Option<&str>, cli_overrides: CliOverrides) -> Result<Self, ConfigError> {
        let mut config = if let Some(path) = path {
            Self::from_file(path)?
        } else if std::path::Path::new(LOCAL_CONFIG_PATH).exists() {
            Self::from_file(LOCAL_CONFIG_PATH)?
        } else if std::path::Path::new(SYSTEM_CONFIG_PATH).exists() {
            Self::from_file(SYSTEM_CONFIG_PATH)?
        } else {
            Self::default()
        };

        config.apply_cli_overrides(cli_overrides);
        Ok(config)
    }

    /// Load configuration from a specific file
    fn from_file(path: &str) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::FileRead(path.to_string(), e.to_string()))?;
        Self::from_toml(&contents)
    }

    pub fn from_toml(contents: &str) -> Result<Self, ConfigError> {
        toml::from_str(contents).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Apply command-line overrides to configuration
    fn apply_cli_overrides(&mut self, overrides: CliOverrides) {
        if let Some(provider) = overrides.provider {
            self.doh.provider = provider;
        }
        if let Some(endpoint) = overrides.endpoint {
            self.doh.endpoint = Some(endpoint);
        }
        if let Some(subnet) = overrides.client_subnet {
            self.doh.client_subnet = Some(subnet);
        }
        if let Some(timeout) = overrides.timeout_secs {
            self.doh.timeout_secs = timeout;
        }
        if let Some(level) = overrides.log_level {
            self.logging.level = level;
        }
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.doh.validate()
    }
}

/// Command-line overrides for configuration
#[derive(Debug, Default)]
pub struct CliOverrides {
    pub provider: Option<DohProvider>,
    pub endpoint: Option<String>,
    pub client_subnet: Option<String>,
    pub timeout_secs: Option<u64>,
    pub log_level: Option<String>,
}
