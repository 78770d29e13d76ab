use serde::{Deserialize, Serialize};

use super::errors::ConfigError;
use super::logging::LoggingConfig;
use super::recursion::RecursionConfig;
use super::server::ServerConfig;
use super::stats::StatsConfig;
use super::zones::ZonesConfig;

const LOCAL_CONFIG_PATH: &str = "zonehost.toml";
const SYSTEM_CONFIG_PATH: &str = "/etc/zonehost/config.toml";

/// Main configuration structure for Zonehost
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct Config {
    /// Listener configuration (bind address, port, workers)
    pub server: ServerConfig,

    /// Upstream recursion; disabled when no upstream is set
    pub recursion: RecursionConfig,

    /// Zone files and reload policy
    pub zones: ZonesConfig,

    /// Logging configuration
    pub logging: LoggingConfig,

    /// Periodic statistics report
    pub stats: StatsConfig,
}

impl Config {
    /// Load configuration from file or use defaults
    ///
    /// Priority order:
    /// 1. Explicitly provided path
    /// 2. zonehost.toml in current directory
    /// 3. /etc/zonehost/config.toml
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

    /// Parse configuration from TOML text
    pub fn from_toml(contents: &str) -> Result<Self, ConfigError> {
        toml::from_str(contents).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    fn from_file(path: &str) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::FileRead(path.to_string(), e.to_string()))?;
        Self::from_toml(&contents)
    }

    /// Apply command-line overrides to configuration
    fn apply_cli_overrides(&mut self, overrides: CliOverrides) {
        if let Some(port) = overrides.dns_port {
            self.server.dns_port = port;
        }
        if let Some(bind) = overrides.bind_address {
            self.server.bind_address = bind;
        }
        if let Some(upstream) = overrides.recurse_to {
            self.recursion.upstream = Some(upstream);
        }
        if !overrides.zone_files.is_empty() {
            self.zones.files.extend(overrides.zone_files);
        }
        if let Some(level) = overrides.log_level {
            self.logging.level = level;
        }
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.server.dns_port == 0 {
            return Err(ConfigError::Validation("DNS port cannot be 0".to_string()));
        }

        if self.server.udp_workers == 0 {
            return Err(ConfigError::Validation(
                "udp_workers must be at least 1".to_string(),
            ));
        }

        if let Some(Err(e)) = self.recursion.upstream_addr() {
            return Err(ConfigError::Validation(e));
        }

        if self.recursion.is_enabled() && self.recursion.timeout_ms == 0 {
            return Err(ConfigError::Validation(
                "Recursion timeout cannot be 0".to_string(),
            ));
        }

        Ok(())
    }
}

/// Command-line overrides for configuration
#[derive(Debug, Default)]
pub struct CliOverrides {
    pub dns_port: Option<u16>,
    pub bind_address: Option<String>,
    pub recurse_to: Option<String>,
    pub zone_files: Vec<String>,
    pub log_level: Option<String>,
}
