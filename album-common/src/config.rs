//! Configuration loading and resolution
//!
//! Each setting is resolved in priority order:
//! 1. Command-line argument / environment variable (highest priority)
//! 2. TOML config file
//! 3. Compiled default (fallback)
//!
//! Command-line and environment values both arrive through clap, so this
//! module sees them as a single [`ConfigOverrides`] layer.

use crate::{Error, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Compiled default listen host
pub const DEFAULT_HOST: &str = "127.0.0.1";

/// Compiled default listen port
pub const DEFAULT_PORT: u16 = 8080;

/// Compiled default log level
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Resolved service configuration
#[derive(Debug, Clone, PartialEq)]
pub struct ServiceConfig {
    pub host: String,
    pub port: u16,
    /// Install the three seed albums at startup
    pub seed: bool,
    pub log_level: String,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            seed: true,
            log_level: DEFAULT_LOG_LEVEL.to_string(),
        }
    }
}

impl ServiceConfig {
    /// Resolve configuration from overrides, config file and defaults
    ///
    /// `config_path` names an explicit config file; it must exist and parse.
    /// Without it the per-user default file is used when present.
    pub fn resolve(overrides: &ConfigOverrides, config_path: Option<&Path>) -> Result<Self> {
        let file = match config_path {
            Some(path) => TomlConfig::load(path)?,
            None => match default_config_path().filter(|p| p.exists()) {
                Some(path) => TomlConfig::load(&path)?,
                None => {
                    debug!("No config file found, using compiled defaults");
                    TomlConfig::default()
                }
            },
        };

        Ok(Self::merge(file, overrides))
    }

    /// Layer overrides over file values over compiled defaults
    pub fn merge(file: TomlConfig, overrides: &ConfigOverrides) -> Self {
        let defaults = Self::default();
        Self {
            host: overrides
                .host
                .clone()
                .or(file.host)
                .unwrap_or(defaults.host),
            port: overrides.port.or(file.port).unwrap_or(defaults.port),
            seed: overrides.seed.or(file.seed).unwrap_or(defaults.seed),
            log_level: overrides
                .log_level
                .clone()
                .or(file.log_level)
                .unwrap_or(defaults.log_level),
        }
    }

    /// Listen address in `host:port` form
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Values supplied on the command line or through the environment
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub host: Option<String>,
    pub port: Option<u16>,
    pub seed: Option<bool>,
    pub log_level: Option<String>,
}

/// On-disk TOML config; every key is optional
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct TomlConfig {
    pub host: Option<String>,
    pub port: Option<u16>,
    pub seed: Option<bool>,
    pub log_level: Option<String>,
}

impl TomlConfig {
    /// Parse config from TOML text
    pub fn parse(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Read and parse a config file
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            Error::Config(format!("Failed to read {}: {}", path.display(), e))
        })?;
        debug!("Loaded config file {}", path.display());
        Self::parse(&content)
    }
}

/// Per-user config file location (`<config dir>/album-service/config.toml`)
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("album-service").join("config.toml"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ServiceConfig::default();
        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.port, 8080);
        assert!(config.seed);
        assert_eq!(config.log_level, "info");
        assert_eq!(config.bind_addr(), "127.0.0.1:8080");
    }

    #[test]
    fn test_parse_partial_file() {
        let file = TomlConfig::parse("port = 9090\nseed = false\n").unwrap();
        assert_eq!(file.port, Some(9090));
        assert_eq!(file.seed, Some(false));
        assert!(file.host.is_none());
    }

    #[test]
    fn test_parse_rejects_bad_types() {
        let result = TomlConfig::parse("port = \"eighty\"");
        assert!(matches!(result, Err(Error::Toml(_))));
    }

    #[test]
    fn test_merge_priority() {
        let file = TomlConfig {
            host: Some("0.0.0.0".to_string()),
            port: Some(9000),
            seed: Some(false),
            log_level: None,
        };
        let overrides = ConfigOverrides {
            port: Some(9500),
            ..Default::default()
        };

        let config = ServiceConfig::merge(file, &overrides);
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 9500);
        assert!(!config.seed);
        assert_eq!(config.log_level, "info");
    }
}
