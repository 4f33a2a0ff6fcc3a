//! Configuration loading from disk.

use std::fs;
use std::path::Path;

use crate::config::schema::LoggerConfig;
use crate::config::validation::{validate_config, ValidationError};

/// Error type for configuration loading.
#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
    Validation(Vec<ValidationError>),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "IO error: {}", e),
            ConfigError::Parse(e) => write!(f, "Parse error: {}", e),
            ConfigError::Validation(errors) => {
                write!(f, "Validation failed: ")?;
                for (i, err) in errors.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", err)?;
                }
                Ok(())
            }
        }
    }
}

impl std::error::Error for ConfigError {}

/// Read and deserialize a TOML file without semantic checks.
pub fn parse_config(path: &Path) -> Result<LoggerConfig, ConfigError> {
    let content = fs::read_to_string(path).map_err(ConfigError::Io)?;
    toml::from_str(&content).map_err(ConfigError::Parse)
}

/// Load and validate configuration from a TOML file.
pub fn load_config(path: &Path) -> Result<LoggerConfig, ConfigError> {
    let config = parse_config(path)?;

    validate_config(&config).map_err(ConfigError::Validation)?;

    Ok(config)
}

/// Load from `path` when given, otherwise start from validated defaults.
pub fn load_or_default(path: Option<&Path>) -> Result<LoggerConfig, ConfigError> {
    load_with_overrides(path, &ConfigOverrides::default())
}

/// Values supplied on the command line; each one replaces the file value.
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub bind_address: Option<String>,
    pub log_file: Option<String>,
}

impl ConfigOverrides {
    pub fn apply(&self, config: &mut LoggerConfig) {
        if let Some(bind) = &self.bind_address {
            config.listener.bind_address = bind.clone();
        }
        if let Some(path) = &self.log_file {
            config.log_file.path = path.clone();
        }
    }
}

/// Parse `path` (or take defaults), apply `overrides`, then validate once.
///
/// Validation runs on the merged result, so an override can replace a value
/// the file gets wrong.
pub fn load_with_overrides(
    path: Option<&Path>,
    overrides: &ConfigOverrides,
) -> Result<LoggerConfig, ConfigError> {
    let mut config = match path {
        Some(path) => parse_config(path)?,
        None => LoggerConfig::default(),
    };
    overrides.apply(&mut config);

    validate_config(&config).map_err(ConfigError::Validation)?;
    Ok(config)
}
