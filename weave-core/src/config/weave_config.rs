//! Top-level Weave configuration.

use serde::{Deserialize, Serialize};

use super::ClockConfig;
use crate::errors::ConfigError;

/// Top-level configuration aggregating all sub-configs.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct WeaveConfig {
    pub clock: ClockConfig,
}

impl WeaveConfig {
    /// Load configuration from a TOML string and validate it.
    /// Unknown keys are ignored.
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file.
    pub fn from_file(path: &std::path::Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::ParseError {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        Self::from_toml(&content).map_err(|e| match e {
            ConfigError::ParseError { message, .. } => ConfigError::ParseError {
                path: path.display().to_string(),
                message,
            },
            other => other,
        })
    }

    /// Validate the configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(ref id) = self.clock.replica_id {
            if id.trim().is_empty() {
                return Err(ConfigError::ValidationFailed {
                    field: "clock.replica_id".to_string(),
                    message: "must not be empty".to_string(),
                });
            }
        }
        Ok(())
    }
}
