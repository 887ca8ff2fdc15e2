//! Top-level configuration file.

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::{ExportConfig, ScanConfig};
use crate::errors::ConfigError;

/// Root of `gocallgraph.toml`.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct GraphConfig {
    pub scan: ScanConfig,
    pub export: ExportConfig,
}

impl GraphConfig {
    /// Load and validate a config file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let display = path.display().to_string();
        let text = std::fs::read_to_string(path).map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => ConfigError::FileNotFound {
                path: display.clone(),
            },
            _ => ConfigError::ParseError {
                path: display.clone(),
                message: e.to_string(),
            },
        })?;
        Self::from_toml_str(&text, &display)
    }

    /// Parse and validate config text. `origin` is only used in error messages.
    pub fn from_toml_str(text: &str, origin: &str) -> Result<Self, ConfigError> {
        let config: GraphConfig = toml::from_str(text).map_err(|e| ConfigError::ParseError {
            path: origin.to_string(),
            message: e.message().to_string(),
        })?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.scan.validate()?;
        self.export.validate()
    }
}
