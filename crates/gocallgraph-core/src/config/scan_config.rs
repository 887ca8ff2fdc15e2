//! Source walker configuration.

use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_EXTENSIONS, DEFAULT_THREADS};
use crate::errors::ConfigError;

/// Configuration for the source walker and the per-file extraction pool.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct ScanConfig {
    /// File extensions to analyse, without the leading dot. Default: `["go"]`.
    pub extensions: Option<Vec<String>>,
    /// Directory names pruned from the walk. Default: none.
    pub ignore_dirs: Option<Vec<String>>,
    /// Follow symbolic links. Default: false.
    pub follow_symlinks: Option<bool>,
    /// Skip files larger than this many bytes. Default: unlimited.
    pub max_file_size: Option<u64>,
    /// Worker threads for parsing (0 = auto, 1 = sequential). Default: 0.
    pub threads: Option<usize>,
}

impl ScanConfig {
    pub fn effective_extensions(&self) -> Vec<String> {
        self.extensions.clone().unwrap_or_else(|| {
            DEFAULT_EXTENSIONS.iter().map(|e| e.to_string()).collect()
        })
    }

    pub fn effective_ignore_dirs(&self) -> Vec<String> {
        self.ignore_dirs.clone().unwrap_or_default()
    }

    pub fn effective_follow_symlinks(&self) -> bool {
        self.follow_symlinks.unwrap_or(false)
    }

    pub fn effective_threads(&self) -> usize {
        self.threads.unwrap_or(DEFAULT_THREADS)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(extensions) = &self.extensions {
            if extensions.is_empty() {
                return Err(ConfigError::InvalidValue {
                    field: "scan.extensions".to_string(),
                    message: "at least one extension is required".to_string(),
                });
            }
            for ext in extensions {
                if ext.is_empty() || ext.contains(['.', '/', '\\']) {
                    return Err(ConfigError::InvalidValue {
                        field: "scan.extensions".to_string(),
                        message: format!("'{ext}' must be a bare extension such as \"go\""),
                    });
                }
            }
        }
        if self.max_file_size == Some(0) {
            return Err(ConfigError::InvalidValue {
                field: "scan.max_file_size".to_string(),
                message: "must be greater than zero".to_string(),
            });
        }
        Ok(())
    }
}
