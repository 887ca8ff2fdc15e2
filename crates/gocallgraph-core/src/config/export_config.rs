//! Export adapter configuration.

use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_DOT_BINARY, DEFAULT_GRAPH_NAME};
use crate::errors::ConfigError;

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct ExportConfig {
    /// Graph identifier for DOT and GraphML. Default: "callgraph".
    pub graph_name: Option<String>,
    /// Graphviz executable used to rasterize PNG output. Default: "dot".
    pub dot_binary: Option<String>,
    /// Pretty-print JSON output. Default: true.
    pub pretty_json: Option<bool>,
}

impl ExportConfig {
    pub fn effective_graph_name(&self) -> String {
        self.graph_name
            .clone()
            .unwrap_or_else(|| DEFAULT_GRAPH_NAME.to_string())
    }

    pub fn effective_dot_binary(&self) -> String {
        self.dot_binary
            .clone()
            .unwrap_or_else(|| DEFAULT_DOT_BINARY.to_string())
    }

    pub fn effective_pretty_json(&self) -> bool {
        self.pretty_json.unwrap_or(true)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if matches!(&self.graph_name, Some(name) if name.trim().is_empty()) {
            return Err(ConfigError::InvalidValue {
                field: "export.graph_name".to_string(),
                message: "must not be empty".to_string(),
            });
        }
        if matches!(&self.dot_binary, Some(bin) if bin.trim().is_empty()) {
            return Err(ConfigError::InvalidValue {
                field: "export.dot_binary".to_string(),
                message: "must not be empty".to_string(),
            });
        }
        Ok(())
    }
}
