//! One extracted function declaration.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// A function declaration and the bare identifiers it calls.
///
/// `calls` keeps source order and duplicates: `f(); f()` yields `["f", "f"]`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FunctionRecord {
    pub name: String,
    pub file_path: PathBuf,
    pub calls: Vec<String>,
}

impl FunctionRecord {
    pub fn new(name: impl Into<String>, file_path: impl Into<PathBuf>) -> Self {
        Self {
            name: name.into(),
            file_path: file_path.into(),
            calls: Vec::new(),
        }
    }

    pub fn with_calls<I, S>(mut self, calls: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.calls = calls.into_iter().map(Into::into).collect();
        self
    }
}
