//! Call graph build types.

use gocallgraph_core::errors::{ErrorCode, ParseError, ScanError};
use gocallgraph_core::types::CallGraph;
use serde::{Deserialize, Serialize};

/// Result of building the call graph.
#[derive(Debug, Clone)]
pub struct BuildResult {
    pub graph: CallGraph,
    pub stats: BuildStats,
}

/// Statistics for one build.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuildStats {
    /// Source files yielded by the walker
    pub files_discovered: usize,
    /// Files parsed without error (including files with zero functions)
    pub files_parsed: usize,
    /// Files skipped because of a syntax error
    pub parse_failures: usize,
    /// Entries skipped because they could not be read
    pub access_failures: usize,
    /// Distinct function names in the final graph
    pub functions: usize,
    /// Call entries in the final graph (duplicates counted)
    pub call_sites: usize,
    /// Declarations replaced by a later declaration with the same name
    pub overwritten: usize,
    /// Non-fatal failure messages, in walk order
    pub errors: Vec<String>,
    /// Duration in milliseconds
    pub duration_ms: u64,
}

/// Why a single file contributed no records.
#[derive(Debug, thiserror::Error)]
pub enum FileFailure {
    #[error(transparent)]
    Access(#[from] ScanError),

    #[error(transparent)]
    Parse(#[from] ParseError),
}

impl ErrorCode for FileFailure {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Access(e) => e.error_code(),
            Self::Parse(e) => e.error_code(),
        }
    }
}
