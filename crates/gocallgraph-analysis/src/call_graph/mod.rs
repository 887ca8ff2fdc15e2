//! Call Graph Module
//!
//! Folds per-file extraction output into one name-keyed `CallGraph`.
//!
//! Key components:
//! - `CallGraphBuilder` - walk, extract (optionally in parallel), aggregate
//! - `BuildResult` / `BuildStats` - the graph plus run statistics

mod builder;
mod types;

pub use builder::CallGraphBuilder;
pub use types::{BuildResult, BuildStats, FileFailure};
