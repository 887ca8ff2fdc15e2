//! gocallgraph-analysis: static call graph extraction for Go source trees
//!
//! Pipeline, leaves first:
//! - `scanner` walks the source root and yields candidate files
//! - `parsers` runs two tree-sitter queries per file (declarations, then
//!   bare-identifier calls inside each body) and yields `FunctionRecord`s
//! - `call_graph` folds the records into one name-keyed `CallGraph`
//! - `export` renders the graph as DOT, GraphML, GEXF, JSON, or PNG

pub mod call_graph;
pub mod export;
pub mod parsers;
pub mod scanner;

use std::path::Path;

use gocallgraph_core::config::GraphConfig;
use gocallgraph_core::errors::PipelineError;

pub use call_graph::{BuildResult, BuildStats, CallGraphBuilder};
pub use export::{ExportFormat, ExportPlan, GraphExporter, GraphSnapshot};
pub use parsers::SyntaxExtractor;
pub use scanner::{Language, SourceWalker};

/// Walk `root` and build its call graph with the given configuration.
pub fn analyze(root: &Path, config: &GraphConfig) -> Result<BuildResult, PipelineError> {
    CallGraphBuilder::new(config.scan.clone()).build(root)
}
