//! Shared constants for gocallgraph.

/// Environment variable read by `init_tracing` for per-module log filters.
pub const LOG_ENV_VAR: &str = "GOCALLGRAPH_LOG";

/// Source file extensions scanned when the config names none.
pub const DEFAULT_EXTENSIONS: &[&str] = &["go"];

/// Default number of worker threads (0 = one per CPU).
pub const DEFAULT_THREADS: usize = 0;

/// Default graph identifier used by the DOT and GraphML exporters.
pub const DEFAULT_GRAPH_NAME: &str = "callgraph";

/// Default Graphviz executable used for PNG rendering.
pub const DEFAULT_DOT_BINARY: &str = "dot";

/// Relation label attached to every DOT edge.
pub const CALL_EDGE_LABEL: &str = "call";
