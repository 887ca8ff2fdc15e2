//! gocallgraph-core: shared foundation for the call graph extractor
//!
//! - Types: `FunctionRecord` and the name-keyed `CallGraph` aggregator
//! - Errors: one `thiserror` enum per subsystem plus `PipelineError`
//! - Config: TOML-backed scan and export settings
//! - Tracing: `tracing-subscriber` initialisation with `GOCALLGRAPH_LOG`

pub mod config;
pub mod constants;
pub mod errors;
pub mod tracing;
pub mod types;

pub use config::{ExportConfig, GraphConfig, ScanConfig};
pub use errors::{
    ConfigError, ErrorCode, ExportError, ParseError, PipelineError, ScanError,
};
pub use types::{CallGraph, FunctionRecord};
