//! Configuration for a gocallgraph run.
//!
//! Every field is optional so a partial TOML file only overrides what it
//! names; `effective_*` accessors supply the defaults.

mod export_config;
mod graph_config;
mod scan_config;

pub use export_config::ExportConfig;
pub use graph_config::GraphConfig;
pub use scan_config::ScanConfig;
