//! Error types, one enum per subsystem.
//!
//! Per-file failures (`ScanError` entry variants, `ParseError::Syntax`) are
//! logged and skipped by the pipeline. Everything else is fatal and bubbles up
//! through `PipelineError`.

pub mod config_error;
pub mod error_code;
pub mod export_error;
pub mod parse_error;
pub mod pipeline_error;
pub mod scan_error;

pub use config_error::ConfigError;
pub use error_code::ErrorCode;
pub use export_error::ExportError;
pub use parse_error::ParseError;
pub use pipeline_error::PipelineError;
pub use scan_error::ScanError;
