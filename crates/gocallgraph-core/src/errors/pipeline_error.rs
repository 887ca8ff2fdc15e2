//! Top-level error for a full walk → extract → export run.

use super::error_code::ErrorCode;
use super::{ConfigError, ExportError, ParseError, ScanError};

#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    #[error(transparent)]
    Scan(#[from] ScanError),

    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Export(#[from] ExportError),

    #[error(transparent)]
    Config(#[from] ConfigError),
}

impl ErrorCode for PipelineError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Scan(e) => e.error_code(),
            Self::Parse(e) => e.error_code(),
            Self::Export(e) => e.error_code(),
            Self::Config(e) => e.error_code(),
        }
    }
}
