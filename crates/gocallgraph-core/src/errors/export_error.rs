//! Export errors.

use std::path::PathBuf;

use super::error_code::{self, ErrorCode};

/// Errors raised while serializing or writing an export.
#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("Failed to write {format} output to {path}: {source}")]
    Io {
        format: &'static str,
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to serialize {format} output: {message}")]
    Serialize {
        format: &'static str,
        message: String,
    },

    #[error("Graphviz renderer not found: {binary}")]
    RendererNotFound { binary: String },

    #[error("Graphviz renderer {binary} failed: {message}")]
    RenderFailed { binary: String, message: String },
}

impl ErrorCode for ExportError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::RendererNotFound { .. } => error_code::RENDERER_NOT_FOUND,
            _ => error_code::EXPORT_ERROR,
        }
    }
}
