//! Scanner errors.

use std::path::PathBuf;

use super::error_code::{self, ErrorCode};

/// Errors that can occur while walking the source tree.
#[derive(Debug, thiserror::Error)]
pub enum ScanError {
    #[error("Source root not found: {path}")]
    RootNotFound { path: PathBuf },

    #[error("Source root is not a directory: {path}")]
    RootNotDirectory { path: PathBuf },

    #[error("Source root is unreadable: {path}: {source}")]
    RootUnreadable {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("IO error scanning {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Walk error at {path}: {message}")]
    Walk { path: PathBuf, message: String },

    #[error("File too large: {path} ({size} bytes, max {max})")]
    FileTooLarge { path: PathBuf, size: u64, max: u64 },
}

impl ScanError {
    /// Whether this error concerns the scan root itself. Root errors abort the
    /// run; every other variant only skips one entry.
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            Self::RootNotFound { .. } | Self::RootNotDirectory { .. } | Self::RootUnreadable { .. }
        )
    }
}

impl ErrorCode for ScanError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::RootNotFound { .. }
            | Self::RootNotDirectory { .. }
            | Self::RootUnreadable { .. } => error_code::ROOT_UNREADABLE,
            _ => error_code::SCAN_ERROR,
        }
    }
}
