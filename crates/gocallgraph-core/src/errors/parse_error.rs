//! Parser errors.

use std::path::PathBuf;

use super::error_code::{self, ErrorCode};

/// Errors that can occur while building or running the syntax extractor.
#[derive(Debug, Clone, thiserror::Error)]
pub enum ParseError {
    #[error("Failed to load grammar for {language}: {message}")]
    GrammarLoad { language: String, message: String },

    #[error("Failed to compile {query} query: {message}")]
    QueryCompile { query: String, message: String },

    #[error("Syntax error in {path} at {line}:{column}")]
    Syntax {
        path: PathBuf,
        line: usize,
        column: usize,
    },

    #[error("Tree-sitter produced no tree for {path}")]
    NoTree { path: PathBuf },

    #[error("Invalid UTF-8 in {path} at byte {offset}")]
    InvalidUtf8 { path: PathBuf, offset: usize },
}

impl ParseError {
    /// Per-file errors leave the rest of the run untouched.
    pub fn is_per_file(&self) -> bool {
        matches!(
            self,
            Self::Syntax { .. } | Self::NoTree { .. } | Self::InvalidUtf8 { .. }
        )
    }
}

impl ErrorCode for ParseError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::GrammarLoad { .. } | Self::QueryCompile { .. } => error_code::GRAMMAR_ERROR,
            _ => error_code::PARSE_ERROR,
        }
    }
}
