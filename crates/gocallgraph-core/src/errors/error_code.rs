//! ErrorCode trait for stable, greppable error identifiers.

/// Every error enum implements this to expose a structured code string that
/// log lines and the CLI can report alongside the human-readable message.
pub trait ErrorCode {
    /// Returns the error code string (e.g., "SCAN_ERROR").
    fn error_code(&self) -> &'static str;

    /// Returns the formatted string: `[ERROR_CODE] message`.
    fn coded_string(&self) -> String
    where
        Self: std::fmt::Display,
    {
        format!("[{}] {}", self.error_code(), self)
    }
}

pub const SCAN_ERROR: &str = "SCAN_ERROR";
pub const ROOT_UNREADABLE: &str = "ROOT_UNREADABLE";
pub const PARSE_ERROR: &str = "PARSE_ERROR";
pub const GRAMMAR_ERROR: &str = "GRAMMAR_ERROR";
pub const EXPORT_ERROR: &str = "EXPORT_ERROR";
pub const RENDERER_NOT_FOUND: &str = "RENDERER_NOT_FOUND";
pub const CONFIG_ERROR: &str = "CONFIG_ERROR";
