//! # Exit Codes
//!
//! Process exit codes for the `gocallgraph` binary. Per-file parse or access
//! failures never change the exit code; they are logged and counted.

/// Successful execution
pub const EXIT_SUCCESS: i32 = 0;

/// Export failed, or another fatal runtime error
pub const EXIT_ERROR: i32 = 1;

/// Invalid command line (clap usage error)
pub const EXIT_USAGE: i32 = 2;

/// Configuration file missing, malformed, or invalid
pub const EXIT_CONFIG_ERROR: i32 = 3;

/// Source root missing, not a directory, or unreadable
pub const EXIT_SOURCE_ERROR: i32 = 4;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes_are_distinct() {
        let codes = [
            EXIT_SUCCESS,
            EXIT_ERROR,
            EXIT_USAGE,
            EXIT_CONFIG_ERROR,
            EXIT_SOURCE_ERROR,
        ];

        for (i, &code1) in codes.iter().enumerate() {
            for (j, &code2) in codes.iter().enumerate() {
                if i != j {
                    assert_ne!(code1, code2, "Exit codes at positions {i} and {j} collide");
                }
            }
        }
    }

    #[test]
    fn test_exit_codes_fit_in_u8() {
        for code in [EXIT_SUCCESS, EXIT_ERROR, EXIT_USAGE, EXIT_CONFIG_ERROR, EXIT_SOURCE_ERROR] {
            assert!(u8::try_from(code).is_ok());
        }
    }
}
