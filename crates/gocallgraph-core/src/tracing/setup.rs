//! Tracing initialization and configuration.

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::constants::LOG_ENV_VAR;

static INIT: Once = Once::new();

/// Initialize the gocallgraph tracing/logging system.
///
/// Reads the `GOCALLGRAPH_LOG` environment variable for per-module log levels.
/// Format: `GOCALLGRAPH_LOG=gocallgraph_analysis::scanner=debug,gocallgraph_analysis=info`
///
/// Falls back to `default_level` (e.g. `"info"`) applied to the gocallgraph
/// crates when the variable is unset or invalid. Logs go to stderr so exports
/// written to stdout stay clean.
///
/// This function is idempotent; only the first call installs a subscriber.
pub fn init_tracing(default_level: &str) {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_env(LOG_ENV_VAR)
            .unwrap_or_else(|_| EnvFilter::new(default_directives(default_level)));

        let _ = tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_target(true),
            )
            .with(filter)
            .try_init();
    });
}

fn default_directives(level: &str) -> String {
    ["gocallgraph_cli", "gocallgraph_core", "gocallgraph_analysis"]
        .iter()
        .map(|target| format!("{target}={level}"))
        .collect::<Vec<_>>()
        .join(",")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_directives_cover_every_crate() {
        let directives = default_directives("debug");
        assert_eq!(
            directives,
            "gocallgraph_cli=debug,gocallgraph_core=debug,gocallgraph_analysis=debug"
        );
        assert!(EnvFilter::try_new(&directives).is_ok());
    }
}
