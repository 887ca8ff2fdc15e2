//! `gocallgraph` binary entry point.

use std::process::ExitCode;

use clap::Parser;
use gocallgraph_cli::exit_codes::{EXIT_SUCCESS, EXIT_USAGE};
use gocallgraph_cli::{describe_error, exit_code_for, normalize_args, run, Cli};
use gocallgraph_core::tracing::init_tracing;

fn main() -> ExitCode {
    let cli = match Cli::try_parse_from(normalize_args(std::env::args_os())) {
        Ok(cli) => cli,
        Err(e) => {
            // --help and --version also arrive here, on stdout.
            let code = if e.use_stderr() { EXIT_USAGE } else { EXIT_SUCCESS };
            let _ = e.print();
            return exit(code);
        }
    };

    init_tracing(cli.log_level());

    match run(&cli) {
        Ok(summary) => {
            for export in &summary.written {
                println!("{} file saved to: {}", export.format, export.path.display());
            }
            exit(EXIT_SUCCESS)
        }
        Err(err) => {
            eprintln!("Error: {}", describe_error(&err));
            exit(exit_code_for(&err))
        }
    }
}

fn exit(code: i32) -> ExitCode {
    ExitCode::from(u8::try_from(code).unwrap_or(1))
}
