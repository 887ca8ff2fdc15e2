//! gocallgraph-cli: argument parsing and the top-level run for the
//! `gocallgraph` binary.

pub mod exit_codes;

use std::ffi::OsString;
use std::path::PathBuf;

use anyhow::Context;
use clap::{ArgAction, ArgGroup, Parser};
use gocallgraph_analysis::export::WrittenExport;
use gocallgraph_analysis::{analyze, BuildStats, ExportFormat, ExportPlan, GraphSnapshot};
use gocallgraph_core::config::{ExportConfig, GraphConfig};
use gocallgraph_core::errors::{ErrorCode, PipelineError};
use tracing::{debug, info};

use exit_codes::{EXIT_CONFIG_ERROR, EXIT_ERROR, EXIT_SOURCE_ERROR};

/// Extract a static call graph from a Go source tree.
#[derive(Parser, Debug)]
#[command(name = "gocallgraph", author, version, about, long_about = None)]
#[command(after_help = "Single-dash output flags (-dotgraph, -graphml, -gexf, -png, -json) are accepted as aliases of their double-dash forms.")]
#[command(group(
    ArgGroup::new("outputs")
        .required(true)
        .multiple(true)
        .args(["dotgraph", "graphml", "gexf", "png", "json"])
))]
pub struct Cli {
    /// Go source directory to analyze
    pub source_dir: PathBuf,

    /// Write DOT text
    #[arg(long, value_name = "PATH")]
    pub dotgraph: Option<PathBuf>,

    /// Write GraphML XML
    #[arg(long, value_name = "PATH")]
    pub graphml: Option<PathBuf>,

    /// Write GEXF XML
    #[arg(long, value_name = "PATH")]
    pub gexf: Option<PathBuf>,

    /// Write a PNG rendered by Graphviz
    #[arg(long, value_name = "PATH")]
    pub png: Option<PathBuf>,

    /// Write the call graph as JSON
    #[arg(long, value_name = "PATH")]
    pub json: Option<PathBuf>,

    /// TOML configuration file
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Worker threads for parsing (0 = one per CPU, 1 = sequential)
    #[arg(short = 'j', long, value_name = "N")]
    pub threads: Option<usize>,

    /// Debug logging (repeat for trace)
    #[arg(short, long, action = ArgAction::Count, conflicts_with = "quiet")]
    pub verbose: u8,

    /// Only warnings and errors
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    /// Default log level when `GOCALLGRAPH_LOG` is unset.
    pub fn log_level(&self) -> &'static str {
        match (self.quiet, self.verbose) {
            (true, _) => "warn",
            (false, 0) => "info",
            (false, 1) => "debug",
            (false, _) => "trace",
        }
    }

    pub fn export_plan(&self, config: &ExportConfig) -> ExportPlan {
        let mut plan = ExportPlan::new(config.clone());
        let requested = [
            (ExportFormat::Dot, &self.dotgraph),
            (ExportFormat::Png, &self.png),
            (ExportFormat::GraphMl, &self.graphml),
            (ExportFormat::Gexf, &self.gexf),
            (ExportFormat::Json, &self.json),
        ];
        for (format, path) in requested {
            if let Some(path) = path {
                plan.add(format, path.clone());
            }
        }
        plan
    }
}

const OUTPUT_FLAGS: [&str; 5] = ["dotgraph", "graphml", "gexf", "png", "json"];

/// Rewrite single-dash output flags (`-dotgraph out.dot`, `-png=g.png`) to
/// their `--` form so clap accepts them. Everything after a bare `--` is left
/// alone.
pub fn normalize_args<I, T>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let mut passthrough = false;
    args.into_iter()
        .map(Into::into)
        .map(|arg| {
            if passthrough {
                return arg;
            }
            let Some(text) = arg.to_str() else {
                return arg;
            };
            if text == "--" {
                passthrough = true;
                return arg;
            }
            match text.strip_prefix('-') {
                Some(rest) if !rest.starts_with('-') && is_output_flag(rest) => {
                    OsString::from(format!("--{rest}"))
                }
                _ => arg,
            }
        })
        .collect()
}

fn is_output_flag(flag: &str) -> bool {
    let name = flag.split_once('=').map_or(flag, |(name, _)| name);
    OUTPUT_FLAGS.contains(&name)
}

/// What a successful run produced.
#[derive(Debug)]
pub struct RunSummary {
    pub stats: BuildStats,
    pub written: Vec<WrittenExport>,
}

/// Load config, build the graph, and write every requested export.
pub fn run(cli: &Cli) -> anyhow::Result<RunSummary> {
    let mut config = match &cli.config {
        Some(path) => GraphConfig::load(path)
            .map_err(PipelineError::from)
            .with_context(|| format!("failed to load config {}", path.display()))?,
        None => GraphConfig::default(),
    };
    if let Some(threads) = cli.threads {
        config.scan.threads = Some(threads);
    }
    debug!(?config, "effective configuration");

    let result = analyze(&cli.source_dir, &config)
        .with_context(|| format!("failed to analyze {}", cli.source_dir.display()))?;

    let snapshot = GraphSnapshot::new(&result.graph);
    info!(
        nodes = snapshot.node_count(),
        edges = snapshot.edge_count(),
        "call graph built"
    );

    let written = cli
        .export_plan(&config.export)
        .execute(&snapshot)
        .map_err(PipelineError::from)
        .context("export failed")?;

    Ok(RunSummary {
        stats: result.stats,
        written,
    })
}

/// Map a failed run to its process exit code.
pub fn exit_code_for(err: &anyhow::Error) -> i32 {
    match err.downcast_ref::<PipelineError>() {
        Some(PipelineError::Config(_)) => EXIT_CONFIG_ERROR,
        Some(PipelineError::Scan(e)) if e.is_fatal() => EXIT_SOURCE_ERROR,
        _ => EXIT_ERROR,
    }
}

/// `[CODE] message` for typed pipeline errors, anyhow's chain otherwise.
pub fn describe_error(err: &anyhow::Error) -> String {
    match err.downcast_ref::<PipelineError>() {
        Some(e) => format!("[{}] {err:#}", e.error_code()),
        None => format!("{err:#}"),
    }
}
