//! Ordered set of exports requested for one run.

use std::path::PathBuf;

use gocallgraph_core::config::ExportConfig;
use gocallgraph_core::errors::ExportError;
use tracing::info_span;

use super::dot::DotExporter;
use super::png::PngExporter;
use super::snapshot::GraphSnapshot;
use super::{write_output, ExportFormat};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportTarget {
    pub format: ExportFormat,
    pub path: PathBuf,
}

/// One file written by `ExportPlan::execute`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WrittenExport {
    pub format: ExportFormat,
    pub path: PathBuf,
    pub bytes: usize,
}

/// Export targets plus the settings they render with.
///
/// Targets run in format order (DOT, PNG, GraphML, GEXF, JSON) regardless of
/// insertion order. The first failure stops the plan; files already written
/// stay on disk.
#[derive(Debug, Clone, Default)]
pub struct ExportPlan {
    config: ExportConfig,
    targets: Vec<ExportTarget>,
}

impl ExportPlan {
    pub fn new(config: ExportConfig) -> Self {
        Self {
            config,
            targets: Vec::new(),
        }
    }

    pub fn add(&mut self, format: ExportFormat, path: impl Into<PathBuf>) -> &mut Self {
        self.targets.push(ExportTarget {
            format,
            path: path.into(),
        });
        self
    }

    pub fn with(mut self, format: ExportFormat, path: impl Into<PathBuf>) -> Self {
        self.add(format, path);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.targets.is_empty()
    }

    /// Targets in execution order.
    pub fn targets(&self) -> Vec<&ExportTarget> {
        let mut ordered: Vec<&ExportTarget> = self.targets.iter().collect();
        ordered.sort_by_key(|t| t.format);
        ordered
    }

    pub fn execute(&self, snapshot: &GraphSnapshot<'_>) -> Result<Vec<WrittenExport>, ExportError> {
        let _span = info_span!(
            "export",
            targets = self.targets.len(),
            nodes = snapshot.node_count(),
            edges = snapshot.edge_count()
        )
        .entered();

        let mut dot_bytes: Option<Vec<u8>> = None;
        let mut written = Vec::with_capacity(self.targets.len());

        for target in self.targets() {
            let size = match target.format.exporter(&self.config) {
                Some(exporter) => {
                    let bytes = exporter.write(snapshot, &target.path)?;
                    let size = bytes.len();
                    if target.format == ExportFormat::Dot {
                        dot_bytes = Some(bytes);
                    }
                    size
                }
                None => {
                    let dot = dot_bytes.get_or_insert_with(|| {
                        DotExporter::new(self.config.effective_graph_name())
                            .render_string(snapshot)
                            .into_bytes()
                    });
                    let png = PngExporter::new(self.config.effective_dot_binary()).rasterize(dot)?;
                    write_output(target.format, &target.path, &png)?;
                    png.len()
                }
            };
            written.push(WrittenExport {
                format: target.format,
                path: target.path.clone(),
                bytes: size,
            });
        }

        Ok(written)
    }
}
