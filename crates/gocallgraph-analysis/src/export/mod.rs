//! Export adapters: DOT, GraphML, GEXF, JSON, and PNG (DOT rasterized by
//! Graphviz).
//!
//! Every adapter reads the same immutable `GraphSnapshot`. Nodes are the
//! declared functions followed by placeholder nodes for call targets that
//! were never declared; edges keep one entry per call, duplicates included.

mod dot;
mod gexf;
mod graphml;
mod json;
mod plan;
mod png;
mod snapshot;

use std::path::Path;

use gocallgraph_core::config::ExportConfig;
use gocallgraph_core::errors::ExportError;
use tracing::debug;

pub use dot::DotExporter;
pub use gexf::GexfExporter;
pub use graphml::GraphMlExporter;
pub use json::JsonExporter;
pub use plan::{ExportPlan, ExportTarget, WrittenExport};
pub use png::PngExporter;
pub use snapshot::{GraphNode, GraphSnapshot, NodeKind};

/// Output formats, in the order a plan writes them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ExportFormat {
    Dot,
    Png,
    GraphMl,
    Gexf,
    Json,
}

impl ExportFormat {
    pub fn name(&self) -> &'static str {
        match self {
            ExportFormat::Dot => "DOT",
            ExportFormat::Png => "PNG",
            ExportFormat::GraphMl => "GraphML",
            ExportFormat::Gexf => "GEXF",
            ExportFormat::Json => "JSON",
        }
    }

    /// The serializing adapter for this format. PNG has none of its own: it
    /// rasterizes DOT output through Graphviz.
    pub fn exporter(&self, config: &ExportConfig) -> Option<Box<dyn GraphExporter>> {
        let exporter: Box<dyn GraphExporter> = match self {
            ExportFormat::Dot => Box::new(DotExporter::new(config.effective_graph_name())),
            ExportFormat::GraphMl => Box::new(GraphMlExporter::new(config.effective_graph_name())),
            ExportFormat::Gexf => Box::new(GexfExporter::new()),
            ExportFormat::Json => Box::new(JsonExporter::new(config.effective_pretty_json())),
            ExportFormat::Png => return None,
        };
        Some(exporter)
    }
}

impl std::fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Serializes a call graph snapshot to one output format.
pub trait GraphExporter: Send + Sync {
    fn format(&self) -> ExportFormat;

    fn name(&self) -> &'static str {
        self.format().name()
    }

    /// Render the full output document.
    fn render(&self, snapshot: &GraphSnapshot<'_>) -> Result<Vec<u8>, ExportError>;

    /// Render, write to `path`, and hand back the bytes written.
    fn write(&self, snapshot: &GraphSnapshot<'_>, path: &Path) -> Result<Vec<u8>, ExportError> {
        let bytes = self.render(snapshot)?;
        write_output(self.format(), path, &bytes)?;
        Ok(bytes)
    }
}

/// Write rendered bytes, mapping IO failures to `ExportError::Io`.
pub fn write_output(format: ExportFormat, path: &Path, bytes: &[u8]) -> Result<(), ExportError> {
    std::fs::write(path, bytes).map_err(|source| ExportError::Io {
        format: format.name(),
        path: path.to_path_buf(),
        source,
    })?;
    debug!(format = format.name(), path = %path.display(), bytes = bytes.len(), "export written");
    Ok(())
}

pub(crate) fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}

#[cfg(test)]
mod tests {
    use super::*;
    use gocallgraph_core::types::{CallGraph, FunctionRecord};
    use tempfile::TempDir;

    #[test]
    fn test_png_has_no_serializing_adapter() {
        let config = ExportConfig::default();
        assert!(ExportFormat::Png.exporter(&config).is_none());
        for format in [ExportFormat::Dot, ExportFormat::GraphMl, ExportFormat::Gexf, ExportFormat::Json] {
            let exporter = format.exporter(&config).unwrap();
            assert_eq!(exporter.format(), format);
            assert_eq!(exporter.name(), format.name());
        }
    }

    #[test]
    fn test_write_returns_bytes_on_disk() {
        let dir = TempDir::new().unwrap();
        let graph: CallGraph =
            std::iter::once(FunctionRecord::new("a", "x.go").with_calls(["b"])).collect();
        let path = dir.path().join("g.graphml");

        let exporter = ExportFormat::GraphMl.exporter(&ExportConfig::default()).unwrap();
        let bytes = exporter.write(&GraphSnapshot::new(&graph), &path).unwrap();
        assert_eq!(std::fs::read(&path).unwrap(), bytes);
    }

    #[test]
    fn test_escape_xml() {
        assert_eq!(escape_xml(r#"<a & 'b'>"#), "&lt;a &amp; &apos;b&apos;&gt;");
        assert_eq!(escape_xml("\"x\""), "&quot;x&quot;");
    }
}
