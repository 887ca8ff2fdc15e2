//! Graphviz DOT output.

use std::fmt::Write as _;

use gocallgraph_core::constants::{CALL_EDGE_LABEL, DEFAULT_GRAPH_NAME};
use gocallgraph_core::errors::ExportError;

use super::snapshot::{GraphSnapshot, NodeKind};
use super::{ExportFormat, GraphExporter};

/// Renders `digraph "<name>" { ... }` with every identifier quoted.
pub struct DotExporter {
    graph_name: String,
}

impl DotExporter {
    pub fn new(graph_name: impl Into<String>) -> Self {
        Self {
            graph_name: graph_name.into(),
        }
    }

    pub fn render_string(&self, snapshot: &GraphSnapshot<'_>) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "digraph {} {{", quote(&self.graph_name));

        for node in snapshot.nodes() {
            match node.kind {
                NodeKind::Declared => {
                    let _ = writeln!(out, "    {};", quote(node.name));
                }
                NodeKind::External => {
                    let _ = writeln!(out, "    {} [style=dashed];", quote(node.name));
                }
            }
        }

        for (from, to) in snapshot.edges() {
            let _ = writeln!(
                out,
                "    {} -> {} [label={}];",
                quote(from.name),
                quote(to.name),
                quote(CALL_EDGE_LABEL)
            );
        }

        out.push_str("}\n");
        out
    }
}

impl Default for DotExporter {
    fn default() -> Self {
        Self::new(DEFAULT_GRAPH_NAME)
    }
}

impl GraphExporter for DotExporter {
    fn format(&self) -> ExportFormat {
        ExportFormat::Dot
    }

    fn render(&self, snapshot: &GraphSnapshot<'_>) -> Result<Vec<u8>, ExportError> {
        Ok(self.render_string(snapshot).into_bytes())
    }
}

/// Quote a DOT identifier.
pub(crate) fn quote(id: &str) -> String {
    let mut out = String::with_capacity(id.len() + 2);
    out.push('"');
    for c in id.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            _ => out.push(c),
        }
    }
    out.push('"');
    out
}
