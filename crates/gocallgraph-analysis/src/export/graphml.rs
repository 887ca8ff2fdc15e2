//! GraphML output.

use gocallgraph_core::constants::DEFAULT_GRAPH_NAME;
use gocallgraph_core::errors::ExportError;

use super::snapshot::GraphSnapshot;
use super::{escape_xml, ExportFormat, GraphExporter};

const GRAPHML_NS: &str = "http://graphml.graphdrawing.org/xmlns";

/// GraphML document with `label` and `kind` node attributes. Node ids are
/// function names.
pub struct GraphMlExporter {
    graph_id: String,
}

impl GraphMlExporter {
    pub fn new(graph_id: impl Into<String>) -> Self {
        Self {
            graph_id: graph_id.into(),
        }
    }
}

impl Default for GraphMlExporter {
    fn default() -> Self {
        Self::new(DEFAULT_GRAPH_NAME)
    }
}

impl GraphExporter for GraphMlExporter {
    fn format(&self) -> ExportFormat {
        ExportFormat::GraphMl
    }

    fn render(&self, snapshot: &GraphSnapshot<'_>) -> Result<Vec<u8>, ExportError> {
        let mut xml = String::new();
        xml.push_str("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");
        xml.push_str(&format!("<graphml xmlns=\"{GRAPHML_NS}\">\n"));
        xml.push_str(
            "  <key id=\"label\" for=\"node\" attr.name=\"label\" attr.type=\"string\"/>\n",
        );
        xml.push_str("  <key id=\"kind\" for=\"node\" attr.name=\"kind\" attr.type=\"string\"/>\n");
        xml.push_str(&format!(
            "  <graph id=\"{}\" edgedefault=\"directed\">\n",
            escape_xml(&self.graph_id)
        ));

        for node in snapshot.nodes() {
            let name = escape_xml(node.name);
            xml.push_str(&format!(
                "    <node id=\"{name}\"><data key=\"label\">{name}</data><data key=\"kind\">{}</data></node>\n",
                node.kind.as_str()
            ));
        }

        for (from, to) in snapshot.edges() {
            xml.push_str(&format!(
                "    <edge source=\"{}\" target=\"{}\"/>\n",
                escape_xml(from.name),
                escape_xml(to.name)
            ));
        }

        xml.push_str("  </graph>\n");
        xml.push_str("</graphml>\n");
        Ok(xml.into_bytes())
    }
}
