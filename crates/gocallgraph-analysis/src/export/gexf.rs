//! GEXF 1.2 output.

use gocallgraph_core::errors::ExportError;

use super::snapshot::GraphSnapshot;
use super::{escape_xml, ExportFormat, GraphExporter};

const GEXF_NS: &str = "http://www.gexf.net/1.2draft";

/// Static directed GEXF graph. Edge ids are sequential from 0.
#[derive(Default)]
pub struct GexfExporter;

impl GexfExporter {
    pub fn new() -> Self {
        Self
    }
}

impl GraphExporter for GexfExporter {
    fn format(&self) -> ExportFormat {
        ExportFormat::Gexf
    }

    fn render(&self, snapshot: &GraphSnapshot<'_>) -> Result<Vec<u8>, ExportError> {
        let mut xml = String::new();
        xml.push_str("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");
        xml.push_str(&format!("<gexf xmlns=\"{GEXF_NS}\" version=\"1.2\">\n"));
        xml.push_str("  <graph mode=\"static\" defaultedgetype=\"directed\">\n");

        xml.push_str("    <nodes>\n");
        for node in snapshot.nodes() {
            let name = escape_xml(node.name);
            xml.push_str(&format!("      <node id=\"{name}\" label=\"{name}\"/>\n"));
        }
        xml.push_str("    </nodes>\n");

        xml.push_str("    <edges>\n");
        for (id, (from, to)) in snapshot.edges().enumerate() {
            xml.push_str(&format!(
                "      <edge id=\"{id}\" source=\"{}\" target=\"{}\"/>\n",
                escape_xml(from.name),
                escape_xml(to.name)
            ));
        }
        xml.push_str("    </edges>\n");

        xml.push_str("  </graph>\n");
        xml.push_str("</gexf>\n");
        Ok(xml.into_bytes())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gocallgraph_core::types::{CallGraph, FunctionRecord};

    #[test]
    fn test_edge_ids_are_sequential() {
        let graph: CallGraph = vec![
            FunctionRecord::new("a", "x.go").with_calls(["b", "b"]),
            FunctionRecord::new("b", "x.go").with_calls(["a"]),
        ]
        .into_iter()
        .collect();
        let xml = String::from_utf8(GexfExporter::new().render(&GraphSnapshot::new(&graph)).unwrap())
            .unwrap();

        assert!(xml.contains("<gexf xmlns=\"http://www.gexf.net/1.2draft\" version=\"1.2\">"));
        assert!(xml.contains("<graph mode=\"static\" defaultedgetype=\"directed\">"));
        assert!(xml.contains("<edge id=\"0\" source=\"a\" target=\"b\"/>"));
        assert!(xml.contains("<edge id=\"1\" source=\"a\" target=\"b\"/>"));
        assert!(xml.contains("<edge id=\"2\" source=\"b\" target=\"a\"/>"));
        assert!(!xml.contains("id=\"3\""));
    }

    #[test]
    fn test_empty_graph_has_empty_sections() {
        let graph = CallGraph::new();
        let xml = String::from_utf8(GexfExporter::new().render(&GraphSnapshot::new(&graph)).unwrap())
            .unwrap();
        assert!(xml.contains("<nodes>\n    </nodes>"));
        assert!(xml.contains("<edges>\n    </edges>"));
    }
}
