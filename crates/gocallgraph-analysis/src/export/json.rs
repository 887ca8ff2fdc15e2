//! JSON output: the call graph map as `{ name: { name, filePath, calls } }`.

use gocallgraph_core::errors::ExportError;

use super::snapshot::GraphSnapshot;
use super::{ExportFormat, GraphExporter};

pub struct JsonExporter {
    pretty: bool,
}

impl JsonExporter {
    pub fn new(pretty: bool) -> Self {
        Self { pretty }
    }
}

impl GraphExporter for JsonExporter {
    fn format(&self) -> ExportFormat {
        ExportFormat::Json
    }

    fn render(&self, snapshot: &GraphSnapshot<'_>) -> Result<Vec<u8>, ExportError> {
        let graph = snapshot.source();
        let result = if self.pretty {
            serde_json::to_vec_pretty(graph)
        } else {
            serde_json::to_vec(graph)
        };
        result.map_err(|e| ExportError::Serialize {
            format: ExportFormat::Json.name(),
            message: e.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gocallgraph_core::types::{CallGraph, FunctionRecord};

    #[test]
    fn test_compact_output() {
        let graph: CallGraph = std::iter::once(FunctionRecord::new("a", "x.go").with_calls(["b"]))
            .collect();
        let bytes = JsonExporter::new(false).render(&GraphSnapshot::new(&graph)).unwrap();
        assert_eq!(
            String::from_utf8(bytes).unwrap(),
            r#"{"a":{"name":"a","filePath":"x.go","calls":["b"]}}"#
        );
    }

    #[test]
    fn test_pretty_output_parses_back() {
        let graph: CallGraph = vec![
            FunctionRecord::new("a", "x.go").with_calls(["b"]),
            FunctionRecord::new("b", "y.go"),
        ]
        .into_iter()
        .collect();
        let bytes = JsonExporter::new(true).render(&GraphSnapshot::new(&graph)).unwrap();
        let parsed: CallGraph = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(parsed, graph);
    }
}
