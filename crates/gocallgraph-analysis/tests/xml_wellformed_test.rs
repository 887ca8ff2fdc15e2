//! GraphML and GEXF output must parse as XML and carry every node and edge.

use gocallgraph_analysis::export::{GexfExporter, GraphMlExporter};
use gocallgraph_analysis::{GraphExporter, GraphSnapshot};
use gocallgraph_core::types::{CallGraph, FunctionRecord};
use quick_xml::events::Event;
use quick_xml::Reader;

fn awkward_graph() -> CallGraph {
    vec![
        FunctionRecord::new("main", "m.go").with_calls(["run", "a<b>", "run"]),
        FunctionRecord::new("run", "r.go").with_calls(["x&y", "q\"uote", "apos'"]),
    ]
    .into_iter()
    .collect()
}

struct Counts {
    nodes: usize,
    edges: Vec<(String, String)>,
}

fn read_xml(bytes: &[u8]) -> Counts {
    let text = std::str::from_utf8(bytes).unwrap();
    let mut reader = Reader::from_str(text);
    let mut counts = Counts {
        nodes: 0,
        edges: Vec::new(),
    };
    loop {
        match reader.read_event() {
            Ok(Event::Eof) => break,
            Ok(Event::Start(e)) | Ok(Event::Empty(e)) => match e.name().as_ref() {
                b"node" => counts.nodes += 1,
                b"edge" => {
                    let attr = |key: &str| {
                        e.try_get_attribute(key)
                            .unwrap()
                            .unwrap()
                            .unescape_value()
                            .unwrap()
                            .into_owned()
                    };
                    counts.edges.push((attr("source"), attr("target")));
                }
                _ => {}
            },
            Ok(_) => {}
            Err(err) => panic!("malformed XML at {}: {err}", reader.error_position()),
        }
    }
    counts
}

#[test]
fn test_graphml_is_well_formed() {
    let graph = awkward_graph();
    let snapshot = GraphSnapshot::new(&graph);
    let bytes = GraphMlExporter::default().render(&snapshot).unwrap();
    let counts = read_xml(&bytes);

    assert_eq!(counts.nodes, snapshot.node_count());
    assert_eq!(counts.edges.len(), graph.call_count());
    assert!(counts.edges.contains(&("main".to_string(), "a<b>".to_string())));
    assert!(counts.edges.contains(&("run".to_string(), "q\"uote".to_string())));
}

#[test]
fn test_gexf_is_well_formed() {
    let graph = awkward_graph();
    let snapshot = GraphSnapshot::new(&graph);
    let bytes = GexfExporter::new().render(&snapshot).unwrap();
    let counts = read_xml(&bytes);

    assert_eq!(counts.nodes, 6);
    assert_eq!(counts.edges.len(), 6);
    assert!(counts.edges.contains(&("run".to_string(), "x&y".to_string())));
    assert!(counts.edges.contains(&("run".to_string(), "apos'".to_string())));
}

#[test]
fn test_empty_graph_documents_are_well_formed() {
    let graph = CallGraph::new();
    let snapshot = GraphSnapshot::new(&graph);
    for exporter in [
        Box::new(GraphMlExporter::default()) as Box<dyn GraphExporter>,
        Box::new(GexfExporter::new()),
    ] {
        let counts = read_xml(&exporter.render(&snapshot).unwrap());
        assert_eq!(counts.nodes, 0, "{}", exporter.name());
        assert!(counts.edges.is_empty());
    }
}
