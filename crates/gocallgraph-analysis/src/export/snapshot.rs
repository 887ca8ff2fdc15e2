//! Immutable, export-ready view of a `CallGraph`.

use std::path::Path;

use gocallgraph_core::types::collections::FxHashMap;
use gocallgraph_core::types::CallGraph;
use petgraph::graph::{DiGraph, NodeIndex};
use petgraph::visit::EdgeRef;

/// Whether a node was declared in the analysed tree or only called.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    Declared,
    External,
}

impl NodeKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            NodeKind::Declared => "declared",
            NodeKind::External => "external",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GraphNode<'a> {
    pub name: &'a str,
    pub kind: NodeKind,
    pub file_path: Option<&'a Path>,
}

/// Nodes and edges materialized from a `CallGraph`.
///
/// Node order: declared functions by name, then undeclared call targets in
/// order of first appearance. Edge order: callers by name, callees in call
/// order. One edge per call entry, so repeated calls become parallel edges.
pub struct GraphSnapshot<'a> {
    source: &'a CallGraph,
    graph: DiGraph<GraphNode<'a>, ()>,
}

impl<'a> GraphSnapshot<'a> {
    pub fn new(source: &'a CallGraph) -> Self {
        let mut graph = DiGraph::with_capacity(source.len(), source.call_count());
        let mut index: FxHashMap<&'a str, NodeIndex> = FxHashMap::default();

        for (name, record) in source.iter() {
            let idx = graph.add_node(GraphNode {
                name,
                kind: NodeKind::Declared,
                file_path: Some(record.file_path.as_path()),
            });
            index.insert(name, idx);
        }

        for (caller, callee) in source.edges() {
            let Some(&from) = index.get(caller) else {
                continue;
            };
            let to = *index.entry(callee).or_insert_with(|| {
                graph.add_node(GraphNode {
                    name: callee,
                    kind: NodeKind::External,
                    file_path: None,
                })
            });
            graph.add_edge(from, to, ());
        }

        Self { source, graph }
    }

    /// The call graph this snapshot was built from.
    pub fn source(&self) -> &'a CallGraph {
        self.source
    }

    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    pub fn is_empty(&self) -> bool {
        self.graph.node_count() == 0
    }

    pub fn nodes(&self) -> impl Iterator<Item = &GraphNode<'a>> + '_ {
        self.graph.node_indices().map(move |idx| &self.graph[idx])
    }

    /// `(caller, callee)` pairs in edge insertion order.
    pub fn edges(&self) -> impl Iterator<Item = (&GraphNode<'a>, &GraphNode<'a>)> + '_ {
        self.graph
            .edge_references()
            .map(move |edge| (&self.graph[edge.source()], &self.graph[edge.target()]))
    }
}
