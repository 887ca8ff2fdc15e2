//! Core data model: function records and the aggregated call graph.

pub mod call_graph;
pub mod collections;
pub mod function_record;

pub use call_graph::CallGraph;
pub use function_record::FunctionRecord;
