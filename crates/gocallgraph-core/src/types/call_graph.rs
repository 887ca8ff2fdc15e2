//! The name-keyed call graph aggregator.

use serde::{Deserialize, Serialize};

use super::collections::BTreeMap;
use super::function_record::FunctionRecord;

/// Mapping from function name to the last declaration seen under that name.
///
/// Identity is the bare name: two `func f()` declarations in different files or
/// packages collapse into one entry, and the later `insert` replaces the
/// earlier record wholesale (its calls are discarded, not merged).
///
/// Iteration is sorted by name so every export of the same graph is
/// byte-identical.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CallGraph {
    functions: BTreeMap<String, FunctionRecord>,
}

impl CallGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert `record` under its name, replacing any existing entry.
    /// Returns the displaced record.
    pub fn insert(&mut self, record: FunctionRecord) -> Option<FunctionRecord> {
        self.functions.insert(record.name.clone(), record)
    }

    pub fn get(&self, name: &str) -> Option<&FunctionRecord> {
        self.functions.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.functions.contains_key(name)
    }

    /// Number of distinct function names.
    pub fn len(&self) -> usize {
        self.functions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.functions.is_empty()
    }

    /// Total call entries across all records (duplicates counted).
    pub fn call_count(&self) -> usize {
        self.functions.values().map(|r| r.calls.len()).sum()
    }

    /// Visit every `(name, record)` pair in name order.
    pub fn for_each<F>(&self, mut f: F)
    where
        F: FnMut(&str, &FunctionRecord),
    {
        for (name, record) in &self.functions {
            f(name, record);
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &FunctionRecord)> {
        self.functions.iter().map(|(name, record)| (name.as_str(), record))
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.functions.keys().map(String::as_str)
    }

    /// Every `(caller, callee)` pair, one per call entry.
    pub fn edges(&self) -> impl Iterator<Item = (&str, &str)> {
        self.functions.iter().flat_map(|(name, record)| {
            record
                .calls
                .iter()
                .map(move |callee| (name.as_str(), callee.as_str()))
        })
    }
}

impl FromIterator<FunctionRecord> for CallGraph {
    fn from_iter<T: IntoIterator<Item = FunctionRecord>>(iter: T) -> Self {
        let mut graph = CallGraph::new();
        graph.extend(iter);
        graph
    }
}

impl Extend<FunctionRecord> for CallGraph {
    fn extend<T: IntoIterator<Item = FunctionRecord>>(&mut self, iter: T) {
        for record in iter {
            self.insert(record);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_overwrites_without_merging_calls() {
        let mut graph = CallGraph::new();
        assert!(graph
            .insert(FunctionRecord::new("f", "a.go").with_calls(["x", "y"]))
            .is_none());

        let displaced = graph
            .insert(FunctionRecord::new("f", "b.go").with_calls(["z"]))
            .unwrap();

        assert_eq!(displaced.file_path.to_str(), Some("a.go"));
        assert_eq!(graph.len(), 1);
        let f = graph.get("f").unwrap();
        assert_eq!(f.file_path.to_str(), Some("b.go"));
        assert_eq!(f.calls, vec!["z"]);
    }

    #[test]
    fn keys_match_record_names() {
        let graph: CallGraph = vec![
            FunctionRecord::new("b", "x.go"),
            FunctionRecord::new("a", "x.go").with_calls(["b", "fmt"]),
        ]
        .into_iter()
        .collect();

        graph.for_each(|name, record| assert_eq!(name, record.name));
        assert_eq!(graph.names().collect::<Vec<_>>(), vec!["a", "b"]);
    }

    #[test]
    fn edges_keep_duplicates_and_unresolved_targets() {
        let graph: CallGraph = std::iter::once(
            FunctionRecord::new("main", "m.go").with_calls(["helper", "helper", "println"]),
        )
        .collect();

        let edges: Vec<_> = graph.edges().collect();
        assert_eq!(
            edges,
            vec![("main", "helper"), ("main", "helper"), ("main", "println")]
        );
        assert_eq!(graph.call_count(), 3);
        assert!(!graph.contains("println"));
    }

    #[test]
    fn empty_body_record_keeps_empty_calls() {
        let graph: CallGraph = std::iter::once(FunctionRecord::new("noop", "n.go")).collect();
        assert_eq!(graph.get("noop").map(|r| r.calls.len()), Some(0));
    }

    #[test]
    fn serializes_as_name_keyed_map() {
        let graph: CallGraph =
            std::iter::once(FunctionRecord::new("a", "src/a.go").with_calls(["b"])).collect();
        let json = serde_json::to_value(&graph).unwrap();
        assert_eq!(json["a"]["filePath"], "src/a.go");
        assert_eq!(json["a"]["calls"][0], "b");
    }
}
