//! Per-file function and call extraction.
//!
//! For one file: parse into a syntax tree, reject trees containing syntax
//! errors, match every function declaration, then run the call query scoped
//! to each declaration's body. Calls keep textual order and duplicates.

use std::path::Path;
use std::sync::Arc;
use std::time::Instant;

use gocallgraph_core::errors::ParseError;
use gocallgraph_core::types::FunctionRecord;
use tracing::trace;
use tree_sitter::{Node, Parser, QueryCursor};

use super::queries::CompiledQueries;
use crate::scanner::language_detect::Language;

/// Turns one file's content into `FunctionRecord`s.
///
/// Owns a tree-sitter `Parser` (not shareable across threads); the compiled
/// queries are behind an `Arc` so per-worker extractors share them.
pub struct SyntaxExtractor {
    language: Language,
    parser: Parser,
    queries: Arc<CompiledQueries>,
}

impl SyntaxExtractor {
    pub fn new(language: Language) -> Result<Self, ParseError> {
        Ok(Self {
            language,
            parser: language.parser()?,
            queries: Arc::new(CompiledQueries::compile(language)?),
        })
    }

    /// An extractor with a fresh parser around already-compiled queries.
    pub fn with_queries(language: Language, queries: Arc<CompiledQueries>) -> Result<Self, ParseError> {
        Ok(Self {
            language,
            parser: language.parser()?,
            queries,
        })
    }

    pub fn shared_queries(&self) -> Arc<CompiledQueries> {
        Arc::clone(&self.queries)
    }

    pub fn language(&self) -> Language {
        self.language
    }

    /// Extract every function declaration in `source`.
    ///
    /// A file without declarations yields an empty vector. A file that does
    /// not parse cleanly yields `ParseError::Syntax` and no records at all.
    pub fn extract(&mut self, path: &Path, source: &[u8]) -> Result<Vec<FunctionRecord>, ParseError> {
        let start = Instant::now();

        let tree = self
            .parser
            .parse(source, None)
            .ok_or_else(|| ParseError::NoTree {
                path: path.to_path_buf(),
            })?;
        let root = tree.root_node();

        if root.has_error() {
            let position = first_error_node(root).start_position();
            return Err(ParseError::Syntax {
                path: path.to_path_buf(),
                line: position.row + 1,
                column: position.column + 1,
            });
        }

        let queries = &self.queries;
        let mut cursor = QueryCursor::new();
        let mut records = Vec::new();

        for m in cursor.matches(&queries.function, root, source) {
            let name = m.nodes_for_capture_index(queries.function_name).next();
            let body = m.nodes_for_capture_index(queries.function_body).next();
            let (Some(name), Some(body)) = (name, body) else {
                continue;
            };

            records.push(FunctionRecord {
                name: node_text(name, source, path)?,
                file_path: path.to_path_buf(),
                calls: collect_calls(queries, body, source, path)?,
            });
        }

        trace!(
            path = %path.display(),
            functions = records.len(),
            elapsed_us = start.elapsed().as_micros() as u64,
            "extracted file"
        );
        Ok(records)
    }
}

/// Callee names of every bare-identifier call inside `body`, in source order.
/// Calls inside function literals belong to the enclosing declaration.
fn collect_calls(
    queries: &CompiledQueries,
    body: Node<'_>,
    source: &[u8],
    path: &Path,
) -> Result<Vec<String>, ParseError> {
    let mut cursor = QueryCursor::new();
    let mut calls = Vec::new();
    for m in cursor.matches(&queries.call, body, source) {
        for node in m.nodes_for_capture_index(queries.call_name) {
            calls.push(node_text(node, source, path)?);
        }
    }
    Ok(calls)
}

fn node_text(node: Node<'_>, source: &[u8], path: &Path) -> Result<String, ParseError> {
    node.utf8_text(source)
        .map(str::to_owned)
        .map_err(|_| ParseError::InvalidUtf8 {
            path: path.to_path_buf(),
            offset: node.start_byte(),
        })
}

/// Pre-order search for the first ERROR or MISSING node, descending only into
/// subtrees that contain one.
fn first_error_node(root: Node<'_>) -> Node<'_> {
    let mut cursor = root.walk();
    loop {
        let node = cursor.node();
        if node.is_error() || node.is_missing() {
            return node;
        }
        if node.has_error() && cursor.goto_first_child() {
            continue;
        }
        loop {
            if cursor.goto_next_sibling() {
                break;
            }
            if !cursor.goto_parent() {
                return root;
            }
        }
    }
}
