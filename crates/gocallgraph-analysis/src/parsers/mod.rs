//! Syntax extraction: tree-sitter parsing plus two structural queries.

pub mod extractor;
pub mod queries;

pub use extractor::SyntaxExtractor;
pub use queries::CompiledQueries;
