//! Pre-compiled tree-sitter Query objects per language.
//!
//! Each language gets two queries: one for function declarations (name and
//! body captures) and one for bare-identifier call sites. Compiled once,
//! shared read-only across every worker.

use gocallgraph_core::errors::ParseError;
use tree_sitter::Query;

use crate::scanner::language_detect::Language;

/// The declaration query and the call query for one language, with the
/// capture indices the extractor reads.
pub struct CompiledQueries {
    pub function: Query,
    pub function_name: u32,
    pub function_body: u32,
    pub call: Query,
    pub call_name: u32,
}

impl CompiledQueries {
    pub fn compile(lang: Language) -> Result<Self, ParseError> {
        let grammar = lang.grammar();

        let function = Query::new(&grammar, function_query_for(lang)).map_err(|e| {
            ParseError::QueryCompile {
                query: "function".to_string(),
                message: e.to_string(),
            }
        })?;
        let call = Query::new(&grammar, call_query_for(lang)).map_err(|e| {
            ParseError::QueryCompile {
                query: "call".to_string(),
                message: e.to_string(),
            }
        })?;

        Ok(Self {
            function_name: capture_index(&function, "function", "function.name")?,
            function_body: capture_index(&function, "function", "function.body")?,
            call_name: capture_index(&call, "call", "call.name")?,
            function,
            call,
        })
    }
}

fn capture_index(query: &Query, query_name: &str, capture: &str) -> Result<u32, ParseError> {
    query
        .capture_index_for_name(capture)
        .ok_or_else(|| ParseError::QueryCompile {
            query: query_name.to_string(),
            message: format!("missing @{capture} capture"),
        })
}

/// Get the declaration query S-expression for a language.
pub fn function_query_for(lang: Language) -> &'static str {
    match lang {
        Language::Go => GO_FUNCTION_QUERY,
    }
}

/// Get the call query S-expression for a language.
pub fn call_query_for(lang: Language) -> &'static str {
    match lang {
        Language::Go => GO_CALL_QUERY,
    }
}

// ---- Go ----

// Plain function declarations only: method_declaration has a receiver and a
// field_identifier name and is not matched. Declarations without
// a body (assembly stubs) cannot match the body field.
const GO_FUNCTION_QUERY: &str = r#"
(function_declaration
  name: (identifier) @function.name
  body: (block) @function.body)
"#;

// Bare identifiers only: `pkg.F()`, `recv.M()`, `(f)()` and `fns[i]()` have a
// non-identifier `function` field and are not captured.
const GO_CALL_QUERY: &str = r#"
(call_expression
  function: (identifier) @call.name)
"#;
