//! Source language and grammar lookup.

use gocallgraph_core::errors::ParseError;
use serde::{Deserialize, Serialize};

/// Languages with a compiled grammar and extraction queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    Go,
}

impl Language {
    pub fn name(&self) -> &'static str {
        match self {
            Language::Go => "go",
        }
    }

    /// The tree-sitter grammar for this language.
    pub fn grammar(&self) -> tree_sitter::Language {
        match self {
            Language::Go => tree_sitter_go::LANGUAGE.into(),
        }
    }

    /// A parser configured with this language's grammar.
    pub fn parser(&self) -> Result<tree_sitter::Parser, ParseError> {
        let mut parser = tree_sitter::Parser::new();
        parser
            .set_language(&self.grammar())
            .map_err(|e| ParseError::GrammarLoad {
                language: self.name().to_string(),
                message: e.to_string(),
            })?;
        Ok(parser)
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parser_loads_grammar() {
        assert!(Language::Go.parser().is_ok());
    }
}
