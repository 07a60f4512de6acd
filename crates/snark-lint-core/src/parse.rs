//! The parser frontend contract.

use thiserror::Error;

use crate::tree::SyntaxTree;

/// Failure to parse source text into a tree.
///
/// Parse failures are not fatal: the engine degrades them into a single
/// report finding. `line` is the closest the frontend can localize the
/// problem; `None` when it cannot, in which case the engine falls back to
/// line 1.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("syntax error at line {}: {description}", .line.unwrap_or(1))]
pub struct ParseError {
    /// Line of the first offending construct (1-indexed), when known.
    pub line: Option<usize>,
    /// Short description of what the parser choked on.
    pub description: String,
}

impl ParseError {
    /// Creates a new parse error.
    #[must_use]
    pub fn new(line: Option<usize>, description: impl Into<String>) -> Self {
        Self {
            line,
            description: description.into(),
        }
    }

    /// The reported line, defaulting to the first line when unknown.
    #[must_use]
    pub fn line_or_first(&self) -> usize {
        self.line.unwrap_or(1)
    }
}

/// A frontend that turns raw source text into the simplified tree.
///
/// Implementations live outside the core crate (the Python frontend in
/// `snark-lint-py`); the engine only ever sees this trait.
pub trait SourceParser: Send + Sync {
    /// Grammar identifier, e.g. `"python"`.
    fn language_id(&self) -> &'static str;

    /// File extensions this frontend expects, dots included.
    fn extensions(&self) -> &'static [&'static str];

    /// Parses the whole text, or fails with the first syntax problem.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError`] when the text is not syntactically valid.
    fn parse(&self, text: &str) -> Result<SyntaxTree, ParseError>;
}

/// Boxed parser for dynamic dispatch.
pub type ParserBox = Box<dyn SourceParser>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_includes_line_and_description() {
        let err = ParseError::new(Some(4), "unexpected indent");
        assert_eq!(err.to_string(), "syntax error at line 4: unexpected indent");
    }

    #[test]
    fn unknown_line_defaults_to_first() {
        let err = ParseError::new(None, "no idea");
        assert_eq!(err.line_or_first(), 1);
        assert_eq!(err.to_string(), "syntax error at line 1: no idea");
    }
}
