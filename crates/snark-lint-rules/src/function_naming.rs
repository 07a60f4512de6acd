//! Rule: function names must be lower_snake_case.
//!
//! # Rationale
//!
//! PEP 8 says functions are `lower_snake_case`. This rule says it less
//! politely.

use regex::Regex;
use snark_lint_core::{Finding, NodeKind, Rule, SyntaxNode, WalkContext};

/// Rule name for function-naming.
pub const NAME: &str = "function-naming";

const SNAKE_CASE: &str = r"^[a-z_][a-z0-9_]*$";

/// Shames functions whose names are not lower_snake_case.
#[derive(Debug, Clone)]
pub struct FunctionNaming {
    pattern: Regex,
}

impl Default for FunctionNaming {
    fn default() -> Self {
        Self::new()
    }
}

impl FunctionNaming {
    /// Creates a new rule.
    #[must_use]
    pub fn new() -> Self {
        Self {
            pattern: Regex::new(SNAKE_CASE).expect("snake_case pattern is valid"),
        }
    }
}

impl Rule for FunctionNaming {
    fn name(&self) -> &'static str {
        NAME
    }

    fn description(&self) -> &'static str {
        "Function names must be lower_snake_case"
    }

    fn check(&self, node: &SyntaxNode, _ctx: &WalkContext<'_>) -> Vec<Finding> {
        let NodeKind::FunctionDef { name, .. } = &node.kind else {
            return Vec::new();
        };
        if self.pattern.is_match(name) {
            return Vec::new();
        }
        vec![Finding::new(
            node.line,
            format!(
                "Function '{name}' at line {} is not snake_case. \
                 We only speak underscores around here.",
                node.line
            ),
        )]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use snark_lint_core::{walk, RuleCatalog, SourceParser};
    use snark_lint_py::PythonParser;

    fn check(src: &str) -> Vec<Finding> {
        let tree = PythonParser::new().parse(src).expect("fixture parses");
        let mut catalog = RuleCatalog::new();
        catalog.register(FunctionNaming::new());
        walk(&tree, &catalog)
    }

    #[test]
    fn flags_camel_case() {
        let findings = check("def DoStuff():\n    pass\n");
        assert_eq!(findings.len(), 1);
        assert_eq!(findings[0].line, 1);
        assert!(findings[0].message.contains("'DoStuff'"));
        assert!(findings[0].message.contains("not snake_case"));
    }

    #[test]
    fn accepts_snake_case() {
        assert!(check("def do_stuff():\n    pass\n").is_empty());
    }

    #[test]
    fn accepts_leading_underscore() {
        assert!(check("def _private_helper():\n    pass\n").is_empty());
    }

    #[test]
    fn flags_methods_too() {
        let findings = check("class Widget:\n    def Spin(self):\n        pass\n");
        assert_eq!(findings.len(), 1);
        assert_eq!(findings[0].line, 2);
    }

    #[test]
    fn ignores_classes() {
        assert!(check("class DoStuff:\n    pass\n").is_empty());
    }
}
