//! Rule: class names must be CapWords.

use regex::Regex;
use snark_lint_core::{Finding, NodeKind, Rule, SyntaxNode, WalkContext};

/// Rule name for class-naming.
pub const NAME: &str = "class-naming";

// Requires at least two characters, so a class named `C` is also wrong.
const CAPWORDS: &str = r"^[A-Z][a-zA-Z0-9]+(?:[A-Z0-9][a-zA-Z0-9]*)*$";

/// Shames classes whose names are not CapWords.
#[derive(Debug, Clone)]
pub struct ClassNaming {
    pattern: Regex,
}

impl Default for ClassNaming {
    fn default() -> Self {
        Self::new()
    }
}

impl ClassNaming {
    /// Creates a new rule.
    #[must_use]
    pub fn new() -> Self {
        Self {
            pattern: Regex::new(CAPWORDS).expect("CapWords pattern is valid"),
        }
    }
}

impl Rule for ClassNaming {
    fn name(&self) -> &'static str {
        NAME
    }

    fn description(&self) -> &'static str {
        "Class names must be CapWords"
    }

    fn check(&self, node: &SyntaxNode, _ctx: &WalkContext<'_>) -> Vec<Finding> {
        let NodeKind::ClassDef { name } = &node.kind else {
            return Vec::new();
        };
        if self.pattern.is_match(name) {
            return Vec::new();
        }
        vec![Finding::new(
            node.line,
            format!(
                "Class '{name}' at line {} is not in CapWords style. \
                 Do you even PEP 8, bro?",
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
        catalog.register(ClassNaming::new());
        walk(&tree, &catalog)
    }

    #[test]
    fn flags_snake_case_class() {
        let findings = check("class my_thing:\n    pass\n");
        assert_eq!(findings.len(), 1);
        assert_eq!(findings[0].line, 1);
        assert!(findings[0].message.contains("'my_thing'"));
        assert!(findings[0].message.contains("CapWords"));
    }

    #[test]
    fn accepts_cap_words() {
        assert!(check("class WidgetFactory:\n    pass\n").is_empty());
    }

    #[test]
    fn flags_single_capital_letter() {
        let findings = check("class C:\n    pass\n");
        assert_eq!(findings.len(), 1);
    }

    #[test]
    fn accepts_digits_after_the_first_word() {
        assert!(check("class Base64Codec:\n    pass\n").is_empty());
    }

    #[test]
    fn ignores_functions() {
        assert!(check("def whatever():\n    pass\n").is_empty());
    }
}
