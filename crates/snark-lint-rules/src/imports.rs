//! Rule: one import statement per line.

use snark_lint_core::{Finding, NodeKind, Rule, SyntaxNode, WalkContext};

/// Rule name used in configuration and listings.
pub const NAME: &str = "multi-import";

/// Complains when a single import statement binds more than one name.
///
/// `import os, sys` and `from os import path, sep` both qualify, with
/// different complaints. `import os.path` binds one name and passes.
#[derive(Debug, Clone, Copy, Default)]
pub struct MultiImport;

impl MultiImport {
    /// Creates a new rule.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Rule for MultiImport {
    fn name(&self) -> &'static str {
        NAME
    }

    fn description(&self) -> &'static str {
        "Import statements must bind exactly one name"
    }

    fn check(&self, node: &SyntaxNode, _ctx: &WalkContext<'_>) -> Vec<Finding> {
        let NodeKind::Import { names, from_import } = &node.kind else {
            return Vec::new();
        };
        if names.len() <= 1 {
            return Vec::new();
        }
        let message = if *from_import {
            format!(
                "Multiple imports on one line at {}. One import statement per \
                 line, please. Our tiny eyes can't parse multiple.",
                node.line
            )
        } else {
            format!(
                "Multiple imports on one line at {}. You think we can read two \
                 modules in one breath?",
                node.line
            )
        };
        vec![Finding::new(node.line, message)]
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
        catalog.register(MultiImport::new());
        walk(&tree, &catalog)
    }

    #[test]
    fn flags_comma_separated_import() {
        let findings = check("import os, sys\n");
        assert_eq!(findings.len(), 1);
        assert_eq!(findings[0].line, 1);
        assert!(findings[0].message.contains("one breath"));
    }

    #[test]
    fn flags_from_import_with_two_names() {
        let findings = check("from os import path, sep\n");
        assert_eq!(findings.len(), 1);
        assert!(findings[0].message.contains("tiny eyes"));
    }

    #[test]
    fn accepts_single_imports() {
        assert!(check("import os\nimport sys\n").is_empty());
        assert!(check("from os import path\n").is_empty());
    }

    #[test]
    fn dotted_module_path_is_one_name() {
        assert!(check("import os.path\n").is_empty());
    }

    #[test]
    fn finding_is_at_the_import_line() {
        let findings = check("\n\nimport os, sys\n");
        assert_eq!(findings.len(), 1);
        assert_eq!(findings[0].line, 3);
    }

    #[test]
    fn imports_inside_functions_are_still_judged() {
        let findings = check("def lazy():\n    import os, sys\n");
        assert_eq!(findings.len(), 1);
        assert_eq!(findings[0].line, 2);
    }
}
