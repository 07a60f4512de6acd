//! Rule: loops inside loops.

use snark_lint_core::{Finding, LoopKind, NodeKind, Rule, SyntaxNode, WalkContext};

/// Rule name used in configuration and listings.
pub const NAME: &str = "nested-loop";

/// Complains about a loop nested inside another loop.
///
/// The finding lands on the inner loop's line; the outer loop of a pair
/// is fine on its own. Loops separated by an `if` or `try` still count as
/// nested, because the walker tracks depth through every construct.
#[derive(Debug, Clone, Copy, Default)]
pub struct NestedLoop;

impl NestedLoop {
    /// Creates a new rule.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Rule for NestedLoop {
    fn name(&self) -> &'static str {
        NAME
    }

    fn description(&self) -> &'static str {
        "Loops must not nest inside other loops"
    }

    fn check(&self, node: &SyntaxNode, ctx: &WalkContext<'_>) -> Vec<Finding> {
        let NodeKind::Loop { kind } = &node.kind else {
            return Vec::new();
        };
        // depth counts this loop, so 1 is top level and 2 is nested
        if ctx.loop_depth() <= 1 {
            return Vec::new();
        }
        let message = match kind {
            LoopKind::For => format!(
                "Nested loop at line {}. You do realize we invented break and \
                 return statements, right?",
                node.line
            ),
            LoopKind::While => format!(
                "Nested loop at line {}. Yikes, a while loop inside another \
                 loop? Are you allergic to simplicity?",
                node.line
            ),
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
        catalog.register(NestedLoop::new());
        walk(&tree, &catalog)
    }

    #[test]
    fn flags_inner_for_only() {
        let findings = check("for i in range(10):\n    for j in range(10):\n        pass\n");
        assert_eq!(findings.len(), 1);
        assert_eq!(findings[0].line, 2);
        assert!(findings[0].message.contains("break and return"));
    }

    #[test]
    fn flags_while_inside_for_with_the_while_message() {
        let findings = check("for i in range(10):\n    while True:\n        pass\n");
        assert_eq!(findings.len(), 1);
        assert!(findings[0].message.contains("allergic to simplicity"));
    }

    #[test]
    fn accepts_a_single_loop() {
        assert!(check("for i in range(10):\n    pass\n").is_empty());
    }

    #[test]
    fn accepts_sequential_loops() {
        let src = "for i in range(3):\n    pass\nfor j in range(3):\n    pass\n";
        assert!(check(src).is_empty());
    }

    #[test]
    fn nesting_through_an_if_still_counts() {
        let src = "while True:\n    if ready:\n        for item in items:\n            pass\n";
        let findings = check(src);
        assert_eq!(findings.len(), 1);
        assert_eq!(findings[0].line, 3);
    }

    #[test]
    fn triple_nesting_flags_both_inner_loops() {
        let src = "for a in x:\n    for b in y:\n        for c in z:\n            pass\n";
        let lines: Vec<usize> = check(src).iter().map(|f| f.line).collect();
        assert_eq!(lines, vec![2, 3]);
    }

    #[test]
    fn loops_in_separate_functions_do_not_nest() {
        let src = "def first():\n    for i in x:\n        pass\n\ndef second():\n    for j in y:\n        pass\n";
        assert!(check(src).is_empty());
    }
}
