//! Docstring rules: presence, length, and format.
//!
//! Three independent rules share this module because they share the
//! notion of "the docstring of a def". Presence fires when there is no
//! docstring (or an empty one); length and format only examine docstrings
//! that exist. Docstring text is evaluated trimmed, so indentation and
//! surrounding blank lines do not trip the format checks.

use snark_lint_core::{Finding, NodeKind, Rule, SyntaxNode, WalkContext};

/// Rule name for missing-docstring.
pub const MISSING_NAME: &str = "missing-docstring";

/// Rule name for short-docstring.
pub const SHORT_NAME: &str = "short-docstring";

/// Rule name for docstring-format.
pub const FORMAT_NAME: &str = "docstring-format";

/// Minimum docstring length before the short-docstring rule loses respect.
pub const DEFAULT_MIN_LENGTH: usize = 10;

/// How a def is referred to in messages: `Function 'name'` or `Class 'name'`.
fn entity_label(node: &SyntaxNode) -> Option<String> {
    match &node.kind {
        NodeKind::FunctionDef { name, .. } => Some(format!("Function '{name}'")),
        NodeKind::ClassDef { name } => Some(format!("Class '{name}'")),
        _ => None,
    }
}

/// The docstring of a def, trimmed, or `None` when absent or blank.
fn docstring_of(node: &SyntaxNode) -> Option<&str> {
    node.docstring()
        .map(str::trim)
        .filter(|text| !text.is_empty())
}

/// Complains when a function or class has no docstring.
#[derive(Debug, Clone, Copy, Default)]
pub struct MissingDocstring;

impl MissingDocstring {
    /// Creates a new rule.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Rule for MissingDocstring {
    fn name(&self) -> &'static str {
        MISSING_NAME
    }

    fn description(&self) -> &'static str {
        "Functions and classes must have a docstring"
    }

    fn check(&self, node: &SyntaxNode, _ctx: &WalkContext<'_>) -> Vec<Finding> {
        if docstring_of(node).is_some() {
            return Vec::new();
        }
        let message = match &node.kind {
            NodeKind::FunctionDef { name, .. } => format!(
                "Function '{name}' at line {} has no docstring. \
                 Don't keep secrets from your future self!",
                node.line
            ),
            NodeKind::ClassDef { name } => format!(
                "Class '{name}' at line {} has no docstring. \
                 Why bother writing code if no one knows what it does?",
                node.line
            ),
            _ => return Vec::new(),
        };
        vec![Finding::new(node.line, message)]
    }
}

/// Complains when a docstring is shorter than the minimum length.
#[derive(Debug, Clone, Copy)]
pub struct ShortDocstring {
    min_length: usize,
}

impl Default for ShortDocstring {
    fn default() -> Self {
        Self::new()
    }
}

impl ShortDocstring {
    /// Creates a new rule with the default minimum length.
    #[must_use]
    pub fn new() -> Self {
        Self {
            min_length: DEFAULT_MIN_LENGTH,
        }
    }

    /// Sets the minimum acceptable docstring length.
    #[must_use]
    pub fn min_length(mut self, min_length: usize) -> Self {
        self.min_length = min_length;
        self
    }
}

impl Rule for ShortDocstring {
    fn name(&self) -> &'static str {
        SHORT_NAME
    }

    fn description(&self) -> &'static str {
        "Docstrings shorter than 10 characters are barely a grunt"
    }

    fn check(&self, node: &SyntaxNode, _ctx: &WalkContext<'_>) -> Vec<Finding> {
        let Some(entity) = entity_label(node) else {
            return Vec::new();
        };
        let Some(docstring) = docstring_of(node) else {
            return Vec::new();
        };
        let length = docstring.chars().count();
        if length >= self.min_length {
            return Vec::new();
        }
        vec![Finding::new(
            node.line,
            format!(
                "{entity} at line {} has a docstring with only {length} characters. \
                 That's barely a grunt, not a docstring.",
                node.line
            ),
        )]
    }
}

/// Complains when a docstring does not read like a sentence.
///
/// Two independent conditions, so a docstring can earn both findings at
/// once: not starting with a capital letter, and not ending in `.`, `!`,
/// or `?`.
#[derive(Debug, Clone, Copy, Default)]
pub struct DocstringFormat;

impl DocstringFormat {
    /// Creates a new rule.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Rule for DocstringFormat {
    fn name(&self) -> &'static str {
        FORMAT_NAME
    }

    fn description(&self) -> &'static str {
        "Docstrings must start with a capital letter and end with punctuation"
    }

    fn check(&self, node: &SyntaxNode, _ctx: &WalkContext<'_>) -> Vec<Finding> {
        let Some(entity) = entity_label(node) else {
            return Vec::new();
        };
        let Some(docstring) = docstring_of(node) else {
            return Vec::new();
        };

        let mut findings = Vec::new();
        if docstring.chars().next().is_some_and(|c| !c.is_uppercase()) {
            findings.push(Finding::new(
                node.line,
                format!(
                    "{entity} at line {} has a docstring that doesn't start with \
                     a capital letter. Where's your sense of grammar?",
                    node.line
                ),
            ));
        }
        if docstring
            .chars()
            .next_back()
            .is_some_and(|c| !matches!(c, '.' | '!' | '?'))
        {
            findings.push(Finding::new(
                node.line,
                format!(
                    "{entity} at line {} has a docstring that doesn't end with \
                     punctuation. Finish your sentence, please.",
                    node.line
                ),
            ));
        }
        findings
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use snark_lint_core::{walk, RuleCatalog, SourceParser};
    use snark_lint_py::PythonParser;

    fn check_with(catalog: RuleCatalog, src: &str) -> Vec<Finding> {
        let tree = PythonParser::new().parse(src).expect("fixture parses");
        walk(&tree, &catalog)
    }

    fn check_missing(src: &str) -> Vec<Finding> {
        let mut catalog = RuleCatalog::new();
        catalog.register(MissingDocstring::new());
        check_with(catalog, src)
    }

    fn check_short(src: &str) -> Vec<Finding> {
        let mut catalog = RuleCatalog::new();
        catalog.register(ShortDocstring::new());
        check_with(catalog, src)
    }

    fn check_format(src: &str) -> Vec<Finding> {
        let mut catalog = RuleCatalog::new();
        catalog.register(DocstringFormat::new());
        check_with(catalog, src)
    }

    // --- missing-docstring ---

    #[test]
    fn flags_function_without_docstring() {
        let findings = check_missing("def silent():\n    pass\n");
        assert_eq!(findings.len(), 1);
        assert_eq!(findings[0].line, 1);
        assert!(findings[0].message.contains("Function 'silent'"));
        assert!(findings[0].message.contains("no docstring"));
    }

    #[test]
    fn flags_class_without_docstring() {
        let findings = check_missing("class Mute:\n    pass\n");
        assert_eq!(findings.len(), 1);
        assert!(findings[0].message.contains("Class 'Mute'"));
    }

    #[test]
    fn accepts_documented_function() {
        assert!(check_missing("def loud():\n    \"\"\"Shouts loudly.\"\"\"\n").is_empty());
    }

    #[test]
    fn whitespace_only_docstring_counts_as_missing() {
        let findings = check_missing("def blank():\n    \"\"\"   \"\"\"\n");
        assert_eq!(findings.len(), 1);
    }

    #[test]
    fn module_without_docstring_is_not_flagged() {
        assert!(check_missing("value = 1\n").is_empty());
    }

    #[test]
    fn finding_is_at_the_def_line_not_the_body() {
        let findings = check_missing("class Outer:\n    def inner(self):\n        pass\n");
        let lines: Vec<usize> = findings.iter().map(|f| f.line).collect();
        assert_eq!(lines, vec![1, 2]);
    }

    // --- short-docstring ---

    #[test]
    fn short_docstring_reports_its_length() {
        let findings = check_short("def brief():\n    \"\"\"Too wee.\"\"\"\n");
        assert_eq!(findings.len(), 1);
        assert!(findings[0].message.contains("only 8 characters"));
    }

    #[test]
    fn accepts_ten_character_docstring() {
        // exactly at the threshold
        assert!(check_short("def fine():\n    \"\"\"Ten chars.\"\"\"\n").is_empty());
    }

    #[test]
    fn short_rule_ignores_defs_without_docstrings() {
        assert!(check_short("def silent():\n    pass\n").is_empty());
    }

    #[test]
    fn min_length_is_tunable() {
        let mut catalog = RuleCatalog::new();
        catalog.register(ShortDocstring::new().min_length(50));
        let findings = check_with(catalog, "def x2():\n    \"\"\"Long enough normally.\"\"\"\n");
        assert_eq!(findings.len(), 1);
    }

    // --- docstring-format ---

    #[test]
    fn flags_lowercase_start() {
        let findings = check_format("def sloppy():\n    \"\"\"does things badly.\"\"\"\n");
        assert_eq!(findings.len(), 1);
        assert!(findings[0].message.contains("capital letter"));
    }

    #[test]
    fn flags_missing_end_punctuation() {
        let findings = check_format("def unfinished():\n    \"\"\"Does many things\"\"\"\n");
        assert_eq!(findings.len(), 1);
        assert!(findings[0].message.contains("end with punctuation"));
    }

    #[test]
    fn both_format_findings_can_fire_at_once() {
        let findings = check_format("def hopeless():\n    \"\"\"does many things\"\"\"\n");
        assert_eq!(findings.len(), 2);
        assert!(findings[0].message.contains("capital letter"));
        assert!(findings[1].message.contains("punctuation"));
    }

    #[test]
    fn accepts_exclamation_and_question_marks() {
        assert!(check_format("def excited():\n    \"\"\"Does things loudly!\"\"\"\n").is_empty());
        assert!(check_format("def unsure():\n    \"\"\"Does it though?\"\"\"\n").is_empty());
    }

    #[test]
    fn digit_start_is_not_a_capital() {
        let findings = check_format("def numeric():\n    \"\"\"3 things happen here.\"\"\"\n");
        assert_eq!(findings.len(), 1);
        assert!(findings[0].message.contains("capital letter"));
    }
}
