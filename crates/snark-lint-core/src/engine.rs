//! The analysis pipeline: parse, walk, text pass, aggregate.

use std::panic::{catch_unwind, AssertUnwindSafe};

use thiserror::Error;
use tracing::{debug, info, warn};

use crate::parse::{ParserBox, SourceParser};
use crate::report::{Finding, Report};
use crate::rule::{Rule, RuleBox, RuleCatalog, TextRule, TextRuleBox};
use crate::source::SourceFile;
use crate::walker;

/// Errors that can occur while assembling a [`Linter`].
#[derive(Debug, Error)]
pub enum BuildError {
    /// No parser frontend was supplied.
    #[error("a source parser is required")]
    MissingParser,
}

/// Builder for configuring a [`Linter`].
#[derive(Default)]
pub struct LinterBuilder {
    parser: Option<ParserBox>,
    catalog: RuleCatalog,
}

impl LinterBuilder {
    /// Creates a new builder with an empty catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the parser frontend. Required.
    #[must_use]
    pub fn parser<P: SourceParser + 'static>(mut self, parser: P) -> Self {
        self.parser = Some(Box::new(parser));
        self
    }

    /// Sets an already-boxed parser frontend.
    #[must_use]
    pub fn parser_box(mut self, parser: ParserBox) -> Self {
        self.parser = Some(parser);
        self
    }

    /// Adds a tree rule. Registration order is the tie-break for findings
    /// sharing a line.
    #[must_use]
    pub fn rule<R: Rule + 'static>(mut self, rule: R) -> Self {
        self.catalog.register(rule);
        self
    }

    /// Adds a boxed tree rule.
    #[must_use]
    pub fn rule_box(mut self, rule: RuleBox) -> Self {
        self.catalog.register_box(rule);
        self
    }

    /// Adds a text rule, evaluated after all tree rules.
    #[must_use]
    pub fn text_rule<R: TextRule + 'static>(mut self, rule: R) -> Self {
        self.catalog.register_text(rule);
        self
    }

    /// Adds a boxed text rule.
    #[must_use]
    pub fn text_rule_box(mut self, rule: TextRuleBox) -> Self {
        self.catalog.register_text_box(rule);
        self
    }

    /// Replaces the whole catalog at once.
    ///
    /// Convenient when a prebuilt catalog (the default rule set) is used
    /// instead of registering rules one by one.
    #[must_use]
    pub fn catalog(mut self, catalog: RuleCatalog) -> Self {
        self.catalog = catalog;
        self
    }

    /// Builds the linter.
    ///
    /// # Errors
    ///
    /// Returns [`BuildError::MissingParser`] when no parser was supplied.
    pub fn build(self) -> Result<Linter, BuildError> {
        let parser = self.parser.ok_or(BuildError::MissingParser)?;
        Ok(Linter {
            parser,
            catalog: self.catalog,
        })
    }
}

/// One-shot analysis engine: one source file in, one report out.
///
/// Holds no per-run state, so a single instance can analyze any number of
/// files and repeated runs over the same input produce identical reports.
pub struct Linter {
    parser: ParserBox,
    catalog: RuleCatalog,
}

impl std::fmt::Debug for Linter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Linter").finish_non_exhaustive()
    }
}

impl Linter {
    /// Creates a builder.
    #[must_use]
    pub fn builder() -> LinterBuilder {
        LinterBuilder::new()
    }

    /// Total number of registered rules, tree and text combined.
    #[must_use]
    pub fn rule_count(&self) -> usize {
        self.catalog.len()
    }

    /// Analyzes one source file.
    ///
    /// Infallible by design: a file that fails to parse produces the
    /// single syntax-error finding instead of rule output, and a rule
    /// that faults mid-walk is skipped. Only reading the file can fail,
    /// and that happens before this call.
    #[must_use]
    pub fn lint(&self, source: &SourceFile) -> Report {
        info!(
            path = %source.path().display(),
            language = self.parser.language_id(),
            "analyzing"
        );

        let tree = match self.parser.parse(source.text()) {
            Ok(tree) => tree,
            Err(err) => {
                debug!(%err, "parse failed, short-circuiting");
                let line = err.line_or_first();
                return Report::single(Finding::new(line, syntax_error_message(line)));
            }
        };

        let tree_findings = walker::walk(&tree, &self.catalog);

        let mut text_findings = Vec::new();
        for rule in self.catalog.text_rules() {
            match catch_unwind(AssertUnwindSafe(|| rule.check_text(source))) {
                Ok(produced) => text_findings.extend(produced),
                Err(_) => warn!(rule = rule.name(), "text rule panicked; skipping it"),
            }
        }

        let report = Report::assemble(tree_findings, text_findings);
        info!(findings = report.len(), "analysis complete");
        report
    }
}

/// The one complaint that replaces all others when the file does not parse.
fn syntax_error_message(line: usize) -> String {
    format!(
        "Wow, syntax error at line {line}. Did you even try to run this code \
         yourself? I can't parse this nonsense."
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::WalkContext;
    use crate::parse::ParseError;
    use crate::tree::{NodeKind, SyntaxNode, SyntaxTree};

    /// Produces a fixed two-node module for any input except `"broken"`.
    struct StubParser;

    impl SourceParser for StubParser {
        fn language_id(&self) -> &'static str {
            "stub"
        }

        fn extensions(&self) -> &'static [&'static str] {
            &[".stub"]
        }

        fn parse(&self, text: &str) -> Result<SyntaxTree, ParseError> {
            if text.contains("broken") {
                return Err(ParseError::new(Some(4), "it is broken"));
            }
            if text.contains("unlocatable") {
                return Err(ParseError::new(None, "somewhere, something"));
            }
            Ok(SyntaxTree::new(SyntaxNode::with_children(
                NodeKind::Module,
                1,
                vec![SyntaxNode::new(NodeKind::Other, 2)],
            )))
        }
    }

    struct FireAt(usize, &'static str);

    impl Rule for FireAt {
        fn name(&self) -> &'static str {
            "fire-at"
        }

        fn check(&self, node: &SyntaxNode, _ctx: &WalkContext<'_>) -> Vec<Finding> {
            if node.line == self.0 {
                vec![Finding::new(node.line, self.1)]
            } else {
                Vec::new()
            }
        }
    }

    struct TextFireAt(usize, &'static str);

    impl TextRule for TextFireAt {
        fn name(&self) -> &'static str {
            "text-fire-at"
        }

        fn check_text(&self, _source: &SourceFile) -> Vec<Finding> {
            vec![Finding::new(self.0, self.1)]
        }
    }

    struct PanickingTextRule;

    impl TextRule for PanickingTextRule {
        fn name(&self) -> &'static str {
            "panicking-text"
        }

        fn check_text(&self, _source: &SourceFile) -> Vec<Finding> {
            panic!("intentional test panic");
        }
    }

    fn source(text: &str) -> SourceFile {
        SourceFile::from_text("test.stub", text)
    }

    // --- builder ---

    #[test]
    fn build_without_parser_fails() {
        let err = Linter::builder().build().unwrap_err();
        assert!(matches!(err, BuildError::MissingParser));
    }

    #[test]
    fn rule_count_covers_tree_and_text() {
        let linter = Linter::builder()
            .parser(StubParser)
            .rule(FireAt(1, "a"))
            .text_rule(TextFireAt(1, "b"))
            .build()
            .unwrap();
        assert_eq!(linter.rule_count(), 2);
    }

    // --- pipeline ---

    #[test]
    fn tree_findings_come_before_text_findings_on_the_same_line() {
        let linter = Linter::builder()
            .parser(StubParser)
            .text_rule(TextFireAt(2, "text"))
            .rule(FireAt(2, "tree"))
            .build()
            .unwrap();

        let report = linter.lint(&source("anything"));
        let messages: Vec<&str> = report
            .findings()
            .iter()
            .map(|f| f.message.as_str())
            .collect();
        // text rule was registered first, tree findings still win the tie
        assert_eq!(messages, vec!["tree", "text"]);
    }

    #[test]
    fn parse_failure_produces_exactly_one_finding() {
        let linter = Linter::builder()
            .parser(StubParser)
            .rule(FireAt(1, "never emitted"))
            .text_rule(TextFireAt(1, "never emitted either"))
            .build()
            .unwrap();

        let report = linter.lint(&source("broken"));
        assert_eq!(report.len(), 1);
        assert_eq!(report.findings()[0].line, 4);
        assert!(report.findings()[0].message.contains("syntax error at line 4"));
    }

    #[test]
    fn unlocatable_parse_failure_lands_on_line_one() {
        let linter = Linter::builder().parser(StubParser).build().unwrap();

        let report = linter.lint(&source("unlocatable"));
        assert_eq!(report.len(), 1);
        assert_eq!(report.findings()[0].line, 1);
    }

    #[test]
    fn panicking_text_rule_does_not_sink_the_run() {
        let linter = Linter::builder()
            .parser(StubParser)
            .text_rule(PanickingTextRule)
            .text_rule(TextFireAt(2, "still here"))
            .build()
            .unwrap();

        let report = linter.lint(&source("anything"));
        assert_eq!(report.len(), 1);
        assert_eq!(report.findings()[0].message, "still here");
    }

    #[test]
    fn repeated_runs_are_identical() {
        let linter = Linter::builder()
            .parser(StubParser)
            .rule(FireAt(2, "same"))
            .text_rule(TextFireAt(1, "every"))
            .build()
            .unwrap();

        let input = source("anything");
        assert_eq!(linter.lint(&input), linter.lint(&input));
    }
}
