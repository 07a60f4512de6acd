//! Rule traits and the ordered catalog.

use crate::context::WalkContext;
use crate::report::Finding;
use crate::source::SourceFile;
use crate::tree::SyntaxNode;

/// A style rule evaluated at every tree node.
///
/// Implementations are pure functions of the node and the traversal
/// context: no internal state, no I/O, no visibility into other rules'
/// findings. A rule that does not apply to a node returns an empty vec.
pub trait Rule: Send + Sync {
    /// Kebab-case rule name, e.g. `"function-naming"`.
    fn name(&self) -> &'static str;

    /// One-line description for rule listings.
    fn description(&self) -> &'static str {
        ""
    }

    /// Evaluates the rule at one node.
    fn check(&self, node: &SyntaxNode, ctx: &WalkContext<'_>) -> Vec<Finding>;
}

/// A rule evaluated once over the raw text instead of per node.
///
/// Physical-line checks live here; the tree never sees trailing blanks or
/// column counts. Text-pass findings are aggregated after tree findings.
pub trait TextRule: Send + Sync {
    /// Kebab-case rule name.
    fn name(&self) -> &'static str;

    /// One-line description for rule listings.
    fn description(&self) -> &'static str {
        ""
    }

    /// Evaluates the rule over the whole source.
    fn check_text(&self, source: &SourceFile) -> Vec<Finding>;
}

/// Boxed tree rule.
pub type RuleBox = Box<dyn Rule>;

/// Boxed text rule.
pub type TextRuleBox = Box<dyn TextRule>;

/// The ordered rule catalog: tree rules first, then text passes.
///
/// Registration order is the documented tie-break for findings that share
/// a line, so the catalog is built once at startup and never reordered.
/// There is deliberately no way to remove a registered rule.
#[derive(Default)]
pub struct RuleCatalog {
    tree_rules: Vec<RuleBox>,
    text_rules: Vec<TextRuleBox>,
}

impl RuleCatalog {
    /// Creates an empty catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a tree rule, keeping registration order.
    pub fn register<R: Rule + 'static>(&mut self, rule: R) {
        self.tree_rules.push(Box::new(rule));
    }

    /// Appends an already-boxed tree rule.
    pub fn register_box(&mut self, rule: RuleBox) {
        self.tree_rules.push(rule);
    }

    /// Appends a text rule, keeping registration order.
    pub fn register_text<R: TextRule + 'static>(&mut self, rule: R) {
        self.text_rules.push(Box::new(rule));
    }

    /// Appends an already-boxed text rule.
    pub fn register_text_box(&mut self, rule: TextRuleBox) {
        self.text_rules.push(rule);
    }

    /// Tree rules in registration order.
    #[must_use]
    pub fn tree_rules(&self) -> &[RuleBox] {
        &self.tree_rules
    }

    /// Text rules in registration order.
    #[must_use]
    pub fn text_rules(&self) -> &[TextRuleBox] {
        &self.text_rules
    }

    /// Total number of registered rules, tree and text combined.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tree_rules.len() + self.text_rules.len()
    }

    /// Returns true when nothing is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tree_rules.is_empty() && self.text_rules.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Named(&'static str);

    impl Rule for Named {
        fn name(&self) -> &'static str {
            self.0
        }

        fn check(&self, _node: &SyntaxNode, _ctx: &WalkContext<'_>) -> Vec<Finding> {
            Vec::new()
        }
    }

    struct NamedText(&'static str);

    impl TextRule for NamedText {
        fn name(&self) -> &'static str {
            self.0
        }

        fn check_text(&self, _source: &SourceFile) -> Vec<Finding> {
            Vec::new()
        }
    }

    #[test]
    fn registration_order_is_preserved() {
        let mut catalog = RuleCatalog::new();
        catalog.register(Named("first"));
        catalog.register(Named("second"));
        catalog.register(Named("third"));

        let names: Vec<&str> = catalog.tree_rules().iter().map(|r| r.name()).collect();
        assert_eq!(names, vec!["first", "second", "third"]);
    }

    #[test]
    fn len_counts_both_rule_kinds() {
        let mut catalog = RuleCatalog::new();
        assert!(catalog.is_empty());

        catalog.register(Named("tree"));
        catalog.register_text(NamedText("text"));
        assert_eq!(catalog.len(), 2);
        assert!(!catalog.is_empty());
    }
}
