//! Rule: single-letter variable names are for mathematicians.

use snark_lint_core::{Finding, NodeKind, Rule, SyntaxNode, WalkContext};

/// Rule name used in configuration and listings.
pub const NAME: &str = "single-letter-name";

/// Complains about single-letter assignment targets.
///
/// Only plain name bindings count; loop variables and attribute or
/// subscript targets never reach this rule. Names on the exemption list
/// are tolerated, and underscores are not letters, so `_` passes on its
/// own merit.
#[derive(Debug, Clone, Default)]
pub struct SingleLetterName {
    exempt: Vec<String>,
}

impl SingleLetterName {
    /// Creates a new rule with an empty exemption list.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the names this rule will let slide.
    #[must_use]
    pub fn exempt<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.exempt = names.into_iter().map(Into::into).collect();
        self
    }

    fn is_offender(&self, name: &str) -> bool {
        let mut chars = name.chars();
        let (Some(only), None) = (chars.next(), chars.next()) else {
            return false;
        };
        only.is_alphabetic() && !self.exempt.iter().any(|e| e == name)
    }
}

impl Rule for SingleLetterName {
    fn name(&self) -> &'static str {
        NAME
    }

    fn description(&self) -> &'static str {
        "Assignments must not bind single-letter names"
    }

    fn check(&self, node: &SyntaxNode, _ctx: &WalkContext<'_>) -> Vec<Finding> {
        let NodeKind::Assign { targets } = &node.kind else {
            return Vec::new();
        };
        targets
            .iter()
            .filter(|name| self.is_offender(name))
            .map(|name| {
                Finding::new(
                    node.line,
                    format!(
                        "Single-letter variable '{name}' at line {}. Oh sure, I'd \
                         never guess what it means, but I'm sure it's clear to YOU.",
                        node.line
                    ),
                )
            })
            .collect()
    }
}
