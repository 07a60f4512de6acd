//! Depth-first traversal driving the rule catalog.

use std::panic::{catch_unwind, AssertUnwindSafe};

use tracing::warn;

use crate::context::WalkContext;
use crate::report::Finding;
use crate::rule::RuleCatalog;
use crate::tree::{NodeKind, SyntaxNode, SyntaxTree};

/// Walks the tree in pre-order, evaluating every tree rule at every node.
///
/// Context updates happen before rules run at a node: a loop node sees
/// itself counted in the loop depth, a def node sees its own name on top
/// of the scope stack. Updates are undone when the walk leaves the node,
/// whatever happened inside the rules.
///
/// A rule that panics at a node is logged and skipped for that node; the
/// walk itself never fails.
#[must_use]
pub fn walk(tree: &SyntaxTree, catalog: &RuleCatalog) -> Vec<Finding> {
    let mut findings = Vec::new();
    let mut ctx = WalkContext::new();
    visit(&tree.root, catalog, &mut ctx, &mut findings);
    findings
}

fn visit<'t>(
    node: &'t SyntaxNode,
    catalog: &RuleCatalog,
    ctx: &mut WalkContext<'t>,
    findings: &mut Vec<Finding>,
) {
    let is_loop = matches!(node.kind, NodeKind::Loop { .. });
    if is_loop {
        ctx.enter_loop();
    }
    let scope = node.scope_name();
    if let Some(name) = scope {
        ctx.push_scope(name);
    }

    for rule in catalog.tree_rules() {
        match catch_unwind(AssertUnwindSafe(|| rule.check(node, ctx))) {
            Ok(mut produced) => findings.append(&mut produced),
            Err(_) => warn!(
                rule = rule.name(),
                line = node.line,
                scope = %ctx.scope_path(),
                "rule panicked at this node; skipping it"
            ),
        }
    }

    let entered_with = ctx.prev_sibling();
    ctx.set_prev_sibling(None);
    for child in &node.children {
        visit(child, catalog, ctx, findings);
        ctx.set_prev_sibling(Some(child));
    }
    ctx.set_prev_sibling(entered_with);

    if scope.is_some() {
        ctx.pop_scope();
    }
    if is_loop {
        ctx.leave_loop();
    }
}
