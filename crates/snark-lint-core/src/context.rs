//! Traversal state shared with rules.

use crate::tree::SyntaxNode;

/// Mutable state scoped to one traversal.
///
/// The walker owns the context and keeps it consistent: updates for a node
/// happen before any rule sees that node, and are undone when the walk
/// leaves it. Rules only ever get a shared borrow, so one run's state
/// cannot leak into the next.
#[derive(Debug, Default)]
pub struct WalkContext<'t> {
    loop_depth: usize,
    scopes: Vec<&'t str>,
    prev_sibling: Option<&'t SyntaxNode>,
}

impl<'t> WalkContext<'t> {
    /// Fresh context for a new traversal.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of loop statements currently entered.
    ///
    /// When the node under evaluation is itself a loop, it is already
    /// counted, so a loop at depth 1 is top-level and depth 2 or more
    /// means nesting.
    #[must_use]
    pub fn loop_depth(&self) -> usize {
        self.loop_depth
    }

    /// Names of the enclosing functions and classes, outermost first.
    ///
    /// When the node under evaluation opens a scope, its own name is
    /// already on the stack.
    #[must_use]
    pub fn scopes(&self) -> &[&'t str] {
        &self.scopes
    }

    /// Dotted scope path for qualifying messages, e.g. `Outer.helper`.
    #[must_use]
    pub fn scope_path(&self) -> String {
        self.scopes.join(".")
    }

    /// The sibling visited immediately before the current node, if any.
    #[must_use]
    pub fn prev_sibling(&self) -> Option<&'t SyntaxNode> {
        self.prev_sibling
    }

    pub(crate) fn enter_loop(&mut self) {
        self.loop_depth += 1;
    }

    pub(crate) fn leave_loop(&mut self) {
        self.loop_depth = self.loop_depth.saturating_sub(1);
    }

    pub(crate) fn push_scope(&mut self, name: &'t str) {
        self.scopes.push(name);
    }

    pub(crate) fn pop_scope(&mut self) {
        self.scopes.pop();
    }

    pub(crate) fn set_prev_sibling(&mut self, node: Option<&'t SyntaxNode>) {
        self.prev_sibling = node;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_context_is_clean() {
        let ctx = WalkContext::new();
        assert_eq!(ctx.loop_depth(), 0);
        assert!(ctx.scopes().is_empty());
        assert!(ctx.prev_sibling().is_none());
    }

    #[test]
    fn loop_depth_tracks_enter_and_leave() {
        let mut ctx = WalkContext::new();
        ctx.enter_loop();
        ctx.enter_loop();
        assert_eq!(ctx.loop_depth(), 2);
        ctx.leave_loop();
        assert_eq!(ctx.loop_depth(), 1);
    }

    #[test]
    fn leave_loop_saturates_at_zero() {
        let mut ctx = WalkContext::new();
        ctx.leave_loop();
        assert_eq!(ctx.loop_depth(), 0);
    }

    #[test]
    fn scope_path_joins_with_dots() {
        let mut ctx = WalkContext::new();
        ctx.push_scope("Outer");
        ctx.push_scope("helper");
        assert_eq!(ctx.scope_path(), "Outer.helper");
        ctx.pop_scope();
        assert_eq!(ctx.scope_path(), "Outer");
    }
}
