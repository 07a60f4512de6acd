//! Comment rules: existing, and existing at length.
//!
//! Two independent rules. Presence mocks every comment it sees; length
//! additionally lectures when the comment text runs past the limit. A
//! long comment therefore collects both findings, presence first.

use snark_lint_core::{Finding, NodeKind, Rule, SyntaxNode, WalkContext};

/// Rule name for comment-presence.
pub const PRESENCE_NAME: &str = "comment-presence";

/// Rule name for comment-length.
pub const LENGTH_NAME: &str = "comment-length";

/// Longest comment the length rule will put up with.
pub const DEFAULT_MAX_LENGTH: usize = 72;

/// Complains about every comment, quoting it back at the author.
#[derive(Debug, Clone, Copy, Default)]
pub struct CommentPresence;

impl CommentPresence {
    /// Creates a new rule.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Rule for CommentPresence {
    fn name(&self) -> &'static str {
        PRESENCE_NAME
    }

    fn description(&self) -> &'static str {
        "Comments suggest the code could not speak for itself"
    }

    fn check(&self, node: &SyntaxNode, _ctx: &WalkContext<'_>) -> Vec<Finding> {
        let NodeKind::Comment { text } = &node.kind else {
            return Vec::new();
        };
        vec![Finding::new(
            node.line,
            format!(
                "Extraneous comment at line {}. Real developers keep it all \
                 in their heads: {}",
                node.line,
                text.trim()
            ),
        )]
    }
}

/// Complains when a comment's text exceeds the length limit.
#[derive(Debug, Clone, Copy)]
pub struct CommentLength {
    max_length: usize,
}

impl Default for CommentLength {
    fn default() -> Self {
        Self::new()
    }
}

impl CommentLength {
    /// Creates a new rule with the default limit.
    #[must_use]
    pub fn new() -> Self {
        Self {
            max_length: DEFAULT_MAX_LENGTH,
        }
    }

    /// Sets the longest tolerated comment text.
    #[must_use]
    pub fn max_length(mut self, max_length: usize) -> Self {
        self.max_length = max_length;
        self
    }
}

impl Rule for CommentLength {
    fn name(&self) -> &'static str {
        LENGTH_NAME
    }

    fn description(&self) -> &'static str {
        "Comment text must stay within 72 characters"
    }

    fn check(&self, node: &SyntaxNode, _ctx: &WalkContext<'_>) -> Vec<Finding> {
        let NodeKind::Comment { text } = &node.kind else {
            return Vec::new();
        };
        let length = text.trim().chars().count();
        if length <= self.max_length {
            return Vec::new();
        }
        vec![Finding::new(
            node.line,
            format!(
                "This comment at line {} is {length} characters long. Way to \
                 kill the readability. 72 was too short for you?",
                node.line
            ),
        )]
    }
}
