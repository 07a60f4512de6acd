//! Rule: physical line length, checked over raw text.
//!
//! This is the one rule that never looks at the tree. It runs once per
//! physical line, so a long line yields a single finding no matter how
//! many nodes sit on it.

use snark_lint_core::{Finding, SourceFile, TextRule};

/// Rule name used in configuration and listings.
pub const NAME: &str = "line-length";

/// Limit for lines that hold code.
pub const DEFAULT_CODE_LIMIT: usize = 79;

/// Limit for comment-only lines.
pub const DEFAULT_COMMENT_LIMIT: usize = 72;

/// Complains about lines longer than the limit.
///
/// Comment-only lines get the stricter comment limit; everything else
/// gets the code limit. Length is the full line including indentation,
/// counted in characters. Blank lines are skipped.
#[derive(Debug, Clone, Copy)]
pub struct LineLength {
    code_limit: usize,
    comment_limit: usize,
}

impl Default for LineLength {
    fn default() -> Self {
        Self::new()
    }
}

impl LineLength {
    /// Creates a new rule with the default limits.
    #[must_use]
    pub fn new() -> Self {
        Self {
            code_limit: DEFAULT_CODE_LIMIT,
            comment_limit: DEFAULT_COMMENT_LIMIT,
        }
    }

    /// Sets the limit for code lines.
    #[must_use]
    pub fn code_limit(mut self, limit: usize) -> Self {
        self.code_limit = limit;
        self
    }

    /// Sets the limit for comment-only lines.
    #[must_use]
    pub fn comment_limit(mut self, limit: usize) -> Self {
        self.comment_limit = limit;
        self
    }
}

impl TextRule for LineLength {
    fn name(&self) -> &'static str {
        NAME
    }

    fn description(&self) -> &'static str {
        "Lines must stay within 79 characters, 72 for comment-only lines"
    }

    fn check_text(&self, source: &SourceFile) -> Vec<Finding> {
        let mut findings = Vec::new();
        for (line_no, line) in source.numbered_lines() {
            if line.trim().is_empty() {
                continue;
            }
            let length = line.chars().count();
            if line.trim_start().starts_with('#') {
                if length > self.comment_limit {
                    findings.push(Finding::new(
                        line_no,
                        format!(
                            "Line {line_no} has {length} characters in a comment. \
                             72 is the limit, but apparently your brilliance \
                             needed more space?"
                        ),
                    ));
                }
            } else if length > self.code_limit {
                findings.push(Finding::new(
                    line_no,
                    format!(
                        "Line {line_no} has {length} characters. Trying to \
                         write the next War and Peace in one line?"
                    ),
                ));
            }
        }
        findings
    }
}
