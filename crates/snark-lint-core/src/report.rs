//! Finding and report types, the output side of an analysis run.

use serde::{Deserialize, Serialize};

/// A single complaint tied to a source line.
///
/// The serialized form has exactly these two fields. Editor integrations
/// and CI scripts key on that shape, so it stays closed: no severity, no
/// rule code, no fix metadata.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Finding {
    /// Line number (1-indexed) in the analyzed file.
    pub line: usize,
    /// Human-readable message, sarcasm included.
    pub message: String,
}

impl Finding {
    /// Creates a new finding.
    #[must_use]
    pub fn new(line: usize, message: impl Into<String>) -> Self {
        Self {
            line,
            message: message.into(),
        }
    }
}

impl std::fmt::Display for Finding {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.line, self.message)
    }
}

/// The ordered result of analyzing one file.
///
/// Findings are sorted by ascending line. Findings that share a line keep
/// the order in which they were produced: tree-walk findings before
/// text-pass findings, and within the walk, rule registration order. The
/// sort is stable, so that tie-break survives assembly.
///
/// Serializes as a plain JSON array of findings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Report {
    findings: Vec<Finding>,
}

impl Report {
    /// Creates an empty report.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Assembles a report from tree-walk findings followed by text-pass
    /// findings, stable-sorted by line.
    #[must_use]
    pub fn assemble(tree_findings: Vec<Finding>, text_findings: Vec<Finding>) -> Self {
        let mut findings = tree_findings;
        findings.extend(text_findings);
        // sort_by_key is stable; same-line findings keep production order
        findings.sort_by_key(|f| f.line);
        Self { findings }
    }

    /// A report holding exactly one finding.
    ///
    /// Used by the syntax-error short-circuit, where the one complaint
    /// about the parse failure replaces all rule output.
    #[must_use]
    pub fn single(finding: Finding) -> Self {
        Self {
            findings: vec![finding],
        }
    }

    /// Findings in report order.
    #[must_use]
    pub fn findings(&self) -> &[Finding] {
        &self.findings
    }

    /// Returns true when no rule fired.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.findings.is_empty()
    }

    /// Number of findings.
    #[must_use]
    pub fn len(&self) -> usize {
        self.findings.len()
    }
}

impl<'a> IntoIterator for &'a Report {
    type Item = &'a Finding;
    type IntoIter = std::slice::Iter<'a, Finding>;

    fn into_iter(self) -> Self::IntoIter {
        self.findings.iter()
    }
}
