//! Source file loading.

use std::path::{Path, PathBuf};

use thiserror::Error;

/// Failure to read the input file. Unlike syntax errors, this is fatal
/// for the invocation.
#[derive(Debug, Error)]
#[error("failed to read {path}: {source}")]
pub struct LoadError {
    /// Path that could not be read.
    pub path: PathBuf,
    /// Underlying I/O error.
    #[source]
    pub source: std::io::Error,
}

/// The immutable input to one analysis run: a path and its text.
#[derive(Debug, Clone)]
pub struct SourceFile {
    path: PathBuf,
    text: String,
    line_count: usize,
}

impl SourceFile {
    /// Reads the file at `path`.
    ///
    /// # Errors
    ///
    /// Returns [`LoadError`] when the file is missing, unreadable, or not
    /// valid UTF-8.
    pub fn load(path: impl Into<PathBuf>) -> Result<Self, LoadError> {
        let path = path.into();
        let text = std::fs::read_to_string(&path).map_err(|source| LoadError {
            path: path.clone(),
            source,
        })?;
        Ok(Self::from_text(path, text))
    }

    /// Builds a source file from in-memory text.
    ///
    /// Used by tests and in-process callers that already hold the text;
    /// the path is kept for display only.
    #[must_use]
    pub fn from_text(path: impl Into<PathBuf>, text: impl Into<String>) -> Self {
        let text = text.into();
        let line_count = text.lines().count();
        Self {
            path: path.into(),
            text,
            line_count,
        }
    }

    /// Path this source came from.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Full source text.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Number of physical lines.
    #[must_use]
    pub fn line_count(&self) -> usize {
        self.line_count
    }

    /// Physical lines with 1-based numbering, line endings stripped.
    pub fn numbered_lines(&self) -> impl Iterator<Item = (usize, &str)> {
        self.text.lines().enumerate().map(|(i, line)| (i + 1, line))
    }
}
