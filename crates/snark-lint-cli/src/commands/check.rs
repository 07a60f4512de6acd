//! Check command implementation.

use anyhow::{Context, Result};
use snark_lint_core::{Config, Linter, SourceFile, SourceParser};
use snark_lint_py::PythonParser;
use snark_lint_rules::catalog_with;
use std::path::Path;

use crate::config_resolver::{self, ConfigSource};
use crate::OutputFormat;

/// Runs the check command.
pub fn run(file: &Path, format: OutputFormat, explicit_config: Option<&Path>) -> Result<()> {
    let project_dir = file.parent().filter(|p| !p.as_os_str().is_empty());
    let source = config_resolver::resolve(project_dir.unwrap_or(Path::new(".")), explicit_config);

    let config = match &source {
        ConfigSource::Default => Config::default(),
        other => {
            // Invariant: non-Default variants always carry a path
            let p = other.path().context("resolved config has no path")?;
            if source.is_global() {
                tracing::info!("Using global config: {}", p.display());
            }
            Config::from_file(p)
                .with_context(|| format!("Failed to load config: {}", p.display()))?
        }
    };

    let parser = PythonParser::new();
    let name = file.to_string_lossy();
    if !parser.extensions().iter().any(|ext| name.ends_with(ext)) {
        tracing::warn!(
            "{} does not look like a python file; linting it anyway",
            file.display()
        );
    }

    let linter = Linter::builder()
        .parser(parser)
        .catalog(catalog_with(&config))
        .build()
        .context("Failed to build linter")?;

    let source_file =
        SourceFile::load(file).with_context(|| format!("Failed to read {}", file.display()))?;

    let report = linter.lint(&source_file);

    super::output::print(&report, file, format)?;

    // Findings are the product, not a failure: the exit code stays zero
    // no matter how many the report holds.
    Ok(())
}
