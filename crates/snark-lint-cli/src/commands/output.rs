//! Shared output formatting for lint reports.

use anyhow::Result;
use snark_lint_core::Report;
use std::path::Path;

use crate::OutputFormat;

/// Print a report in the specified format.
pub fn print(report: &Report, file: &Path, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Text => print_text(report, file),
        OutputFormat::Json => return print_json(report),
    }
    Ok(())
}

fn print_text(report: &Report, file: &Path) {
    if report.is_empty() {
        println!("No comedic issues found. Your code is evidently too normal.");
        return;
    }

    for finding in report {
        println!("{}:{}: {}", file.display(), finding.line, finding.message);
    }
}

fn print_json(report: &Report) -> Result<()> {
    let json = serde_json::to_string_pretty(report)?;
    println!("{json}");
    Ok(())
}
