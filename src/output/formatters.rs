//! Batch summary formatting
//!
//! Console text (optionally coloured) and JSON renderings of a
//! [`BatchReport`].

use crate::error::{ErrorSeverity, Result};
use crate::models::analysis::BatchReport;
use ansi_term::Colour::{Blue, Green, Red, Yellow};
use ansi_term::Style;

/// Format a batch report as console text
pub fn format_report_text(report: &BatchReport, use_colors: bool, verbose: bool) -> String {
    let mut output = String::new();

    let title = "Documentation Summary";
    if use_colors {
        output.push_str(&format!("{}\n", Style::new().bold().paint(title)));
    } else {
        output.push_str(&format!("{}\n", title));
    }
    output.push_str(&format!("{}\n", "=".repeat(title.len())));

    output.push_str(&format!("  Directories scanned: {}\n", report.directories_scanned));
    let documented = report.packages.len().to_string();
    if use_colors {
        output.push_str(&format!("  Packages documented: {}\n", Green.paint(documented)));
    } else {
        output.push_str(&format!("  Packages documented: {}\n", documented));
    }
    output.push_str(&format!("  Skipped directories: {}\n", report.skipped.len()));
    output.push_str(&format!("  Errors: {}\n", report.errors.len()));
    output.push_str(&format!(
        "  Started: {}\n",
        report.started_at.format("%Y-%m-%d %H:%M:%S UTC")
    ));
    output.push_str(&format!("  Duration: {:.2?}\n", report.duration));

    if verbose && !report.packages.is_empty() {
        output.push_str("\nPackages:\n");
        for package in &report.packages {
            let name = if use_colors {
                Blue.bold().paint(package.name.as_str()).to_string()
            } else {
                package.name.clone()
            };
            output.push_str(&format!(
                "  {} ({} functions, {} types, {} exported) -> {}\n",
                name,
                package.functions,
                package.types,
                package.exported,
                package.output.display()
            ));
        }
    }

    if verbose && !report.skipped.is_empty() {
        output.push_str("\nSkipped:\n");
        for dir in &report.skipped {
            output.push_str(&format!("  {}\n", dir.display()));
        }
    }

    if !report.errors.is_empty() {
        output.push_str("\nErrors:\n");
        for error in &report.errors {
            let label = error.severity.to_string();
            let label = if use_colors {
                match error.severity {
                    ErrorSeverity::Warning => Yellow.paint(label).to_string(),
                    _ => Red.paint(label).to_string(),
                }
            } else {
                label
            };
            output.push_str(&format!("  [{}] {}: {}\n", label, error.path.display(), error.error));
        }
    }

    output
}

/// Format a batch report as pretty JSON
pub fn format_report_json(report: &BatchReport) -> Result<String> {
    Ok(serde_json::to_string_pretty(report)?)
}
