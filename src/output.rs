//! CLI output formatting.
//!
//! Information-first display: every page leads with its positional index
//! and album title, with the output route after `→`. Degradations (empty
//! navigation, error pages) are shown inline where they happened rather
//! than collected at the end.
//!
//! Each function comes in two forms: `format_*` (returns `Vec<String>`,
//! pure, testable) and a `print_*` wrapper that writes to stdout.

use crate::generate::{BuildReport, PageOutcome};

/// Format a 1-based positional index as 3-digit zero-padded.
fn format_index(pos: usize) -> String {
    format!("{:0>3}", pos)
}

/// Format a build (or check) report.
pub fn format_build_output(report: &BuildReport) -> Vec<String> {
    let mut lines = Vec::new();

    if let Some(reason) = &report.nav_error {
        lines.push(format!(
            "Warning: navigation descriptor failed to load, rails left empty ({reason})"
        ));
        lines.push(String::new());
    }

    lines.push("Pages".to_string());
    let mut error_pages = 0;
    for (i, page) in report.pages.iter().enumerate() {
        match &page.outcome {
            PageOutcome::Rendered { title, images } => {
                lines.push(format!(
                    "    {} {} \u{2192} {} ({} photos)",
                    format_index(i + 1),
                    title,
                    page.route,
                    images
                ));
            }
            PageOutcome::ErrorPage { reason } => {
                error_pages += 1;
                lines.push(format!(
                    "    {} ({}) \u{2192} error page",
                    format_index(i + 1),
                    page.route
                ));
                lines.push(format!("        Reason: {reason}"));
            }
        }
    }

    if let Some(default_page) = &report.index_alias {
        lines.push(format!("    Home \u{2192} index.html (alias of {default_page})"));
    }

    lines.push(String::new());
    if report.assets_copied > 0 {
        lines.push(format!("Copied {} assets", report.assets_copied));
    }
    let total = report.pages.len();
    if error_pages > 0 {
        lines.push(format!(
            "Generated {} pages ({} error pages)",
            total, error_pages
        ));
    } else {
        lines.push(format!("Generated {} pages", total));
    }

    lines
}

/// Print a build report to stdout.
pub fn print_build_output(report: &BuildReport) {
    for line in format_build_output(report) {
        println!("{}", line);
    }
}
