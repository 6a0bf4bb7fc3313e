//! Human-readable text formatter.
//!
//! Issues are grouped under their file path. Colour comes from [`colored`],
//! which already honours `NO_COLOR` and turns itself off when stdout is not
//! a terminal.

use crate::issue::{Issue, Severity};
use crate::report::{Report, Status};
use colored::Colorize;

/// Formats a [`Report`] as text.
///
/// Sections rendered (in order):
/// 1. **Header**: plugin root and per-kind asset counts.
/// 2. **Issues**: grouped by file, each with severity, rule id, message and line.
/// 3. **Suppressed**: suppressed issues with reasons.
/// 4. **Summary**: `N errors, M warnings across K assets` and the result.
pub fn format(report: &Report) -> String {
    let mut out = String::new();

    // Header
    out.push_str(&format!(
        "\n{}\n",
        format!("  Plugin Lint: {}  ", report.plugin)
            .bold()
            .on_blue()
            .white()
    ));
    let counts = report
        .asset_counts
        .iter()
        .map(|(kind, n)| format!("{n} {}", plural(kind.as_str(), *n)))
        .collect::<Vec<_>>()
        .join(", ");
    out.push_str(&format!("  Assets: {counts}\n\n"));

    // Issues grouped by file
    let groups = report.by_path();
    if !groups.is_empty() {
        out.push_str(&format!("{}\n", "Issues".bold().underline()));
        for (path, issues) in groups {
            out.push_str(&format!("  {}\n", path.display().to_string().bold()));
            for issue in issues {
                push_issue(&mut out, issue);
            }
        }
        out.push('\n');
    }

    // Suppressed issues
    if !report.suppressed.is_empty() {
        out.push_str(&format!(
            "{} ({} suppressed)\n",
            "Suppressed".bold().underline(),
            report.suppressed.len()
        ));
        for issue in &report.suppressed {
            let reason = issue
                .suppression_reason
                .as_deref()
                .unwrap_or("no reason given");
            out.push_str(&format!(
                "  [SKIP] {:<36} {}  {}\n",
                issue.rule_id.dimmed(),
                issue.asset_path.display(),
                reason.dimmed(),
            ));
        }
        out.push('\n');
    }

    // Summary
    let status_str = match report.status {
        Status::Passed => "PASSED".green().bold().to_string(),
        Status::Warning => "WARNING".yellow().bold().to_string(),
        Status::Failed => "FAILED".red().bold().to_string(),
    };
    let (errors, warnings) = report.count_by_severity();
    let assets = report.asset_total();
    out.push_str(&format!(
        "Result: {status_str}  |  {errors} {}, {warnings} {} across {assets} {}\n",
        plural("error", errors),
        plural("warning", warnings),
        plural("asset", assets),
    ));

    out
}

fn push_issue(out: &mut String, issue: &Issue) {
    let severity_str = match issue.severity {
        Severity::Error => "ERROR".red().bold().to_string(),
        Severity::Warning => " WARN".yellow().bold().to_string(),
    };
    let location = issue
        .line
        .map(|l| format!(" (line {l})"))
        .unwrap_or_default();
    out.push_str(&format!(
        "    [{severity_str}] {rule_id:<36} {message}{location}\n",
        rule_id = issue.rule_id.dimmed(),
        message = issue.message,
        location = location.dimmed(),
    ));
}

fn plural(word: &str, n: usize) -> String {
    if n == 1 {
        word.to_string()
    } else {
        format!("{word}s")
    }
}
