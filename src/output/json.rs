//! JSON output formatter.
//!
//! Produces a pretty-printed document with the sorted issue list, asset
//! counts per kind, a severity summary, and suppressed issues. Field names
//! are camelCase (`assetPath`, `ruleId`, `assetCounts`).

use crate::asset::AssetKind;
use crate::issue::Issue;
use crate::report::{FailOn, Report, Status};
use std::collections::BTreeMap;

#[derive(serde::Serialize)]
#[serde(rename_all = "camelCase")]
struct JsonOutput<'a> {
    plugin: &'a str,
    status: Status,
    passed: bool,
    fail_on: FailOn,
    exit_code: i32,
    summary: Summary,
    asset_counts: &'a BTreeMap<AssetKind, usize>,
    issues: &'a [Issue],
    suppressed: &'a [Issue],
}

#[derive(serde::Serialize)]
#[serde(rename_all = "camelCase")]
struct Summary {
    errors: usize,
    warnings: usize,
    suppressed: usize,
    assets: usize,
    files_scanned: usize,
}

/// Formats a [`Report`] as pretty-printed JSON.
///
/// # Panics
///
/// Panics if the report cannot be serialized (should not happen with valid data).
pub fn format(report: &Report) -> String {
    let (errors, warnings) = report.count_by_severity();
    let output = JsonOutput {
        plugin: &report.plugin,
        status: report.status,
        passed: report.passed,
        fail_on: report.fail_on,
        exit_code: report.exit_code,
        summary: Summary {
            errors,
            warnings,
            suppressed: report.suppressed.len(),
            assets: report.asset_total(),
            files_scanned: report.files_scanned,
        },
        asset_counts: &report.asset_counts,
        issues: &report.issues,
        suppressed: &report.suppressed,
    };

    let mut json = serde_json::to_string_pretty(&output).expect("JSON serialization failed");
    json.push('\n');
    json
}
