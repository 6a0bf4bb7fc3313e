//! Report aggregation.
//!
//! [`Report::from_issues`] is the single place where issues from every stage
//! come together: it applies suppressions, sorts by path, rule id and
//! message, drops exact duplicates, counts severities and derives the exit
//! code. Rendering lives in [`crate::output`].

use crate::asset::AssetKind;
use crate::config::Suppression;
use crate::error::EXIT_ISSUES;
use crate::issue::{Issue, Severity};
use std::collections::BTreeMap;
use std::path::Path;

/// Lowest severity that makes the run fail.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum FailOn {
    #[default]
    Error,
    Warning,
}

impl FailOn {
    /// Returns `true` if an issue of `severity` fails the run.
    pub fn trips(&self, severity: Severity) -> bool {
        match self {
            FailOn::Error => severity == Severity::Error,
            FailOn::Warning => true,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Passed,
    Warning,
    Failed,
}

#[derive(Debug)]
pub struct Report {
    pub plugin: String,
    pub issues: Vec<Issue>,
    pub suppressed: Vec<Issue>,
    pub asset_counts: BTreeMap<AssetKind, usize>,
    pub files_scanned: usize,
    pub fail_on: FailOn,
    pub status: Status,
    pub passed: bool,
    pub exit_code: i32,
}

impl Report {
    pub fn from_issues(
        plugin: &str,
        issues: Vec<Issue>,
        asset_counts: BTreeMap<AssetKind, usize>,
        files_scanned: usize,
        suppressions: &[Suppression],
        fail_on: FailOn,
    ) -> Self {
        let mut active = Vec::new();
        let mut suppressed = Vec::new();

        for issue in issues {
            match find_suppression(&issue, suppressions) {
                Some(s) => {
                    let mut issue = issue;
                    issue.suppression_reason = Some(s.reason.clone());
                    suppressed.push(issue);
                }
                None => active.push(issue),
            }
        }

        sort_and_dedup(&mut active);
        sort_and_dedup(&mut suppressed);

        let failed = active.iter().any(|i| fail_on.trips(i.severity));
        let status = if failed {
            Status::Failed
        } else if active.iter().any(|i| i.severity == Severity::Warning) {
            Status::Warning
        } else {
            Status::Passed
        };

        Report {
            plugin: plugin.to_string(),
            issues: active,
            suppressed,
            asset_counts,
            files_scanned,
            fail_on,
            status,
            passed: !failed,
            exit_code: if failed { EXIT_ISSUES } else { 0 },
        }
    }

    /// Count errors and warnings in a single pass. Returns `(errors, warnings)`.
    pub fn count_by_severity(&self) -> (usize, usize) {
        self.issues
            .iter()
            .fold((0, 0), |(e, w), i| match i.severity {
                Severity::Error => (e + 1, w),
                Severity::Warning => (e, w + 1),
            })
    }

    pub fn error_count(&self) -> usize {
        self.count_by_severity().0
    }

    pub fn warning_count(&self) -> usize {
        self.count_by_severity().1
    }

    /// Total assets across all kinds.
    pub fn asset_total(&self) -> usize {
        self.asset_counts.values().sum()
    }

    /// Active issues grouped by asset path, in report order.
    pub fn by_path(&self) -> Vec<(&Path, Vec<&Issue>)> {
        let mut groups: Vec<(&Path, Vec<&Issue>)> = Vec::new();
        for issue in &self.issues {
            let path = issue.asset_path.as_path();
            if let Some((_, group)) = groups.last_mut().filter(|(last, _)| *last == path) {
                group.push(issue);
            } else {
                groups.push((path, vec![issue]));
            }
        }
        groups
    }
}

fn sort_and_dedup(issues: &mut Vec<Issue>) {
    issues.sort_by(|a, b| {
        (&a.asset_path, &a.rule_id, &a.message, a.line).cmp(&(
            &b.asset_path,
            &b.rule_id,
            &b.message,
            b.line,
        ))
    });
    issues.dedup();
}

fn find_suppression<'a>(issue: &Issue, suppressions: &'a [Suppression]) -> Option<&'a Suppression> {
    suppressions.iter().find(|s| {
        if s.rule != issue.rule_id && s.rule != issue.base_rule() {
            return false;
        }
        // Component-wise suffix match: "agent.md" must not match "my-agent.md".
        s.file.is_empty() || issue.asset_path.ends_with(Path::new(&s.file))
    })
}
