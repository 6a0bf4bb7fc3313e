use std::fmt;
use std::path::{Path, PathBuf};

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Error,
    Warning,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Error => write!(f, "error"),
            Severity::Warning => write!(f, "warning"),
        }
    }
}

/// One detected problem in one asset file.
///
/// `rule_id` is either a bare rule (`ORPHANED_SKILL`) or a rule with a
/// subject (`MISSING_FIELD:category`); see [`Issue::base_rule`].
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Issue {
    pub severity: Severity,
    pub asset_path: PathBuf,
    pub rule_id: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suppression_reason: Option<String>,
}

impl Issue {
    pub fn new(
        severity: Severity,
        asset_path: &Path,
        rule_id: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Issue {
            severity,
            asset_path: asset_path.to_path_buf(),
            rule_id: rule_id.into(),
            message: message.into(),
            line: None,
            suppression_reason: None,
        }
    }

    pub fn error(asset_path: &Path, rule_id: impl Into<String>, message: impl Into<String>) -> Self {
        Issue::new(Severity::Error, asset_path, rule_id, message)
    }

    pub fn warning(
        asset_path: &Path,
        rule_id: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Issue::new(Severity::Warning, asset_path, rule_id, message)
    }

    pub fn at_line(mut self, line: Option<usize>) -> Self {
        self.line = line;
        self
    }

    /// The rule id without its `:<subject>` suffix.
    ///
    /// ```
    /// use std::path::Path;
    /// use oxidized_plugin_lint::issue::Issue;
    ///
    /// let issue = Issue::error(Path::new("a.md"), "MISSING_FIELD:color", "missing");
    /// assert_eq!(issue.base_rule(), "MISSING_FIELD");
    /// ```
    pub fn base_rule(&self) -> &str {
        base_rule(&self.rule_id)
    }
}

/// Strips the `:<subject>` suffix from a rule id.
pub fn base_rule(rule_id: &str) -> &str {
    rule_id.split_once(':').map_or(rule_id, |(base, _)| base)
}
