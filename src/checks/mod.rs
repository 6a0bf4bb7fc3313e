//! Per-asset schema checks.
//!
//! Every check implements the [`AssetCheck`] trait and looks at exactly one
//! [`Asset`]. Checks never see other assets; cross-asset rules live in
//! [`crate::resolver`].
//!
//! | Check | Kinds | Rules |
//! |-------|-------|-------|
//! | [`fields`] | all | `MISSING_FIELD`, `INVALID_ENUM` |
//! | [`sections`] | all | `MISSING_SECTION`, `EMPTY_SECTION` |
//! | [`body`] | all | `EMPTY_BODY` |
//! | [`workflows`] | agent | `WORKFLOW_MISSING_SKILLS` |
//!
//! Use [`all_checks`] to obtain the registered checks and [`all_rules`] to
//! list every rule the crate can emit.

pub mod body;
pub mod fields;
pub mod sections;
pub mod workflows;

use crate::asset::{Asset, AssetKind};
use crate::config::Config;
use crate::issue::{base_rule, Issue, Severity};

/// A structural contract applied to a single asset.
///
/// Implementers must be [`Send`] + [`Sync`]: the lint pipeline runs checks
/// on many files in parallel via [rayon].
pub trait AssetCheck: Send + Sync {
    /// Short identifier (e.g. `"fields"`).
    fn name(&self) -> &'static str;

    /// Returns `true` if this check runs on assets of `kind`.
    fn applies_to(&self, kind: AssetKind) -> bool;

    /// Appends the issues found in `asset` to `issues`.
    fn check(&self, asset: &Asset, config: &Config, issues: &mut Vec<Issue>);
}

/// Returns every registered [`AssetCheck`].
pub fn all_checks() -> Vec<Box<dyn AssetCheck>> {
    vec![
        Box::new(fields::FieldsCheck),
        Box::new(sections::SectionsCheck),
        Box::new(body::BodyCheck),
        Box::new(workflows::WorkflowsCheck),
    ]
}

/// Runs every applicable check against `asset`.
pub fn check_asset(asset: &Asset, config: &Config) -> Vec<Issue> {
    let kind = asset.kind();
    let mut issues = Vec::new();
    for check in all_checks().iter().filter(|c| c.applies_to(kind)) {
        let before = issues.len();
        check.check(asset, config, &mut issues);
        tracing::trace!(
            check = check.name(),
            path = %asset.source.display(),
            found = issues.len() - before,
        );
    }
    issues
}

/// Metadata for a single rule.
///
/// Used by the `list-rules` and `explain` commands and for SARIF rule
/// descriptors. Each module that emits issues exposes a `rules()` function.
pub struct RuleInfo {
    /// Base rule id (e.g. `"MISSING_FIELD"`).
    pub id: &'static str,
    /// Built-in severity before config overrides.
    pub severity: Severity,
    /// Pipeline stage that emits the rule.
    pub stage: &'static str,
    /// Short description of what the rule checks.
    pub message: &'static str,
    /// Guidance on how to fix a violation.
    pub remediation: &'static str,
}

/// Aggregates [`RuleInfo`] from every module that emits issues.
pub fn all_rules() -> Vec<RuleInfo> {
    let mut rules = Vec::new();
    rules.extend(crate::asset::builder::rules());
    rules.extend(fields::rules());
    rules.extend(sections::rules());
    rules.extend(body::rules());
    rules.extend(workflows::rules());
    rules.extend(crate::resolver::rules());
    rules
}

/// Looks up a rule by full or base id.
///
/// ```
/// use oxidized_plugin_lint::checks::find_rule;
///
/// assert_eq!(find_rule("MISSING_FIELD:category").unwrap().id, "MISSING_FIELD");
/// assert!(find_rule("NOT_A_RULE").is_none());
/// ```
pub fn find_rule(rule_id: &str) -> Option<RuleInfo> {
    let base = base_rule(rule_id);
    all_rules().into_iter().find(|r| r.id == base)
}
