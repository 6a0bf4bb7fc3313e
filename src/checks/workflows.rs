//! Agent workflow subsections must say which skills they use.
//!
//! A workflow without a `Skills Invoked:` line is a warning rather than an
//! error: some workflows use no skill at all, and `Skills Invoked: none`
//! states that explicitly.

use super::{AssetCheck, RuleInfo};
use crate::asset::{Asset, AssetKind};
use crate::config::Config;
use crate::issue::{Issue, Severity};

pub struct WorkflowsCheck;

impl AssetCheck for WorkflowsCheck {
    fn name(&self) -> &'static str {
        "workflows"
    }

    fn applies_to(&self, kind: AssetKind) -> bool {
        kind == AssetKind::Agent
    }

    fn check(&self, asset: &Asset, _config: &Config, issues: &mut Vec<Issue>) {
        let Some(agent) = asset.agent() else {
            return;
        };
        for workflow in agent.workflows.iter().filter(|w| w.skills.is_none()) {
            issues.push(
                Issue::warning(
                    &asset.source,
                    "WORKFLOW_MISSING_SKILLS",
                    format!("Workflow '{}' has no 'Skills Invoked:' line", workflow.heading),
                )
                .at_line(Some(workflow.line)),
            );
        }
    }
}

pub fn rules() -> Vec<RuleInfo> {
    vec![RuleInfo {
        id: "WORKFLOW_MISSING_SKILLS",
        severity: Severity::Warning,
        stage: "schema",
        message: "An agent workflow subsection has no 'Skills Invoked:' line",
        remediation: "Add '**Skills Invoked:** `skill-name`' (or 'Skills Invoked: none') to the workflow",
    }]
}
