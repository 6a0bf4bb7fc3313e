use super::{AssetCheck, RuleInfo};
use crate::asset::{Asset, AssetKind};
use crate::config::Config;
use crate::issue::{Issue, Severity};

/// Flags assets whose body (everything after the frontmatter) is blank.
pub struct BodyCheck;

impl AssetCheck for BodyCheck {
    fn name(&self) -> &'static str {
        "body"
    }

    fn applies_to(&self, _kind: AssetKind) -> bool {
        true
    }

    fn check(&self, asset: &Asset, _config: &Config, issues: &mut Vec<Issue>) {
        if asset.body_is_empty {
            issues.push(Issue::error(
                &asset.source,
                "EMPTY_BODY",
                format!("{} has no content after its frontmatter", asset.kind()),
            ));
        }
    }
}

pub fn rules() -> Vec<RuleInfo> {
    vec![RuleInfo {
        id: "EMPTY_BODY",
        severity: Severity::Error,
        stage: "schema",
        message: "The asset has no content after its frontmatter",
        remediation: "Write the prompt or documentation body below the closing '---'",
    }]
}
