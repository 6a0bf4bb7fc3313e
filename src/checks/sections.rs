//! Required sections.
//!
//! The required headings for each kind come from the `[agents]`, `[skills]`
//! and `[commands]` tables of the config. A heading matches on exact,
//! case-sensitive text at levels 1 to 3.

use super::{AssetCheck, RuleInfo};
use crate::asset::{Asset, AssetKind};
use crate::config::Config;
use crate::issue::{Issue, Severity};

pub struct SectionsCheck;

fn required_sections(config: &Config, kind: AssetKind) -> &[String] {
    match kind {
        AssetKind::Command => &config.commands.required_sections,
        AssetKind::Agent => &config.agents.required_sections,
        AssetKind::Skill => &config.skills.required_sections,
    }
}

impl AssetCheck for SectionsCheck {
    fn name(&self) -> &'static str {
        "sections"
    }

    fn applies_to(&self, _kind: AssetKind) -> bool {
        true
    }

    fn check(&self, asset: &Asset, config: &Config, issues: &mut Vec<Issue>) {
        for heading in required_sections(config, asset.kind()) {
            match asset.section(heading) {
                None => issues.push(Issue::error(
                    &asset.source,
                    format!("MISSING_SECTION:{heading}"),
                    format!("Required section '{heading}' is missing"),
                )),
                Some(section) if section.is_empty() => issues.push(
                    Issue::error(
                        &asset.source,
                        format!("EMPTY_SECTION:{heading}"),
                        format!("Required section '{heading}' has no content"),
                    )
                    .at_line(Some(section.line)),
                ),
                Some(_) => {}
            }
        }
    }
}

pub fn rules() -> Vec<RuleInfo> {
    vec![
        RuleInfo {
            id: "MISSING_SECTION",
            severity: Severity::Error,
            stage: "schema",
            message: "A required section heading is missing",
            remediation: "Add a '## <Section>' heading with the exact text named in the issue",
        },
        RuleInfo {
            id: "EMPTY_SECTION",
            severity: Severity::Error,
            stage: "schema",
            message: "A required section is present but has no content",
            remediation: "Fill in the section or remove the placeholder heading and write it properly",
        },
    ]
}
