//! Required and enumerated frontmatter fields.
//!
//! | Kind | Required fields |
//! |------|-----------------|
//! | command | `description` |
//! | agent | `name`, `description`, `category`, `pattern_version`, `model`, `color` |
//! | skill | `name`, `description` |
//!
//! An empty value counts as missing. A missing enum field is reported once,
//! as `MISSING_FIELD`, never also as `INVALID_ENUM`.

use super::{AssetCheck, RuleInfo};
use crate::asset::{Asset, AssetKind, Category, Color, FieldValue, Model};
use crate::config::Config;
use crate::issue::{Issue, Severity};

const COMMAND_FIELDS: &[&str] = &["description"];
const AGENT_FIELDS: &[&str] = &[
    "name",
    "description",
    "category",
    "pattern_version",
    "model",
    "color",
];
const SKILL_FIELDS: &[&str] = &["name", "description"];

pub fn required_fields(kind: AssetKind) -> &'static [&'static str] {
    match kind {
        AssetKind::Command => COMMAND_FIELDS,
        AssetKind::Agent => AGENT_FIELDS,
        AssetKind::Skill => SKILL_FIELDS,
    }
}

pub struct FieldsCheck;

impl AssetCheck for FieldsCheck {
    fn name(&self) -> &'static str {
        "fields"
    }

    fn applies_to(&self, _kind: AssetKind) -> bool {
        true
    }

    fn check(&self, asset: &Asset, _config: &Config, issues: &mut Vec<Issue>) {
        let path = &asset.source;
        for field in required_fields(asset.kind()) {
            if asset.frontmatter.get(field).is_none() {
                issues.push(
                    Issue::error(
                        path,
                        format!("MISSING_FIELD:{field}"),
                        format!("Required frontmatter field '{field}' is missing or empty"),
                    )
                    .at_line(asset.frontmatter.line(field)),
                );
            }
        }

        if let Some(agent) = asset.agent() {
            check_enum(asset, issues, "category", &agent.category, Category::ALL);
            check_enum(asset, issues, "model", &agent.model, Model::ALL);
            check_enum(asset, issues, "color", &agent.color, Color::ALL);
        }
    }
}

fn check_enum<T: std::fmt::Display>(
    asset: &Asset,
    issues: &mut Vec<Issue>,
    field: &str,
    value: &FieldValue<T>,
    allowed: &[T],
) {
    let FieldValue::Invalid(raw) = value else {
        return;
    };
    let allowed = allowed
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ");
    issues.push(
        Issue::error(
            &asset.source,
            format!("INVALID_ENUM:{field}"),
            format!("Invalid {field} '{raw}' (expected one of: {allowed})"),
        )
        .at_line(asset.frontmatter.line(field)),
    );
}

pub fn rules() -> Vec<RuleInfo> {
    vec![
        RuleInfo {
            id: "MISSING_FIELD",
            severity: Severity::Error,
            stage: "schema",
            message: "A required frontmatter field is missing or empty",
            remediation: "Add the field to the frontmatter block between the '---' lines",
        },
        RuleInfo {
            id: "INVALID_ENUM",
            severity: Severity::Error,
            stage: "schema",
            message: "An agent's category, model, or color is not one of the allowed values",
            remediation: "Use one of the values listed in the issue message (matching is case-sensitive)",
        },
    ]
}
