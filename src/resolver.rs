//! Cross-asset reference resolution.
//!
//! Runs once, after every file has been built. It indexes assets by name per
//! kind, resolves every skill an agent names, and reports skills nobody
//! uses. All ordering decisions are made on sorted paths, so the result does
//! not depend on directory traversal order.

use crate::asset::{extract, Asset, AssetKind};
use crate::checks::RuleInfo;
use crate::issue::{Issue, Severity};
use std::collections::{BTreeMap, BTreeSet};

/// Name index for one asset kind. The asset whose path sorts first owns a name.
#[derive(Debug, Default)]
pub struct NameIndex<'a> {
    by_name: BTreeMap<&'a str, &'a Asset>,
}

impl<'a> NameIndex<'a> {
    pub fn get(&self, name: &str) -> Option<&'a Asset> {
        self.by_name.get(name).copied()
    }

    pub fn len(&self) -> usize {
        self.by_name.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_name.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'a str, &'a Asset)> + '_ {
        self.by_name.iter().map(|(n, a)| (*n, *a))
    }
}

/// Builds the name index for `kind`, reporting every later duplicate.
pub fn index<'a>(
    sorted: &[&'a Asset],
    kind: AssetKind,
    issues: &mut Vec<Issue>,
) -> NameIndex<'a> {
    let mut idx = NameIndex::default();
    for asset in sorted.iter().copied().filter(|a| a.kind() == kind) {
        let Some(name) = asset.name.as_deref() else {
            continue;
        };
        match idx.by_name.get(name) {
            Some(owner) => issues.push(
                Issue::error(
                    &asset.source,
                    "DUPLICATE_NAME",
                    format!(
                        "{kind} name '{name}' is already declared by {}",
                        owner.source.display()
                    ),
                )
                .at_line(asset.frontmatter.line("name")),
            ),
            None => {
                idx.by_name.insert(name, asset);
            }
        }
    }
    idx
}

/// Resolves all references between `assets`.
///
/// # Examples
///
/// ```rust,no_run
/// use oxidized_plugin_lint::resolver;
/// # fn example(assets: &[oxidized_plugin_lint::asset::Asset]) {
/// for issue in resolver::resolve(assets) {
///     println!("{}: {}", issue.rule_id, issue.message);
/// }
/// # }
/// ```
pub fn resolve(assets: &[Asset]) -> Vec<Issue> {
    let mut sorted: Vec<&Asset> = assets.iter().collect();
    sorted.sort_by(|a, b| a.source.cmp(&b.source));

    let mut issues = Vec::new();
    // Commands and agents are never referenced by name; index them for duplicates only.
    index(&sorted, AssetKind::Command, &mut issues);
    index(&sorted, AssetKind::Agent, &mut issues);
    let skills = index(&sorted, AssetKind::Skill, &mut issues);

    let mut referenced: BTreeSet<&str> = BTreeSet::new();
    for &asset in &sorted {
        let Some(agent) = asset.agent() else {
            continue;
        };
        for name in agent.referenced_skills() {
            if skills.get(name).is_some() {
                referenced.insert(name);
            } else {
                issues.push(
                    Issue::error(
                        &asset.source,
                        format!("UNRESOLVED_SKILL_REFERENCE:{name}"),
                        format!("Skill '{name}' does not exist"),
                    )
                    .at_line(reference_line(asset, name)),
                );
            }
        }
    }

    for (name, skill) in skills.iter() {
        if !referenced.contains(name) {
            issues.push(
                Issue::warning(
                    &skill.source,
                    "ORPHANED_SKILL",
                    format!("Skill '{name}' is not referenced by any agent"),
                )
                .at_line(skill.frontmatter.line("name")),
            );
        }
    }

    tracing::debug!(
        skills = skills.len(),
        referenced = referenced.len(),
        issues = issues.len(),
        "resolved references"
    );
    issues
}

/// Line of the first workflow or integration section that names `skill`.
fn reference_line(asset: &Asset, skill: &str) -> Option<usize> {
    let agent = asset.agent()?;
    agent
        .workflows
        .iter()
        .find(|w| w.skills.as_ref().is_some_and(|s| s.contains(skill)))
        .map(|w| w.line)
        .or_else(|| {
            asset
                .frontmatter
                .get("skills_invoked")
                .filter(|list| extract::name_list(list).iter().any(|n| n == skill))
                .and_then(|_| asset.frontmatter.line("skills_invoked"))
        })
        .or_else(|| {
            asset
                .section(crate::asset::builder::SKILLS_INTEGRATION_SECTION)
                .map(|s| s.line)
        })
}

pub fn rules() -> Vec<RuleInfo> {
    vec![
        RuleInfo {
            id: "DUPLICATE_NAME",
            severity: Severity::Error,
            stage: "references",
            message: "Two assets of the same kind declare the same name; the later path is reported",
            remediation: "Rename one of the assets so every name is unique within its kind",
        },
        RuleInfo {
            id: "UNRESOLVED_SKILL_REFERENCE",
            severity: Severity::Error,
            stage: "references",
            message: "An agent names a skill that no skill asset declares",
            remediation: "Fix the skill name in the agent, or add the missing skill",
        },
        RuleInfo {
            id: "ORPHANED_SKILL",
            severity: Severity::Warning,
            stage: "references",
            message: "A skill is not referenced by any agent",
            remediation: "Reference the skill from an agent's workflows or Skills Integration, or remove it",
        },
    ]
}
