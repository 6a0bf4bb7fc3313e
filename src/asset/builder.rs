//! Turns one file into a typed [`Asset`].
//!
//! The builder decides the asset kind from which configured root the file
//! lives under, splits frontmatter and sections, and maps them onto the
//! kind's record. Parse-level problems (unknown kind, unterminated
//! frontmatter, duplicate headings) are returned as issues; the caller skips
//! schema checks for any file that produced one.

use super::extract;
use super::{
    find_section, AgentDetails, Asset, AssetDetails, AssetKind, FieldValue, SkillDetails, Workflow,
};
use crate::issue::Issue;
use crate::parser::frontmatter::FrontmatterError;
use crate::parser::sections::Section;
use crate::parser::RawDocument;
use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

/// Heading of the agent section that holds workflow subsections.
pub const WORKFLOWS_SECTION: &str = "Specialized Workflows";
/// Heading of the agent section listing primary and secondary skills.
pub const SKILLS_INTEGRATION_SECTION: &str = "Skills Integration";
pub const TRIGGER_KEYWORDS_SECTION: &str = "Trigger Keywords";
pub const AGENT_INTEGRATION_SECTION: &str = "Agent Integration";

/// The three directories assets are discovered under.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Roots {
    pub commands: Option<PathBuf>,
    pub agents: Option<PathBuf>,
    pub skills: Option<PathBuf>,
}

impl Roots {
    /// `commands/`, `agents/` and `skills/` under `plugin_root`.
    pub fn under(plugin_root: &Path) -> Self {
        Roots {
            commands: Some(plugin_root.join(AssetKind::Command.dir_name())),
            agents: Some(plugin_root.join(AssetKind::Agent.dir_name())),
            skills: Some(plugin_root.join(AssetKind::Skill.dir_name())),
        }
    }

    pub fn get(&self, kind: AssetKind) -> Option<&Path> {
        match kind {
            AssetKind::Command => self.commands.as_deref(),
            AssetKind::Agent => self.agents.as_deref(),
            AssetKind::Skill => self.skills.as_deref(),
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (AssetKind, &Path)> {
        AssetKind::ALL
            .into_iter()
            .filter_map(|kind| self.get(kind).map(|root| (kind, root)))
    }

    /// Kind of the deepest root containing `path`.
    pub fn kind_of(&self, path: &Path) -> Option<AssetKind> {
        self.iter()
            .filter(|(_, root)| path.starts_with(root))
            .max_by_key(|(_, root)| root.components().count())
            .map(|(kind, _)| kind)
    }
}

/// Outcome of building one file.
#[derive(Debug)]
pub struct Built {
    pub asset: Option<Asset>,
    /// Parse-level issues. Non-empty means schema checks must not run.
    pub issues: Vec<Issue>,
}

impl Built {
    fn failed(issue: Issue) -> Self {
        Built {
            asset: None,
            issues: vec![issue],
        }
    }
}

/// The outcome for a file whose bytes are not valid UTF-8.
///
/// The issue points at the line holding the first bad byte.
pub fn undecodable(path: &Path, err: &std::string::FromUtf8Error) -> Built {
    let valid = &err.as_bytes()[..err.utf8_error().valid_up_to()];
    let line = valid.iter().filter(|&&b| b == b'\n').count() + 1;
    Built::failed(
        Issue::error(
            path,
            "INVALID_ENCODING",
            format!("File is not valid UTF-8: {}", err.utf8_error()),
        )
        .at_line(Some(line)),
    )
}

/// Builds the asset for `path` from its already-read `content`.
pub fn build(path: &Path, content: &str, roots: &Roots) -> Built {
    let Some(kind) = roots.kind_of(path) else {
        return Built::failed(Issue::error(
            path,
            "UNKNOWN_KIND",
            "File is outside the commands, agents, and skills roots",
        ));
    };

    let doc = match RawDocument::parse(path, content) {
        Ok(doc) => doc,
        Err(FrontmatterError::Unterminated { line }) => {
            return Built::failed(
                Issue::error(
                    path,
                    "FRONTMATTER_UNTERMINATED",
                    "Frontmatter block opened with '---' is never closed",
                )
                .at_line(Some(line)),
            );
        }
    };

    let outline = doc.outline();
    let issues: Vec<Issue> = outline
        .duplicates
        .iter()
        .map(|d| {
            Issue::error(
                path,
                "DUPLICATE_SECTION",
                format!(
                    "Heading '{}' (level {}) repeats the one on line {}",
                    d.heading, d.level, d.first_line
                ),
            )
            .at_line(Some(d.line))
        })
        .collect();

    let details = match kind {
        AssetKind::Command => AssetDetails::Command,
        AssetKind::Agent => AssetDetails::Agent(agent_details(&doc, &outline.sections)),
        AssetKind::Skill => AssetDetails::Skill(skill_details(&outline.sections)),
    };

    let name = match kind {
        AssetKind::Command => doc
            .frontmatter
            .get("name")
            .map(str::to_string)
            .or_else(|| roots.commands.as_deref().map(|r| command_name(r, path))),
        _ => doc.frontmatter.get("name").map(str::to_string),
    };

    tracing::trace!(path = %path.display(), %kind, ?name, "built asset");

    Built {
        asset: Some(Asset {
            name,
            description: doc.frontmatter.get("description").map(str::to_string),
            body_is_empty: doc.body.trim().is_empty(),
            sections: outline.sections,
            source: doc.path,
            frontmatter: doc.frontmatter,
            details,
        }),
        issues,
    }
}

/// `commands/git/commit.md` → `git:commit`.
fn command_name(root: &Path, path: &Path) -> String {
    let relative = path.strip_prefix(root).unwrap_or(path).with_extension("");
    relative
        .components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join(":")
}

fn agent_details(doc: &RawDocument, sections: &[Section]) -> AgentDetails {
    let fm = &doc.frontmatter;

    let workflows: Vec<Workflow> = sections
        .iter()
        .filter(|s| is_workflow(s, sections))
        .map(|s| Workflow {
            heading: s.heading.clone(),
            line: s.line,
            skills: extract::skills_invoked(&s.content),
        })
        .collect();

    // A `skills_invoked` frontmatter list counts alongside the workflow lines.
    let skills_invoked: BTreeSet<String> = workflows
        .iter()
        .filter_map(|w| w.skills.as_ref())
        .flatten()
        .cloned()
        .chain(fm.get("skills_invoked").map(extract::name_list).unwrap_or_default())
        .collect();

    let (primary_skills, secondary_skills) = find_section(sections, SKILLS_INTEGRATION_SECTION)
        .map(|s| extract::skills_integration(&s.content))
        .unwrap_or_default();

    AgentDetails {
        category: FieldValue::from_raw(fm.get("category")),
        pattern_version: fm.get("pattern_version").map(str::to_string),
        model: FieldValue::from_raw(fm.get("model")),
        color: FieldValue::from_raw(fm.get("color")),
        workflows,
        skills_invoked,
        primary_skills,
        secondary_skills,
    }
}

/// A `Workflow:` heading anywhere, or any direct child of "Specialized Workflows".
fn is_workflow(section: &Section, sections: &[Section]) -> bool {
    if section.heading.starts_with("Workflow:") {
        return true;
    }
    section
        .parent
        .and_then(|p| sections.get(p))
        .is_some_and(|parent| parent.heading == WORKFLOWS_SECTION)
}

fn skill_details(sections: &[Section]) -> SkillDetails {
    SkillDetails {
        trigger_keywords: find_section(sections, TRIGGER_KEYWORDS_SECTION)
            .map(|s| extract::trigger_keywords(&s.content))
            .unwrap_or_default(),
        agent_integration: find_section(sections, AGENT_INTEGRATION_SECTION)
            .map(|s| extract::agent_names(&s.content))
            .unwrap_or_default(),
    }
}

pub fn rules() -> Vec<crate::checks::RuleInfo> {
    use crate::checks::RuleInfo;
    use crate::issue::Severity;

    vec![
        RuleInfo {
            id: "UNKNOWN_KIND",
            severity: Severity::Error,
            stage: "parse",
            message: "File is outside the commands, agents, and skills roots",
            remediation: "Move the file under one of the roots or fix the --*-dir options",
        },
        RuleInfo {
            id: "FRONTMATTER_UNTERMINATED",
            severity: Severity::Error,
            stage: "parse",
            message: "Frontmatter opened with '---' is never closed; the file is not checked further",
            remediation: "Add a closing '---' line after the last frontmatter field",
        },
        RuleInfo {
            id: "INVALID_ENCODING",
            severity: Severity::Error,
            stage: "parse",
            message: "File bytes are not valid UTF-8; the file is not checked further",
            remediation: "Re-save the file as UTF-8",
        },
        RuleInfo {
            id: "DUPLICATE_SECTION",
            severity: Severity::Error,
            stage: "parse",
            message: "A top-level heading repeats in the document, or a deeper one under the same parent; schema checks are skipped",
            remediation: "Merge or rename the repeated sections",
        },
    ]
}
