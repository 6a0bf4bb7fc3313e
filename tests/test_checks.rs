mod common;

use oxidized_plugin_lint::asset::builder::{build, Roots};
use oxidized_plugin_lint::asset::Asset;
use oxidized_plugin_lint::checks::{self, check_asset, fields::required_fields};
use oxidized_plugin_lint::config::Config;
use oxidized_plugin_lint::issue::{Issue, Severity};
use oxidized_plugin_lint::asset::AssetKind;
use std::path::Path;

fn asset(rel: &str, content: &str) -> Asset {
    let built = build(
        &Path::new("plugin").join(rel),
        content,
        &Roots::under(Path::new("plugin")),
    );
    assert!(built.issues.is_empty(), "unexpected parse issues: {:?}", built.issues);
    built.asset.unwrap()
}

fn check(rel: &str, content: &str) -> Vec<Issue> {
    check_asset(&asset(rel, content), &Config::default())
}

fn ids(issues: &[Issue]) -> Vec<&str> {
    issues.iter().map(|i| i.rule_id.as_str()).collect()
}

// ---------------------------------------------------------------------------
// Valid assets
// ---------------------------------------------------------------------------

#[test]
fn valid_agent_has_no_issues() {
    assert!(check("agents/a.md", &common::agent(&["type-safety"])).is_empty());
}

#[test]
fn valid_minimal_agent_without_references_has_no_errors() {
    let issues = check("agents/a.md", &common::agent(&[]));
    assert!(issues.iter().all(|i| i.severity != Severity::Error), "{issues:?}");
}

#[test]
fn valid_skill_and_command_have_no_issues() {
    assert!(check("skills/s/SKILL.md", &common::skill("s")).is_empty());
    assert!(check("commands/c.md", &common::command("Run it")).is_empty());
}

// ---------------------------------------------------------------------------
// Fields
// ---------------------------------------------------------------------------

#[test]
fn each_missing_agent_field_yields_exactly_one_error() {
    for field in required_fields(AssetKind::Agent) {
        let issues = check("agents/a.md", &common::agent_without(field, &[]));
        let errors: Vec<_> = issues
            .iter()
            .filter(|i| i.severity == Severity::Error)
            .collect();
        assert_eq!(errors.len(), 1, "field {field}: {issues:?}");
        assert_eq!(errors[0].rule_id, format!("MISSING_FIELD:{field}"));
    }
}

#[test]
fn empty_field_counts_as_missing() {
    let mut fields = common::agent_fields();
    fields.retain(|(k, _)| *k != "description");
    fields.push(("description", "\"\""));
    let issues = check("agents/a.md", &common::agent_md(&fields, &[]));
    assert_eq!(ids(&issues), ["MISSING_FIELD:description"]);
    assert!(issues[0].line.is_some());
}

#[test]
fn command_requires_description_only() {
    let issues = check("commands/c.md", "---\nname: c\n---\nDo the thing.\n");
    assert_eq!(ids(&issues), ["MISSING_FIELD:description"]);
    assert_eq!(issues[0].line, None);
}

#[test]
fn skill_requires_name_and_description() {
    let content = "---\n---\n## Trigger Keywords\n- a\n## Agent Integration\n- b\n";
    let issues = check("skills/s/SKILL.md", content);
    assert_eq!(ids(&issues), ["MISSING_FIELD:name", "MISSING_FIELD:description"]);
}

#[test]
fn invalid_enum_values() {
    let fields: Vec<_> = common::agent_fields()
        .into_iter()
        .map(|(k, v)| match k {
            "category" => (k, "misc"),
            "color" => (k, "magenta"),
            _ => (k, v),
        })
        .collect();
    let issues = check("agents/a.md", &common::agent_md(&fields, &[]));
    assert_eq!(ids(&issues), ["INVALID_ENUM:category", "INVALID_ENUM:color"]);
    assert!(issues[1].message.contains("magenta"));
    assert!(issues[1].message.contains("purple"));
    assert_eq!(issues[1].line, Some(7));
}

// ---------------------------------------------------------------------------
// Sections and body
// ---------------------------------------------------------------------------

#[test]
fn missing_and_empty_agent_sections() {
    let content = common::agent(&[])
        .replace("## Outputs\nA review report.\n", "")
        .replace("- Be specific.\n", "");
    let issues = check("agents/a.md", &content);
    assert_eq!(
        ids(&issues),
        ["MISSING_SECTION:Outputs", "EMPTY_SECTION:Best Practices"]
    );
}

#[test]
fn section_match_is_case_sensitive() {
    let content = common::agent(&[]).replace("## Triggers", "## triggers");
    let issues = check("agents/a.md", &content);
    assert_eq!(ids(&issues), ["MISSING_SECTION:Triggers"]);
}

#[test]
fn required_section_may_be_level_three() {
    let content = common::skill("s").replace("## Agent Integration", "### Agent Integration");
    assert!(check("skills/s/SKILL.md", &content).is_empty());
}

#[test]
fn skill_missing_sections() {
    let content = "---\nname: s\ndescription: d\n---\nJust prose.\n";
    let issues = check("skills/s/SKILL.md", content);
    assert_eq!(
        ids(&issues),
        ["MISSING_SECTION:Trigger Keywords", "MISSING_SECTION:Agent Integration"]
    );
}

#[test]
fn command_sections_are_configurable() {
    let command = asset("commands/c.md", &common::command("Run it"));
    let mut config = Config::default();
    assert!(check_asset(&command, &config).is_empty());

    config.commands.required_sections = vec!["Usage".to_string()];
    let issues = check_asset(&command, &config);
    assert_eq!(ids(&issues), ["MISSING_SECTION:Usage"]);
}

#[test]
fn empty_body_is_reported() {
    let issues = check("commands/c.md", "---\ndescription: d\n---\n\n");
    assert_eq!(ids(&issues), ["EMPTY_BODY"]);
}

// ---------------------------------------------------------------------------
// Workflows
// ---------------------------------------------------------------------------

#[test]
fn workflow_without_skills_line_is_a_warning() {
    let content = common::agent(&["type-safety"]).replace(
        "**Skills Invoked:** `type-safety`\n",
        "",
    );
    let issues = check("agents/a.md", &content);
    assert_eq!(ids(&issues), ["WORKFLOW_MISSING_SKILLS"]);
    assert_eq!(issues[0].severity, Severity::Warning);
    assert!(issues[0].message.contains("Workflow: Type Review"));
}

#[test]
fn workflow_check_only_applies_to_agents() {
    let content = "---\nname: s\ndescription: d\n---\n## Trigger Keywords\n- a\n## Agent Integration\n- b\n### Workflow: Not checked\ntext\n";
    assert!(check("skills/s/SKILL.md", content).is_empty());
}

// ---------------------------------------------------------------------------
// Rule catalogue
// ---------------------------------------------------------------------------

#[test]
fn every_rule_has_unique_id_and_text() {
    let rules = checks::all_rules();
    let mut seen = std::collections::HashSet::new();
    for rule in &rules {
        assert!(seen.insert(rule.id), "duplicate rule id {}", rule.id);
        assert!(!rule.message.is_empty());
        assert!(!rule.remediation.is_empty());
    }
    assert_eq!(rules.len(), 13);
}

#[test]
fn find_rule_accepts_subject_suffix() {
    let rule = checks::find_rule("UNRESOLVED_SKILL_REFERENCE:missing").unwrap();
    assert_eq!(rule.id, "UNRESOLVED_SKILL_REFERENCE");
    assert_eq!(rule.severity, Severity::Error);
    assert_eq!(checks::find_rule("ORPHANED_SKILL").unwrap().severity, Severity::Warning);
}
