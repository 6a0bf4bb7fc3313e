mod common;

use oxidized_plugin_lint::asset::builder::{build, Roots};
use oxidized_plugin_lint::asset::{AssetKind, Category, Color, FieldValue, Model};
use std::path::{Path, PathBuf};

fn roots() -> Roots {
    Roots::under(Path::new("plugin"))
}

// ---------------------------------------------------------------------------
// Kind inference
// ---------------------------------------------------------------------------

#[test]
fn kind_follows_root() {
    let r = roots();
    assert_eq!(r.kind_of(Path::new("plugin/commands/a.md")), Some(AssetKind::Command));
    assert_eq!(r.kind_of(Path::new("plugin/agents/a.md")), Some(AssetKind::Agent));
    assert_eq!(r.kind_of(Path::new("plugin/skills/x/SKILL.md")), Some(AssetKind::Skill));
    assert_eq!(r.kind_of(Path::new("plugin/docs/a.md")), None);
}

#[test]
fn deepest_root_wins_when_roots_nest() {
    let r = Roots {
        commands: None,
        agents: Some(PathBuf::from("plugin")),
        skills: Some(PathBuf::from("plugin/skills")),
    };
    assert_eq!(r.kind_of(Path::new("plugin/skills/x/SKILL.md")), Some(AssetKind::Skill));
    assert_eq!(r.kind_of(Path::new("plugin/a.md")), Some(AssetKind::Agent));
}

#[test]
fn file_outside_roots_is_unknown_kind() {
    let built = build(Path::new("elsewhere/a.md"), &common::skill("x"), &roots());
    assert!(built.asset.is_none());
    assert_eq!(built.issues.len(), 1);
    assert_eq!(built.issues[0].rule_id, "UNKNOWN_KIND");
}

// ---------------------------------------------------------------------------
// Parse-level issues
// ---------------------------------------------------------------------------

#[test]
fn unterminated_frontmatter_yields_single_issue_and_no_asset() {
    let built = build(
        Path::new("plugin/agents/a.md"),
        "---\nname: a\n## Role & Mindset\n",
        &roots(),
    );
    assert!(built.asset.is_none());
    assert_eq!(built.issues.len(), 1);
    assert_eq!(built.issues[0].rule_id, "FRONTMATTER_UNTERMINATED");
    assert_eq!(built.issues[0].line, Some(1));
}

#[test]
fn duplicate_section_keeps_asset_for_resolution() {
    let content = "---\nname: s\ndescription: d\n---\n## Trigger Keywords\n- a\n## Trigger Keywords\n- b\n";
    let built = build(Path::new("plugin/skills/s/SKILL.md"), content, &roots());
    assert_eq!(built.issues.len(), 1);
    assert_eq!(built.issues[0].rule_id, "DUPLICATE_SECTION");
    assert_eq!(built.issues[0].line, Some(7));
    let asset = built.asset.expect("asset still built");
    assert_eq!(asset.name.as_deref(), Some("s"));
}

// ---------------------------------------------------------------------------
// Agents
// ---------------------------------------------------------------------------

#[test]
fn agent_fields_are_typed() {
    let built = build(Path::new("plugin/agents/a.md"), &common::agent(&["type-safety"]), &roots());
    assert!(built.issues.is_empty());
    let asset = built.asset.unwrap();
    assert_eq!(asset.kind(), AssetKind::Agent);
    assert_eq!(asset.name.as_deref(), Some("test-agent"));

    let agent = asset.agent().unwrap();
    assert_eq!(agent.category, FieldValue::Valid(Category::Quality));
    assert_eq!(agent.model, FieldValue::Valid(Model::Sonnet));
    assert_eq!(agent.color, FieldValue::Valid(Color::Blue));
    assert_eq!(agent.pattern_version.as_deref(), Some("1.0"));
}

#[test]
fn enum_values_are_case_sensitive() {
    let mut fields = common::agent_fields();
    fields.retain(|(k, _)| *k != "model");
    fields.push(("model", "Sonnet"));
    let built = build(Path::new("plugin/agents/a.md"), &common::agent_md(&fields, &[]), &roots());
    let asset = built.asset.unwrap();
    assert_eq!(
        asset.agent().unwrap().model,
        FieldValue::Invalid("Sonnet".to_string())
    );
}

#[test]
fn workflows_and_skills_invoked() {
    let built = build(
        Path::new("plugin/agents/a.md"),
        &common::agent(&["type-safety", "testing"]),
        &roots(),
    );
    let asset = built.asset.unwrap();
    let agent = asset.agent().unwrap();
    assert_eq!(agent.workflows.len(), 1);
    assert_eq!(agent.workflows[0].heading, "Workflow: Type Review");
    let invoked: Vec<_> = agent.skills_invoked.iter().map(String::as_str).collect();
    assert_eq!(invoked, ["testing", "type-safety"]);
}

#[test]
fn direct_children_of_specialized_workflows_are_workflows() {
    let content = "---\nname: a\n---\n## Specialized Workflows\n### Code Review\n**Skills Invoked:** `x`\n#### Notes\ntext\n";
    let asset = build(Path::new("plugin/agents/a.md"), content, &roots()).asset.unwrap();
    let agent = asset.agent().unwrap();
    let headings: Vec<_> = agent.workflows.iter().map(|w| w.heading.as_str()).collect();
    assert_eq!(headings, ["Code Review"]);
    assert!(agent.skills_invoked.contains("x"));
}

#[test]
fn skills_integration_lists_are_read() {
    let content = "---\nname: a\n---\n## Skills Integration\n**Primary Skills**:\n- `p`\n**Secondary Skills**:\n- `s`\n";
    let asset = build(Path::new("plugin/agents/a.md"), content, &roots()).asset.unwrap();
    let agent = asset.agent().unwrap();
    assert!(agent.primary_skills.contains("p"));
    assert!(agent.secondary_skills.contains("s"));
    let all: Vec<_> = agent.referenced_skills().into_iter().collect();
    assert_eq!(all, ["p", "s"]);
}

#[test]
fn frontmatter_skills_invoked_list_is_read() {
    let content = "---\nname: a\nskills_invoked: [type-safety, testing]\n---\n## Role & Mindset\ntext\n";
    let asset = build(Path::new("plugin/agents/a.md"), content, &roots()).asset.unwrap();
    let agent = asset.agent().unwrap();
    assert!(agent.skills_invoked.contains("type-safety"));
    assert!(agent.skills_invoked.contains("testing"));
}

// ---------------------------------------------------------------------------
// Commands and skills
// ---------------------------------------------------------------------------

#[test]
fn command_name_defaults_to_namespaced_path() {
    let built = build(
        Path::new("plugin/commands/git/commit.md"),
        &common::command("Write a commit"),
        &roots(),
    );
    let asset = built.asset.unwrap();
    assert_eq!(asset.kind(), AssetKind::Command);
    assert_eq!(asset.name.as_deref(), Some("git:commit"));
    assert_eq!(asset.description.as_deref(), Some("Write a commit"));
}

#[test]
fn command_name_field_wins() {
    let content = "---\nname: ship\ndescription: d\n---\nbody\n";
    let asset = build(Path::new("plugin/commands/release.md"), content, &roots())
        .asset
        .unwrap();
    assert_eq!(asset.name.as_deref(), Some("ship"));
}

#[test]
fn skill_sections_are_read() {
    let asset = build(
        Path::new("plugin/skills/type-safety/SKILL.md"),
        &common::skill("type-safety"),
        &roots(),
    )
    .asset
    .unwrap();
    let skill = asset.skill().unwrap();
    assert!(skill.trigger_keywords.contains("type-safety"));
    assert!(skill.agent_integration.contains("test-agent"));
}

#[test]
fn whitespace_body_is_empty() {
    let asset = build(
        Path::new("plugin/commands/a.md"),
        "---\ndescription: d\n---\n\n  \n",
        &roots(),
    )
    .asset
    .unwrap();
    assert!(asset.body_is_empty);
}
