#![allow(dead_code)]

use oxidized_plugin_lint::config::Config;
use oxidized_plugin_lint::issue::{Issue, Severity};
use oxidized_plugin_lint::lint::{self, RootOverrides};
use oxidized_plugin_lint::report::{FailOn, Report};
use std::path::Path;

/// Frontmatter of a complete, valid agent.
pub fn agent_fields() -> Vec<(&'static str, &'static str)> {
    vec![
        ("name", "test-agent"),
        ("description", "Reviews Python code for type safety"),
        ("category", "quality"),
        ("pattern_version", "\"1.0\""),
        ("model", "sonnet"),
        ("color", "blue"),
    ]
}

/// Agent with every required section. `skills` go on the single workflow's
/// `Skills Invoked:` line; an empty slice writes `Skills Invoked: none`.
pub fn agent_md(fields: &[(&str, &str)], skills: &[&str]) -> String {
    let frontmatter: String = fields
        .iter()
        .map(|(k, v)| format!("{k}: {v}\n"))
        .collect();
    let invoked = if skills.is_empty() {
        "none".to_string()
    } else {
        skills
            .iter()
            .map(|s| format!("`{s}`"))
            .collect::<Vec<_>>()
            .join(", ")
    };
    format!(
        "---\n{frontmatter}---\n\n# Test Agent\n\n\
         ## Role & Mindset\nYou review code carefully.\n\n\
         ## Triggers\n- \"review types\"\n\n\
         ## Focus Areas\n- Type hints\n\n\
         ## Specialized Workflows\n\n\
         ### Workflow: Type Review\n1. Read the code.\n**Skills Invoked:** {invoked}\n\n\
         ## Skills Integration\nSee the workflows above.\n\n\
         ## Outputs\nA review report.\n\n\
         ## Best Practices\n- Be specific.\n\n\
         ## Boundaries\n- Does not edit code.\n"
    )
}

/// The default valid agent referencing `skills`.
pub fn agent(skills: &[&str]) -> String {
    agent_md(&agent_fields(), skills)
}

pub fn agent_without(field: &str, skills: &[&str]) -> String {
    let fields: Vec<_> = agent_fields()
        .into_iter()
        .filter(|(k, _)| *k != field)
        .collect();
    agent_md(&fields, skills)
}

pub fn skill(name: &str) -> String {
    format!(
        "---\nname: {name}\ndescription: Guidance for {name}\n---\n\n# {name}\n\n\
         ## Trigger Keywords\n- `{name}`\n\n\
         ## Agent Integration\n- **test-agent**: uses it during reviews\n"
    )
}

pub fn command(description: &str) -> String {
    format!("---\ndescription: {description}\n---\n\nRun the review workflow.\n")
}

/// Writes `content` to `root/rel`, creating parent directories.
pub fn write(root: &Path, rel: &str, content: &str) {
    let path = root.join(rel);
    std::fs::create_dir_all(path.parent().unwrap()).unwrap();
    std::fs::write(path, content).unwrap();
}

/// Lints `root` with its conventional layout and the default config.
pub fn lint_dir(root: &Path) -> Report {
    lint_with(root, &Config::default(), FailOn::Error)
}

pub fn lint_with(root: &Path, config: &Config, fail_on: FailOn) -> Report {
    let roots = lint::resolve_roots(root, &RootOverrides::default()).unwrap();
    lint::run_lint(root, &roots, config, fail_on).unwrap()
}

pub fn rule_ids(report: &Report) -> Vec<&str> {
    report.issues.iter().map(|i| i.rule_id.as_str()).collect()
}

pub fn errors(report: &Report) -> Vec<&Issue> {
    report
        .issues
        .iter()
        .filter(|i| i.severity == Severity::Error)
        .collect()
}

pub fn warnings(report: &Report) -> Vec<&Issue> {
    report
        .issues
        .iter()
        .filter(|i| i.severity == Severity::Warning)
        .collect()
}
