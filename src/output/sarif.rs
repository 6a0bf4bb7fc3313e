use crate::checks;
use crate::issue::{Issue, Severity};
use crate::report::Report;
use serde_sarif::sarif::{
    ArtifactLocation, Location, Message, MultiformatMessageString, PhysicalLocation, Region,
    ReportingDescriptor, Result as SarifResult, ResultLevel, Run, Sarif, Tool, ToolComponent,
};
use std::collections::{BTreeSet, HashMap};

/// Formats a [`Report`] as SARIF 2.1.0.
///
/// Rule descriptors are keyed by base rule id (`MISSING_FIELD`); the full id
/// (`MISSING_FIELD:color`) is kept in each result's message. Suppressed
/// issues are left out.
pub fn format(report: &Report) -> String {
    let rule_ids: Vec<&str> = report
        .issues
        .iter()
        .map(Issue::base_rule)
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect();

    let rule_index: HashMap<&str, i64> = rule_ids
        .iter()
        .enumerate()
        .map(|(i, id)| (*id, i as i64))
        .collect();

    let rules: Vec<ReportingDescriptor> = rule_ids
        .iter()
        .map(|id| {
            let mut rule = ReportingDescriptor::builder().id(id.to_string()).build();
            if let Some(info) = checks::find_rule(id) {
                rule.short_description = Some(
                    MultiformatMessageString::builder()
                        .text(info.message.to_string())
                        .build(),
                );
                rule.help = Some(
                    MultiformatMessageString::builder()
                        .text(info.remediation.to_string())
                        .build(),
                );
            }
            rule
        })
        .collect();

    let results: Vec<SarifResult> = report
        .issues
        .iter()
        .map(|issue| {
            let level = match issue.severity {
                Severity::Error => ResultLevel::Error,
                Severity::Warning => ResultLevel::Warning,
            };

            let text = format!("{}: {}", issue.rule_id, issue.message);
            let mut result = SarifResult::builder()
                .message(Message::builder().text(text).build())
                .build();

            result.rule_id = Some(issue.base_rule().to_string());
            result.level = Some(level);
            result.rule_index = rule_index.get(issue.base_rule()).copied();

            let uri = issue.asset_path.to_string_lossy().replace('\\', "/");
            let mut physical = PhysicalLocation::builder().build();
            physical.artifact_location = Some(ArtifactLocation::builder().uri(uri).build());
            if let Some(line) = issue.line {
                physical.region = Some(Region::builder().start_line(line as i64).build());
            }
            let mut location = Location::builder().build();
            location.physical_location = Some(physical);
            result.locations = Some(vec![location]);

            result
        })
        .collect();

    let driver = ToolComponent::builder()
        .name("oxidized-plugin-lint")
        .version(env!("CARGO_PKG_VERSION").to_string())
        .rules(rules)
        .build();

    let tool = Tool::builder().driver(driver).build();

    let run = Run::builder().tool(tool).results(results).build();

    let sarif = Sarif::builder().version("2.1.0").runs(vec![run]).build();

    serde_json::to_string_pretty(&sarif).expect("SARIF serialization failed")
}
