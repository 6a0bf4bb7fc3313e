//! Name extraction from prose.
//!
//! Agents and skills refer to each other inside markdown text rather than in
//! structured fields. Every heuristic that turns that text into name sets
//! lives here; the rest of the crate only sees the resulting sets.
//!
//! Recognised conventions:
//!
//! ```markdown
//! **Skills Invoked:** `type-safety`, `async-patterns`
//!
//! **Primary Skills** (always relevant):
//! - `type-safety` - type hints and mypy
//!
//! **Secondary Skills**: `testing`, `docs`
//! ```

use std::collections::BTreeSet;
use std::sync::LazyLock;

/// `Skills Invoked:` marker, with or without bold around the label or colon.
static RE_SKILLS_INVOKED: LazyLock<regex::Regex> = LazyLock::new(|| {
    regex::Regex::new(r"(?i)\bskills\s+invoked\s*\**\s*:\s*\**(.*)$").unwrap()
});

static RE_BACKTICKED: LazyLock<regex::Regex> =
    LazyLock::new(|| regex::Regex::new(r"`([^`]+)`").unwrap());

static RE_QUOTED: LazyLock<regex::Regex> =
    LazyLock::new(|| regex::Regex::new(r#""([^"]+)""#).unwrap());

static RE_BOLD: LazyLock<regex::Regex> =
    LazyLock::new(|| regex::Regex::new(r"^\*\*([^*]+)\*\*").unwrap());

static RE_LIST_MARKER: LazyLock<regex::Regex> =
    LazyLock::new(|| regex::Regex::new(r"^\s*(?:[-*+]|\d+[.)])\s+").unwrap());

static RE_IDENTIFIER: LazyLock<regex::Regex> =
    LazyLock::new(|| regex::Regex::new(r"^[a-z0-9][a-z0-9_-]*$").unwrap());

/// Words that mean "nothing" on a `Skills Invoked:` line.
const NONE_MARKERS: &[&str] = &["none", "n/a", "-", "—"];

/// Collects the names on every `Skills Invoked:` line in `content`.
///
/// Returns `None` when `content` has no such line at all, and an empty set
/// when the line exists but names nothing (`Skills Invoked: none`).
///
/// ```
/// use oxidized_plugin_lint::asset::extract::skills_invoked;
///
/// let names = skills_invoked("Steps...\n**Skills Invoked:** `type-safety`, `async-patterns`\n").unwrap();
/// assert_eq!(names.into_iter().collect::<Vec<_>>(), ["async-patterns", "type-safety"]);
/// assert!(skills_invoked("no marker here").is_none());
/// ```
pub fn skills_invoked(content: &str) -> Option<BTreeSet<String>> {
    let mut found = false;
    let mut names = BTreeSet::new();
    for line in content.lines() {
        if let Some(caps) = RE_SKILLS_INVOKED.captures(line) {
            found = true;
            names.extend(name_list(caps.get(1).map_or("", |m| m.as_str())));
        }
    }
    found.then_some(names)
}

/// Parses a comma-separated list of names.
///
/// Backticked names win when present; otherwise the text is split on commas
/// and stripped of markdown emphasis and quotes. A flow list (`[a, b]`) is
/// accepted too.
///
/// ```
/// use oxidized_plugin_lint::asset::extract::name_list;
///
/// assert_eq!(name_list("[type-safety, \"testing\"]"), ["type-safety", "testing"]);
/// assert!(name_list("none").is_empty());
/// ```
pub fn name_list(text: &str) -> Vec<String> {
    let backticked: Vec<String> = RE_BACKTICKED
        .captures_iter(text)
        .map(|c| c[1].trim().to_string())
        .filter(|n| !n.is_empty())
        .collect();
    if !backticked.is_empty() {
        return backticked;
    }

    let text = text.trim();
    let text = text
        .strip_prefix('[')
        .and_then(|t| t.strip_suffix(']'))
        .unwrap_or(text);

    text.split(',')
        .map(|part| {
            part.trim().trim_matches(|c: char| {
                matches!(c, '*' | '_' | '.' | '"' | '\'') || c.is_whitespace()
            })
        })
        .filter(|n| !n.is_empty() && !NONE_MARKERS.contains(&n.to_lowercase().as_str()))
        .map(str::to_string)
        .collect()
}

/// Reads the `Primary` and `Secondary` skill lists from a
/// "Skills Integration" section.
///
/// A label line (`**Primary Skills**`, `### Secondary Skills`, ...) switches
/// the current list. Names after the label's colon and the first backticked
/// name of each following list item go into that list.
pub fn skills_integration(content: &str) -> (BTreeSet<String>, BTreeSet<String>) {
    #[derive(Clone, Copy)]
    enum Target {
        None,
        Primary,
        Secondary,
    }

    let mut primary = BTreeSet::new();
    let mut secondary = BTreeSet::new();
    let mut target = Target::None;

    for line in content.lines() {
        let is_item = RE_LIST_MARKER.is_match(line);

        if !is_item {
            let lower = line.to_lowercase();
            let label = lower.trim_start_matches(['#', '*', ' ']);
            if label.starts_with("primary") {
                target = Target::Primary;
            } else if label.starts_with("secondary") {
                target = Target::Secondary;
            } else {
                if line.trim_start().starts_with('#') {
                    target = Target::None;
                }
                continue;
            }

            let inline = line.split_once(':').map_or("", |(_, rest)| rest);
            let names = RE_BACKTICKED
                .captures_iter(inline)
                .map(|c| c[1].trim().to_string())
                .filter(|n| !n.is_empty());
            match target {
                Target::Primary => primary.extend(names),
                Target::Secondary => secondary.extend(names),
                Target::None => {}
            }
            continue;
        }

        let Some(name) = RE_BACKTICKED
            .captures(line)
            .map(|c| c[1].trim().to_string())
            .filter(|n| !n.is_empty())
        else {
            continue;
        };
        match target {
            Target::Primary => {
                primary.insert(name);
            }
            Target::Secondary => {
                secondary.insert(name);
            }
            Target::None => {}
        }
    }

    (primary, secondary)
}

/// Reads trigger keywords from a "Trigger Keywords" section.
///
/// List items contribute their backticked or quoted terms, or, lacking
/// those, their comma-separated text. Other lines contribute only
/// backticked or quoted terms.
pub fn trigger_keywords(content: &str) -> BTreeSet<String> {
    let mut keywords = BTreeSet::new();
    for line in content.lines() {
        let marked: Vec<String> = RE_BACKTICKED
            .captures_iter(line)
            .chain(RE_QUOTED.captures_iter(line))
            .map(|c| c[1].trim().to_string())
            .filter(|k| !k.is_empty())
            .collect();
        if !marked.is_empty() {
            keywords.extend(marked);
            continue;
        }
        if let Some(m) = RE_LIST_MARKER.find(line) {
            keywords.extend(name_list(&line[m.end()..]));
        }
    }
    keywords
}

/// Reads agent names from an "Agent Integration" section.
///
/// Only identifier-shaped names count: backticked names anywhere, and a
/// leading bold name or bare name on a list item.
pub fn agent_names(content: &str) -> BTreeSet<String> {
    let mut names = BTreeSet::new();
    for line in content.lines() {
        names.extend(
            RE_BACKTICKED
                .captures_iter(line)
                .map(|c| c[1].trim().to_string())
                .filter(|n| RE_IDENTIFIER.is_match(n)),
        );

        let Some(m) = RE_LIST_MARKER.find(line) else {
            continue;
        };
        let item = line[m.end()..].trim();
        let candidate = match RE_BOLD.captures(item) {
            Some(c) => c[1].trim().trim_end_matches(':').to_string(),
            None => item
                .split(|c: char| c.is_whitespace() || c == ':')
                .next()
                .unwrap_or("")
                .to_string(),
        };
        if RE_IDENTIFIER.is_match(&candidate) {
            names.insert(candidate);
        }
    }
    names
}
