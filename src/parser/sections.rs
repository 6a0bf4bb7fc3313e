//! Markdown section extraction.
//!
//! Every ATX heading (`#` to `######` followed by a space) opens a
//! [`Section`]. A section's content runs until the next heading of the same
//! or a shallower level, so a `##` section includes the text of its `###`
//! children. Text before the first heading is preamble and belongs to no
//! section. Lines inside fenced code blocks are never headings, which keeps
//! `# comment` lines in embedded shell or Python snippets out of the outline.
//!
//! Level 1 and 2 headings must be unique across the whole document, since
//! lookups by heading text would otherwise see only the first. Deeper
//! headings only have to be unique among their siblings.

use std::collections::HashSet;

/// Deepest level whose headings are unique document-wide.
const DOCUMENT_SCOPE_LEVEL: usize = 2;

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct Section {
    pub heading: String,
    pub level: usize,
    pub content: String,
    /// 1-indexed file line of the heading.
    pub line: usize,
    /// Index of the enclosing section in the same list, if any.
    pub parent: Option<usize>,
}

impl Section {
    pub fn is_empty(&self) -> bool {
        self.content.trim().is_empty()
    }
}

/// A heading repeated in the same scope: the whole document for levels 1
/// and 2, the parent section below that.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DuplicateHeading {
    pub heading: String,
    pub level: usize,
    pub line: usize,
    pub first_line: usize,
}

#[derive(Debug, Default)]
pub struct Outline {
    pub sections: Vec<Section>,
    pub duplicates: Vec<DuplicateHeading>,
}

/// Splits `body` into sections. `body_line` is the file line `body` starts on.
///
/// # Examples
///
/// ```
/// use oxidized_plugin_lint::parser::sections::extract;
///
/// let outline = extract("intro\n## Triggers\n- review\n### Detail\ntext\n## Outputs\n", 1);
/// let headings: Vec<_> = outline.sections.iter().map(|s| s.heading.as_str()).collect();
/// assert_eq!(headings, ["Triggers", "Detail", "Outputs"]);
/// assert!(outline.sections[0].content.contains("### Detail"));
/// assert_eq!(outline.sections[1].parent, Some(0));
/// ```
pub fn extract(body: &str, body_line: usize) -> Outline {
    let lines: Vec<&str> = body.lines().collect();

    // (line index, level, heading text)
    let mut headings: Vec<(usize, usize, &str)> = Vec::new();
    let mut fence: Option<char> = None;
    for (idx, line) in lines.iter().enumerate() {
        let trimmed = line.trim_start();
        if let Some(marker) = fence_marker(trimmed) {
            match fence {
                None => fence = Some(marker),
                Some(open) if open == marker => fence = None,
                Some(_) => {}
            }
            continue;
        }
        if fence.is_some() {
            continue;
        }
        if let Some((level, text)) = parse_heading(line) {
            headings.push((idx, level, text));
        }
    }

    let mut outline = Outline::default();
    let mut stack: Vec<(usize, usize)> = Vec::new();
    let mut seen: HashSet<(Option<usize>, usize, &str)> = HashSet::new();

    for (k, &(idx, level, text)) in headings.iter().enumerate() {
        let end = headings[k + 1..]
            .iter()
            .find(|(_, l, _)| *l <= level)
            .map_or(lines.len(), |(i, _, _)| *i);
        let content = lines[idx + 1..end].join("\n");

        while stack.last().is_some_and(|&(_, l)| l >= level) {
            stack.pop();
        }
        let parent = stack.last().map(|&(i, _)| i);
        stack.push((k, level));

        let scope = if level <= DOCUMENT_SCOPE_LEVEL { None } else { parent };
        if !seen.insert((scope, level, text)) {
            let first_line = outline
                .sections
                .iter()
                .find(|s| {
                    s.level == level
                        && s.heading == text
                        && (level <= DOCUMENT_SCOPE_LEVEL || s.parent == parent)
                })
                .map_or(body_line + idx, |s| s.line);
            outline.duplicates.push(DuplicateHeading {
                heading: text.to_string(),
                level,
                line: body_line + idx,
                first_line,
            });
        }

        outline.sections.push(Section {
            heading: text.to_string(),
            level,
            content,
            line: body_line + idx,
            parent,
        });
    }

    outline
}

fn fence_marker(trimmed: &str) -> Option<char> {
    if trimmed.starts_with("```") {
        Some('`')
    } else if trimmed.starts_with("~~~") {
        Some('~')
    } else {
        None
    }
}

/// Returns `(level, text)` for an ATX heading line.
fn parse_heading(line: &str) -> Option<(usize, &str)> {
    let level = line.chars().take_while(|&c| c == '#').count();
    if level == 0 || level > 6 {
        return None;
    }
    let rest = &line[level..];
    if !rest.starts_with([' ', '\t']) {
        return None;
    }
    let mut text = rest.trim();
    // Optional closing sequence: `## Outputs ##`
    let unclosed = text.trim_end_matches('#');
    if unclosed.len() < text.len() && unclosed.ends_with([' ', '\t']) {
        text = unclosed.trim_end();
    }
    if text.is_empty() {
        return None;
    }
    Some((level, text))
}
