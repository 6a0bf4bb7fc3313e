//! Tolerant `key: value` frontmatter parser.
//!
//! Asset files start with an optional block delimited by `---` lines. The
//! block is read as a flat mapping of top-level `key: value` pairs; anything
//! else inside it (list items, comments, nested keys) is skipped rather than
//! rejected, because these files are written by hand.
//!
//! Supported value forms:
//!
//! | Form | Example | Parsed value |
//! |------|---------|--------------|
//! | Plain | `model: sonnet` | `sonnet` |
//! | Quoted | `name: "test-agent"` | `test-agent` |
//! | Literal block | `description: \|` + indented lines | lines joined with `\n` |
//! | Folded block | `description: >` + indented lines | lines joined with a space |
//!
//! The only hard failure is an opening `---` with no closing `---`.

use std::collections::BTreeMap;
use std::fmt;
use std::sync::LazyLock;

/// Frontmatter keys are plain identifiers; anything else is not a key line.
static RE_KEY: LazyLock<regex::Regex> =
    LazyLock::new(|| regex::Regex::new(r"^[A-Za-z0-9_][A-Za-z0-9_.-]*$").unwrap());

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FrontmatterError {
    #[error("frontmatter opened on line {line} is never closed with '---'")]
    Unterminated { line: usize },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrontmatterEntry {
    pub value: String,
    /// 1-indexed line of the key.
    pub line: usize,
}

/// Parsed frontmatter mapping. Later duplicates of a key overwrite earlier ones.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Frontmatter {
    entries: BTreeMap<String, FrontmatterEntry>,
}

impl Frontmatter {
    pub fn insert(&mut self, key: &str, value: &str, line: usize) {
        self.entries.insert(
            key.to_string(),
            FrontmatterEntry {
                value: value.to_string(),
                line,
            },
        );
    }

    /// Returns the trimmed value for `key`, treating empty values as absent.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .get(key)
            .map(|e| e.value.trim())
            .filter(|v| !v.is_empty())
    }

    /// Returns the raw value for `key`, even when empty.
    pub fn raw(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(|e| e.value.as_str())
    }

    pub fn line(&self, key: &str) -> Option<usize> {
        self.entries.get(key).map(|e| e.line)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, e)| (k.as_str(), e.value.as_str()))
    }
}

/// Renders the mapping back to `key: value` lines that parse to the same values.
impl fmt::Display for Frontmatter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (key, value) in self.iter() {
            if value.contains('\n') {
                writeln!(f, "{key}: |")?;
                for line in value.lines() {
                    writeln!(f, "  {line}")?;
                }
            } else if value.is_empty() {
                writeln!(f, "{key}:")?;
            } else if needs_quotes(value) {
                writeln!(f, "{key}: \"{value}\"")?;
            } else {
                writeln!(f, "{key}: {value}")?;
            }
        }
        Ok(())
    }
}

fn needs_quotes(value: &str) -> bool {
    value.trim() != value
        || value.starts_with(['"', '\''])
        || value.ends_with(['"', '\''])
        || is_block_indicator(value)
}

/// Result of splitting a file into frontmatter and body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Split {
    pub frontmatter: Frontmatter,
    pub body: String,
    /// 1-indexed file line on which `body` starts.
    pub body_line: usize,
}

/// Splits `content` into its frontmatter block and body.
///
/// A file that does not start with a `---` line has no frontmatter; the whole
/// text is body.
///
/// # Errors
///
/// [`FrontmatterError::Unterminated`] when the opening `---` is never closed.
///
/// # Examples
///
/// ```
/// use oxidized_plugin_lint::parser::frontmatter::split;
///
/// let split = split("---\nname: \"test-agent\"\n---\n## Role & Mindset\n").unwrap();
/// assert_eq!(split.frontmatter.get("name"), Some("test-agent"));
/// assert_eq!(split.body, "## Role & Mindset\n");
/// assert_eq!(split.body_line, 4);
/// ```
pub fn split(content: &str) -> Result<Split, FrontmatterError> {
    let content = content.strip_prefix('\u{feff}').unwrap_or(content);

    let mut offset = 0usize;
    let mut lines = content.split_inclusive('\n');

    match lines.next() {
        Some(first) if is_delimiter(first) => offset += first.len(),
        _ => {
            return Ok(Split {
                frontmatter: Frontmatter::default(),
                body: content.to_string(),
                body_line: 1,
            })
        }
    }

    let mut block: Vec<&str> = Vec::new();
    for line in lines {
        offset += line.len();
        if is_delimiter(line) {
            let frontmatter = parse_block(&block, 2);
            return Ok(Split {
                frontmatter,
                body: content[offset..].to_string(),
                body_line: block.len() + 3,
            });
        }
        block.push(line.trim_end_matches(['\n', '\r']));
    }

    Err(FrontmatterError::Unterminated { line: 1 })
}

fn is_delimiter(line: &str) -> bool {
    line.trim_end() == "---"
}

fn is_block_indicator(value: &str) -> bool {
    matches!(value, "|" | "|-" | "|+" | ">" | ">-" | ">+")
}

/// Parses the lines between the delimiters. `first_line` is the file line of
/// `block[0]`.
fn parse_block(block: &[&str], first_line: usize) -> Frontmatter {
    let mut fm = Frontmatter::default();
    let mut i = 0;

    while i < block.len() {
        let line_num = first_line + i;
        let Some((key, value)) = parse_kv(block[i]) else {
            i += 1;
            continue;
        };
        i += 1;

        let value = value.trim();
        if is_block_indicator(value) {
            let mut parts = Vec::new();
            while i < block.len()
                && (block[i].starts_with([' ', '\t']) || block[i].trim().is_empty())
            {
                parts.push(block[i].trim());
                i += 1;
            }
            while parts.last().is_some_and(|p| p.is_empty()) {
                parts.pop();
            }
            let sep = if value.starts_with('|') { "\n" } else { " " };
            fm.insert(key, &parts.join(sep), line_num);
        } else {
            fm.insert(key, strip_quotes(value), line_num);
        }
    }

    fm
}

/// Split a top-level `key: value` line into `(key, value)`.
fn parse_kv(line: &str) -> Option<(&str, &str)> {
    if line.starts_with(|c: char| c.is_whitespace()) {
        return None;
    }
    let (key, value) = line.split_once(':')?;
    let key = key.trim();
    if !RE_KEY.is_match(key) {
        return None;
    }
    if !value.is_empty() && !value.starts_with([' ', '\t']) {
        // `http://...` style text, not a key.
        return None;
    }
    Some((key, value))
}

fn strip_quotes(value: &str) -> &str {
    for quote in ['"', '\''] {
        if value.len() >= 2 && value.starts_with(quote) && value.ends_with(quote) {
            return &value[1..value.len() - 1];
        }
    }
    value
}
