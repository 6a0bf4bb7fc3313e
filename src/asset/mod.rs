//! Typed asset records.
//!
//! An [`Asset`] is one command, agent, or skill file after parsing. Fields
//! read from frontmatter are mapped explicitly into typed values here, so the
//! checks in [`crate::checks`] never look at raw strings for enum fields.

pub mod builder;
pub mod extract;

use crate::parser::frontmatter::Frontmatter;
use crate::parser::sections::Section;
use std::collections::BTreeSet;
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum AssetKind {
    Command,
    Agent,
    Skill,
}

impl AssetKind {
    pub const ALL: [AssetKind; 3] = [AssetKind::Command, AssetKind::Agent, AssetKind::Skill];

    pub fn as_str(&self) -> &'static str {
        match self {
            AssetKind::Command => "command",
            AssetKind::Agent => "agent",
            AssetKind::Skill => "skill",
        }
    }

    /// Conventional directory name under a plugin root.
    pub fn dir_name(&self) -> &'static str {
        match self {
            AssetKind::Command => "commands",
            AssetKind::Agent => "agents",
            AssetKind::Skill => "skills",
        }
    }
}

impl fmt::Display for AssetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Defines a closed, case-sensitive string enum with `FromStr`, `as_str` and `ALL`.
macro_rules! closed_enum {
    ($(#[$meta:meta])* $name:ident { $($variant:ident => $text:literal),+ $(,)? }) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum $name {
            $($variant),+
        }

        impl $name {
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            pub fn as_str(&self) -> &'static str {
                match self {
                    $($name::$variant => $text),+
                }
            }
        }

        impl FromStr for $name {
            type Err = ();

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($text => Ok($name::$variant),)+
                    _ => Err(()),
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

closed_enum!(
    /// Agent `category` frontmatter field.
    Category {
        Engineering => "engineering",
        Quality => "quality",
        Security => "security",
        Architecture => "architecture",
        Analysis => "analysis",
        Testing => "testing",
        Documentation => "documentation",
        Performance => "performance",
        Operations => "operations",
        Communication => "communication",
    }
);

closed_enum!(
    /// Agent `model` frontmatter field.
    Model {
        Sonnet => "sonnet",
        Opus => "opus",
        Haiku => "haiku",
        Inherit => "inherit",
    }
);

closed_enum!(
    /// Agent `color` frontmatter field.
    Color {
        Red => "red",
        Blue => "blue",
        Green => "green",
        Yellow => "yellow",
        Purple => "purple",
        Orange => "orange",
        Pink => "pink",
        Cyan => "cyan",
    }
);

/// A frontmatter field mapped onto a closed enum.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue<T> {
    Missing,
    Invalid(String),
    Valid(T),
}

impl<T: FromStr> FieldValue<T> {
    pub fn from_raw(raw: Option<&str>) -> Self {
        match raw {
            None => FieldValue::Missing,
            Some(v) => v
                .parse()
                .map_or_else(|_| FieldValue::Invalid(v.to_string()), FieldValue::Valid),
        }
    }
}

/// One `Workflow:` subsection of an agent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Workflow {
    pub heading: String,
    pub line: usize,
    /// `None` when the subsection has no `Skills Invoked:` line.
    pub skills: Option<BTreeSet<String>>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AgentDetails {
    pub category: FieldValue<Category>,
    pub pattern_version: Option<String>,
    pub model: FieldValue<Model>,
    pub color: FieldValue<Color>,
    pub workflows: Vec<Workflow>,
    /// Union of every workflow's `Skills Invoked:` names and the
    /// `skills_invoked` frontmatter list.
    pub skills_invoked: BTreeSet<String>,
    pub primary_skills: BTreeSet<String>,
    pub secondary_skills: BTreeSet<String>,
}

impl AgentDetails {
    /// Every skill name this agent refers to, each once, sorted.
    pub fn referenced_skills(&self) -> BTreeSet<&str> {
        self.skills_invoked
            .iter()
            .chain(&self.primary_skills)
            .chain(&self.secondary_skills)
            .map(String::as_str)
            .collect()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkillDetails {
    pub trigger_keywords: BTreeSet<String>,
    /// Agents named in the skill's integration notes. Informational only.
    pub agent_integration: BTreeSet<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AssetDetails {
    Command,
    Agent(AgentDetails),
    Skill(SkillDetails),
}

#[derive(Debug, Clone)]
pub struct Asset {
    /// Cross-reference key. For commands without a `name` field this is the
    /// namespaced path (`git:commit`).
    pub name: Option<String>,
    pub description: Option<String>,
    pub sections: Vec<Section>,
    /// Path of the file the asset was built from. Diagnostics only.
    pub source: PathBuf,
    pub frontmatter: Frontmatter,
    pub body_is_empty: bool,
    pub details: AssetDetails,
}

impl Asset {
    pub fn kind(&self) -> AssetKind {
        match self.details {
            AssetDetails::Command => AssetKind::Command,
            AssetDetails::Agent(_) => AssetKind::Agent,
            AssetDetails::Skill(_) => AssetKind::Skill,
        }
    }

    pub fn agent(&self) -> Option<&AgentDetails> {
        match &self.details {
            AssetDetails::Agent(a) => Some(a),
            _ => None,
        }
    }

    pub fn skill(&self) -> Option<&SkillDetails> {
        match &self.details {
            AssetDetails::Skill(s) => Some(s),
            _ => None,
        }
    }

    /// Finds a section by exact heading text at level 1 to 3.
    pub fn section(&self, heading: &str) -> Option<&Section> {
        find_section(&self.sections, heading)
    }
}

pub(crate) fn find_section<'a>(sections: &'a [Section], heading: &str) -> Option<&'a Section> {
    sections
        .iter()
        .find(|s| (1..=3).contains(&s.level) && s.heading == heading)
}
