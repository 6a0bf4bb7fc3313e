//! Configuration loading and management.
//!
//! Provides types for the TOML-based configuration file and for issue
//! suppression rules stored in `.oxidized-plugin-lint-ignore` files.
//!
//! # Configuration file
//!
//! The default configuration file is `oxidized-plugin-lint.toml` in the plugin
//! root. Use [`Config::load`] to read it:
//!
//! ```rust,no_run
//! use std::path::Path;
//! use oxidized_plugin_lint::config::Config;
//!
//! let config = Config::load(None, Path::new("./my-plugin")).expect("failed to load config");
//! assert!(config.agents.required_sections.contains(&"Outputs".to_string()));
//! ```
//!
//! # Suppression files
//!
//! Place a `.oxidized-plugin-lint-ignore` file in the plugin root to suppress
//! specific issues. See [`Suppression`] for the format and
//! [`load_suppressions`] for loading.

use crate::error::{LintError, Result};
use crate::issue::Severity;
use crate::report::FailOn;
use std::collections::BTreeMap;
use std::path::Path;

/// Name of the configuration file looked up in the plugin root.
pub const CONFIG_FILE_NAME: &str = "oxidized-plugin-lint.toml";
/// Name of the suppression file looked up in the plugin root.
pub const IGNORE_FILE_NAME: &str = ".oxidized-plugin-lint-ignore";

/// Main configuration for a lint run.
///
/// All fields carry defaults matching the hybrid agent pattern, so the
/// config file can be omitted entirely.
#[derive(Debug, Clone, serde::Deserialize, serde::Serialize)]
#[serde(default)]
pub struct Config {
    /// Threshold used when `--fail-on` is not given on the command line.
    pub fail_on: FailOn,
    /// File discovery settings.
    pub scan: ScanConfig,
    /// Section contract for agent assets.
    pub agents: SectionRules,
    /// Section contract for skill assets.
    pub skills: SectionRules,
    /// Section contract for command assets.
    pub commands: SectionRules,
    /// Per-rule severity overrides keyed by base rule id.
    ///
    /// ```toml
    /// [rules]
    /// ORPHANED_SKILL = "error"
    /// WORKFLOW_MISSING_SKILLS = "off"
    /// ```
    pub rules: BTreeMap<String, RuleLevel>,
}

#[derive(Debug, Clone, serde::Deserialize, serde::Serialize)]
#[serde(default)]
pub struct ScanConfig {
    /// File names that are never treated as assets (e.g. `README.md`).
    pub ignore_files: Vec<String>,
}

impl Default for ScanConfig {
    fn default() -> Self {
        ScanConfig {
            ignore_files: vec!["README.md".to_string()],
        }
    }
}

/// Headings an asset of one kind must carry.
#[derive(Debug, Clone, Default, serde::Deserialize, serde::Serialize)]
#[serde(default)]
pub struct SectionRules {
    pub required_sections: Vec<String>,
}

/// Configured level for a rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RuleLevel {
    Error,
    Warning,
    Off,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            fail_on: FailOn::default(),
            scan: ScanConfig::default(),
            agents: SectionRules {
                required_sections: [
                    "Role & Mindset",
                    "Triggers",
                    "Focus Areas",
                    "Specialized Workflows",
                    "Skills Integration",
                    "Outputs",
                    "Best Practices",
                    "Boundaries",
                ]
                .iter()
                .map(|s| s.to_string())
                .collect(),
            },
            skills: SectionRules {
                required_sections: vec![
                    "Trigger Keywords".to_string(),
                    "Agent Integration".to_string(),
                ],
            },
            commands: SectionRules::default(),
            rules: BTreeMap::new(),
        }
    }
}

impl Config {
    /// Loads configuration from a TOML file.
    ///
    /// Resolution order:
    /// 1. If `path` is `Some`, load from that file (error if missing).
    /// 2. Otherwise try `oxidized-plugin-lint.toml` in `plugin_root`.
    /// 3. If that file does not exist either, return [`Config::default()`].
    ///
    /// # Errors
    ///
    /// Returns [`LintError::ConfigNotFound`], [`LintError::ConfigRead`] or
    /// [`LintError::ConfigParse`].
    pub fn load(path: Option<&Path>, plugin_root: &Path) -> Result<Config> {
        let config_path = match path {
            Some(p) if p.exists() => p.to_path_buf(),
            Some(p) => return Err(LintError::ConfigNotFound(p.to_path_buf())),
            None => {
                let default_path = plugin_root.join(CONFIG_FILE_NAME);
                if !default_path.exists() {
                    tracing::debug!("no config file in {}, using defaults", plugin_root.display());
                    return Ok(Config::default());
                }
                default_path
            }
        };

        let content = std::fs::read_to_string(&config_path).map_err(|source| {
            LintError::ConfigRead {
                path: config_path.clone(),
                source,
            }
        })?;
        let config: Config = toml::from_str(&content).map_err(|source| LintError::ConfigParse {
            path: config_path.clone(),
            source,
        })?;
        tracing::debug!("loaded config from {}", config_path.display());
        Ok(config)
    }

    /// Applies the configured override for `rule_id` to its built-in severity.
    ///
    /// Returns `None` when the rule is switched off.
    ///
    /// ```
    /// use oxidized_plugin_lint::config::{Config, RuleLevel};
    /// use oxidized_plugin_lint::issue::Severity;
    ///
    /// let mut config = Config::default();
    /// config.rules.insert("ORPHANED_SKILL".to_string(), RuleLevel::Error);
    /// assert_eq!(
    ///     config.effective_severity("ORPHANED_SKILL", Severity::Warning),
    ///     Some(Severity::Error)
    /// );
    /// ```
    pub fn effective_severity(&self, rule_id: &str, default: Severity) -> Option<Severity> {
        match self.rules.get(crate::issue::base_rule(rule_id)) {
            None => Some(default),
            Some(RuleLevel::Error) => Some(Severity::Error),
            Some(RuleLevel::Warning) => Some(Severity::Warning),
            Some(RuleLevel::Off) => None,
        }
    }

    /// Returns `true` if `file_name` is excluded from discovery.
    pub fn is_ignored_file(&self, file_name: &str) -> bool {
        self.scan.ignore_files.iter().any(|f| f == file_name)
    }
}

/// Root structure of an `.oxidized-plugin-lint-ignore` TOML file.
///
/// # File format
///
/// ```toml
/// [[suppress]]
/// rule = "MISSING_SECTION:Outputs"
/// file = "agents/legacy-agent.md"
/// reason = "Legacy agent, scheduled for rewrite"
/// ```
#[derive(Debug, Clone, serde::Deserialize, serde::Serialize)]
pub struct SuppressionFile {
    pub suppress: Vec<Suppression>,
}

/// A rule that silences a specific issue.
///
/// A suppression matches an [`Issue`](crate::issue::Issue) when:
/// - `rule` equals the issue's full rule id, or its base rule id.
/// - `file` is a path suffix of the issue's asset path (empty string acts as
///   a wildcard).
#[derive(Debug, Clone, serde::Deserialize, serde::Serialize)]
pub struct Suppression {
    /// Rule id to suppress (e.g. `"ORPHANED_SKILL"` or `"MISSING_FIELD:color"`).
    pub rule: String,
    /// Relative file path to match, or an empty string for all files.
    #[serde(default)]
    pub file: String,
    /// Human-readable justification for the suppression.
    pub reason: String,
    /// Optional issue-tracker reference.
    pub ticket: Option<String>,
}

/// Loads suppression rules from `.oxidized-plugin-lint-ignore` in `plugin_root`.
///
/// Returns an empty vector when the file is absent or cannot be parsed (a
/// warning is logged in the latter case).
pub fn load_suppressions(plugin_root: &Path) -> Vec<Suppression> {
    let ignore_path = plugin_root.join(IGNORE_FILE_NAME);
    if !ignore_path.exists() {
        return vec![];
    }

    let content = match std::fs::read_to_string(&ignore_path) {
        Ok(c) => c,
        Err(e) => {
            tracing::warn!("failed to read {}: {e}", ignore_path.display());
            return vec![];
        }
    };

    match toml::from_str::<SuppressionFile>(&content) {
        Ok(file) => file.suppress,
        Err(e) => {
            tracing::warn!("failed to parse {IGNORE_FILE_NAME}: {e}");
            vec![]
        }
    }
}
