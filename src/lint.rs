//! Lint orchestration.
//!
//! [`run_lint`] is the main entry point. The pipeline is linear:
//!
//! 1. **Discover** markdown assets under each configured root ([`discover`]).
//! 2. **Parse and check** every file independently, in parallel via [rayon]
//!    ([`lint_files`]): read, build the [`Asset`], run the schema checks.
//! 3. **Resolve** references across all assets ([`resolver::resolve`]). This
//!    waits for every file, since it needs the complete name index.
//! 4. **Report**: apply rule levels and suppressions and assemble the
//!    [`Report`].
//!
//! A problem in one file never stops the others, invalid UTF-8 included;
//! only environmental errors (permission denied, unwalkable directory,
//! Ctrl-C) end the run.

use crate::asset::builder::{self, Roots};
use crate::asset::{Asset, AssetKind};
use crate::checks;
use crate::config::{self, Config};
use crate::error::{LintError, Result};
use crate::interrupt;
use crate::issue::Issue;
use crate::report::{FailOn, Report};
use crate::resolver;
use rayon::prelude::*;
use std::collections::{BTreeMap, BTreeSet};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Directory roots as given on the command line.
#[derive(Debug, Default, Clone)]
pub struct RootOverrides {
    pub commands: Option<PathBuf>,
    pub agents: Option<PathBuf>,
    pub skills: Option<PathBuf>,
}

/// Works out the three asset roots for `plugin_root`.
///
/// Explicit overrides must exist. Conventional subdirectories that do not
/// exist are left out, since a plugin need not ship every kind.
///
/// # Errors
///
/// [`LintError::RootNotFound`] or [`LintError::NotADirectory`] for the plugin
/// root or an explicit override.
pub fn resolve_roots(plugin_root: &Path, overrides: &RootOverrides) -> Result<Roots> {
    check_dir(plugin_root)?;

    let pick = |kind: AssetKind, explicit: &Option<PathBuf>| -> Result<Option<PathBuf>> {
        match explicit {
            Some(dir) => {
                check_dir(dir)?;
                Ok(Some(dir.clone()))
            }
            None => {
                let dir = plugin_root.join(kind.dir_name());
                if dir.is_dir() {
                    Ok(Some(dir))
                } else {
                    tracing::info!("no {} directory at {}", kind, dir.display());
                    Ok(None)
                }
            }
        }
    };

    Ok(Roots {
        commands: pick(AssetKind::Command, &overrides.commands)?,
        agents: pick(AssetKind::Agent, &overrides.agents)?,
        skills: pick(AssetKind::Skill, &overrides.skills)?,
    })
}

fn check_dir(path: &Path) -> Result<()> {
    if !path.exists() {
        return Err(LintError::RootNotFound(path.to_path_buf()));
    }
    if !path.is_dir() {
        return Err(LintError::NotADirectory(path.to_path_buf()));
    }
    Ok(())
}

/// Runs the full pipeline over a plugin.
///
/// # Examples
///
/// ```rust,no_run
/// use std::path::Path;
/// use oxidized_plugin_lint::asset::builder::Roots;
/// use oxidized_plugin_lint::{config::Config, lint, report::FailOn};
///
/// let root = Path::new("./my-plugin");
/// let config = Config::load(None, root).unwrap();
/// let report = lint::run_lint(root, &Roots::under(root), &config, FailOn::Error).unwrap();
/// std::process::exit(report.exit_code);
/// ```
pub fn run_lint(
    plugin_root: &Path,
    roots: &Roots,
    config: &Config,
    fail_on: FailOn,
) -> Result<Report> {
    let files = discover(roots, config)?;
    tracing::info!("discovered {} asset files", files.len());

    let suppressions = config::load_suppressions(plugin_root);
    lint_files(
        &plugin_root.display().to_string(),
        &files,
        roots,
        config,
        fail_on,
        &suppressions,
    )
}

/// Collects asset files under every root, sorted and de-duplicated.
///
/// - Command and agent roots: every `.md` file at any depth.
/// - Skill root: every `SKILL.md`, plus `.md` files directly in the root.
/// - Hidden directories and files named in `scan.ignore_files` are skipped.
pub fn discover(roots: &Roots, config: &Config) -> Result<Vec<PathBuf>> {
    let mut files = BTreeSet::new();

    for (kind, root) in roots.iter() {
        let before = files.len();
        let walker = WalkDir::new(root)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(|e| e.depth() == 0 || !is_hidden(e.file_name()));

        for entry in walker {
            let entry = entry?;
            if !entry.file_type().is_file() {
                continue;
            }
            let file_name = entry.file_name().to_string_lossy();
            if config.is_ignored_file(&file_name) {
                continue;
            }
            let is_markdown = entry
                .path()
                .extension()
                .is_some_and(|ext| ext.eq_ignore_ascii_case("md"));
            if !is_markdown {
                continue;
            }
            if kind == AssetKind::Skill && file_name != "SKILL.md" && entry.depth() != 1 {
                continue;
            }
            files.insert(entry.into_path());
        }

        tracing::debug!("{} {kind} files under {}", files.len() - before, root.display());
    }

    Ok(files.into_iter().collect())
}

fn is_hidden(name: &std::ffi::OsStr) -> bool {
    name.to_string_lossy().starts_with('.')
}

/// What one worker hands back for one file.
struct FileOutcome {
    asset: Option<Asset>,
    issues: Vec<Issue>,
}

fn lint_file(path: &Path, roots: &Roots, config: &Config) -> Result<FileOutcome> {
    interrupt::check()?;

    let bytes = std::fs::read(path).map_err(|source| LintError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let built = match String::from_utf8(bytes) {
        Ok(content) => builder::build(path, &content, roots),
        Err(e) => builder::undecodable(path, &e),
    };
    let mut issues = built.issues;
    if let Some(asset) = &built.asset {
        if issues.is_empty() {
            issues.extend(checks::check_asset(asset, config));
        } else {
            tracing::debug!("{}: parse errors, skipping schema checks", path.display());
        }
    }

    Ok(FileOutcome {
        asset: built.asset,
        issues,
    })
}

/// Lints an explicit list of files and assembles the report.
///
/// `files` may come from [`discover`] or anywhere else; a file outside every
/// root is reported as `UNKNOWN_KIND` rather than failing the run.
pub fn lint_files(
    plugin: &str,
    files: &[PathBuf],
    roots: &Roots,
    config: &Config,
    fail_on: FailOn,
    suppressions: &[config::Suppression],
) -> Result<Report> {
    let outcomes: Vec<FileOutcome> = files
        .par_iter()
        .map(|path| lint_file(path, roots, config))
        .collect::<Result<_>>()?;

    interrupt::check()?;

    let mut issues = Vec::new();
    let mut assets = Vec::new();
    for outcome in outcomes {
        issues.extend(outcome.issues);
        assets.extend(outcome.asset);
    }

    issues.extend(resolver::resolve(&assets));

    let issues: Vec<Issue> = issues
        .into_iter()
        .filter_map(|mut issue| {
            issue.severity = config.effective_severity(&issue.rule_id, issue.severity)?;
            Some(issue)
        })
        .collect();

    // Files that failed to parse still count towards their root's kind.
    let mut asset_counts: BTreeMap<AssetKind, usize> =
        AssetKind::ALL.into_iter().map(|k| (k, 0)).collect();
    for kind in files.iter().filter_map(|path| roots.kind_of(path)) {
        *asset_counts.entry(kind).or_default() += 1;
    }

    let report = Report::from_issues(
        plugin,
        issues,
        asset_counts,
        files.len(),
        suppressions,
        fail_on,
    );
    tracing::info!(
        assets = report.asset_total(),
        errors = report.error_count(),
        warnings = report.warning_count(),
        suppressed = report.suppressed.len(),
        "lint finished"
    );
    Ok(report)
}
