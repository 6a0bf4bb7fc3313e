//! # oxidized-plugin-lint
//!
//! Structural linting for plugin assets.
//!
//! A plugin ships three kinds of markdown assets: commands, agents and
//! skills. Each carries a `key: value` frontmatter block and a body split
//! into headed sections. `oxidized-plugin-lint` checks that every asset has
//! the fields and sections its kind requires, that enum fields hold known
//! values, and that every skill an agent names actually exists. Reports are
//! rendered as text, JSON, or [SARIF].
//!
//! ## Quick start
//!
//! ```rust,no_run
//! use std::path::Path;
//! use oxidized_plugin_lint::{config::Config, lint, output};
//! use oxidized_plugin_lint::report::FailOn;
//!
//! let root = Path::new("./my-plugin");
//! let roots = lint::resolve_roots(root, &lint::RootOverrides::default()).unwrap();
//! let config = Config::load(None, root).unwrap();
//! let report = lint::run_lint(root, &roots, &config, FailOn::Error).unwrap();
//!
//! print!("{}", output::format_report(&report, output::OutputFormat::Text));
//! std::process::exit(report.exit_code);
//! ```
//!
//! ## Architecture
//!
//! The crate is organized around a pipeline:
//!
//! 1. **[`parser`]**: split frontmatter from body, then the body into sections.
//! 2. **[`asset`]**: build a typed [`asset::Asset`] per file.
//! 3. **[`checks`]**: per-asset schema rules behind the [`checks::AssetCheck`] trait.
//! 4. **[`resolver`]**: cross-asset name resolution (duplicates, unresolved
//!    and orphaned skills).
//! 5. **[`report`]**: suppressions, ordering, exit code.
//! 6. **[`output`]**: text, JSON or SARIF rendering.
//!
//! [`lint`] drives the pipeline; [`config`] loads `oxidized-plugin-lint.toml`.
//!
//! [SARIF]: https://sarifweb.azurewebsites.net/

pub mod asset;
pub mod checks;
pub mod config;
pub mod error;
pub mod interrupt;
pub mod issue;
pub mod lint;
pub mod logging;
pub mod output;
pub mod parser;
pub mod report;
pub mod resolver;
