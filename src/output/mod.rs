//! Output formatting for lint reports.
//!
//! Three formats are supported:
//!
//! | Format | Module | Use case |
//! |--------|--------|----------|
//! | [`Text`](OutputFormat::Text)   | [`text`]  | Terminal / human review |
//! | [`Json`](OutputFormat::Json)   | [`json`]  | CI gates / scripting    |
//! | [`Sarif`](OutputFormat::Sarif) | [`sarif`] | Code-scanning upload    |
//!
//! Every format is a pure function of the [`Report`]; nothing time- or
//! environment-dependent is rendered, so two runs over the same tree give
//! byte-identical output.

pub mod json;
pub mod sarif;
pub mod text;

use crate::report::Report;

/// Supported output formats for lint reports.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text grouped by file.
    #[default]
    Text,
    /// Machine-readable JSON.
    Json,
    /// [SARIF 2.1.0](https://sarifweb.azurewebsites.net/) for code-scanning tools.
    Sarif,
}

/// Formats a [`Report`] in the requested [`OutputFormat`].
///
/// # Examples
///
/// ```rust,no_run
/// use oxidized_plugin_lint::output::{format_report, OutputFormat};
/// # use oxidized_plugin_lint::report::Report;
/// # fn example(report: &Report) {
/// let json = format_report(report, OutputFormat::Json);
/// println!("{json}");
/// # }
/// ```
pub fn format_report(report: &Report, format: OutputFormat) -> String {
    match format {
        OutputFormat::Text => text::format(report),
        OutputFormat::Json => json::format(report),
        OutputFormat::Sarif => sarif::format(report),
    }
}
