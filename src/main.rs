mod cli;

use clap::Parser;
use cli::{Cli, Commands};
use colored::Colorize;
use oxidized_plugin_lint::error::{self, LintError, EXIT_INTERNAL};
use oxidized_plugin_lint::issue::Severity;
use oxidized_plugin_lint::lint::{self, RootOverrides};
use oxidized_plugin_lint::report::FailOn;
use oxidized_plugin_lint::{checks, config, interrupt, logging, output};
use std::path::PathBuf;

fn main() {
    error::install_panic_hook();
    let cli = Cli::parse();

    if let Err(e) = logging::init(cli.verbose) {
        eprintln!("Warning: logging disabled: {e}");
    }
    if cli.no_color {
        colored::control::set_override(false);
    }

    match cli.command {
        Commands::Validate {
            root,
            commands_dir,
            agents_dir,
            skills_dir,
            format,
            fail_on,
            output: output_path,
            config: config_path,
        } => {
            let overrides = RootOverrides {
                commands: commands_dir,
                agents: agents_dir,
                skills: skills_dir,
            };
            let code = validate(
                root,
                &overrides,
                format,
                fail_on,
                output_path,
                config_path,
            )
            .unwrap_or_else(|e| {
                eprintln!("Error: {e}");
                e.exit_code()
            });
            std::process::exit(code);
        }

        Commands::ListRules => {
            let rules = checks::all_rules();
            println!("{}", "Built-in Rules".bold().underline());
            println!();

            let mut current_stage = "";
            for rule in &rules {
                if rule.stage != current_stage {
                    if !current_stage.is_empty() {
                        println!();
                    }
                    println!("  {}", rule.stage.bold());
                    current_stage = rule.stage;
                }

                let severity = match rule.severity {
                    Severity::Error => "ERROR".red().bold().to_string(),
                    Severity::Warning => " WARN".yellow().bold().to_string(),
                };

                println!(
                    "    [{severity}] {id:<28} {message}",
                    id = rule.id,
                    message = rule.message,
                );
            }

            println!();
            println!("  Total: {} rules", rules.len());
        }

        Commands::Explain { rule_id } => match checks::find_rule(&rule_id) {
            Some(rule) => {
                println!("{}", rule.id.bold());
                println!();
                println!("  Stage:        {}", rule.stage);
                println!("  Severity:     {}", rule.severity);
                println!("  Description:  {}", rule.message);
                println!("  Remediation:  {}", rule.remediation);
            }
            None => {
                eprintln!("Unknown rule: {rule_id}");
                eprintln!("Use 'oxidized-plugin-lint list-rules' to see all available rules.");
                std::process::exit(EXIT_INTERNAL);
            }
        },
    }
}

/// Runs one validation and returns the process exit code.
fn validate(
    root: PathBuf,
    overrides: &RootOverrides,
    format: output::OutputFormat,
    fail_on: Option<FailOn>,
    output_path: Option<PathBuf>,
    config_path: Option<PathBuf>,
) -> Result<i32, LintError> {
    interrupt::install();

    let roots = lint::resolve_roots(&root, overrides)?;
    let config = config::Config::load(config_path.as_deref(), &root)?;
    let fail_on = fail_on.unwrap_or(config.fail_on);

    let report = lint::run_lint(&root, &roots, &config, fail_on)?;
    interrupt::check()?;

    let formatted = output::format_report(&report, format);
    match output_path {
        Some(out_path) => {
            std::fs::write(&out_path, &formatted).map_err(|source| LintError::Write {
                path: out_path.clone(),
                source,
            })?;
            eprintln!("Output written to {}", out_path.display());
        }
        None => print!("{formatted}"),
    }

    Ok(report.exit_code)
}
