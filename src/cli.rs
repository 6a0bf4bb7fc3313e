use clap::{Parser, Subcommand};
use oxidized_plugin_lint::output::OutputFormat;
use oxidized_plugin_lint::report::FailOn;
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "oxidized-plugin-lint",
    version,
    about = "Structural linting for plugin command, agent and skill files"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(long, short, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Disable coloured output
    #[arg(long, global = true)]
    pub no_color: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Validate the commands, agents and skills of a plugin
    Validate {
        /// Plugin root containing commands/, agents/ and skills/
        #[arg(default_value = ".")]
        root: PathBuf,

        /// Commands directory (default: <ROOT>/commands)
        #[arg(long)]
        commands_dir: Option<PathBuf>,

        /// Agents directory (default: <ROOT>/agents)
        #[arg(long)]
        agents_dir: Option<PathBuf>,

        /// Skills directory (default: <ROOT>/skills)
        #[arg(long)]
        skills_dir: Option<PathBuf>,

        /// Output format
        #[arg(long, short, default_value = "text", value_enum)]
        format: OutputFormat,

        /// Lowest severity that fails the run [default: error]
        #[arg(long, value_enum)]
        fail_on: Option<FailOn>,

        /// Write output to file instead of stdout
        #[arg(long, short)]
        output: Option<PathBuf>,

        /// Custom config file path
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// List all built-in rules with descriptions
    ListRules,

    /// Show full explanation for a rule
    Explain {
        /// Rule ID (e.g., "MISSING_FIELD" or "MISSING_FIELD:category")
        rule_id: String,
    },
}
