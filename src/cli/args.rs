//! Command-line interface definitions.

use clap::{ColorChoice, Parser, Subcommand};
use std::path::PathBuf;

/// Classify documentation pages and emit their route metadata
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None, arg_required_else_help = true)]
pub struct Cli {
    /// Control colored output (auto, always, never)
    #[arg(long, global = true, default_value = "auto")]
    pub color: ColorChoice,

    /// Content directory path (relative to project root)
    #[arg(short, long, value_hint = clap::ValueHint::DirPath)]
    pub content: Option<PathBuf>,

    /// Config file path (default: pageinfo.toml)
    #[arg(short = 'C', long, default_value = "pageinfo.toml", value_hint = clap::ValueHint::FilePath)]
    pub config: PathBuf,

    /// subcommands
    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Whether the selected command asked for verbose output.
    pub fn is_verbose(&self) -> bool {
        match &self.command {
            Commands::Classify { args } => args.verbose,
            Commands::Check { args } => args.verbose,
        }
    }
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Run the extend-page hook and print route metadata as JSON
    #[command(visible_alias = "c")]
    Classify {
        #[command(flatten)]
        args: ClassifyArgs,
    },

    /// Check frontmatter and report problems
    #[command(visible_alias = "k")]
    Check {
        #[command(flatten)]
        args: CheckArgs,
    },
}

/// Classify command arguments.
#[derive(clap::Args, Debug, Clone)]
pub struct ClassifyArgs {
    /// Files or directories to classify. If omitted, classifies all content.
    /// Use `-` to read paths from stdin (one per line).
    #[arg(value_hint = clap::ValueHint::AnyPath)]
    pub paths: Vec<PathBuf>,

    /// Pretty-print JSON output
    #[arg(short, long)]
    pub pretty: bool,

    /// Write output to file instead of stdout
    #[arg(short, long, value_hint = clap::ValueHint::FilePath)]
    pub output: Option<PathBuf>,

    /// Use readable route meta keys (`type`, `title`, ...) instead of compact codes
    #[arg(short, long)]
    pub named: bool,

    /// Convert deprecated frontmatter keys
    #[arg(long, action = clap::ArgAction::Set, num_args = 0..=1, default_missing_value = "true", require_equals = false)]
    pub legacy: Option<bool>,

    /// Check frontmatter field types before classification
    #[arg(long, action = clap::ArgAction::Set, num_args = 0..=1, default_missing_value = "true", require_equals = false)]
    pub check: Option<bool>,

    /// Log full frontmatter of pages with problems
    #[arg(short, long)]
    pub debug: bool,

    /// Enable verbose output for debugging
    #[arg(short = 'V', long)]
    pub verbose: bool,
}

/// Check command arguments.
#[derive(clap::Args, Debug, Clone)]
pub struct CheckArgs {
    /// Files or directories to check. If omitted, checks all content.
    /// Use `-` to read paths from stdin.
    #[arg(value_name = "PATH")]
    pub paths: Vec<PathBuf>,

    /// Enable verbose output for debugging
    #[arg(short = 'V', long)]
    pub verbose: bool,
}
