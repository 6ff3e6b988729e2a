//! pageinfo - Classify documentation pages and build their route metadata.

mod cli;
mod config;
mod logger;
mod page;
mod plugin;
mod utils;

use anyhow::Result;
use clap::{ColorChoice, Parser};
use cli::{Cli, Commands};
use config::SiteConfig;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set global color override based on CLI option
    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {} // owo-colors auto-detects TTY
    }

    // before config lookup so its debug lines show up
    logger::set_verbose(cli.is_verbose());

    let config = SiteConfig::load(&cli)?;

    match &cli.command {
        Commands::Classify { args } => cli::classify::run_classify(args, &config),
        Commands::Check { args } => cli::check::run_check(args, &config),
    }
}
