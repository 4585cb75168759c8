//! pre-commit-starter
//!
//! Scans a repository, detects the technologies it uses and writes a
//! matching `.pre-commit-config.yaml`.

mod cli;
mod commands;
mod error;
mod interactive;
mod logging;
mod output;

use clap::Parser;
use colored::Colorize;
use starter_builder::BuildOptions;

use cli::Cli;
use commands::GenerateOptions;
use error::Result;

fn main() {
    if let Err(e) = run() {
        eprintln!("{}: {}", "error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    if let Err(e) = logging::init(cli.verbose) {
        eprintln!("{} could not set up logging: {e}", "warning:".yellow().bold());
    }
    tracing::debug!(?cli, "Parsed arguments");

    if cli.list_technologies {
        return commands::run_list_technologies();
    }

    let mut build = BuildOptions::new().with_protected_branches(&cli.protected_branches);
    if let Some(version) = &cli.python_version {
        build = build.with_python_version(version)?;
    }

    commands::run_generate(&GenerateOptions {
        path: cli.path.clone(),
        mode: cli.selection_mode(),
        force: cli.force,
        dry_run: cli.dry_run,
        build,
    })
}
