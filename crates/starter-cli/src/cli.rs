//! CLI argument parsing using clap derive

use clap::Parser;
use std::path::PathBuf;

/// Generate a pre-commit configuration from the technologies found in a repository
#[derive(Parser, Debug)]
#[command(name = "pre-commit-starter")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to the repository root
    #[arg(long, env = "PRE_COMMIT_STARTER_PATH", default_value = ".")]
    pub path: PathBuf,

    /// Overwrite an existing .pre-commit-config.yaml, keeping only high-confidence technologies
    #[arg(long)]
    pub force: bool,

    /// Accept every detected technology without prompting
    #[arg(long)]
    pub auto: bool,

    /// Print the configuration instead of writing it
    #[arg(long)]
    pub dry_run: bool,

    /// List supported technologies and exit
    #[arg(long)]
    pub list_technologies: bool,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Pin the default Python version (e.g. python3.12)
    #[arg(long, value_name = "VERSION")]
    pub python_version: Option<String>,

    /// Block direct pushes to BRANCH (repeatable)
    #[arg(long = "protect-branch", value_name = "BRANCH")]
    pub protected_branches: Vec<String>,
}

/// How detected technologies are turned into a selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionMode {
    /// Only technologies with high confidence.
    HighConfidence,
    /// Everything detected.
    All,
    /// Ask per technology.
    Interactive,
}

impl Cli {
    /// `--force` wins over `--auto`.
    pub fn selection_mode(&self) -> SelectionMode {
        if self.force {
            SelectionMode::HighConfidence
        } else if self.auto {
            SelectionMode::All
        } else {
            SelectionMode::Interactive
        }
    }
}
