//! Scan a repository and generate its `.pre-commit-config.yaml`

use colored::{ColoredString, Colorize};
use starter_builder::{BuildOptions, CUSTOM_HOOKS_FILE, ConfigBuilder, load_custom_hooks};
use starter_catalog::{Catalog, CustomEntry};
use starter_detect::{Detector, TechInfo};
use std::fs;
use std::path::{Path, PathBuf};

use crate::cli::SelectionMode;
use crate::error::{CliError, Result};
use crate::interactive;
use crate::output;

/// Output file name, relative to the repository root.
pub const CONFIG_FILE: &str = ".pre-commit-config.yaml";

pub const HIGH_CONFIDENCE: f64 = 0.8;
pub const MEDIUM_CONFIDENCE: f64 = 0.6;
pub const LOW_CONFIDENCE: f64 = 0.4;

/// Inputs for [`run_generate`].
#[derive(Debug, Clone)]
pub struct GenerateOptions {
    pub path: PathBuf,
    pub mode: SelectionMode,
    pub force: bool,
    pub dry_run: bool,
    pub build: BuildOptions,
}

/// Run the generate command
pub fn run_generate(options: &GenerateOptions) -> Result<()> {
    let root = validate_root(&options.path)?;

    println!("{}", "Scanning repository...".blue().bold());
    let detected = Detector::new().scan(&root);
    if detected.is_empty() {
        println!(
            "{}",
            "No supported file types detected in the repository.".yellow()
        );
        return Ok(());
    }

    print_summary(&detected);

    let config_path = root.join(CONFIG_FILE);
    if config_path.exists() && !options.force && !options.dry_run {
        println!(
            "{}",
            format!("'{CONFIG_FILE}' already exists. Use --force to overwrite.").yellow()
        );
        return Ok(());
    }

    let catalog = Catalog::builtin();
    let selected = match options.mode {
        SelectionMode::Interactive => {
            match interactive::select_technologies(&detected, &catalog)? {
                Some(selected) => selected,
                None => {
                    println!(
                        "{}",
                        "No technologies selected. Configuration will not be generated.".yellow()
                    );
                    return Ok(());
                }
            }
        }
        mode => select_technologies(&detected, mode),
    };

    let labels: Vec<&str> = selected.iter().map(|t| t.name.as_str()).collect();
    println!(
        "{} {}",
        "Selected technologies:".blue(),
        format_labels(&labels)
    );
    if labels.is_empty() {
        if options.mode == SelectionMode::HighConfidence {
            println!(
                "{}",
                "No technologies detected with high confidence (>80%).".yellow()
            );
        }
        println!("{}", "Including only basic hooks.".yellow());
    }

    let custom = custom_entries(&root);
    let config = ConfigBuilder::new(&catalog)
        .with_options(options.build.clone())
        .build(&labels, &custom)?;

    if options.dry_run {
        println!();
        println!("{}", "Generated Configuration:".bold());
        print!("{config}");
        println!();
        println!(
            "{}",
            "Dry run mode: Configuration not written to disk.".yellow()
        );
        return Ok(());
    }

    output::write_atomic(&config_path, config.as_bytes())?;
    println!("{} Successfully generated {}", "✓".green(), CONFIG_FILE.green());
    print_next_steps();

    Ok(())
}

/// Resolve `path` to a directory that contains a `.git` directory.
fn validate_root(path: &Path) -> Result<PathBuf> {
    if !path.is_dir() {
        return Err(CliError::user(format!(
            "{} is not a valid directory",
            path.display()
        )));
    }
    let root = fs::canonicalize(path)?;
    if !root.join(".git").is_dir() {
        return Err(CliError::user("not a valid Git repository"));
    }
    Ok(root)
}

/// Non-interactive selection.
///
/// [`SelectionMode::HighConfidence`] keeps technologies scoring strictly above
/// [`HIGH_CONFIDENCE`]; any other mode keeps everything.
pub fn select_technologies(detected: &[TechInfo], mode: SelectionMode) -> Vec<&TechInfo> {
    detected
        .iter()
        .filter(|t| mode != SelectionMode::HighConfidence || t.confidence > HIGH_CONFIDENCE)
        .collect()
}

/// Custom hooks are optional: a broken file is reported and skipped.
fn custom_entries(root: &Path) -> Vec<CustomEntry> {
    match load_custom_hooks(root) {
        Ok(Some(entries)) => {
            println!("Loaded custom hooks from {CUSTOM_HOOKS_FILE}");
            entries
        }
        Ok(None) => Vec::new(),
        Err(e) => {
            tracing::warn!(error = %e, "Skipping custom hooks");
            eprintln!("{} {}. Skipping.", "warning:".yellow().bold(), e);
            Vec::new()
        }
    }
}

fn format_labels(labels: &[&str]) -> String {
    if labels.is_empty() {
        "(none)".to_string()
    } else {
        labels.join(", ")
    }
}

/// Confidence as a percentage, coloured by band.
pub fn confidence_label(confidence: f64) -> ColoredString {
    let text = format!("{:.1}%", confidence * 100.0);
    if confidence > HIGH_CONFIDENCE {
        text.bright_green()
    } else if confidence > MEDIUM_CONFIDENCE {
        text.green()
    } else if confidence > LOW_CONFIDENCE {
        text.yellow()
    } else {
        text.red()
    }
}

fn print_summary(detected: &[TechInfo]) {
    println!();
    println!("{}", "Detected Technologies".bold());
    println!(
        "  {:<16} {:>11}  {:<28} {}",
        "Technology".bold(),
        "Files Found".bold(),
        "Version".bold(),
        "Confidence".bold()
    );
    for tech in detected {
        println!(
            "  {:<16} {:>11}  {:<28} {}",
            tech.display_name().cyan(),
            tech.count,
            tech.version.as_deref().unwrap_or("Unknown").yellow(),
            confidence_label(tech.confidence)
        );
    }
    println!();
}

fn print_next_steps() {
    println!();
    println!("{}", "Next steps:".bold());
    println!("  1. Install pre-commit:     {}", "pip install pre-commit".cyan());
    println!("  2. Install the hooks:      {}", "pre-commit install".cyan());
    println!(
        "  3. Run against all files:  {}",
        "pre-commit run --all-files".cyan()
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;
    use tempfile::TempDir;

    fn tech(name: &str, confidence: f64) -> TechInfo {
        TechInfo {
            name: name.to_string(),
            count: 1,
            version: None,
            confidence,
            files: BTreeSet::new(),
        }
    }

    #[test]
    fn test_high_confidence_selection_is_strict() {
        let detected = vec![tech("python", 0.9), tech("yaml", 0.8), tech("go", 0.3)];
        let selected = select_technologies(&detected, SelectionMode::HighConfidence);
        let names: Vec<_> = selected.iter().map(|t| t.name.as_str()).collect();
        assert_eq!(names, vec!["python"]);
    }

    #[test]
    fn test_all_selection_keeps_order() {
        let detected = vec![tech("yaml", 0.3), tech("python", 0.9)];
        let selected = select_technologies(&detected, SelectionMode::All);
        let names: Vec<_> = selected.iter().map(|t| t.name.as_str()).collect();
        assert_eq!(names, vec!["yaml", "python"]);
    }

    #[test]
    fn test_validate_root_requires_directory() {
        let temp = TempDir::new().unwrap();
        let err = validate_root(&temp.path().join("missing")).unwrap_err();
        assert!(err.to_string().contains("is not a valid directory"));
    }

    #[test]
    fn test_validate_root_requires_git() {
        let temp = TempDir::new().unwrap();
        let err = validate_root(temp.path()).unwrap_err();
        assert_eq!(err.to_string(), "not a valid Git repository");

        fs::create_dir(temp.path().join(".git")).unwrap();
        assert!(validate_root(temp.path()).is_ok());
    }

    #[test]
    fn test_broken_custom_hooks_are_skipped() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join(CUSTOM_HOOKS_FILE), "hooks: []\n").unwrap();
        assert!(custom_entries(temp.path()).is_empty());
    }

    #[test]
    fn test_format_labels() {
        assert_eq!(format_labels(&[]), "(none)");
        assert_eq!(format_labels(&["python", "yaml"]), "python, yaml");
    }
}
