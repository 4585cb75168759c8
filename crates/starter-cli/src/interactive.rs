//! Interactive technology selection
//!
//! Uses dialoguer for terminal confirmation prompts.

use colored::Colorize;
use dialoguer::Confirm;
use starter_catalog::Catalog;
use starter_detect::TechInfo;

use crate::commands::generate::{MEDIUM_CONFIDENCE, confidence_label};
use crate::error::Result;

/// Ask, per detected technology, whether to include its hooks.
///
/// Returns `None` when the user declines everything, including the
/// base-hooks-only fallback.
pub fn select_technologies<'a>(
    detected: &'a [TechInfo],
    catalog: &Catalog,
) -> Result<Option<Vec<&'a TechInfo>>> {
    println!();
    println!("{}", "Select technologies to include hooks for:".bold());
    println!("(Technologies with higher confidence are recommended)");

    let mut selected = Vec::new();
    for tech in detected {
        show_hooks(tech, catalog);

        let prompt = format!(
            "Include {} ({})?",
            tech.display_name().cyan(),
            confidence_label(tech.confidence)
        );
        let include = Confirm::new()
            .with_prompt(prompt)
            .default(tech.confidence > MEDIUM_CONFIDENCE)
            .interact()?;

        if include {
            println!("{} Added hooks for {}", "✓".green(), tech.display_name());
            selected.push(tech);
        } else {
            println!("{}", format!("Skipped hooks for {}", tech.display_name()).yellow());
        }
    }

    if selected.is_empty() {
        let base_only = Confirm::new()
            .with_prompt("No technologies selected. Include basic hooks only?")
            .default(true)
            .interact()?;
        if !base_only {
            return Ok(None);
        }
        println!("{}", "Including only basic hooks.".yellow());
    }

    Ok(Some(selected))
}

fn show_hooks(tech: &TechInfo, catalog: &Catalog) {
    let hook_ids = catalog.hook_ids_for(&tech.name);
    if hook_ids.is_empty() {
        println!(
            "{}",
            format!("No specific hooks available for {}", tech.name).yellow()
        );
        return;
    }

    println!();
    println!("{}", format!("Hooks for {}:", tech.display_name()).bold());
    for id in hook_ids {
        println!("  {:<28} {}", id.cyan(), catalog.description_for(id).green());
    }
}
