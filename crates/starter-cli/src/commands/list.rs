//! List supported technologies

use colored::Colorize;
use starter_catalog::Catalog;

use crate::error::Result;

/// Print every technology the catalog has hooks for, sorted.
pub fn run_list_technologies() -> Result<()> {
    let catalog = Catalog::builtin();

    println!("{}", "Supported technologies:".bold());
    for tech in catalog.supported_technologies() {
        println!("- {}", tech.green());
    }

    Ok(())
}
