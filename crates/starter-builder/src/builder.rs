//! ConfigBuilder - the entry point for generating a configuration

use crate::error::Result;
use crate::options::BuildOptions;
use crate::render;
use crate::resolve::{self, Resolution};
use starter_catalog::{Catalog, CustomEntry};

/// Turns technology labels into a rendered `.pre-commit-config.yaml`.
///
/// Holds only a shared reference to the catalog; every call allocates its
/// own state, so one catalog can serve many builders concurrently.
#[derive(Debug, Clone)]
pub struct ConfigBuilder<'a> {
    catalog: &'a Catalog,
    options: BuildOptions,
}

impl<'a> ConfigBuilder<'a> {
    /// Create a builder with default options.
    pub fn new(catalog: &'a Catalog) -> Self {
        Self {
            catalog,
            options: BuildOptions::default(),
        }
    }

    /// Set build options (builder pattern).
    pub fn with_options(mut self, options: BuildOptions) -> Self {
        self.options = options;
        self
    }

    pub fn options(&self) -> &BuildOptions {
        &self.options
    }

    /// Merge and order tool sources without rendering.
    ///
    /// Never fails: unknown or repeated labels and empty input all resolve to
    /// at least the catalog's base contributions.
    pub fn resolve(&self, labels: &[&str], custom: &[CustomEntry]) -> Resolution {
        let protection = self
            .catalog
            .pre_push_contribution(self.options.protected_branches.as_slice());
        resolve::resolve(self.catalog, labels, protection, custom)
    }

    /// Resolve and render the full document.
    ///
    /// The only error is a serialization failure from the YAML encoder.
    pub fn build(&self, labels: &[&str], custom: &[CustomEntry]) -> Result<String> {
        let resolution = self.resolve(labels, custom);
        tracing::debug!(
            labels = resolution.labels.len(),
            entries = resolution.entries.len(),
            custom = resolution.custom_count,
            "Rendering configuration"
        );
        render::render(&resolution, &self.options)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_empty_is_base_only() {
        let catalog = Catalog::builtin();
        let builder = ConfigBuilder::new(&catalog);
        let resolution = builder.resolve(&[], &[]);

        assert!(resolution.labels.is_empty());
        assert_eq!(resolution.entries.len(), 2);
        assert!(builder.build(&[], &[]).is_ok());
    }

    #[test]
    fn test_options_are_kept() {
        let catalog = Catalog::builtin();
        let options = BuildOptions::new().with_protected_branches(["main"]);
        let builder = ConfigBuilder::new(&catalog).with_options(options.clone());
        assert_eq!(builder.options(), &options);
    }
}
