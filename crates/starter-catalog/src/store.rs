//! Catalog storage and lookup

use crate::builtins;
use crate::types::ContributionRecord;
use std::collections::HashMap;

/// Immutable registry mapping technology labels to hook contributions.
///
/// Built once (usually via [`Catalog::builtin`]) and then only read. All
/// lookups are total: unknown labels yield no contributions and unknown hook
/// ids yield an empty description.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    technologies: HashMap<String, Vec<ContributionRecord>>,
    base: Vec<ContributionRecord>,
    descriptions: HashMap<String, String>,
}

impl Catalog {
    /// Create an empty catalog with no base contributions.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create the default catalog with all built-in technologies.
    pub fn builtin() -> Self {
        let mut catalog = Self::new().with_base(builtins::base_contributions());
        for (label, records) in builtins::builtin_technologies() {
            catalog.register(label, records);
        }
        for (id, text) in builtins::HOOK_DESCRIPTIONS {
            catalog.describe(*id, *text);
        }
        tracing::debug!(
            technologies = catalog.len(),
            descriptions = catalog.descriptions.len(),
            "Built-in catalog constructed"
        );
        catalog
    }

    /// Replace the base contributions (builder pattern).
    pub fn with_base(mut self, base: Vec<ContributionRecord>) -> Self {
        self.base = base;
        self
    }

    /// Register the contributions for a label, replacing any previous ones.
    ///
    /// Labels are stored lowercased.
    pub fn register(&mut self, label: impl AsRef<str>, records: Vec<ContributionRecord>) {
        self.technologies
            .insert(label.as_ref().to_lowercase(), records);
    }

    /// Register a description for a hook id.
    pub fn describe(&mut self, hook_id: impl Into<String>, text: impl Into<String>) {
        self.descriptions.insert(hook_id.into(), text.into());
    }

    /// Contributions for a label, in catalog order. Empty for unknown labels.
    pub fn contributions_for(&self, label: &str) -> &[ContributionRecord] {
        self.technologies
            .get(&label.to_lowercase())
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Contributions present in every document, housekeeping first.
    pub fn base_contributions(&self) -> &[ContributionRecord] {
        &self.base
    }

    /// Description for a hook id, or `""` when unknown.
    pub fn description_for(&self, hook_id: &str) -> &str {
        self.descriptions
            .get(hook_id)
            .map(String::as_str)
            .unwrap_or("")
    }

    /// Branch-protection contribution for the given branches.
    ///
    /// Returns `None` when no branches are given.
    pub fn pre_push_contribution<S: AsRef<str>>(
        &self,
        branches: &[S],
    ) -> Option<ContributionRecord> {
        if branches.is_empty() {
            return None;
        }
        Some(builtins::branch_protection(branches))
    }

    /// Check if a label is known.
    pub fn contains(&self, label: &str) -> bool {
        self.technologies.contains_key(&label.to_lowercase())
    }

    /// All supported labels (sorted). Base contributions are not a label.
    pub fn supported_technologies(&self) -> Vec<&str> {
        let mut labels: Vec<_> = self.technologies.keys().map(String::as_str).collect();
        labels.sort();
        labels
    }

    /// Hook ids a label contributes, in contribution order.
    pub fn hook_ids_for(&self, label: &str) -> Vec<&str> {
        self.contributions_for(label)
            .iter()
            .flat_map(|r| r.hook_ids())
            .collect()
    }

    /// Number of registered labels.
    pub fn len(&self) -> usize {
        self.technologies.len()
    }

    /// Check if no labels are registered.
    pub fn is_empty(&self) -> bool {
        self.technologies.is_empty()
    }
}
