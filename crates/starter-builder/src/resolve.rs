//! Label resolution and tool-source merging

use starter_catalog::{Catalog, ContributionRecord, CustomEntry, ToolSourceEntry};
use std::collections::{HashMap, HashSet};

/// The merged, ordered outcome of resolving labels against a catalog.
#[derive(Debug, Clone, PartialEq)]
pub struct Resolution {
    /// Input labels with repeats removed, first occurrence kept
    pub labels: Vec<String>,
    /// Tool-source entries in output order (custom entries last)
    pub entries: Vec<ToolSourceEntry>,
    /// How many trailing entries came from custom input
    pub custom_count: usize,
}

impl Resolution {
    /// Tool-source identifiers in output order.
    pub fn repo_ids(&self) -> Vec<&str> {
        self.entries.iter().map(|e| e.repo.as_str()).collect()
    }

    /// First entry for a tool source.
    pub fn entry(&self, repo: &str) -> Option<&ToolSourceEntry> {
        self.entries.iter().find(|e| e.repo == repo)
    }

    pub fn has_custom(&self) -> bool {
        self.custom_count > 0
    }
}

/// Insertion-ordered accumulator keyed by tool-source id.
#[derive(Debug, Default)]
struct SourceMerger {
    entries: Vec<ToolSourceEntry>,
    index: HashMap<String, usize>,
}

impl SourceMerger {
    /// Append hooks to an existing entry, or open a new entry at the end.
    fn merge(&mut self, record: &ContributionRecord) {
        match self.index.get(&record.repo) {
            Some(&pos) => {
                let entry = &mut self.entries[pos];
                entry.hooks.extend(record.hooks.iter().cloned());
                if entry.rev.is_none() {
                    entry.rev = record.rev.clone();
                }
            }
            None => {
                self.index.insert(record.repo.clone(), self.entries.len());
                self.entries.push(ToolSourceEntry::from(record.clone()));
            }
        }
    }

    fn into_entries(self) -> Vec<ToolSourceEntry> {
        self.entries
    }
}

/// Remove repeated labels, keeping first-occurrence order.
///
/// Comparison is exact. Labels differing only in case survive as separate
/// labels, and since the catalog looks labels up case-insensitively both
/// contribute their hooks.
pub(crate) fn dedup_labels(labels: &[&str]) -> Vec<String> {
    let mut seen = HashSet::new();
    labels
        .iter()
        .filter(|label| seen.insert(**label))
        .map(|label| label.to_string())
        .collect()
}

/// Resolve labels (and optional extras) into ordered tool-source entries.
///
/// Base contributions come first, then each distinct label's contributions in
/// label order, then `extra` (e.g. branch protection) merged with the same
/// rule. Custom entries are appended last and never merged.
pub(crate) fn resolve(
    catalog: &Catalog,
    labels: &[&str],
    extra: Option<ContributionRecord>,
    custom: &[CustomEntry],
) -> Resolution {
    let mut merger = SourceMerger::default();
    for record in catalog.base_contributions() {
        merger.merge(record);
    }

    let labels = dedup_labels(labels);
    for label in &labels {
        if !catalog.contains(label) {
            tracing::debug!(label = %label, "Label unknown to catalog");
            continue;
        }
        for record in catalog.contributions_for(label) {
            tracing::debug!(
                label = %label,
                repo = %record.repo,
                hooks = record.hooks.len(),
                "Merging contribution"
            );
            merger.merge(record);
        }
    }

    if let Some(record) = extra {
        merger.merge(&record);
    }

    let mut entries = merger.into_entries();
    entries.extend(custom.iter().cloned());

    Resolution {
        labels,
        entries,
        custom_count: custom.len(),
    }
}
