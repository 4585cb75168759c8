//! Repository walk and confidence scoring

use crate::info::TechInfo;
use crate::patterns::{IMPLIED_TECHNOLOGIES, TECH_PATTERNS, TechRule};
use crate::versions::{self, Versions};
use std::collections::BTreeSet;
use std::fs;
use std::path::{Component, Path};
use walkdir::{DirEntry, WalkDir};

/// Directory names never descended into.
pub const SKIPPED_DIRS: &[&str] = &[
    ".git",
    ".svn",
    ".hg",
    "__pycache__",
    ".venv",
    "node_modules",
    ".pytest_cache",
];

/// Files examined before the walk stops.
pub const MAX_FILES_TO_SCAN: usize = 5000;

/// Files larger than this many bytes are ignored.
pub const MAX_FILE_SIZE: u64 = 10_000;

const HIGH_FILE_COUNT: usize = 5;
const MEDIUM_FILE_COUNT: usize = 3;
const LOW_FILE_COUNT: usize = 2;

const HIGH_CONFIDENCE: f64 = 0.8;
const MEDIUM_CONFIDENCE: f64 = 0.5;
const LOW_CONFIDENCE: f64 = 0.5;
const MINIMAL_CONFIDENCE: f64 = 0.3;

/// Detects technologies used in a directory tree.
#[derive(Debug, Clone)]
pub struct Detector {
    rules: Vec<TechRule>,
    max_files: usize,
}

impl Default for Detector {
    fn default() -> Self {
        Self::new()
    }
}

impl Detector {
    /// Create a detector over the built-in pattern table.
    pub fn new() -> Self {
        Self {
            rules: TECH_PATTERNS.iter().map(TechRule::compile).collect(),
            max_files: MAX_FILES_TO_SCAN,
        }
    }

    /// Override the number of files examined before the walk stops.
    pub fn with_max_files(mut self, max_files: usize) -> Self {
        self.max_files = max_files;
        self
    }

    /// Technology names this detector can report, in table order.
    pub fn technologies(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.rules.iter().map(|rule| rule.name)
    }

    /// Scan `root` and report every technology with at least one file.
    ///
    /// Results follow the pattern table order.
    pub fn scan(&self, root: &Path) -> Vec<TechInfo> {
        let mut state = ScanState::new(self.rules.len());
        self.walk(root, &mut state);
        tracing::debug!(root = %root.display(), files = state.scanned, "Scan finished");

        self.apply_implied(&mut state);

        let mut found = Vec::new();
        for (i, rule) in self.rules.iter().enumerate() {
            let count = state.counts[i];
            if count == 0 {
                continue;
            }
            let version = state.versions.get(rule.name).cloned();
            let files = std::mem::take(&mut state.files[i]);
            found.push(TechInfo {
                name: rule.name.to_string(),
                count,
                confidence: confidence(rule.name, count, version.is_some(), &files),
                version,
                files,
            });
        }
        found
    }

    fn walk(&self, root: &Path, state: &mut ScanState) {
        let walker = WalkDir::new(root)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(|e| e.depth() == 0 || !is_skipped_dir(e));

        for entry in walker {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    tracing::debug!(error = %e, "Skipping unreadable entry");
                    continue;
                }
            };
            if entry.file_type().is_dir() {
                continue;
            }
            if state.scanned >= self.max_files {
                tracing::debug!(limit = self.max_files, "File limit reached");
                break;
            }
            self.visit_file(root, entry.path(), state);
        }
    }

    fn visit_file(&self, root: &Path, path: &Path, state: &mut ScanState) {
        match fs::metadata(path) {
            Ok(meta) if meta.is_file() && meta.len() <= MAX_FILE_SIZE => {}
            Ok(_) => return,
            Err(e) => {
                tracing::debug!(path = %path.display(), error = %e, "Skipping file");
                return;
            }
        }

        let rel_path = relative_path(root, path);
        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        state.scanned += 1;

        let mut matched = false;
        let mut version_file = false;
        for (i, rule) in self.rules.iter().enumerate() {
            if rule.matches_path(&rel_path) {
                state.record(i, &rel_path);
                version_file |= rule.is_version_file(&file_name);
                matched = true;
            }
        }

        if !matched {
            let content = match fs::read(path) {
                Ok(bytes) => String::from_utf8_lossy(&bytes).into_owned(),
                Err(e) => {
                    tracing::debug!(path = %path.display(), error = %e, "Skipping unreadable file");
                    return;
                }
            };
            if let Some((i, rule)) = self
                .rules
                .iter()
                .enumerate()
                .find(|(_, rule)| rule.matches_content(&content))
            {
                tracing::debug!(path = %rel_path, tech = rule.name, "Matched by content");
                state.record(i, &rel_path);
                version_file = rule.is_version_file(&file_name);
            }
        }

        if version_file {
            versions::detect(path, &file_name, &mut state.versions);
        }
    }

    fn apply_implied(&self, state: &mut ScanState) {
        let index_of = |name: &str| self.rules.iter().position(|rule| rule.name == name);

        for &(implied, implied_by) in IMPLIED_TECHNOLOGIES {
            let Some(target) = index_of(implied) else { continue };
            if state.counts[target] > 0 {
                continue;
            }
            let source = implied_by
                .iter()
                .copied()
                .find(|&by| index_of(by).is_some_and(|i| state.counts[i] > 0));
            if let Some(source) = source {
                state.counts[target] = 1;
                state
                    .versions
                    .entry(implied)
                    .or_insert_with(|| format!("implied-by-{source}"));
                tracing::debug!(tech = implied, by = source, "Implied technology");
            }
        }
    }
}

fn is_skipped_dir(entry: &DirEntry) -> bool {
    entry.file_type().is_dir()
        && entry
            .file_name()
            .to_str()
            .is_some_and(|name| SKIPPED_DIRS.contains(&name))
}

struct ScanState {
    counts: Vec<usize>,
    files: Vec<BTreeSet<String>>,
    versions: Versions,
    scanned: usize,
}

impl ScanState {
    fn new(techs: usize) -> Self {
        Self {
            counts: vec![0; techs],
            files: vec![BTreeSet::new(); techs],
            versions: Versions::new(),
            scanned: 0,
        }
    }

    fn record(&mut self, tech: usize, rel_path: &str) {
        self.counts[tech] += 1;
        self.files[tech].insert(rel_path.to_string());
    }
}

/// `/`-separated path of `path` below `root`.
fn relative_path(root: &Path, path: &Path) -> String {
    let rel = path.strip_prefix(root).unwrap_or(path);
    rel.components()
        .filter_map(|c| match c {
            Component::Normal(part) => Some(part.to_string_lossy()),
            _ => None,
        })
        .collect::<Vec<_>>()
        .join("/")
}

fn confidence(tech: &str, count: usize, has_version: bool, files: &BTreeSet<String>) -> f64 {
    if count == 0 {
        return 0.0;
    }

    let mut confidence = if count >= HIGH_FILE_COUNT {
        HIGH_CONFIDENCE
    } else if count >= MEDIUM_FILE_COUNT {
        MEDIUM_CONFIDENCE
    } else if count >= LOW_FILE_COUNT {
        LOW_CONFIDENCE
    } else {
        MINIMAL_CONFIDENCE
    };

    if has_version {
        confidence += 0.1;
    }
    if tech == "python" && files.contains("requirements.txt") {
        confidence += 0.2;
    }
    if tech == "javascript" && files.contains("package.json") {
        confidence += 0.2;
    }
    // Any workflow file is a strong signal.
    if tech == "github_actions" {
        confidence = HIGH_CONFIDENCE + 0.1;
    }

    confidence.min(1.0)
}
