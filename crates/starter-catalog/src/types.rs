//! Core types shared by the catalog and the config builder

use serde::{Deserialize, Serialize};
use serde_yaml::{Mapping, Value};

/// A single hook belonging to a tool source.
///
/// Only `id` is interpreted (for description lookup). Every other field is
/// carried through to the rendered document as-is, including unknown keys
/// collected in `extra`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HookDefinition {
    /// Hook identifier (e.g., "ruff", "prettier")
    pub id: String,
    /// Display name shown by pre-commit
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Extra command-line arguments
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub args: Option<Vec<String>>,
    /// File-type filter
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub types: Option<Vec<String>>,
    /// Git hook stages the hook runs in
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stages: Option<Vec<String>>,
    /// Any other fields, kept in insertion order
    #[serde(flatten)]
    pub extra: Mapping,
}

impl HookDefinition {
    /// Create a hook with only an identifier.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: None,
            args: None,
            types: None,
            stages: None,
            extra: Mapping::new(),
        }
    }

    /// Set the display name (builder pattern).
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Set the argument list (builder pattern).
    pub fn with_args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args = Some(args.into_iter().map(Into::into).collect());
        self
    }

    /// Set the file-type filter (builder pattern).
    pub fn with_types<I, S>(mut self, types: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.types = Some(types.into_iter().map(Into::into).collect());
        self
    }

    /// Set the stages (builder pattern).
    pub fn with_stages<I, S>(mut self, stages: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.stages = Some(stages.into_iter().map(Into::into).collect());
        self
    }

    /// Add an arbitrary extra field (builder pattern).
    pub fn with_extra(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.extra.insert(Value::String(key.into()), value.into());
        self
    }
}

/// What one technology label adds to one tool source.
#[derive(Debug, Clone, PartialEq)]
pub struct ContributionRecord {
    /// Tool source identifier (the upstream repository URL)
    pub repo: String,
    /// Pinned upstream revision
    pub rev: Option<String>,
    /// Hooks contributed to the tool source, in order
    pub hooks: Vec<HookDefinition>,
}

impl ContributionRecord {
    /// Create a record pinned to `rev`.
    pub fn new(repo: impl Into<String>, rev: impl Into<String>, hooks: Vec<HookDefinition>) -> Self {
        Self {
            repo: repo.into(),
            rev: Some(rev.into()),
            hooks,
        }
    }

    /// Hook identifiers in contribution order.
    pub fn hook_ids(&self) -> impl Iterator<Item = &str> {
        self.hooks.iter().map(|h| h.id.as_str())
    }
}

/// One top-level entry of the generated document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolSourceEntry {
    /// Tool source identifier ("local" and "meta" are valid for custom entries)
    pub repo: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rev: Option<String>,
    #[serde(default)]
    pub hooks: Vec<HookDefinition>,
    /// Any other fields, kept in insertion order
    #[serde(flatten)]
    pub extra: Mapping,
}

/// Tool sources that never carry a `rev`: in-repository hooks and pre-commit's own.
pub const UNPINNED_SOURCES: &[&str] = &["local", "meta"];

/// A caller-supplied entry, injected into the document verbatim.
pub type CustomEntry = ToolSourceEntry;

impl ToolSourceEntry {
    /// Hook identifiers in order.
    pub fn hook_ids(&self) -> Vec<&str> {
        self.hooks.iter().map(|h| h.id.as_str()).collect()
    }

    /// Whether pre-commit resolves this tool source without a pinned `rev`.
    pub fn is_unpinned(&self) -> bool {
        UNPINNED_SOURCES.contains(&self.repo.as_str())
    }
}

impl From<ContributionRecord> for ToolSourceEntry {
    fn from(record: ContributionRecord) -> Self {
        Self {
            repo: record.repo,
            rev: record.rev,
            hooks: record.hooks,
            extra: Mapping::new(),
        }
    }
}
