//! Loading user-maintained custom hooks
//!
//! The custom hooks file lives at the project root and has the same shape as
//! a pre-commit config: a `repos` list of tool-source entries. Entries are
//! appended to the generated document verbatim.

use crate::error::{Error, Result};
use serde::Deserialize;
use serde_yaml::Value;
use starter_catalog::CustomEntry;
use std::fs;
use std::path::Path;

/// File name of the custom hooks file, relative to the project root.
pub const CUSTOM_HOOKS_FILE: &str = ".pre-commit-starter-hooks.yaml";

#[derive(Debug, Deserialize)]
struct CustomHooksFile {
    repos: Vec<CustomEntry>,
}

/// Load custom entries from `root`/[`CUSTOM_HOOKS_FILE`].
///
/// Returns `Ok(None)` when the file does not exist or is empty.
pub fn load_custom_hooks(root: &Path) -> Result<Option<Vec<CustomEntry>>> {
    let path = root.join(CUSTOM_HOOKS_FILE);
    if !path.is_file() {
        return Ok(None);
    }

    let source = fs::read_to_string(&path).map_err(|e| Error::io(&path, e))?;
    let entries = parse_custom_hooks(&source, &path)?;
    if let Some(entries) = &entries {
        tracing::debug!(path = %path.display(), count = entries.len(), "Loaded custom hooks");
    }
    Ok(entries)
}

/// Parse and validate custom hooks file content.
///
/// `path` is only used for error reporting.
pub fn parse_custom_hooks(source: &str, path: &Path) -> Result<Option<Vec<CustomEntry>>> {
    if source.trim().is_empty() {
        tracing::warn!(path = %path.display(), "Custom hooks file is empty");
        return Ok(None);
    }

    let parse_error = |e: serde_yaml::Error| Error::CustomHooksParse {
        path: path.to_path_buf(),
        message: e.to_string(),
    };

    let value: Value = serde_yaml::from_str(source).map_err(parse_error)?;
    if value.is_null() {
        tracing::warn!(path = %path.display(), "Custom hooks file is empty");
        return Ok(None);
    }

    let invalid = |reason: String| Error::InvalidCustomHooks {
        path: path.to_path_buf(),
        reason,
    };
    validate(&value).map_err(invalid)?;

    let file: CustomHooksFile = serde_yaml::from_value(value).map_err(parse_error)?;
    if let Some(entry) = file.repos.iter().find(|e| e.rev.is_none() && !e.is_unpinned()) {
        return Err(invalid(format!("repository {} has no 'rev' key", entry.repo)));
    }
    Ok(Some(file.repos))
}

fn validate(value: &Value) -> std::result::Result<(), String> {
    let map = value
        .as_mapping()
        .ok_or("file must contain a YAML mapping")?;
    let repos = map.get("repos").ok_or("missing 'repos' key")?;
    let repos = repos.as_sequence().ok_or("'repos' must be a list")?;

    for (i, repo) in repos.iter().enumerate() {
        let repo = repo
            .as_mapping()
            .ok_or_else(|| format!("repository #{} must be a mapping", i + 1))?;
        repo.get("repo")
            .and_then(Value::as_str)
            .ok_or_else(|| format!("repository #{} has no 'repo' key", i + 1))?;
    }
    Ok(())
}
