//! Build options beyond the label list

use crate::error::{Error, Result};

/// Optional document settings applied by [`ConfigBuilder`](crate::ConfigBuilder).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BuildOptions {
    /// Rendered as `default_language_version.python`
    pub python_version: Option<String>,
    /// Branches guarded by `no-commit-to-branch` at push time
    pub protected_branches: Vec<String>,
}

impl BuildOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the default Python interpreter (e.g., "python3.12").
    ///
    /// Rejects values that do not start with `python`.
    pub fn with_python_version(mut self, version: impl Into<String>) -> Result<Self> {
        let version = version.into();
        if !version.starts_with("python") {
            return Err(Error::InvalidPythonVersion { version });
        }
        self.python_version = Some(version);
        Ok(self)
    }

    /// Set the branches to protect (builder pattern).
    pub fn with_protected_branches<I, S>(mut self, branches: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.protected_branches = branches.into_iter().map(Into::into).collect();
        self
    }
}
