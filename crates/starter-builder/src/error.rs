//! Error types for starter-builder

use std::path::{Path, PathBuf};

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse custom hooks file {path}: {message}")]
    CustomHooksParse { path: PathBuf, message: String },

    #[error("Invalid custom hooks file {path}: {reason}")]
    InvalidCustomHooks { path: PathBuf, reason: String },

    #[error("Invalid Python version '{version}': must start with \"python\" (e.g., python3.12)")]
    InvalidPythonVersion { version: String },
}

impl Error {
    pub fn io(path: impl AsRef<Path>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_python_version_display() {
        let err = Error::InvalidPythonVersion {
            version: "3.12".to_string(),
        };
        assert!(err.to_string().contains("'3.12'"));
        assert!(err.to_string().contains("python3.12"));
    }

    #[test]
    fn test_invalid_custom_hooks_display() {
        let err = Error::InvalidCustomHooks {
            path: PathBuf::from(".pre-commit-starter-hooks.yaml"),
            reason: "missing 'repos' key".to_string(),
        };
        assert!(err.to_string().contains("repos"));
        assert!(err.to_string().contains(".pre-commit-starter-hooks.yaml"));
    }
}
