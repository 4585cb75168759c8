//! Writing the generated configuration to disk

use crate::error::{CliError, Result};
use fs2::FileExt;
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::Path;

/// Write `content` to `path` via a locked temp file and a rename.
///
/// Readers never observe a partially written configuration.
pub fn write_atomic(path: &Path, content: &[u8]) -> Result<()> {
    let temp_name = format!(
        ".{}.{}.tmp",
        path.file_name()
            .map(|n| n.to_string_lossy())
            .unwrap_or_default(),
        std::process::id()
    );
    let temp_path = path.with_file_name(&temp_name);

    let mut temp_file = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(&temp_path)
        .map_err(|e| CliError::write(&temp_path, e))?;

    temp_file
        .lock_exclusive()
        .map_err(|_| CliError::LockFailed {
            path: path.to_path_buf(),
        })?;

    let written = temp_file
        .write_all(content)
        .and_then(|()| temp_file.sync_all());
    if let Err(e) = written {
        let _ = fs::remove_file(&temp_path);
        return Err(CliError::write(&temp_path, e));
    }

    temp_file.unlock().map_err(|_| CliError::LockFailed {
        path: path.to_path_buf(),
    })?;

    fs::rename(&temp_path, path).map_err(|e| CliError::write(path, e))?;
    tracing::debug!(path = %path.display(), bytes = content.len(), "Wrote configuration");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_write_atomic_replaces_content() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join(".pre-commit-config.yaml");
        fs::write(&path, "old").unwrap();

        write_atomic(&path, b"repos: []\n").unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "repos: []\n");
        let leftovers: Vec<_> = fs::read_dir(temp.path())
            .unwrap()
            .filter_map(|e| e.ok())
            .filter(|e| e.file_name().to_string_lossy().ends_with(".tmp"))
            .collect();
        assert!(leftovers.is_empty());
    }

    #[test]
    fn test_write_atomic_missing_directory() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("missing").join("config.yaml");
        assert!(matches!(
            write_atomic(&path, b"x"),
            Err(CliError::Write { .. })
        ));
    }
}
