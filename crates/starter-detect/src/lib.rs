//! Technology detection for pre-commit-starter.
//!
//! Walks a repository, matches file names and contents against a fixed
//! table of technology patterns and reports what it found with a confidence
//! score. Detection is best effort: unreadable files and directories are
//! skipped and a scan never fails.
//!
//! ```rust,no_run
//! use starter_detect::Detector;
//! use std::path::Path;
//!
//! for tech in Detector::new().scan(Path::new(".")) {
//!     println!("{} ({} files, {:.0}%)", tech.name, tech.count, tech.confidence * 100.0);
//! }
//! ```

mod info;
pub mod patterns;
mod scanner;
mod versions;

pub use info::TechInfo;
pub use scanner::{Detector, MAX_FILES_TO_SCAN, MAX_FILE_SIZE, SKIPPED_DIRS};
