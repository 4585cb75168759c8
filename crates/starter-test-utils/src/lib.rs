//! Shared test fixtures for the pre-commit-starter workspace.
//!
//! Dev-dependency only, never published.
//!
//! - [`git`]: `.git` markers, fake or real
//! - [`project`]: [`TestProject`](project::TestProject), a throwaway
//!   project directory with file helpers

pub mod git;
pub mod project;

pub use project::TestProject;
