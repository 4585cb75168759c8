//! Configuration builder for pre-commit-starter.
//!
//! Resolves an ordered list of technology labels against a
//! [`Catalog`](starter_catalog::Catalog), merges contributions that target
//! the same tool source, appends caller-supplied custom entries and renders
//! the result as `.pre-commit-config.yaml` text.
//!
//! # Ordering
//!
//! Base contributions always come first. A tool source then appears at the
//! position of the first label that references it; later labels only extend
//! its hook list. Custom entries are appended last, unmerged.

pub mod builder;
pub mod custom;
pub mod error;
pub mod options;
pub mod render;
pub mod resolve;

pub use builder::ConfigBuilder;
pub use custom::{CUSTOM_HOOKS_FILE, load_custom_hooks, parse_custom_hooks};
pub use error::{Error, Result};
pub use options::BuildOptions;
pub use render::{GENERATOR_URL, render_header};
pub use resolve::Resolution;
