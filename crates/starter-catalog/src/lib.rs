//! Hook catalog for pre-commit-starter.
//!
//! Maps technology labels (e.g. `python`, `go`) to the pre-commit tool
//! sources and hooks they contribute, plus the base contributions every
//! generated configuration carries and a table of hook descriptions.
//!
//! The catalog is a plain value: construct it once with
//! [`Catalog::builtin`] (or assemble an alternate one with
//! [`Catalog::new`] and [`Catalog::register`]) and pass it by reference.

pub mod builtins;
mod store;
mod types;

pub use store::Catalog;
pub use types::{
    ContributionRecord, CustomEntry, HookDefinition, ToolSourceEntry, UNPINNED_SOURCES,
};
