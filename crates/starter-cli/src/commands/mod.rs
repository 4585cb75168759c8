//! Command implementations

pub mod generate;
pub mod list;

pub use generate::{GenerateOptions, run_generate};
pub use list::run_list_technologies;
