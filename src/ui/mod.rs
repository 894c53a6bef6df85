//! User interface
//!
//! CLI parsing and colored terminal output.

pub mod cli;
pub mod color;

// Re-export commonly used items
pub use cli::{Cli, cli_to_config};
