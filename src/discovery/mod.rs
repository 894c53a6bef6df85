//! Document discovery and path handling
//!
//! This module finds the files validated in batch mode and formats
//! paths for display.

pub mod finder;
pub mod path_utils;

// Re-export commonly used items
pub use finder::{DocumentFinder, Finder, HtmlFiles};
pub use path_utils::display_path;
