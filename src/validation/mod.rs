//! Markup validation
//!
//! This module talks to the validation service and classifies
//! its answers.

pub mod classifier;
pub mod client;

// Re-export commonly used items
pub use classifier::{classify, render_body};
pub use client::{HttpValidator, Validate};
