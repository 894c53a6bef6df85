//! Core types and foundational components
//!
//! This module contains the request/response data model, error handling,
//! and constants used throughout the application.

pub mod constants;
pub mod error;
pub mod types;

// Re-export commonly used items for convenience
pub use error::{HtmlValidatorError, Result};
pub use types::{
    ExitPolicy, Format, Message, Outcome, Report, Source, Target, TargetKind, ValidationRequest,
    ValidationResponse,
};
