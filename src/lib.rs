//! Batch HTML validation against a Nu HTML Checker compatible service.
//!
//! Targets are a single file, URL or inline markup, or every matching file
//! below the working directory. Each target is submitted to the validator,
//! the report is classified and printed, and the run folds the per-target
//! outcomes into an exit code.

pub mod config;
pub mod core;
pub mod discovery;
pub mod logging;
pub mod runner;
pub mod ui;
pub mod validation;

pub use config::{CliConfig, Config, Inputs, RunConfig};
pub use crate::core::{HtmlValidatorError, Result};
pub use runner::run;
pub use validation::{HttpValidator, Validate};
