//! Configuration management
//!
//! This module loads the optional TOML config file, merges it with CLI
//! arguments and resolves both into the immutable [`RunConfig`] shared by
//! every component for the lifetime of the process.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::core::constants::{defaults, exit_policies, output_formats};
use crate::core::error::{HtmlValidatorError, Result};
use crate::core::types::{ExitPolicy, Format};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Validator endpoint, defaults to the public W3C checker
    pub validator: Option<String>,

    /// Report format requested from the validator (text, json)
    pub format: Option<String>,

    /// Extra headers sent with every request
    pub headers: Option<BTreeMap<String, String>>,

    /// File extension picked up in batch mode
    pub extension: Option<String>,

    /// Directory marker skipped in batch mode
    pub exclude_dir: Option<String>,

    /// How several targets fold into one exit code (any, last)
    pub exit_policy: Option<String>,

    /// Custom User-Agent header
    pub user_agent: Option<String>,

    /// Request timeout in seconds, none by default
    pub timeout: Option<u64>,

    pub verbose: Option<bool>,
    pub quiet: Option<bool>,

    /// Never fail the exit code because of validation results
    pub noexiterr: Option<bool>,
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            HtmlValidatorError::Config(format!(
                "Could not read config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| {
            HtmlValidatorError::Config(format!(
                "Invalid TOML in config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Find the config file in `dir` or one of its parents
    pub fn find_in(dir: &Path) -> Option<PathBuf> {
        dir.ancestors()
            .take(defaults::CONFIG_PARENT_LEVELS + 1)
            .map(|d| d.join(defaults::CONFIG_FILE_NAME))
            .find(|candidate| candidate.is_file())
    }

    /// Load the nearest config file, falling back to defaults when none exists
    pub fn load_from_standard_locations(dir: &Path) -> Result<Self> {
        match Self::find_in(dir) {
            Some(path) => Self::load_from_file(path),
            None => Ok(Self::default()),
        }
    }

    /// Merge this config with CLI arguments (CLI takes precedence)
    pub fn merge_with_cli(&mut self, cli_config: &CliConfig) {
        if let Some(ref validator) = cli_config.validator {
            self.validator = Some(validator.clone());
        }
        if let Some(ref format) = cli_config.format {
            self.format = Some(format.clone());
        }
        if let Some(ref headers) = cli_config.headers {
            self.headers = Some(headers.clone());
        }
        if let Some(ref extension) = cli_config.extension {
            self.extension = Some(extension.clone());
        }
        if let Some(ref exclude_dir) = cli_config.exclude_dir {
            self.exclude_dir = Some(exclude_dir.clone());
        }
        if let Some(ref exit_policy) = cli_config.exit_policy {
            self.exit_policy = Some(exit_policy.clone());
        }
        if cli_config.verbose {
            self.verbose = Some(true);
        }
        if cli_config.quiet {
            self.quiet = Some(true);
        }
        if cli_config.noexiterr {
            self.noexiterr = Some(true);
        }
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        if let Some(ref format) = self.format
            && !output_formats::ALL.contains(&format.as_str())
        {
            return Err(HtmlValidatorError::Config(format!(
                "Invalid format '{format}'. Expected one of: {}.",
                output_formats::ALL.join(", ")
            )));
        }

        if let Some(ref policy) = self.exit_policy
            && !exit_policies::ALL.contains(&policy.as_str())
        {
            return Err(HtmlValidatorError::Config(format!(
                "Invalid exit policy '{policy}'. Expected one of: {}.",
                exit_policies::ALL.join(", ")
            )));
        }

        if let Some(ref extension) = self.extension
            && extension.trim_start_matches('.').is_empty()
        {
            return Err(HtmlValidatorError::Config(
                "File extension cannot be empty.".to_string(),
            ));
        }

        if self.timeout == Some(0) {
            return Err(HtmlValidatorError::Config(
                "Timeout cannot be 0. Expected a positive integer representing seconds."
                    .to_string(),
            ));
        }

        Ok(())
    }
}

/// Document inputs given on the command line
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Inputs {
    /// Positional argument, a URL when it contains "http", a file otherwise
    pub query: Option<String>,
    pub file: Option<PathBuf>,
    pub data: Option<String>,
    pub url: Option<String>,
}

impl Inputs {
    pub fn is_empty(&self) -> bool {
        self.query.is_none() && self.file.is_none() && self.data.is_none() && self.url.is_none()
    }
}

/// Configuration options that can come from CLI
#[derive(Debug, Default)]
pub struct CliConfig {
    pub inputs: Inputs,

    pub validator: Option<String>,      // --validator
    pub format: Option<String>,         // --format
    pub headers: Option<BTreeMap<String, String>>, // --headers
    pub extension: Option<String>,      // --ext
    pub exclude_dir: Option<String>,    // --exclude-dir
    pub exit_policy: Option<String>,    // --exit-policy

    pub all_files: bool, // --allfiles
    pub ignore: Option<String>, // --ignore
    pub verbose: bool,   // --verbose
    pub quiet: bool,     // --quiet
    pub noexiterr: bool, // --noexiterr

    pub config_file: Option<String>, // --config
    pub no_config: bool,             // --no-config
}

/// Resolved settings for one process run. Built once, never mutated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    pub inputs: Inputs,
    pub all_files: bool,
    pub quiet: bool,
    pub verbose: bool,
    /// Lines containing this text are dropped from text reports
    pub ignore: Option<String>,
    pub no_exit_err: bool,
    pub format: Format,
    pub extension: String,
    pub exclude_dir: String,
    pub validator: Option<String>,
    pub headers: Option<BTreeMap<String, String>>,
    pub exit_policy: ExitPolicy,
    pub user_agent: String,
    pub timeout: Option<Duration>,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            inputs: Inputs::default(),
            all_files: false,
            quiet: false,
            verbose: false,
            ignore: None,
            no_exit_err: false,
            format: Format::default(),
            extension: defaults::FILE_EXTENSION.to_string(),
            exclude_dir: defaults::EXCLUDED_DIR.to_string(),
            validator: None,
            headers: None,
            exit_policy: ExitPolicy::default(),
            user_agent: default_user_agent().to_string(),
            timeout: None,
        }
    }
}

pub fn default_user_agent() -> &'static str {
    concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"))
}

impl RunConfig {
    /// Combine a merged config file with the CLI-only settings
    pub fn resolve(config: &Config, cli_config: &CliConfig) -> Result<Self> {
        config.validate()?;

        // An ignore string only works on text reports
        let format = if cli_config.ignore.is_some() {
            Format::Text
        } else {
            config
                .format
                .as_deref()
                .unwrap_or(output_formats::DEFAULT)
                .parse()?
        };

        let exit_policy = config
            .exit_policy
            .as_deref()
            .unwrap_or(exit_policies::DEFAULT)
            .parse()?;

        Ok(Self {
            inputs: cli_config.inputs.clone(),
            all_files: cli_config.all_files,
            quiet: config.quiet.unwrap_or(false),
            verbose: config.verbose.unwrap_or(false),
            ignore: cli_config.ignore.clone(),
            no_exit_err: config.noexiterr.unwrap_or(false),
            format,
            extension: config
                .extension
                .as_deref()
                .unwrap_or(defaults::FILE_EXTENSION)
                .trim_start_matches('.')
                .to_string(),
            exclude_dir: config
                .exclude_dir
                .clone()
                .unwrap_or_else(|| defaults::EXCLUDED_DIR.to_string()),
            validator: config.validator.clone(),
            headers: config.headers.clone(),
            exit_policy,
            user_agent: config
                .user_agent
                .clone()
                .unwrap_or_else(|| default_user_agent().to_string()),
            timeout: config.timeout.map(Duration::from_secs),
        })
    }
}

/// Parse the JSON object given to `--headers`
pub fn parse_headers(raw: &str) -> Result<BTreeMap<String, String>> {
    serde_json::from_str(raw).map_err(|e| {
        HtmlValidatorError::InvalidArgument(format!(
            "--headers expects a JSON object of string values: {e}"
        ))
    })
}
