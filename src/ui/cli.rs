// Command-line interface definitions and parsing for html-validator

use crate::config::{CliConfig, Inputs, parse_headers};
use crate::core::constants::{exit_policies, output_formats};
use crate::core::error::Result;
use clap::{ArgAction, Parser};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about,
    long_about = None,
    disable_version_flag = true
)]
pub struct Cli {
    /// File or URL to validate (treated as a URL when it contains "http")
    pub query: Option<String>,

    // Input
    /// Validate a local file
    #[arg(long, value_name = "PATH", help_heading = "Input")]
    pub file: Option<PathBuf>,

    /// Validate inline markup
    #[arg(long, value_name = "MARKUP", help_heading = "Input")]
    pub data: Option<String>,

    /// Validate a remote document
    #[arg(long, value_name = "URL", help_heading = "Input")]
    pub url: Option<String>,

    /// Validate every matching file below the current directory
    #[arg(long, help_heading = "Input")]
    pub allfiles: bool,

    /// Extension of files validated with --allfiles (default: html)
    #[arg(long, value_name = "EXT", help_heading = "Input")]
    pub ext: Option<String>,

    /// Directory marker skipped by --allfiles (default: node_modules)
    #[arg(long, value_name = "NAME", help_heading = "Input")]
    pub exclude_dir: Option<String>,

    // Validator
    /// Report format requested from the validator
    #[arg(long, value_name = "FORMAT", value_parser = output_formats::ALL, help_heading = "Validator")]
    pub format: Option<String>,

    /// Validator endpoint (default: https://validator.w3.org/nu/)
    #[arg(long, value_name = "URL", help_heading = "Validator")]
    pub validator: Option<String>,

    /// Extra request headers as a JSON object
    #[arg(long, value_name = "JSON", help_heading = "Validator")]
    pub headers: Option<String>,

    /// Drop report lines containing TEXT; forces the text format
    #[arg(
        long,
        value_name = "TEXT",
        num_args = 0..=1,
        require_equals = true,
        default_missing_value = "",
        help_heading = "Validator"
    )]
    pub ignore: Option<String>,

    // Output & Exit Code
    /// Print the full report for every target
    #[arg(long, help_heading = "Output & Exit Code")]
    pub verbose: bool,

    /// Print the report only for failing targets
    #[arg(long, help_heading = "Output & Exit Code")]
    pub quiet: bool,

    /// Always exit with 0, even when validation fails
    #[arg(long, help_heading = "Output & Exit Code")]
    pub noexiterr: bool,

    /// Which targets decide the exit code with --allfiles (default: any)
    #[arg(long, value_name = "POLICY", value_parser = exit_policies::ALL, help_heading = "Output & Exit Code")]
    pub exit_policy: Option<String>,

    // Configuration
    /// Use specific config file
    #[arg(long, value_name = "FILE", help_heading = "Configuration")]
    pub config: Option<String>,

    /// Ignore config files
    #[arg(long, help_heading = "Configuration")]
    pub no_config: bool,

    /// Print version
    #[arg(short = 'v', long, action = ArgAction::Version)]
    pub version: Option<bool>,
}

impl Cli {
    /// True when nothing to validate was given, which shows the help text
    pub fn has_no_target(&self) -> bool {
        self.inputs().is_empty() && !self.allfiles
    }

    /// Document inputs named on the command line
    pub fn inputs(&self) -> Inputs {
        Inputs {
            query: self.query.clone(),
            file: self.file.clone(),
            data: self.data.clone(),
            url: self.url.clone(),
        }
    }
}

/// Convert derive-based CLI arguments to a CliConfig
pub fn cli_to_config(cli: &Cli) -> Result<CliConfig> {
    let headers = cli.headers.as_deref().map(parse_headers).transpose()?;

    Ok(CliConfig {
        inputs: cli.inputs(),
        validator: cli.validator.clone(),
        format: cli.format.clone(),
        headers,
        extension: cli.ext.clone(),
        exclude_dir: cli.exclude_dir.clone(),
        exit_policy: cli.exit_policy.clone(),
        all_files: cli.allfiles,
        ignore: cli.ignore.clone(),
        verbose: cli.verbose,
        quiet: cli.quiet,
        noexiterr: cli.noexiterr,
        config_file: cli.config.clone(),
        no_config: cli.no_config,
    })
}
