use clap::{CommandFactory, Parser};
use html_validator::config::{CliConfig, Config, RunConfig};
use html_validator::logging;
use html_validator::runner;
use html_validator::ui::{Cli, cli_to_config};
use html_validator::validation::HttpValidator;

use std::io;
use std::path::Path;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let cli = Cli::parse();

    // Nothing to validate, show how to use the tool
    if cli.has_no_target() {
        let code = match Cli::command().print_help() {
            Ok(()) => 0,
            Err(_) => 1,
        };
        std::process::exit(code);
    }

    match run_html_validator(&cli).await {
        Ok(exit_code) => std::process::exit(exit_code),
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    }
}

/// Resolve configuration, then validate every target
pub async fn run_html_validator(cli: &Cli) -> Result<i32, Box<dyn std::error::Error>> {
    // Flags from the command line until the config file had its say
    logging::init_logger(cli.verbose, cli.quiet);

    let cli_config = cli_to_config(cli)?;
    let cwd = std::env::current_dir()?;

    let config = load_and_merge_config(&cli_config, &cwd)?;
    let run_config = RunConfig::resolve(&config, &cli_config)?;

    logging::set_level(run_config.verbose, run_config.quiet);
    logging::log_config_info(&run_config);

    let validator = HttpValidator::new(&run_config)?;

    let stdout = io::stdout();
    let stderr = io::stderr();
    let exit_code = runner::run(
        &run_config,
        &validator,
        &cwd,
        &mut stdout.lock(),
        &mut stderr.lock(),
    )
    .await?;

    Ok(exit_code)
}

/// Load configuration from file or standard locations and merge with CLI config
pub fn load_and_merge_config(
    cli_config: &CliConfig,
    cwd: &Path,
) -> Result<Config, Box<dyn std::error::Error>> {
    let mut config = if cli_config.no_config {
        Config::default()
    } else if let Some(ref config_file) = cli_config.config_file {
        Config::load_from_file(config_file).inspect_err(|e| {
            logging::log_error(
                &format!("Could not load config file '{config_file}'"),
                Some(e),
            );
        })?
    } else {
        Config::load_from_standard_locations(cwd)?
    };

    // CLI takes precedence
    config.merge_with_cli(cli_config);
    Ok(config)
}
