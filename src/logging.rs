use crate::config::RunConfig;
use crate::core::constants::defaults;
use crate::core::types::Outcome;
use log::{debug, error, info, warn};

/// Initialize the logger with appropriate level based on verbosity.
///
/// The backend accepts everything up to debug; the active level is the
/// global maximum, which `set_level` can change once the config file is read.
pub fn init_logger(verbose: bool, quiet: bool) {
    // A second initialisation (tests) is harmless
    let _ = env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Debug)
        .format_timestamp(None)
        .format_module_path(false)
        .format_target(false)
        .try_init();

    set_level(verbose, quiet);
}

/// Change the active log level
pub fn set_level(verbose: bool, quiet: bool) {
    let level = level_for(verbose, quiet);
    log::set_max_level(level);
    debug!("Log level set to: {level:?}");
}

fn level_for(verbose: bool, quiet: bool) -> log::LevelFilter {
    if quiet {
        log::LevelFilter::Off
    } else if verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Warn
    }
}

/// Log the resolved run configuration
pub fn log_config_info(config: &RunConfig) {
    let validator = config
        .validator
        .as_deref()
        .unwrap_or(defaults::VALIDATOR_URL);
    let header_count = config.headers.as_ref().map_or(0, |h| h.len());

    info!(
        "Configuration: validator={validator}, format={}, headers={header_count}",
        config.format
    );
    info!(
        "Batch: allfiles={}, extension={}, exclude_dir={}, exit_policy={:?}",
        config.all_files, config.extension, config.exclude_dir, config.exit_policy
    );
    debug!(
        "Output: verbose={}, quiet={}, noexiterr={}, ignore={:?}",
        config.verbose, config.quiet, config.no_exit_err, config.ignore
    );
}

/// Log a file found in batch mode
pub fn log_discovered(index: usize, display: &str) {
    debug!("  {}. {display}", index + 1);
}

/// Log one target's outcome
pub fn log_target_result(display: &str, outcome: Outcome) {
    match outcome {
        Outcome::Valid => debug!("✓ {display}"),
        Outcome::Invalid => debug!("✗ {display} -> invalid"),
        Outcome::DocumentNotFound => debug!("✗ {display} -> not found"),
    }
}

/// Log the totals of a run
pub fn log_run_summary(validated: usize, failures: usize, skipped: usize) {
    if failures == 0 {
        info!("Validated {validated} target(s), {failures} failure(s), {skipped} skipped");
    } else {
        warn!("Validated {validated} target(s), {failures} failure(s), {skipped} skipped");
    }
}

/// Log error information
pub fn log_error(message: &str, source: Option<&dyn std::error::Error>) {
    match source {
        Some(err) => error!("{message}: {err}"),
        None => error!("{message}"),
    }
}

/// Log warning information
pub fn log_warning(message: &str) {
    warn!("{message}");
}
