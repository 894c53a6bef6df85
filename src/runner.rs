//! Runs validation over the resolved targets and computes the exit code

use log::debug;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use crate::config::{Inputs, RunConfig};
use crate::core::constants::{exit_codes, messages};
use crate::core::error::{HtmlValidatorError, Result};
use crate::core::types::{
    ExitPolicy, Outcome, Source, Target, ValidationRequest, ValidationResponse,
};
use crate::discovery::{DocumentFinder, Finder, display_path};
use crate::logging;
use crate::ui::color::{Color, write_line};
use crate::validation::{Validate, classify, render_body};

/// The single document named on the command line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SingleTarget {
    Data(String),
    File(PathBuf),
    Url(String),
}

impl SingleTarget {
    /// Pick the document to validate.
    ///
    /// Inline data beats `--file`, which beats `--url`. The positional query
    /// is a URL when it contains "http" and a file path otherwise.
    pub fn resolve(inputs: &Inputs) -> Option<Self> {
        if let Some(ref data) = inputs.data {
            return Some(SingleTarget::Data(data.clone()));
        }
        if let Some(ref file) = inputs.file {
            return Some(SingleTarget::File(file.clone()));
        }
        if let Some(ref url) = inputs.url {
            return Some(SingleTarget::Url(url.clone()));
        }
        inputs.query.as_ref().map(|query| {
            if query.contains("http") {
                SingleTarget::Url(query.clone())
            } else {
                SingleTarget::File(PathBuf::from(query))
            }
        })
    }
}

/// What happened to one target
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TargetStatus {
    Passed,
    Failed,
    /// Empty input, neither passed nor failed
    Skipped,
}

/// Folds target statuses into an exit code according to the exit policy
#[derive(Debug, Clone)]
pub struct Tally {
    policy: ExitPolicy,
    validated: usize,
    failures: usize,
    skipped: usize,
    last_failed: bool,
}

impl Tally {
    pub fn new(policy: ExitPolicy) -> Self {
        Self {
            policy,
            validated: 0,
            failures: 0,
            skipped: 0,
            last_failed: false,
        }
    }

    pub fn record(&mut self, status: TargetStatus) {
        match status {
            TargetStatus::Passed => {
                self.validated += 1;
                self.last_failed = false;
            }
            TargetStatus::Failed => {
                self.validated += 1;
                self.failures += 1;
                self.last_failed = true;
            }
            TargetStatus::Skipped => self.skipped += 1,
        }
    }

    pub fn failed(&self) -> bool {
        match self.policy {
            ExitPolicy::Any => self.failures > 0,
            ExitPolicy::Last => self.last_failed,
        }
    }

    pub fn exit_code(&self, no_exit_err: bool) -> i32 {
        if self.failed() && !no_exit_err {
            exit_codes::FAILURE
        } else {
            exit_codes::SUCCESS
        }
    }
}

/// Validate every target selected by `config`.
///
/// Batch mode walks `cwd`; relative single-file paths are resolved against
/// it. Returns the process exit code. Transport errors are reported on
/// `err` and count as failures; any other error aborts the run.
pub async fn run<V, O, E>(
    config: &RunConfig,
    validator: &V,
    cwd: &Path,
    out: &mut O,
    err: &mut E,
) -> Result<i32>
where
    V: Validate + ?Sized,
    O: Write,
    E: Write,
{
    let mut tally = Tally::new(config.exit_policy);

    if config.all_files {
        let finder = Finder::new(config.extension.as_str(), config.exclude_dir.as_str());
        for (index, path) in finder.find(cwd)?.enumerate() {
            let path = path?;
            let display = display_path(&path, Some(cwd));
            logging::log_discovered(index, &display);

            let contents = fs::read(&path)?;
            let status = validate_target(
                config,
                validator,
                &Target::file(display),
                Source::File { path, contents },
                out,
                err,
            )
            .await?;
            tally.record(status);
        }

        if tally.validated + tally.skipped == 0 {
            logging::log_warning(&format!(
                "No .{} files found below {}",
                config.extension,
                cwd.display()
            ));
        }
    } else if let Some(single) = SingleTarget::resolve(&config.inputs) {
        let (target, source) = load_single(single, cwd)?;
        let status = validate_target(config, validator, &target, source, out, err).await?;
        tally.record(status);
    }

    logging::log_run_summary(tally.validated, tally.failures, tally.skipped);
    Ok(tally.exit_code(config.no_exit_err))
}

fn load_single(single: SingleTarget, cwd: &Path) -> Result<(Target, Source)> {
    match single {
        SingleTarget::Data(data) => Ok((Target::data(), Source::Data(data.into_bytes()))),
        SingleTarget::Url(url) => Ok((Target::url(url.clone()), Source::Url(url))),
        SingleTarget::File(path) => {
            let display = display_path(&path, None);
            let full = cwd.join(&path);
            let contents = fs::read(&full).map_err(|e| match e.kind() {
                io::ErrorKind::NotFound => HtmlValidatorError::FileNotFound(display.clone()),
                _ => HtmlValidatorError::Io(e),
            })?;
            Ok((Target::file(display), Source::File { path: full, contents }))
        }
    }
}

async fn validate_target<V, O, E>(
    config: &RunConfig,
    validator: &V,
    target: &Target,
    source: Source,
    out: &mut O,
    err: &mut E,
) -> Result<TargetStatus>
where
    V: Validate + ?Sized,
    O: Write,
    E: Write,
{
    if source.is_empty() {
        write_line(
            out,
            &format!("{}: {}", messages::EMPTY_FILE, target.display),
            Color::Yellow,
        )?;
        return Ok(TargetStatus::Skipped);
    }

    write_line(out, &target.banner(), Color::Cyan)?;

    let request = ValidationRequest::new(source, config.format)
        .with_validator(config.validator.clone())
        .with_headers(config.headers.clone());

    match validator.validate(&request).await {
        Ok(response) => {
            let outcome = classify(&response, config.ignore.is_some());
            logging::log_target_result(&target.display, outcome);
            print_outcome(config, &response, outcome, out)?;

            Ok(if outcome.is_failure() {
                TargetStatus::Failed
            } else {
                TargetStatus::Passed
            })
        }
        Err(e) if e.is_transport() => {
            debug!("Could not validate {}: {e}", target.display);
            writeln!(err, "Error: {e}")?;
            Ok(TargetStatus::Failed)
        }
        Err(e) => Err(e),
    }
}

/// Print the lines following the banner.
///
/// | mode    | valid          | failing                 |
/// |---------|----------------|-------------------------|
/// | default | summary        | summary                 |
/// | verbose | body           | summary + body          |
/// | quiet   | summary        | summary + (narrowed) body |
fn print_outcome<O: Write>(
    config: &RunConfig,
    response: &ValidationResponse,
    outcome: Outcome,
    out: &mut O,
) -> Result<()> {
    let failing = outcome.is_failure();
    let show_summary = failing || !config.verbose;
    let show_body = if failing {
        config.verbose || config.quiet
    } else {
        config.verbose
    };

    if show_summary {
        let color = if failing { Color::Red } else { Color::Green };
        write_line(out, outcome.summary(), color)?;
    }
    if show_body {
        writeln!(out, "{}", render_body(response, outcome, config.quiet)?)?;
    }
    Ok(())
}
