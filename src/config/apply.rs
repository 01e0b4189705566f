use clap::ArgMatches;
use clap::parser::ValueSource;

use crate::args::{KronosArgs, PositiveUsize};
use crate::error::{AppError, AppResult, ConfigError};

use super::types::ConfigFile;

/// Applies configuration values to CLI arguments. Values given on the
/// command line (or through their env var) win.
///
/// # Errors
///
/// Returns an error when a config value is out of range.
pub fn apply_config(
    args: &mut KronosArgs,
    matches: &ArgMatches,
    config: &ConfigFile,
) -> AppResult<()> {
    if !is_explicit(matches, "threshold")
        && let Some(threshold) = config.threshold.as_ref()
    {
        args.threshold = Some(threshold.to_raw());
    }

    if !is_explicit(matches, "workers")
        && let Some(workers) = config.workers
    {
        args.workers = PositiveUsize::try_from(workers).map_err(|err| {
            AppError::config(ConfigError::FieldMustBePositive {
                field: "workers".to_owned(),
                source: err,
            })
        })?;
    }

    if !is_explicit(matches, "request_timeout")
        && let Some(timeout) = config.timeout.as_ref()
    {
        args.request_timeout = timeout.to_duration().map_err(|err| {
            AppError::config(ConfigError::InvalidDuration {
                field: "timeout".to_owned(),
                source: err,
            })
        })?;
    }

    if !is_explicit(matches, "fail_fast")
        && let Some(fail_fast) = config.fail_fast
    {
        args.fail_fast = fail_fast;
    }

    if !is_explicit(matches, "csv")
        && let Some(csv) = config.csv.clone()
    {
        args.csv = Some(csv);
    }

    if !is_explicit(matches, "export_json")
        && let Some(path) = config.export_json.clone()
    {
        args.export_json = Some(path);
    }

    if !is_explicit(matches, "quiet")
        && let Some(quiet) = config.quiet
    {
        args.quiet = quiet;
    }

    Ok(())
}

fn is_explicit(matches: &ArgMatches, name: &str) -> bool {
    matches!(
        matches.value_source(name),
        Some(ValueSource::CommandLine | ValueSource::EnvVariable)
    )
}
