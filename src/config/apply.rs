use clap::ArgMatches;
use clap::parser::ValueSource;

use crate::args::RunArgs;
use crate::error::ConfigError;

use super::types::ConfigFile;

/// Applies configuration values to CLI arguments. Options given explicitly
/// on the command line are left untouched.
///
/// # Errors
///
/// Returns an error when a config value cannot be interpreted.
pub fn apply_config(
    args: &mut RunArgs,
    matches: &ArgMatches,
    config: &ConfigFile,
) -> Result<(), ConfigError> {
    if !is_cli(matches, "url")
        && let Some(url) = config.url.clone()
    {
        args.url = Some(url);
    }

    if !is_cli(matches, "rps")
        && let Some(rps) = config.rps
    {
        args.rps = rps;
    }

    if !is_cli(matches, "duration")
        && let Some(duration) = config.duration
    {
        args.duration = duration;
    }

    if !is_cli(matches, "request_timeout")
        && let Some(timeout) = config.timeout.as_ref()
    {
        args.request_timeout = timeout
            .to_duration()
            .map_err(|err| ConfigError::InvalidTimeout { source: err })?;
    }

    if !is_cli(matches, "max_idle_per_host")
        && let Some(max_idle) = config.max_idle_per_host
    {
        args.max_idle_per_host = max_idle;
    }

    if !is_cli(matches, "max_in_flight")
        && let Some(max_in_flight) = config.max_in_flight
    {
        args.max_in_flight = Some(max_in_flight);
    }

    if !is_cli(matches, "csv_path")
        && let Some(path) = config.csv_path.clone()
    {
        args.csv_path = path;
    }

    if !is_cli(matches, "no_csv")
        && let Some(no_csv) = config.no_csv
    {
        args.no_csv = no_csv;
    }

    if !is_set_explicitly(matches, "no_color")
        && let Some(no_color) = config.no_color
    {
        args.no_color = no_color;
    }

    if !is_cli(matches, "verbose")
        && let Some(verbose) = config.verbose
    {
        args.verbose = verbose;
    }

    Ok(())
}

fn is_cli(matches: &ArgMatches, name: &str) -> bool {
    matches.value_source(name) == Some(ValueSource::CommandLine)
}

/// `NO_COLOR` in the environment outranks the config file as well.
fn is_set_explicitly(matches: &ArgMatches, name: &str) -> bool {
    matches!(
        matches.value_source(name),
        Some(ValueSource::CommandLine | ValueSource::EnvVariable)
    )
}
