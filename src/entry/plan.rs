use clap::ArgMatches;

use crate::args::RunArgs;
use crate::config::{ClientSettings, ReportSettings, RunConfig, apply_config, load_config};
use crate::error::{AppError, AppResult};

pub(super) struct RunPlan {
    pub(super) run: RunConfig,
    pub(super) client: ClientSettings,
    pub(super) report: ReportSettings,
    pub(super) verbose: bool,
}

/// Merges the optional config file under the CLI arguments and validates
/// the result once.
pub(super) fn build_plan(mut args: RunArgs, matches: &ArgMatches) -> AppResult<RunPlan> {
    if let Some(config) = load_config(args.config.as_deref())? {
        apply_config(&mut args, matches, &config).map_err(AppError::config)?;
    }

    let run = RunConfig::from_args(&args).map_err(AppError::validation)?;

    Ok(RunPlan {
        run,
        client: ClientSettings::from(&args),
        report: ReportSettings::from(&args),
        verbose: args.verbose,
    })
}
