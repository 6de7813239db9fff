mod plan;

use std::process::ExitCode;

use clap::{CommandFactory, FromArgMatches};
use tracing::warn;

use crate::app::run_local;
use crate::args::RunArgs;
use crate::error::{AppError, AppResult};
use crate::logger::init_logging;
use plan::{RunPlan, build_plan};

pub(crate) fn run() -> ExitCode {
    match try_run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            report_error(&err);
            ExitCode::FAILURE
        }
    }
}

fn try_run() -> AppResult<()> {
    let matches = RunArgs::command().get_matches();
    let args = RunArgs::from_arg_matches(&matches)?;
    let plan = build_plan(args, &matches)?;

    init_logging(plan.verbose, plan.report.no_color);

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;

    runtime.block_on(execute_plan(plan))
}

async fn execute_plan(plan: RunPlan) -> AppResult<()> {
    let outcome = run_local(&plan.run, &plan.client, &plan.report).await?;
    let recorded = u64::try_from(outcome.results.len()).unwrap_or(u64::MAX);
    if recorded != outcome.summary.requests_sent {
        warn!(
            "Recorded {} outcomes for {} planned requests",
            recorded, outcome.summary.requests_sent
        );
    }
    Ok(())
}

/// Startup validation and config problems go to stdout as a single line;
/// anything else is an unexpected failure and goes to stderr.
fn report_error(err: &AppError) {
    if err.is_user_facing() {
        println!("{}", err);
    } else {
        eprintln!("Error: {}", err);
    }
}
