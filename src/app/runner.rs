use tokio::time::Instant;
use tracing::{error, info};

use crate::config::{ClientSettings, ReportSettings, RunConfig};
use crate::error::AppResult;
use crate::http;
use crate::metrics::{self, ResultSet, Summary};

use super::export::export_csv;
use super::summary::{format_elapsed, print_summary};

const BANNER_OPEN: &str =
    "--------------------------- Welcome to shex ---------------------------";
const BANNER_CLOSE: &str =
    "------------------------- Thanks for using shex -----------------------";

pub(crate) struct RunOutcome {
    pub(crate) summary: Summary,
    pub(crate) results: ResultSet,
}

/// Sends the configured load, prints the report and exports the records.
///
/// Request failures never fail the run; only client construction does.
pub(crate) async fn run_local(
    config: &RunConfig,
    client_settings: &ClientSettings,
    report: &ReportSettings,
) -> AppResult<RunOutcome> {
    println!("\n\n{}", BANNER_OPEN);
    let client = http::build_client(client_settings)?;

    println!(
        "Sending {} requests per second to {} for {} seconds",
        config.rps(),
        config.url(),
        config.duration_secs()
    );

    let started = Instant::now();
    let in_flight = http::dispatch(&client, config).await;
    println!(
        "\nRequests sent in {}, waiting for responses...\n",
        format_elapsed(in_flight.send_phase())
    );

    let results = in_flight.join().await;
    println!("\nLoad Testing took {}", format_elapsed(started.elapsed()));

    let summary = metrics::summarize(&results, config);
    info!(
        sent = summary.requests_sent,
        succeeded = summary.requests_succeeded,
        recorded = results.len(),
        "Run complete"
    );
    print_summary(&summary, report.no_color);

    if let Some(path) = report.csv_path.as_deref() {
        match export_csv(path, &results).await {
            Ok(()) => println!("Results saved to {}", path.display()),
            Err(err) => {
                error!("CSV export failed: {}", err);
                println!("Failed to save results to {}: {}", path.display(), err);
            }
        }
    }

    println!("{}", BANNER_CLOSE);
    Ok(RunOutcome { summary, results })
}
