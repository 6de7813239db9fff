use std::sync::Arc;
use std::time::Duration;

use reqwest::Client;
use tokio::sync::{OwnedSemaphorePermit, Semaphore};
use tokio::task::JoinSet;
use tokio::time::{Instant, sleep};
use tracing::{debug, error};

use crate::config::RunConfig;
use crate::metrics::{RequestOutcome, ResultSet, ResultSink};

use super::executor::execute;

/// Spacing between tick starts.
const TICK: Duration = Duration::from_secs(1);
/// Upper bound on the sink's up-front allocation.
const MAX_PREALLOCATED_OUTCOMES: usize = 1_000_000;

/// Requests launched by [`dispatch`] that may still be running.
#[derive(Debug)]
pub struct InFlight {
    tasks: JoinSet<()>,
    sink: Arc<ResultSink>,
    send_phase: Duration,
}

impl InFlight {
    /// Wall-clock time from the first launch to the end of the last tick.
    #[must_use]
    pub const fn send_phase(&self) -> Duration {
        self.send_phase
    }

    /// Number of launched requests that have not been joined yet.
    #[must_use]
    pub fn outstanding(&self) -> usize {
        self.tasks.len()
    }

    /// Waits for every launched request and freezes their outcomes.
    ///
    /// A request task that panicked still counts as one failed outcome, so
    /// the returned set always holds one record per launch.
    pub async fn join(mut self) -> ResultSet {
        while let Some(joined) = self.tasks.join_next().await {
            if let Err(err) = joined {
                error!("Request task did not complete: {}", err);
                self.sink.record(RequestOutcome::failure(Duration::ZERO));
            }
        }
        self.sink.freeze()
    }
}

/// Runs the send phase: for each of `duration` ticks, launches `rps`
/// concurrent requests and then sleeps out the rest of the second.
///
/// Launches are fire-and-forget; the returned [`InFlight`] must be joined to
/// collect their outcomes.
pub async fn dispatch(client: &Client, config: &RunConfig) -> InFlight {
    let planned = usize::try_from(config.total_requests()).unwrap_or(usize::MAX);
    let sink = Arc::new(ResultSink::with_capacity(
        planned.min(MAX_PREALLOCATED_OUTCOMES),
    ));
    let admission = config
        .max_in_flight()
        .map(|limit| Arc::new(Semaphore::new(limit)));
    let url: Arc<str> = Arc::from(config.url());
    let mut tasks = JoinSet::new();
    let started = Instant::now();

    for tick in 0..config.duration_secs() {
        let tick_started = Instant::now();
        for _ in 0..config.rps() {
            let client = client.clone();
            let url = Arc::clone(&url);
            let sink = Arc::clone(&sink);
            let admission = admission.clone();
            tasks.spawn(async move {
                let _permit = admit(admission).await;
                let outcome = execute(&client, &url).await;
                sink.record(outcome);
            });
        }
        debug!(
            tick,
            launched = config.rps(),
            outstanding = tasks.len(),
            "Tick dispatched"
        );
        sleep(TICK.saturating_sub(tick_started.elapsed())).await;
    }

    InFlight {
        tasks,
        sink,
        send_phase: started.elapsed(),
    }
}

/// Full run: [`dispatch`] followed by [`InFlight::join`].
pub async fn run(client: &Client, config: &RunConfig) -> ResultSet {
    dispatch(client, config).await.join().await
}

async fn admit(admission: Option<Arc<Semaphore>>) -> Option<OwnedSemaphorePermit> {
    let gate = admission?;
    gate.acquire_owned().await.ok()
}
