use std::collections::BTreeMap;
use std::time::Duration;

use crate::config::RunConfig;

use super::types::{Extremes, ResultSet, Summary};

/// Reduces a frozen result set to run totals, rates and timing extremes.
///
/// `requests_sent` is the planned attempt count from `config`. Timing
/// extremes only consider succeeded records; the set is never reordered.
#[must_use]
pub fn summarize(results: &ResultSet, config: &RunConfig) -> Summary {
    let requests_sent = config.total_requests();

    let mut requests_succeeded: u64 = 0;
    let mut latency = TimingFold::default();
    let mut connect = TimingFold::default();
    let mut status_counts: BTreeMap<u16, u64> = BTreeMap::new();

    for outcome in results.iter().filter(|outcome| outcome.succeeded) {
        requests_succeeded = requests_succeeded.saturating_add(1);
        latency.push(outcome.total_latency);
        connect.push(outcome.connect);
        let count = status_counts.entry(outcome.status_code).or_insert(0);
        *count = count.saturating_add(1);
    }

    let requests_failed = requests_sent.saturating_sub(requests_succeeded);

    Summary {
        requests_sent,
        requests_succeeded,
        requests_failed,
        success_rate: percent(requests_succeeded, requests_sent),
        failure_rate: percent(requests_failed, requests_sent),
        latency: latency.finish(),
        connect: connect.finish(),
        status_counts,
    }
}

fn percent(part: u64, whole: u64) -> f64 {
    if whole == 0 {
        return 0.0;
    }
    part as f64 / whole as f64 * 100.0
}

#[derive(Default)]
struct TimingFold {
    fastest: Option<Duration>,
    slowest: Option<Duration>,
    total_nanos: u128,
    samples: u128,
}

impl TimingFold {
    fn push(&mut self, value: Duration) {
        self.fastest = Some(self.fastest.map_or(value, |current| current.min(value)));
        self.slowest = Some(self.slowest.map_or(value, |current| current.max(value)));
        self.total_nanos = self.total_nanos.saturating_add(value.as_nanos());
        self.samples = self.samples.saturating_add(1);
    }

    fn finish(self) -> Option<Extremes> {
        let fastest = self.fastest?;
        let slowest = self.slowest?;
        let mean_nanos = self.total_nanos.checked_div(self.samples).unwrap_or(0);
        let average = Duration::from_nanos(u64::try_from(mean_nanos).unwrap_or(u64::MAX));
        Some(Extremes {
            fastest,
            slowest,
            average,
        })
    }
}
