use std::collections::BTreeMap;
use std::time::Duration;

/// Outcome of one request attempt.
///
/// `status_code` and `connect` are meaningful only when `succeeded` is true.
/// A failed attempt still carries the time it took for the error to surface.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RequestOutcome {
    pub succeeded: bool,
    pub status_code: u16,
    pub total_latency: Duration,
    pub connect: Duration,
}

impl RequestOutcome {
    /// Any HTTP response, whatever its status.
    #[must_use]
    pub const fn success(status_code: u16, total_latency: Duration, connect: Duration) -> Self {
        Self {
            succeeded: true,
            status_code,
            total_latency,
            connect,
        }
    }

    /// Transport failure or a request that could not be built.
    #[must_use]
    pub const fn failure(total_latency: Duration) -> Self {
        Self {
            succeeded: false,
            status_code: 0,
            total_latency,
            connect: Duration::ZERO,
        }
    }
}

/// All outcomes of one run. Read-only once the scheduler has joined every
/// request; record order carries no meaning.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ResultSet {
    outcomes: Vec<RequestOutcome>,
}

impl ResultSet {
    #[must_use]
    pub const fn new(outcomes: Vec<RequestOutcome>) -> Self {
        Self { outcomes }
    }

    #[must_use]
    pub const fn len(&self) -> usize {
        self.outcomes.len()
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.outcomes.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, RequestOutcome> {
        self.outcomes.iter()
    }

    #[must_use]
    pub fn as_slice(&self) -> &[RequestOutcome] {
        &self.outcomes
    }
}

impl<'set> IntoIterator for &'set ResultSet {
    type Item = &'set RequestOutcome;
    type IntoIter = std::slice::Iter<'set, RequestOutcome>;

    fn into_iter(self) -> Self::IntoIter {
        self.outcomes.iter()
    }
}

impl FromIterator<RequestOutcome> for ResultSet {
    fn from_iter<I: IntoIterator<Item = RequestOutcome>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

/// Min, max and mean of one timing over succeeded requests.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Extremes {
    pub fastest: Duration,
    pub slowest: Duration,
    pub average: Duration,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Summary {
    pub requests_sent: u64,
    pub requests_succeeded: u64,
    pub requests_failed: u64,
    pub success_rate: f64,
    pub failure_rate: f64,
    /// `None` when no request succeeded.
    pub latency: Option<Extremes>,
    /// `None` when no request succeeded.
    pub connect: Option<Extremes>,
    pub status_counts: BTreeMap<u16, u64>,
}
