use std::sync::{Arc, Mutex, PoisonError};

use super::types::{RequestOutcome, ResultSet};

/// Append-only collector shared by every in-flight request.
///
/// The lock covers the push only. Callers record after their round-trip has
/// resolved, so the network call itself never runs under the lock.
#[derive(Debug, Default)]
pub struct ResultSink {
    outcomes: Mutex<Vec<RequestOutcome>>,
}

impl ResultSink {
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            outcomes: Mutex::new(Vec::with_capacity(capacity)),
        }
    }

    pub fn record(&self, outcome: RequestOutcome) {
        // A panic elsewhere cannot leave a half-pushed Vec, so poisoning is ignored.
        self.outcomes
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(outcome);
    }

    /// Closes the sink and hands back its contents as a read-only set.
    #[must_use]
    pub fn freeze(self: Arc<Self>) -> ResultSet {
        match Arc::try_unwrap(self) {
            Ok(sink) => ResultSet::new(
                sink.outcomes
                    .into_inner()
                    .unwrap_or_else(PoisonError::into_inner),
            ),
            Err(shared) => ResultSet::new(std::mem::take(
                &mut *shared
                    .outcomes
                    .lock()
                    .unwrap_or_else(PoisonError::into_inner),
            )),
        }
    }
}
