use std::path::PathBuf;
use std::time::Duration;

use crate::args::{PositiveU64, PositiveUsize, RunArgs};
use crate::error::ValidationError;

/// Immutable parameters of one load run: where to send, how many per tick,
/// and for how many ticks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    url: String,
    rps: PositiveU64,
    duration: PositiveU64,
    max_in_flight: Option<PositiveUsize>,
}

impl RunConfig {
    /// Validates the raw values once; the result is never mutated.
    ///
    /// # Errors
    ///
    /// Returns an error when the URL is empty, `rps` or `duration_secs` is
    /// below 1, or `max_in_flight` is zero.
    pub fn new(
        url: &str,
        rps: i64,
        duration_secs: i64,
        max_in_flight: Option<usize>,
    ) -> Result<Self, ValidationError> {
        let url = url.trim();
        if url.is_empty() {
            return Err(ValidationError::MissingUrl);
        }
        let rps = positive(rps).ok_or(ValidationError::RpsZero)?;
        let duration = positive(duration_secs).ok_or(ValidationError::DurationZero)?;
        let max_in_flight = max_in_flight
            .map(|value| {
                PositiveUsize::try_from(value).map_err(|_err| ValidationError::MaxInFlightZero)
            })
            .transpose()?;

        Ok(Self {
            url: url.to_owned(),
            rps,
            duration,
            max_in_flight,
        })
    }

    /// # Errors
    ///
    /// See [`RunConfig::new`].
    pub fn from_args(args: &RunArgs) -> Result<Self, ValidationError> {
        let url = args.url.as_deref().ok_or(ValidationError::MissingUrl)?;
        Self::new(url, args.rps, args.duration, args.max_in_flight)
    }

    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }

    #[must_use]
    pub const fn rps(&self) -> u64 {
        self.rps.get()
    }

    #[must_use]
    pub const fn duration_secs(&self) -> u64 {
        self.duration.get()
    }

    #[must_use]
    pub fn max_in_flight(&self) -> Option<usize> {
        self.max_in_flight.map(PositiveUsize::get)
    }

    /// Number of attempts the run makes: `rps * duration`.
    #[must_use]
    pub const fn total_requests(&self) -> u64 {
        self.rps().saturating_mul(self.duration_secs())
    }
}

fn positive(value: i64) -> Option<PositiveU64> {
    u64::try_from(value)
        .ok()
        .and_then(|value| PositiveU64::try_from(value).ok())
}

/// Settings for the shared HTTP client.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClientSettings {
    pub request_timeout: Duration,
    pub max_idle_per_host: usize,
}

impl From<&RunArgs> for ClientSettings {
    fn from(args: &RunArgs) -> Self {
        Self {
            request_timeout: args.request_timeout,
            max_idle_per_host: args.max_idle_per_host,
        }
    }
}

/// How the finished run is reported.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportSettings {
    pub no_color: bool,
    pub csv_path: Option<PathBuf>,
}

impl From<&RunArgs> for ReportSettings {
    fn from(args: &RunArgs) -> Self {
        Self {
            no_color: args.no_color,
            csv_path: (!args.no_csv).then(|| PathBuf::from(&args.csv_path)),
        }
    }
}
