use std::time::Duration;

pub(crate) const DEFAULT_USER_AGENT: &str = concat!("shex-loadtest/", env!("CARGO_PKG_VERSION"));

/// Requests launched per one-second tick when `-n` is not given.
pub const DEFAULT_RPS: i64 = 50;
/// Number of ticks when `-d` is not given.
pub const DEFAULT_DURATION_SECS: i64 = 2;
/// Client-wide request timeout; a safety net against hung connections.
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(90);
pub const DEFAULT_MAX_IDLE_PER_HOST: usize = 100;
pub const DEFAULT_CSV_PATH: &str = "./results.csv";
