use clap::Parser;
use std::time::Duration;

use super::defaults::{DEFAULT_CSV_PATH, DEFAULT_DURATION_SECS, DEFAULT_MAX_IDLE_PER_HOST, DEFAULT_RPS};
use super::parsers::{parse_bool_env, parse_timeout_arg};

#[derive(Debug, Parser, Clone)]
#[clap(
    version,
    about = "Fixed-rate concurrent HTTP load generator. Sends N GET requests per second to one URL and summarizes the outcome.",
    next_help_heading = "Advanced Options"
)]
pub struct RunArgs {
    /// Url of target domain
    #[arg(long, short = 'u', help_heading = "Common Options")]
    pub url: Option<String>,

    /// Number of requests per second
    #[arg(
        long = "rps",
        short = 'n',
        default_value_t = DEFAULT_RPS,
        allow_negative_numbers = true,
        help_heading = "Common Options"
    )]
    pub rps: i64,

    /// Duration of testing in seconds
    #[arg(
        long = "duration",
        short = 'd',
        default_value_t = DEFAULT_DURATION_SECS,
        allow_negative_numbers = true,
        help_heading = "Common Options"
    )]
    pub duration: i64,

    /// Client-wide request timeout (e.g. 500ms, 30s, 2m)
    #[arg(long = "timeout", default_value = "90s", value_parser = parse_timeout_arg)]
    pub request_timeout: Duration,

    /// Maximum idle pooled connections kept per host
    #[arg(long = "max-idle-per-host", default_value_t = DEFAULT_MAX_IDLE_PER_HOST)]
    pub max_idle_per_host: usize,

    /// Cap on simultaneously open requests (unbounded when omitted)
    #[arg(long = "max-in-flight")]
    pub max_in_flight: Option<usize>,

    /// Where per-request records are written
    #[arg(long = "csv-path", default_value = DEFAULT_CSV_PATH, help_heading = "Common Options")]
    pub csv_path: String,

    /// Skip writing per-request records to CSV
    #[arg(long = "no-csv", help_heading = "Common Options")]
    pub no_csv: bool,

    /// Enable verbose logging (sets log level to debug unless overridden by SHEX_LOG/RUST_LOG)
    #[arg(long, short = 'v', help_heading = "Common Options")]
    pub verbose: bool,

    /// Path to config file (TOML/JSON). Defaults to ./shex.toml or ./shex.json if present.
    #[arg(long)]
    pub config: Option<String>,

    /// Disable color output
    #[arg(long = "no-color", env = "NO_COLOR", value_parser = parse_bool_env)]
    pub no_color: bool,
}
