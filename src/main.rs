mod app;
mod args;
mod config;
mod entry;
mod error;
mod http;
mod logger;
mod metrics;

use std::process::ExitCode;

fn main() -> ExitCode {
    entry::run()
}
