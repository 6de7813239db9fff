//! CLI argument types and parsing helpers.
mod cli;
mod defaults;
pub(crate) mod parsers;
mod types;

#[cfg(test)]
pub(crate) mod test_support;

pub use cli::RunArgs;
pub use defaults::{
    DEFAULT_CSV_PATH, DEFAULT_DURATION_SECS, DEFAULT_MAX_IDLE_PER_HOST, DEFAULT_REQUEST_TIMEOUT,
    DEFAULT_RPS,
};
pub use types::{PositiveU64, PositiveUsize};

pub(crate) use defaults::DEFAULT_USER_AGENT;
