//! Per-request outcomes, the concurrent result sink, and run aggregation.
mod aggregate;
mod sink;
mod types;


pub use aggregate::summarize;
pub use sink::ResultSink;
pub use types::{Extremes, RequestOutcome, ResultSet, Summary};
