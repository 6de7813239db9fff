//! HTTP client construction, single-request execution, and the fixed-rate
//! tick scheduler.
mod client;
mod connect;
mod executor;
mod scheduler;


pub use client::build_client;
pub use executor::execute;
pub use scheduler::{InFlight, dispatch, run};

#[cfg(test)]
pub(crate) use connect::{ConnectTimingLayer, with_connect_probe};
