//! Core library for the `shex` CLI.
//!
//! `shex` sends a fixed number of GET requests per second to one URL for a
//! fixed number of seconds, records the outcome and timing of every request,
//! and reduces them to throughput and latency statistics. This crate exposes
//! the building blocks used by the binary: CLI argument types, configuration,
//! the request executor and tick scheduler, and the result sink and
//! aggregator.
pub mod args;
pub mod config;
pub mod error;
pub mod http;
pub mod metrics;
