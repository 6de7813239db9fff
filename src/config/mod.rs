//! Configuration loading, CLI merge, and the validated run configuration.
mod apply;
mod loader;
mod run;
pub mod types;

#[cfg(test)]
mod tests;

pub use apply::apply_config;
pub use loader::load_config;
pub use run::{ClientSettings, ReportSettings, RunConfig};

#[cfg(test)]
pub(crate) use loader::load_config_file;
