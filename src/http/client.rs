use reqwest::Client;
use tracing::error;

use crate::args::DEFAULT_USER_AGENT;
use crate::config::ClientSettings;
use crate::error::{AppError, AppResult, HttpError};

use super::connect::ConnectTimingLayer;

/// Builds the pooled client shared by every request of a run.
///
/// # Errors
///
/// Returns an error when the TLS backend or connector cannot be initialized.
pub fn build_client(settings: &ClientSettings) -> AppResult<Client> {
    Client::builder()
        .user_agent(DEFAULT_USER_AGENT)
        .timeout(settings.request_timeout)
        .pool_max_idle_per_host(settings.max_idle_per_host)
        .connector_layer(ConnectTimingLayer)
        .build()
        .map_err(|err| {
            error!("Failed to build HTTP client: {}", err);
            AppError::http(HttpError::BuildClientFailed { source: err })
        })
}
