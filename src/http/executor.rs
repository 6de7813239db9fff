use futures_util::StreamExt;
use reqwest::Client;
use tokio::time::Instant;
use tracing::{debug, warn};

use crate::metrics::RequestOutcome;

use super::connect::with_connect_probe;

/// Sends one GET to `url` and times it.
///
/// Any HTTP response counts as a success, whatever its status. Transport
/// errors and requests that cannot be built become failed outcomes; this
/// function never retries and never returns an error.
///
/// `connect` is the time until a freshly dialed connection was ready. A
/// request served from the pool never dials, so its connect time is only
/// the few microseconds spent handing the request to the client and is
/// effectively zero.
pub async fn execute(client: &Client, url: &str) -> RequestOutcome {
    let started = Instant::now();
    let request = match client.get(url).build() {
        Ok(request) => request,
        Err(err) => {
            warn!("Failed to build request for '{}': {}", url, err);
            return RequestOutcome::failure(started.elapsed());
        }
    };

    let ((sent, handed_off), dialed_at) = with_connect_probe(async {
        let pending = client.execute(request);
        let handed_off = started.elapsed();
        (pending.await, handed_off)
    })
    .await;

    match sent {
        Ok(response) => {
            let status = response.status().as_u16();
            if let Err(err) = drain_response_body(response).await {
                debug!("Failed to read response body: {}", err);
            }
            let total_latency = started.elapsed();
            // No dial means a pooled connection; connect is near zero.
            let connect = dialed_at.map_or(handed_off, |at| at.saturating_duration_since(started));
            RequestOutcome::success(status, total_latency, connect.min(total_latency))
        }
        Err(err) => {
            debug!("Request failed: {}", err);
            RequestOutcome::failure(started.elapsed())
        }
    }
}

/// Reads the body to the end so the connection can go back to the pool.
async fn drain_response_body(response: reqwest::Response) -> Result<u64, reqwest::Error> {
    let mut stream = response.bytes_stream();
    let mut total_bytes: u64 = 0;
    while let Some(chunk) = stream.next().await {
        let bytes = chunk?;
        total_bytes = total_bytes.saturating_add(u64::try_from(bytes.len()).unwrap_or(u64::MAX));
    }
    Ok(total_bytes)
}
