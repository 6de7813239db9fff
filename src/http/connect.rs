use std::cell::Cell;
use std::future::Future;
use std::pin::Pin;
use std::task::{Context, Poll};

use tokio::time::Instant;
use tower::{Layer, Service};

tokio::task_local! {
    static CONNECT_PROBE: ConnectProbe;
}

/// Instant at which the request running in this task finished dialing a new
/// connection. Stays empty when a pooled connection was reused.
#[derive(Debug, Default)]
struct ConnectProbe {
    dialed_at: Cell<Option<Instant>>,
}

impl ConnectProbe {
    fn mark(&self) {
        if self.dialed_at.get().is_none() {
            self.dialed_at.set(Some(Instant::now()));
        }
    }
}

/// Runs `future` with a fresh connect probe and returns its output together
/// with the dial-completion instant, if a new connection was established
/// on behalf of this future.
pub(crate) async fn with_connect_probe<F>(future: F) -> (F::Output, Option<Instant>)
where
    F: Future,
{
    CONNECT_PROBE
        .scope(ConnectProbe::default(), async move {
            let output = future.await;
            let dialed_at = CONNECT_PROBE
                .try_with(|probe| probe.dialed_at.get())
                .ok()
                .flatten();
            (output, dialed_at)
        })
        .await
}

fn mark_connected() {
    // Connections dialed in the background (outside any probe scope) are
    // not attributed to a request.
    let _unscoped = CONNECT_PROBE.try_with(ConnectProbe::mark).is_err();
}

/// Connector layer that stamps the probe once dial and TLS handshake finish.
#[derive(Clone, Copy, Debug, Default)]
pub(crate) struct ConnectTimingLayer;

impl<S> Layer<S> for ConnectTimingLayer {
    type Service = ConnectTiming<S>;

    fn layer(&self, inner: S) -> Self::Service {
        ConnectTiming { inner }
    }
}

#[derive(Clone, Debug)]
pub(crate) struct ConnectTiming<S> {
    inner: S,
}

impl<S, Target> Service<Target> for ConnectTiming<S>
where
    S: Service<Target>,
    S::Future: Send + 'static,
    S::Response: 'static,
    S::Error: 'static,
{
    type Response = S::Response;
    type Error = S::Error;
    type Future = Pin<Box<dyn Future<Output = Result<S::Response, S::Error>> + Send>>;

    fn poll_ready(&mut self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.inner.poll_ready(cx)
    }

    fn call(&mut self, target: Target) -> Self::Future {
        let connecting = self.inner.call(target);
        Box::pin(async move {
            let connection = connecting.await;
            if connection.is_ok() {
                mark_connected();
            }
            connection
        })
    }
}
