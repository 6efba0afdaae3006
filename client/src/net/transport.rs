//! `fetch`-backed HTTP transport.
//!
//! Client-side (csr): real HTTP calls via `gloo-net`, raced against a
//! `gloo-timers` timeout.
//! Native builds: a stub that always fails, since `fetch` only exists in
//! the browser.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "transport_test.rs"]
mod transport_test;

use agentdesk::{HttpRequest, HttpResponse, Transport, TransportError};

#[cfg(any(test, feature = "csr"))]
fn timeout_millis(timeout: std::time::Duration) -> u32 {
    u32::try_from(timeout.as_millis()).unwrap_or(u32::MAX)
}

#[cfg(any(test, not(feature = "csr")))]
fn unavailable() -> TransportError {
    TransportError::Network("fetch is not available outside the browser".to_owned())
}

#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserTransport;

#[async_trait::async_trait(?Send)]
impl Transport for BrowserTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        #[cfg(feature = "csr")]
        {
            use futures::future::{Either, select};

            let timeout = request.timeout;
            let exchange = Box::pin(exchange(request));
            let timer = Box::pin(gloo_timers::future::TimeoutFuture::new(timeout_millis(timeout)));
            match select(exchange, timer).await {
                Either::Left((result, _)) => result,
                Either::Right(((), _)) => Err(TransportError::Timeout(timeout)),
            }
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = request;
            Err(unavailable())
        }
    }
}

#[cfg(feature = "csr")]
async fn exchange(request: HttpRequest) -> Result<HttpResponse, TransportError> {
    use gloo_net::http::{Method, RequestBuilder};

    let method = match request.method {
        agentdesk::Method::Get => Method::GET,
        agentdesk::Method::Post => Method::POST,
    };
    let mut builder = RequestBuilder::new(&request.url).method(method);
    for (name, value) in &request.headers {
        builder = builder.header(name, value);
    }
    let prepared = match request.body {
        Some(body) => builder.body(body),
        None => builder.build(),
    }
    .map_err(network_error)?;

    let response = prepared.send().await.map_err(network_error)?;
    let status = response.status();
    let body = response.text().await.map_err(network_error)?;
    Ok(HttpResponse { status, body })
}

#[cfg(feature = "csr")]
fn network_error(error: gloo_net::Error) -> TransportError {
    TransportError::Network(error.to_string())
}
