//! The I/O seam between `Client` and the network.
//!
//! # Design
//! `Client` hands a finished `HttpRequest` to a `Transport` and gets an
//! `HttpResponse` back. The transport reports status codes as data; only a
//! failed round-trip (connection refused, timeout, bad URI) is an error.
//! `UreqTransport` is the blocking default; tests substitute their own.

use std::fmt::Debug;
use std::time::Duration;

use crate::error::Result;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};

/// Executes a single HTTP round-trip.
pub trait Transport: Send + Sync + Debug {
    /// Send `request` and return the server's response, whatever its status.
    /// `timeout` bounds the whole call when present.
    fn execute(&self, request: &HttpRequest, timeout: Option<Duration>) -> Result<HttpResponse>;
}

/// Blocking transport backed by a shared `ureq::Agent`.
#[derive(Debug, Clone)]
pub struct UreqTransport {
    agent: ureq::Agent,
}

impl UreqTransport {
    pub fn new() -> Self {
        // 4xx/5xx come back as responses so the client can map them.
        let agent = ureq::Agent::config_builder()
            .http_status_as_error(false)
            .build()
            .new_agent();
        Self { agent }
    }
}

impl Default for UreqTransport {
    fn default() -> Self {
        Self::new()
    }
}

impl Transport for UreqTransport {
    fn execute(&self, request: &HttpRequest, timeout: Option<Duration>) -> Result<HttpResponse> {
        let url = request.url.as_str();
        let result = match (request.method, request.body.as_deref()) {
            (HttpMethod::Get, _) => prepare(self.agent.get(url), request, timeout).call(),
            (HttpMethod::Delete, _) => prepare(self.agent.delete(url), request, timeout).call(),
            (HttpMethod::Post, Some(body)) => {
                prepare(self.agent.post(url), request, timeout).send(body.as_bytes())
            }
            (HttpMethod::Post, None) => prepare(self.agent.post(url), request, timeout).send_empty(),
            (HttpMethod::Patch, Some(body)) => {
                prepare(self.agent.patch(url), request, timeout).send(body.as_bytes())
            }
            (HttpMethod::Patch, None) => {
                prepare(self.agent.patch(url), request, timeout).send_empty()
            }
        };

        let mut response = result?;
        let status = response.status().as_u16();
        let headers = response
            .headers()
            .iter()
            .filter_map(|(name, value)| {
                value
                    .to_str()
                    .ok()
                    .map(|v| (name.as_str().to_string(), v.to_string()))
            })
            .collect();
        let body = response.body_mut().read_to_string()?;

        Ok(HttpResponse {
            status,
            headers,
            body,
        })
    }
}

/// Copy headers onto the builder and apply the per-request timeout.
fn prepare<B>(
    mut builder: ureq::RequestBuilder<B>,
    request: &HttpRequest,
    timeout: Option<Duration>,
) -> ureq::RequestBuilder<B> {
    for (name, value) in &request.headers {
        builder = builder.header(name.as_str(), value.as_str());
    }
    if let Some(timeout) = timeout {
        builder = builder.config().timeout_global(Some(timeout)).build();
    }
    builder
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ApiError;

    #[test]
    fn connection_refused_is_a_transport_error() {
        // Bind then drop a listener to get a port nobody is listening on.
        let port = {
            let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
            listener.local_addr().unwrap().port()
        };
        let request = HttpRequest {
            method: HttpMethod::Get,
            url: format!("http://127.0.0.1:{port}/todos"),
            headers: Vec::new(),
            body: None,
        };
        let err = UreqTransport::new()
            .execute(&request, Some(Duration::from_secs(5)))
            .unwrap_err();
        assert!(
            matches!(err, ApiError::Transport(_) | ApiError::Timeout),
            "unexpected error: {err:?}"
        );
    }
}
