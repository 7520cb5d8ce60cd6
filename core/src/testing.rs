//! In-memory transport for unit tests.

use std::sync::Mutex;
use std::time::Duration;

use crate::error::Result;
use crate::http::{HttpRequest, HttpResponse};
use crate::transport::Transport;

/// Records every request and answers each with the same canned response.
#[derive(Debug)]
pub(crate) struct StubTransport {
    response: HttpResponse,
    calls: Mutex<Vec<(HttpRequest, Option<Duration>)>>,
}

impl StubTransport {
    pub(crate) fn responding(status: u16, body: &str) -> Self {
        Self {
            response: HttpResponse {
                status,
                headers: Vec::new(),
                body: body.to_string(),
            },
            calls: Mutex::new(Vec::new()),
        }
    }

    pub(crate) fn requests(&self) -> Vec<HttpRequest> {
        self.calls.lock().unwrap().iter().map(|(r, _)| r.clone()).collect()
    }

    pub(crate) fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    pub(crate) fn last_timeout(&self) -> Option<Duration> {
        self.calls.lock().unwrap().last().and_then(|(_, t)| *t)
    }
}

impl Transport for StubTransport {
    fn execute(&self, request: &HttpRequest, timeout: Option<Duration>) -> Result<HttpResponse> {
        self.calls.lock().unwrap().push((request.clone(), timeout));
        Ok(self.response.clone())
    }
}
