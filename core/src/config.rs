//! Client configuration.

use std::time::Duration;

/// Address of a TodoStore server running locally with its default port.
pub const DEFAULT_ADDRESS: &str = "http://localhost:8000";

/// Timeout applied to each request unless the per-call context is tighter.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Settings fixed at `Client` construction.
///
/// Nothing here is read from the environment; callers that want that map
/// their own variables onto these fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Base address of the TodoStore API, e.g. `http://localhost:8000`.
    /// Request paths are resolved beneath it.
    pub address: String,

    /// Upper bound on a single request. `None` leaves it to the context.
    pub timeout: Option<Duration>,

    /// Extra headers sent with every request.
    pub headers: Vec<(String, String)>,

    pub user_agent: String,
}

impl Config {
    pub fn new(address: impl Into<String>) -> Self {
        Self {
            address: address.into(),
            timeout: Some(DEFAULT_TIMEOUT),
            headers: Vec::new(),
            user_agent: concat!("todostore-rust/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }

    pub fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new(DEFAULT_ADDRESS)
    }
}
