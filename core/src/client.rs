//! Generic HTTP client for the TodoStore API.
//!
//! # Design
//! `Client` holds the parsed base URL, the `Config` it was built from and a
//! shared `Transport`. It carries no mutable state between calls, so clones
//! are cheap and can be used from any thread.
//!
//! A call is split in two: `new_request` produces a fully formed
//! `HttpRequest` without touching the network, and `execute` runs it through
//! the transport and decodes the response. Resource types such as
//! `TodosResource` sit on top and only decide method, path and payload.

use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, warn};
use url::Url;

use crate::config::Config;
use crate::context::Context;
use crate::error::{ApiError, Result};
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::todos::TodosResource;
use crate::transport::{Transport, UreqTransport};

/// Pass as the `body` of `Client::new_request` when there is no payload.
pub const NO_BODY: Option<&()> = None;

/// Blocking client bound to one TodoStore address.
#[derive(Debug, Clone)]
pub struct Client {
    base_url: Url,
    config: Config,
    transport: Arc<dyn Transport>,
}

impl Client {
    /// Build a client that talks HTTP through `UreqTransport`.
    pub fn new(config: Config) -> Result<Self> {
        Self::with_transport(config, Arc::new(UreqTransport::new()))
    }

    pub fn with_transport(config: Config, transport: Arc<dyn Transport>) -> Result<Self> {
        let base_url = parse_base_url(&config.address)?;
        debug!(base_url = %base_url, "todostore client configured");
        Ok(Self {
            base_url,
            config,
            transport,
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn todos(&self) -> TodosResource {
        TodosResource::new(self.clone())
    }

    /// Build an unsent request for `path`, resolved beneath the base URL.
    ///
    /// For POST and PATCH a `body` is serialized as JSON. For GET and DELETE
    /// its top-level fields become query parameters.
    pub fn new_request<B: Serialize + ?Sized>(
        &self,
        method: HttpMethod,
        path: &str,
        body: Option<&B>,
    ) -> Result<HttpRequest> {
        let mut url = self.base_url.join(path.trim_start_matches('/'))?;

        let mut headers = vec![
            ("accept".to_string(), "application/json".to_string()),
            ("user-agent".to_string(), self.config.user_agent.clone()),
        ];

        let body = match body {
            Some(body) if method.carries_body() => {
                let json = serde_json::to_string(body)
                    .map_err(|e| ApiError::SerializationError(e.to_string()))?;
                headers.push(("content-type".to_string(), "application/json".to_string()));
                Some(json)
            }
            Some(options) => {
                append_query(&mut url, options)?;
                None
            }
            None => None,
        };

        headers.extend(self.config.headers.iter().cloned());

        Ok(HttpRequest {
            method,
            url: url.into(),
            headers,
            body,
        })
    }

    /// Run `request` and decode the JSON response body into `T`.
    pub fn execute<T: DeserializeOwned>(&self, ctx: &Context, request: &HttpRequest) -> Result<T> {
        let response = self.round_trip(ctx, request)?;
        serde_json::from_str(&response.body).map_err(|e| ApiError::DeserializationError(e.to_string()))
    }

    /// Run `request` and discard whatever body comes back.
    pub fn execute_empty(&self, ctx: &Context, request: &HttpRequest) -> Result<()> {
        self.round_trip(ctx, request).map(|_| ())
    }

    fn round_trip(&self, ctx: &Context, request: &HttpRequest) -> Result<HttpResponse> {
        ctx.check()?;
        let timeout = ctx.effective_timeout(self.config.timeout);

        debug!(method = %request.method, url = %request.url, "sending request");
        let response = self.transport.execute(request, timeout)?;
        debug!(status = response.status, "received response");

        check_status(response)
    }
}

/// Parse the configured address and make sure relative paths resolve
/// beneath it rather than replacing its last segment.
fn parse_base_url(address: &str) -> Result<Url> {
    let address = address.trim();
    if address.is_empty() {
        return Err(ApiError::InvalidConfig("address is required".to_string()));
    }

    let mut url = Url::parse(address)?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(ApiError::InvalidUrl(format!(
            "unsupported scheme {:?} in address {address:?}",
            url.scheme()
        )));
    }
    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
    Ok(url)
}

/// Encode the top-level fields of `options` as query parameters.
fn append_query<B: Serialize + ?Sized>(url: &mut Url, options: &B) -> Result<()> {
    let value =
        serde_json::to_value(options).map_err(|e| ApiError::SerializationError(e.to_string()))?;
    let fields = match value {
        Value::Object(fields) => fields,
        Value::Null => return Ok(()),
        other => {
            return Err(ApiError::SerializationError(format!(
                "query options must be an object, got {other}"
            )))
        }
    };

    let pairs: Vec<(String, String)> = fields
        .into_iter()
        .filter_map(|(key, value)| match value {
            Value::Null => None,
            Value::String(s) => Some((key, s)),
            other => Some((key, other.to_string())),
        })
        .collect();

    // An empty serializer would still leave a bare `?` behind.
    if !pairs.is_empty() {
        url.query_pairs_mut().extend_pairs(pairs);
    }
    Ok(())
}

/// Map non-success status codes to the appropriate `ApiError` variant.
fn check_status(response: HttpResponse) -> Result<HttpResponse> {
    if response.is_success() {
        return Ok(response);
    }
    warn!(status = response.status, "request failed");
    if response.status == 404 {
        return Err(ApiError::NotFound);
    }
    Err(ApiError::HttpError {
        status: response.status,
        body: response.body,
    })
}
