use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderValue, CONTENT_TYPE};
use reqwest::{Client as ReqwestClient, Method, RequestBuilder, StatusCode};
use serde_json::Value;
use tracing::debug;
use wellpulse_domain::constants::DEFAULT_REQUEST_TIMEOUT_SECS;
use wellpulse_domain::WellPulseError;

use crate::errors::InfraError;

/// Status and fully-read body of one HTTP exchange.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    /// HTTP status line.
    pub status: StatusCode,
    /// Raw body text, possibly empty.
    pub body: String,
}

impl HttpResponse {
    /// Whether the status is 2xx.
    pub fn is_success(&self) -> bool {
        self.status.is_success()
    }
}

/// Cookie-aware HTTP client that performs exactly one network call per send.
///
/// Session cookies set by the server are stored and replayed on later
/// requests made through the same client (or any of its clones).
#[derive(Clone)]
pub struct HttpClient {
    client: ReqwestClient,
}

impl HttpClient {
    /// Start building a new HTTP client.
    pub fn builder() -> HttpClientBuilder {
        HttpClientBuilder::default()
    }

    /// Convenience constructor with default configuration.
    pub fn new() -> Result<Self, WellPulseError> {
        Self::builder().build()
    }

    /// Create a request builder using the underlying reqwest client.
    pub fn request<U>(&self, method: Method, url: U) -> RequestBuilder
    where
        U: reqwest::IntoUrl,
    {
        self.client.request(method, url)
    }

    /// Issue a JSON request.
    ///
    /// `Content-Type: application/json` is set by default; an entry for the
    /// same header in `headers` replaces it.
    pub async fn fetch(
        &self,
        method: Method,
        url: &str,
        body: Option<&Value>,
        headers: &HeaderMap,
    ) -> Result<HttpResponse, WellPulseError> {
        let mut merged = HeaderMap::new();
        merged.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        for (name, value) in headers {
            merged.insert(name.clone(), value.clone());
        }

        let mut builder = self.request(method, url).headers(merged);
        if let Some(body) = body {
            let payload = serde_json::to_vec(body).map_err(|e| {
                WellPulseError::Serialization(format!("Failed to encode request body: {e}"))
            })?;
            builder = builder.body(payload);
        }

        self.send(builder).await
    }

    /// Execute the provided request builder once and read the body.
    pub async fn send(&self, builder: RequestBuilder) -> Result<HttpResponse, WellPulseError> {
        let request = builder.build().map_err(|err| {
            let infra: InfraError = err.into();
            WellPulseError::from(infra)
        })?;

        let method = request.method().clone();
        let url = request.url().clone();
        debug!(%method, %url, "sending HTTP request");

        let response = self.client.execute(request).await.map_err(|err| {
            debug!(%method, %url, error = %err, "HTTP request failed");
            let infra: InfraError = err.into();
            WellPulseError::from(infra)
        })?;

        let status = response.status();
        debug!(%method, %url, %status, "received HTTP response");

        let body = response.text().await.map_err(|err| {
            let infra: InfraError = err.into();
            WellPulseError::from(infra)
        })?;

        Ok(HttpResponse { status, body })
    }
}

/// Builder for [`HttpClient`].
#[derive(Debug)]
pub struct HttpClientBuilder {
    timeout: Duration,
    user_agent: Option<String>,
}

impl Default for HttpClientBuilder {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS),
            user_agent: None,
        }
    }
}

impl HttpClientBuilder {
    /// Overall per-request timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// `User-Agent` sent with every request.
    pub fn user_agent(mut self, agent: impl Into<String>) -> Self {
        self.user_agent = Some(agent.into());
        self
    }

    /// Build the client. The cookie store is always enabled.
    pub fn build(self) -> Result<HttpClient, WellPulseError> {
        let mut builder =
            ReqwestClient::builder().timeout(self.timeout).cookie_store(true).no_proxy();

        if let Some(agent) = self.user_agent {
            builder = builder.user_agent(agent);
        }

        let client = builder.build().map_err(|err| {
            let infra: InfraError = err.into();
            WellPulseError::from(infra)
        })?;

        Ok(HttpClient { client })
    }
}
