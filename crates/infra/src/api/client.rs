//! API client with coordinated session renewal
//!
//! Every endpoint call goes through [`ApiClient::dispatch`]: one transport
//! call, at most one session renewal on a 401, at most one retry, then the
//! response envelope is unwrapped into the caller's type.

use std::sync::Arc;

use reqwest::Method;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, info, instrument, warn};
use wellpulse_domain::constants::REFRESH_PATH;
use wellpulse_domain::{ApiConfig, Envelope, ErrorBody, WireEnvelope};

use super::errors::ApiError;
use super::request::{ApiRequest, AuthMode};
use super::session::{RefreshCoordinator, RefreshTicket, RenewalOutcome};
use crate::http::{HttpClient, HttpResponse};

/// Authenticated API client.
///
/// Cheap to clone; clones share the cookie store and the refresh
/// coordinator.
#[derive(Clone)]
pub struct ApiClient {
    http_client: Arc<HttpClient>,
    coordinator: Arc<RefreshCoordinator>,
    config: Arc<ApiConfig>,
}

impl ApiClient {
    /// Create a new API client
    ///
    /// Clients built with clones of the same `coordinator` never run two
    /// session renewals at once.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Config` if the configuration is invalid or the
    /// HTTP client cannot be built
    pub fn new(config: ApiConfig, coordinator: Arc<RefreshCoordinator>) -> Result<Self, ApiError> {
        config.validate()?;

        let mut builder = HttpClient::builder().timeout(config.request_timeout());
        if let Some(agent) = &config.user_agent {
            builder = builder.user_agent(agent.clone());
        }
        let http_client = builder
            .build()
            .map_err(|e| ApiError::Config(format!("Failed to build HttpClient: {}", e)))?;

        Ok(Self { http_client: Arc::new(http_client), coordinator, config: Arc::new(config) })
    }

    /// Create a client over an existing transport (and its cookie store)
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Config` if the configuration is invalid
    pub fn with_http_client(
        config: ApiConfig,
        http_client: Arc<HttpClient>,
        coordinator: Arc<RefreshCoordinator>,
    ) -> Result<Self, ApiError> {
        config.validate()?;
        Ok(Self { http_client, coordinator, config: Arc::new(config) })
    }

    /// Create a builder for fluent configuration
    pub fn builder() -> ApiClientBuilder {
        ApiClientBuilder::default()
    }

    /// Configuration this client was built with.
    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    /// Renewal coordinator shared by clones of this client.
    pub fn coordinator(&self) -> &Arc<RefreshCoordinator> {
        &self.coordinator
    }

    /// Whether a session renewal is in flight right now
    pub fn is_refreshing(&self) -> bool {
        self.coordinator.is_refreshing()
    }

    /// Send a request and unwrap the response envelope into `T`.
    ///
    /// A 401 on an [`AuthMode::Refresh`] request triggers one session
    /// renewal (or joins the one already running) followed by one retry.
    ///
    /// # Errors
    ///
    /// - `ApiError::Network` / `ApiError::Timeout` if the transport fails
    /// - `ApiError::SessionExpired` if the session could not be renewed
    /// - `ApiError::Api` for non-2xx statuses and failed envelopes
    /// - `ApiError::Decode` if a successful response cannot be read as `T`
    #[instrument(skip(self, request), fields(method = %request.method, path = %request.path))]
    pub async fn dispatch<T: DeserializeOwned>(&self, request: ApiRequest) -> Result<T, ApiError> {
        let mut response = self.execute(&request).await?;

        if response.status == reqwest::StatusCode::UNAUTHORIZED {
            match request.auth {
                AuthMode::Refresh => response = self.recover_session(&request).await?,
                AuthMode::Skip => debug!("401 on skip-auth request; not renewing"),
            }
        }

        let result = Self::parse_response(response);
        if result.is_ok() {
            debug!("request successful");
        }
        result
    }

    /// Execute a GET request
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        self.dispatch(ApiRequest::get(path)).await
    }

    /// Execute a POST request with a JSON body
    pub async fn post<B, T>(&self, path: &str, body: &B) -> Result<T, ApiError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        self.dispatch(ApiRequest::post(path).json(body)?).await
    }

    /// Execute a POST request without a body
    pub async fn post_empty<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        self.dispatch(ApiRequest::post(path)).await
    }

    /// `PUT` a JSON body.
    pub async fn put<B, T>(&self, path: &str, body: &B) -> Result<T, ApiError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        self.dispatch(ApiRequest::put(path).json(body)?).await
    }

    /// `PATCH` a JSON body.
    pub async fn patch<B, T>(&self, path: &str, body: &B) -> Result<T, ApiError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        self.dispatch(ApiRequest::patch(path).json(body)?).await
    }

    /// `DELETE` the resource at `path`.
    pub async fn delete<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        self.dispatch(ApiRequest::delete(path)).await
    }

    /// GET that reports a 401 as-is instead of renewing the session.
    pub async fn probe<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        self.dispatch(ApiRequest::get(path).skip_auth()).await
    }

    async fn recover_session(&self, request: &ApiRequest) -> Result<HttpResponse, ApiError> {
        match self.coordinator.begin() {
            RefreshTicket::Leader(leader) => {
                debug!("401 received; renewing session");
                let renewed = self.renew_session().await;
                let outcome = if renewed { RenewalOutcome::Renewed } else { RenewalOutcome::Failed };
                let released = leader.finish(outcome);

                if !renewed {
                    warn!(released, "session renewal failed; session expired");
                    return Err(ApiError::SessionExpired);
                }

                info!(released, "session renewed");
                self.execute(request).await
            }
            RefreshTicket::Waiter(rx) => {
                debug!("401 received; waiting for session renewal in progress");
                match rx.await {
                    Ok(RenewalOutcome::Renewed) => self.execute(request).await,
                    Ok(RenewalOutcome::Failed) | Err(_) => {
                        debug!("queued request released after failed renewal");
                        Err(ApiError::SessionExpired)
                    }
                }
            }
        }
    }

    /// One renewal call. Any non-2xx status, transport failure or timeout
    /// counts as failure.
    async fn renew_session(&self) -> bool {
        let url = self.url(REFRESH_PATH);
        let timeout = self.config.refresh_timeout();
        let builder = self.http_client.request(Method::POST, &url);

        match tokio::time::timeout(timeout, self.http_client.send(builder)).await {
            Ok(Ok(response)) if response.is_success() => true,
            Ok(Ok(response)) => {
                warn!(status = %response.status, "session renewal rejected");
                false
            }
            Ok(Err(err)) => {
                warn!(error = %err, "session renewal request failed");
                false
            }
            Err(_) => {
                warn!(?timeout, "session renewal timed out");
                false
            }
        }
    }

    async fn execute(&self, request: &ApiRequest) -> Result<HttpResponse, ApiError> {
        let url = self.url(&request.path);
        let timeout = self.config.request_timeout();

        debug!(url = %url, "API request");

        let call = self.http_client.fetch(
            request.method.clone(),
            &url,
            request.body.as_ref(),
            &request.headers,
        );

        match tokio::time::timeout(timeout, call).await {
            Ok(Ok(response)) => Ok(response),
            Ok(Err(err)) => Err(ApiError::from(err)),
            Err(_) => Err(ApiError::Timeout(timeout)),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.config.normalized_base_url(), path)
    }

    fn parse_response<T: DeserializeOwned>(response: HttpResponse) -> Result<T, ApiError> {
        let status = response.status;
        let code = status.as_u16();

        // 204/205 and other empty bodies
        if response.body.trim().is_empty() {
            if status.is_success() {
                return serde_json::from_value(Value::Null).map_err(|_| {
                    ApiError::Decode(format!(
                        "Empty response ({}), but response type cannot be deserialized from empty body",
                        code
                    ))
                });
            }
            return Err(ApiError::from_error_body(code, ErrorBody::generic()));
        }

        let wire = match WireEnvelope::parse(&response.body) {
            Ok(wire) => wire,
            Err(err) if status.is_success() => return Err(ApiError::Decode(err.to_string())),
            Err(_) => return Err(ApiError::from_error_body(code, ErrorBody::generic())),
        };

        if !status.is_success() {
            return Err(ApiError::from_error_body(code, wire.into_error_body()));
        }

        match wire.into_envelope::<T>() {
            Ok(Envelope::Success(data)) => Ok(data),
            Ok(Envelope::Failure(body)) => Err(ApiError::from_error_body(code, body)),
            Err(err) => Err(ApiError::Decode(err.to_string())),
        }
    }
}

/// Builder for API client
#[derive(Default)]
pub struct ApiClientBuilder {
    config: Option<ApiConfig>,
    coordinator: Option<Arc<RefreshCoordinator>>,
    http_client: Option<Arc<HttpClient>>,
}

impl ApiClientBuilder {
    /// Set the API configuration
    pub fn config(mut self, config: ApiConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// Share an existing refresh coordinator
    pub fn coordinator(mut self, coordinator: Arc<RefreshCoordinator>) -> Self {
        self.coordinator = Some(coordinator);
        self
    }

    /// Share an existing transport, and with it the session cookies
    pub fn http_client(mut self, http_client: Arc<HttpClient>) -> Self {
        self.http_client = Some(http_client);
        self
    }

    /// Build the API client
    ///
    /// Without an explicit coordinator or transport the client gets its own.
    ///
    /// # Errors
    ///
    /// Returns error if the configuration is invalid or client creation fails
    pub fn build(self) -> Result<ApiClient, ApiError> {
        let config = self.config.unwrap_or_default();
        let coordinator = self.coordinator.unwrap_or_default();

        match self.http_client {
            Some(http_client) => ApiClient::with_http_client(config, http_client, coordinator),
            None => ApiClient::new(config, coordinator),
        }
    }
}
