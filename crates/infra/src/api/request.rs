//! Request descriptors handed to the dispatcher

use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use reqwest::Method;
use serde::Serialize;
use serde_json::Value;

use super::errors::ApiError;

/// How the dispatcher reacts to a 401 response
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum AuthMode {
    /// Renew the session once and retry the request
    #[default]
    Refresh,
    /// Surface the 401 as-is; used by session probes
    Skip,
}

/// One logical API call: method, path relative to the base URL, optional JSON
/// body and extra headers.
#[derive(Debug, Clone)]
pub struct ApiRequest {
    pub method: Method,
    pub path: String,
    pub body: Option<Value>,
    pub headers: HeaderMap,
    pub auth: AuthMode,
}

impl ApiRequest {
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            body: None,
            headers: HeaderMap::new(),
            auth: AuthMode::Refresh,
        }
    }

    pub fn get(path: impl Into<String>) -> Self {
        Self::new(Method::GET, path)
    }

    pub fn post(path: impl Into<String>) -> Self {
        Self::new(Method::POST, path)
    }

    pub fn put(path: impl Into<String>) -> Self {
        Self::new(Method::PUT, path)
    }

    pub fn patch(path: impl Into<String>) -> Self {
        Self::new(Method::PATCH, path)
    }

    pub fn delete(path: impl Into<String>) -> Self {
        Self::new(Method::DELETE, path)
    }

    /// Attach a JSON body.
    ///
    /// # Errors
    /// Returns `ApiError::Serialization` if `payload` cannot be encoded.
    pub fn json<B: Serialize + ?Sized>(mut self, payload: &B) -> Result<Self, ApiError> {
        let body = serde_json::to_value(payload)
            .map_err(|e| ApiError::Serialization(format!("Failed to serialize body: {e}")))?;
        self.body = Some(body);
        Ok(self)
    }

    pub fn header(mut self, name: HeaderName, value: HeaderValue) -> Self {
        self.headers.insert(name, value);
        self
    }

    /// Never enter session renewal for this request.
    pub fn skip_auth(mut self) -> Self {
        self.auth = AuthMode::Skip;
        self
    }
}
