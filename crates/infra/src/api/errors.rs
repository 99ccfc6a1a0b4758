//! API-specific error types
//!
//! Classifies every way a dispatched request can fail, from transport
//! failures through session expiry to envelope-level rejections.

use std::time::Duration;

use serde_json::Value;
use thiserror::Error;
use wellpulse_domain::{ErrorBody, WellPulseError};

/// Categories of API errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiErrorCategory {
    /// Session expired or request rejected with 401/403 - sign in again
    Authentication,
    /// Server errors (5xx)
    Server,
    /// Client errors (4xx except auth)
    Client,
    /// Network/connection errors and timeouts
    Network,
    /// Unreadable responses or unencodable payloads
    Protocol,
    /// Configuration errors
    Config,
}

/// API operation errors
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("Timeout after {0:?}")]
    Timeout(Duration),

    #[error("Session expired")]
    SessionExpired,

    #[error("API error ({status}): {message}")]
    Api { status: u16, code: String, message: String, details: Option<Value> },

    #[error("Failed to decode response: {0}")]
    Decode(String),

    #[error("Failed to encode request: {0}")]
    Serialization(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl ApiError {
    /// Build an [`ApiError::Api`] from a response status and error body
    pub fn from_error_body(status: u16, body: ErrorBody) -> Self {
        Self::Api { status, code: body.code, message: body.message, details: body.details }
    }

    /// Get the error category for this error
    pub fn category(&self) -> ApiErrorCategory {
        match self {
            Self::SessionExpired => ApiErrorCategory::Authentication,
            Self::Api { status: 401 | 403, .. } => ApiErrorCategory::Authentication,
            Self::Api { status, .. } if *status >= 500 => ApiErrorCategory::Server,
            Self::Api { .. } => ApiErrorCategory::Client,
            Self::Network(_) | Self::Timeout(_) => ApiErrorCategory::Network,
            Self::Decode(_) | Self::Serialization(_) => ApiErrorCategory::Protocol,
            Self::Config(_) => ApiErrorCategory::Config,
        }
    }

    /// True when the session could not be renewed.
    pub fn is_session_expired(&self) -> bool {
        matches!(self, Self::SessionExpired)
    }

    /// HTTP status of an envelope-level failure
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Api { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Server-supplied error message, if this error came from a response
    pub fn message(&self) -> Option<&str> {
        match self {
            Self::Api { message, .. } => Some(message),
            _ => None,
        }
    }
}

impl From<WellPulseError> for ApiError {
    fn from(err: WellPulseError) -> Self {
        match err {
            WellPulseError::Config(message) => Self::Config(message),
            WellPulseError::Serialization(message) | WellPulseError::InvalidInput(message) => {
                Self::Serialization(message)
            }
            WellPulseError::Network(message)
            | WellPulseError::Auth(message)
            | WellPulseError::Internal(message) => Self::Network(message),
        }
    }
}

impl From<ApiError> for WellPulseError {
    fn from(err: ApiError) -> Self {
        match err {
            ApiError::SessionExpired => Self::Auth("Session expired".into()),
            ApiError::Api { status: 401 | 403, message, .. } => Self::Auth(message),
            ApiError::Api { status, message, .. } if status >= 500 => Self::Internal(message),
            ApiError::Api { message, .. } => Self::InvalidInput(message),
            ApiError::Network(message) => Self::Network(message),
            ApiError::Timeout(timeout) => Self::Network(format!("Timeout after {timeout:?}")),
            ApiError::Decode(message) | ApiError::Serialization(message) => {
                Self::Serialization(message)
            }
            ApiError::Config(message) => Self::Config(message),
        }
    }
}
