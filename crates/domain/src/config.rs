//! Configuration management

use std::time::Duration;

use serde::{Deserialize, Serialize};
use url::Url;

use crate::constants::{
    DEFAULT_API_ORIGIN, DEFAULT_API_PREFIX, DEFAULT_REFRESH_TIMEOUT_SECS,
    DEFAULT_REQUEST_TIMEOUT_SECS,
};
use crate::{Result, WellPulseError};

/// Application configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub api: ApiConfig,
}

/// API access configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// Absolute base URL every endpoint path is appended to
    /// (e.g. `http://localhost:8000/api/v1`).
    pub base_url: String,
    pub request_timeout_secs: u64,
    /// Upper bound on a single session renewal call.
    pub refresh_timeout_secs: u64,
    pub user_agent: Option<String>,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: format!("{DEFAULT_API_ORIGIN}{DEFAULT_API_PREFIX}"),
            request_timeout_secs: DEFAULT_REQUEST_TIMEOUT_SECS,
            refresh_timeout_secs: DEFAULT_REFRESH_TIMEOUT_SECS,
            user_agent: None,
        }
    }
}

impl ApiConfig {
    /// Config pointing at `base_url` with default timeouts.
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self { base_url: base_url.into(), ..Self::default() }
    }

    /// Timeout applied to every transport call.
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    /// Upper bound on a single session renewal.
    pub fn refresh_timeout(&self) -> Duration {
        Duration::from_secs(self.refresh_timeout_secs)
    }

    /// Base URL without a trailing slash, ready for `format!("{base}{path}")`.
    pub fn normalized_base_url(&self) -> &str {
        self.base_url.trim_end_matches('/')
    }

    /// Check that the configuration can drive a client.
    ///
    /// # Errors
    /// Returns `WellPulseError::Config` if the base URL is not an absolute
    /// http(s) URL or a timeout is zero.
    pub fn validate(&self) -> Result<()> {
        let url = Url::parse(&self.base_url).map_err(|e| {
            WellPulseError::Config(format!("Invalid API base URL '{}': {}", self.base_url, e))
        })?;

        if !matches!(url.scheme(), "http" | "https") {
            return Err(WellPulseError::Config(format!(
                "Unsupported API base URL scheme: {}",
                url.scheme()
            )));
        }

        if self.request_timeout_secs == 0 {
            return Err(WellPulseError::Config("Request timeout must be non-zero".into()));
        }

        if self.refresh_timeout_secs == 0 {
            return Err(WellPulseError::Config("Refresh timeout must be non-zero".into()));
        }

        Ok(())
    }
}
