//! Application constants
//!
//! Centralized location for the API contract constants shared by the client
//! layers.

// API location
pub const DEFAULT_API_ORIGIN: &str = "http://localhost:8000";
pub const DEFAULT_API_PREFIX: &str = "/api/v1";

// Timeouts
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_REFRESH_TIMEOUT_SECS: u64 = 10;

// Session renewal endpoint
pub const REFRESH_PATH: &str = "/auth/refresh";

// Fallback message when a failed response carries no usable error text
pub const GENERIC_ERROR_MESSAGE: &str = "Something went wrong";

// Admin listing defaults
pub const DEFAULT_PAGE: u32 = 1;
pub const DEFAULT_PER_PAGE: u32 = 20;

// Environment variables
pub const ENV_API_BASE_URL: &str = "WELLPULSE_API_BASE_URL";
pub const ENV_REQUEST_TIMEOUT: &str = "WELLPULSE_REQUEST_TIMEOUT";
pub const ENV_REFRESH_TIMEOUT: &str = "WELLPULSE_REFRESH_TIMEOUT";
