//! WellPulse API client
//!
//! # Architecture
//!
//! - [`HttpClient`](crate::http::HttpClient) performs single cookie-aware
//!   calls
//! - [`RefreshCoordinator`] lets one request renew an expired session while
//!   concurrent ones wait
//! - [`ApiClient`] dispatches requests, renews on 401 and unwraps the response
//!   envelope
//! - [`endpoints`] maps each backend route to a typed method

pub mod client;
pub mod endpoints;
pub mod errors;
pub mod request;
pub mod session;

pub use client::{ApiClient, ApiClientBuilder};
pub use endpoints::{
    AlertApi, AuthApi, CheckinApi, DashboardApi, InsightApi, UserApi, WellPulseApi,
};
pub use errors::{ApiError, ApiErrorCategory};
pub use request::{ApiRequest, AuthMode};
pub use session::{RefreshCoordinator, RefreshLeader, RefreshTicket, RenewalOutcome};
