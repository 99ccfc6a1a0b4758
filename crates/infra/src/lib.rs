//! # WellPulse Infrastructure
//!
//! Infrastructure implementations of core domain ports.
//!
//! This crate contains:
//! - The cookie-aware HTTP transport
//! - The API dispatcher with coordinated session renewal
//! - Typed endpoint facades for every backend route
//! - Configuration loading and logging setup
//!
//! ## Architecture
//! - Implements traits defined in `wellpulse-core`
//! - Depends on `wellpulse-domain` and `wellpulse-core`
//! - Contains all "impure" code (network and file I/O)

pub mod api;
pub mod config;
pub mod errors;
pub mod http;
pub mod observability;

// Re-export commonly used items
pub use api::{
    AlertApi, ApiClient, ApiError, ApiErrorCategory, ApiRequest, AuthApi, AuthMode, CheckinApi,
    DashboardApi, InsightApi, RefreshCoordinator, UserApi, WellPulseApi,
};
pub use errors::InfraError;
pub use http::{HttpClient, HttpResponse};
