//! # WellPulse Core
//!
//! Pure client-side business logic - no HTTP dependencies.
//!
//! This crate contains:
//! - Port interfaces (traits) implemented by `wellpulse-infra`
//! - The session service tracking who is signed in
//!
//! ## Architecture Principles
//! - Only depends on `wellpulse-domain`
//! - No HTTP, cookie or platform code
//! - All external dependencies via traits

pub mod session;

pub use session::ports::AuthGateway;
pub use session::{SessionService, SessionState};
