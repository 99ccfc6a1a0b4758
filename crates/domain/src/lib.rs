//! # WellPulse Domain
//!
//! Business domain types and models for the WellPulse client.
//!
//! This crate contains:
//! - Wire DTOs for every API endpoint (users, check-ins, insights, alerts)
//! - The response envelope shared by all endpoints
//! - Domain error types and Result definitions
//! - Configuration structures and constants
//!
//! ## Architecture
//! - No dependencies on other WellPulse crates
//! - Only external dependencies allowed
//! - Pure domain models and data structures

pub mod config;
pub mod constants;
pub mod envelope;
pub mod errors;
pub mod macros;
pub mod types;
pub mod utils;

// Re-export commonly used items
pub use config::*;
pub use envelope::{Envelope, ErrorBody, WireEnvelope};
pub use errors::*;
pub use types::*;
