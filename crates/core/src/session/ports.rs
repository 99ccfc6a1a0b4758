//! Port interfaces for session management
//!
//! These traits define the boundary between the session service and the
//! HTTP implementation of the auth endpoints.

use async_trait::async_trait;
use wellpulse_domain::{AuthPayload, LoginRequest, MessagePayload, Result, SignupRequest, User};

/// Authentication operations the session service depends on
#[async_trait]
pub trait AuthGateway: Send + Sync {
    /// Exchange credentials for a session
    async fn login(&self, request: &LoginRequest) -> Result<AuthPayload>;

    /// Create an account and start a session
    async fn signup(&self, request: &SignupRequest) -> Result<AuthPayload>;

    /// End the current session
    async fn logout(&self) -> Result<MessagePayload>;

    /// Fetch the current user without triggering a session renewal
    async fn current_user_silent(&self) -> Result<User>;
}
