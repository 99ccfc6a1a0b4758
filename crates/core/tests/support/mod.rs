//! Shared test helpers for `wellpulse-core` integration tests.
//!
//! Provides an in-memory `AuthGateway` whose responses can be scripted per
//! test, plus a user fixture.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;
use chrono::{TimeZone, Utc};
use wellpulse_core::AuthGateway;
use wellpulse_domain::{
    AuthPayload, LoginRequest, MessagePayload, Result as DomainResult, SignupRequest, User,
    UserRole, WellPulseError,
};

/// Build a deterministic user fixture.
pub fn user(id: &str, email: &str) -> User {
    let at = Utc.with_ymd_and_hms(2025, 3, 1, 8, 30, 0).unwrap();
    User {
        id: id.to_string(),
        email: email.to_string(),
        full_name: "Test User".to_string(),
        role: UserRole::User,
        created_at: at,
        updated_at: at,
        last_login: None,
        avatar_url: None,
    }
}

/// Scriptable gateway. `None` in a slot means "fail with an auth error".
#[derive(Default)]
pub struct MockGateway {
    pub me: Mutex<Option<User>>,
    pub login_user: Mutex<Option<User>>,
    pub logout_fails: bool,
    pub logout_calls: AtomicUsize,
    pub last_signup: Mutex<Option<SignupRequest>>,
}

impl MockGateway {
    pub fn logout_calls(&self) -> usize {
        self.logout_calls.load(Ordering::SeqCst)
    }
}

fn rejected() -> WellPulseError {
    WellPulseError::Auth("Invalid email or password".to_string())
}

#[async_trait]
impl AuthGateway for MockGateway {
    async fn login(&self, request: &LoginRequest) -> DomainResult<AuthPayload> {
        let user = self.login_user.lock().unwrap().clone().ok_or_else(rejected)?;
        if user.email != request.email {
            return Err(rejected());
        }
        Ok(AuthPayload { user, message: "Login successful".to_string() })
    }

    async fn signup(&self, request: &SignupRequest) -> DomainResult<AuthPayload> {
        *self.last_signup.lock().unwrap() = Some(request.clone());
        let mut user = user("new-user", &request.email);
        user.full_name = request.full_name.clone();
        Ok(AuthPayload { user, message: "Account created successfully".to_string() })
    }

    async fn logout(&self) -> DomainResult<MessagePayload> {
        self.logout_calls.fetch_add(1, Ordering::SeqCst);
        if self.logout_fails {
            return Err(WellPulseError::Network("HTTP connection failure".to_string()));
        }
        Ok(MessagePayload { message: "Logged out".to_string() })
    }

    async fn current_user_silent(&self) -> DomainResult<User> {
        self.me
            .lock()
            .unwrap()
            .clone()
            .ok_or_else(|| WellPulseError::Auth("Not authenticated".to_string()))
    }
}
