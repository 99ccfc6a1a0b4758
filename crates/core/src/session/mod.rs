//! Session service - client-side view of the signed-in user
//!
//! The server owns the session (an opaque cookie), so the client only knows
//! who is signed in by asking. [`SessionService`] keeps the answer and updates
//! it on login, signup and logout.

pub mod ports;

use std::sync::Arc;

use tokio::sync::RwLock;
use tracing::{debug, info, warn};
use wellpulse_domain::{LoginRequest, Result, SignupRequest, User};

use self::ports::AuthGateway;

/// What the client currently knows about the session
#[derive(Debug, Clone, Default, PartialEq)]
pub enum SessionState {
    /// No probe has completed yet
    #[default]
    Loading,
    Anonymous,
    Authenticated(User),
}

impl SessionState {
    /// Signed-in user, if any.
    pub const fn user(&self) -> Option<&User> {
        match self {
            Self::Authenticated(user) => Some(user),
            Self::Loading | Self::Anonymous => None,
        }
    }
}

/// Tracks the signed-in user across auth operations
pub struct SessionService {
    gateway: Arc<dyn AuthGateway>,
    state: RwLock<SessionState>,
}

impl SessionService {
    /// Service in the `Loading` state over `gateway`.
    pub fn new(gateway: Arc<dyn AuthGateway>) -> Self {
        Self { gateway, state: RwLock::new(SessionState::Loading) }
    }

    /// Probe the session once at startup.
    ///
    /// Equivalent to [`refresh_user`](Self::refresh_user); never fails, an
    /// unreachable or rejecting server simply leaves the session anonymous.
    pub async fn bootstrap(&self) -> SessionState {
        self.refresh_user().await;
        self.state().await
    }

    /// Re-read the current user with the silent probe.
    ///
    /// Any error (401, network, decode) means "not signed in".
    pub async fn refresh_user(&self) {
        let next = match self.gateway.current_user_silent().await {
            Ok(user) => {
                debug!(user_id = %user.id, "session probe found an active session");
                SessionState::Authenticated(user)
            }
            Err(err) => {
                debug!(error = %err, "session probe found no active session");
                SessionState::Anonymous
            }
        };
        *self.state.write().await = next;
    }

    /// Sign in and remember the returned user.
    ///
    /// # Errors
    /// Propagates the gateway error; the session state is left unchanged.
    pub async fn login(&self, email: &str, password: &str) -> Result<User> {
        let request = LoginRequest { email: email.to_string(), password: password.to_string() };
        let payload = self.gateway.login(&request).await?;

        info!(user_id = %payload.user.id, "signed in");
        *self.state.write().await = SessionState::Authenticated(payload.user.clone());
        Ok(payload.user)
    }

    /// Create an account and remember the returned user.
    ///
    /// # Errors
    /// Propagates the gateway error; the session state is left unchanged.
    pub async fn signup(&self, email: &str, password: &str, full_name: &str) -> Result<User> {
        let request = SignupRequest {
            email: email.to_string(),
            password: password.to_string(),
            full_name: full_name.to_string(),
        };
        let payload = self.gateway.signup(&request).await?;

        info!(user_id = %payload.user.id, "account created");
        *self.state.write().await = SessionState::Authenticated(payload.user.clone());
        Ok(payload.user)
    }

    /// Sign out. The local session is cleared even if the server call fails.
    ///
    /// # Errors
    /// Returns the gateway error after clearing local state.
    pub async fn logout(&self) -> Result<()> {
        let result = self.gateway.logout().await;
        *self.state.write().await = SessionState::Anonymous;

        match result {
            Ok(_) => {
                info!("signed out");
                Ok(())
            }
            Err(err) => {
                warn!(error = %err, "logout call failed; local session cleared anyway");
                Err(err)
            }
        }
    }

    /// Snapshot of the current state.
    pub async fn state(&self) -> SessionState {
        self.state.read().await.clone()
    }

    /// Signed-in user, if any.
    pub async fn current_user(&self) -> Option<User> {
        self.state.read().await.user().cloned()
    }

    /// True once a user is stored.
    pub async fn is_authenticated(&self) -> bool {
        matches!(*self.state.read().await, SessionState::Authenticated(_))
    }

    /// True until the first probe completes.
    pub async fn is_loading(&self) -> bool {
        matches!(*self.state.read().await, SessionState::Loading)
    }
}
