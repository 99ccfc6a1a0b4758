//! `/auth/*` endpoints

use async_trait::async_trait;
use wellpulse_core::AuthGateway;
use wellpulse_domain::constants::REFRESH_PATH;
use wellpulse_domain::{
    AuthPayload, ForgotPasswordRequest, LoginRequest, MessagePayload, ResetPasswordRequest,
    SignupRequest, User,
};

use crate::api::{ApiClient, ApiError, ApiRequest};

/// Login, signup, logout and password-reset calls
#[derive(Clone)]
pub struct AuthApi {
    client: ApiClient,
}

impl AuthApi {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    pub async fn login(&self, request: &LoginRequest) -> Result<AuthPayload, ApiError> {
        self.client.post("/auth/login", request).await
    }

    pub async fn signup(&self, request: &SignupRequest) -> Result<AuthPayload, ApiError> {
        self.client.post("/auth/signup", request).await
    }

    pub async fn logout(&self) -> Result<MessagePayload, ApiError> {
        self.client.post_empty("/auth/logout").await
    }

    pub async fn me(&self) -> Result<User, ApiError> {
        self.client.get("/auth/me").await
    }

    /// Current user without session renewal; a 401 means "not signed in".
    pub async fn me_silent(&self) -> Result<User, ApiError> {
        self.client.probe("/auth/me").await
    }

    /// Explicit renewal call. Sent with [`AuthMode::Skip`](crate::api::AuthMode::Skip)
    /// so a rejected renewal is reported instead of renewing again.
    pub async fn refresh(&self) -> Result<MessagePayload, ApiError> {
        self.client.dispatch(ApiRequest::post(REFRESH_PATH).skip_auth()).await
    }

    pub async fn forgot_password(&self, email: &str) -> Result<MessagePayload, ApiError> {
        let body = ForgotPasswordRequest { email: email.to_string() };
        self.client.post("/auth/forgot-password", &body).await
    }

    pub async fn reset_password(
        &self,
        token: &str,
        password: &str,
    ) -> Result<MessagePayload, ApiError> {
        let body = ResetPasswordRequest { token: token.to_string(), password: password.to_string() };
        self.client.post("/auth/reset-password", &body).await
    }
}

#[async_trait]
impl AuthGateway for AuthApi {
    async fn login(&self, request: &LoginRequest) -> wellpulse_domain::Result<AuthPayload> {
        Ok(AuthApi::login(self, request).await?)
    }

    async fn signup(&self, request: &SignupRequest) -> wellpulse_domain::Result<AuthPayload> {
        Ok(AuthApi::signup(self, request).await?)
    }

    async fn logout(&self) -> wellpulse_domain::Result<MessagePayload> {
        Ok(AuthApi::logout(self).await?)
    }

    async fn current_user_silent(&self) -> wellpulse_domain::Result<User> {
        Ok(self.me_silent().await?)
    }
}
