//! Typed endpoint facades
//!
//! Each facade maps one method to one (method, path, payload) triple and
//! hands it to the shared [`ApiClient`].

pub mod auth;
pub mod data;
pub mod user;

pub use auth::AuthApi;
pub use data::{AlertApi, CheckinApi, DashboardApi, InsightApi};
pub use user::UserApi;

use super::ApiClient;

/// Every facade over one shared client
#[derive(Clone)]
pub struct WellPulseApi {
    pub auth: AuthApi,
    pub users: UserApi,
    pub checkins: CheckinApi,
    pub dashboard: DashboardApi,
    pub insights: InsightApi,
    pub alerts: AlertApi,
}

impl WellPulseApi {
    pub fn new(client: ApiClient) -> Self {
        Self {
            auth: AuthApi::new(client.clone()),
            users: UserApi::new(client.clone()),
            checkins: CheckinApi::new(client.clone()),
            dashboard: DashboardApi::new(client.clone()),
            insights: InsightApi::new(client.clone()),
            alerts: AlertApi::new(client),
        }
    }
}
