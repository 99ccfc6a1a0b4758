//! Profile, settings and admin user-management endpoints

use wellpulse_domain::{
    MessagePayload, Paginated, ProfileUpdate, RoleUpdate, SettingsUpdate, User, UserRole,
    UserSettings,
};

use crate::api::{ApiClient, ApiError};

#[derive(Clone)]
pub struct UserApi {
    client: ApiClient,
}

impl UserApi {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    pub async fn profile(&self) -> Result<User, ApiError> {
        self.client.get("/users/profile").await
    }

    pub async fn update_profile(&self, update: &ProfileUpdate) -> Result<User, ApiError> {
        self.client.put("/users/profile", update).await
    }

    pub async fn settings(&self) -> Result<UserSettings, ApiError> {
        self.client.get("/users/settings").await
    }

    pub async fn update_settings(&self, update: &SettingsUpdate) -> Result<UserSettings, ApiError> {
        self.client.put("/users/settings", update).await
    }

    /// Admin: one page of users, optionally filtered by a search term.
    pub async fn list_users(
        &self,
        page: u32,
        per_page: u32,
        search: Option<&str>,
    ) -> Result<Paginated<User>, ApiError> {
        self.client.get(&list_users_path(page, per_page, search)).await
    }

    /// Admin: change a user's role.
    pub async fn update_user_role(&self, user_id: &str, role: UserRole) -> Result<User, ApiError> {
        let path = format!("/admin/users/{}/role", urlencoding::encode(user_id));
        self.client.patch(&path, &RoleUpdate { role }).await
    }

    /// Admin: delete a user account.
    pub async fn delete_user(&self, user_id: &str) -> Result<MessagePayload, ApiError> {
        let path = format!("/admin/users/{}", urlencoding::encode(user_id));
        self.client.delete(&path).await
    }
}

fn list_users_path(page: u32, per_page: u32, search: Option<&str>) -> String {
    let mut path = format!("/admin/users?page={page}&per_page={per_page}");
    if let Some(term) = search.filter(|term| !term.is_empty()) {
        path.push_str("&search=");
        path.push_str(&urlencoding::encode(term));
    }
    path
}
