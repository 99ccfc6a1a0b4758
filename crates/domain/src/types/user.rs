//! User account and settings types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
#[cfg(feature = "ts-gen")]
use ts_rs::TS;

use crate::impl_wire_enum_conversions;
use crate::utils::timestamp;

/// Account role, which gates the admin endpoints
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "ts-gen", derive(TS))]
#[cfg_attr(feature = "ts-gen", ts(export))]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    #[default]
    User,
    Coach,
    Admin,
}

impl_wire_enum_conversions!(UserRole {
    User => "user",
    Coach => "coach",
    Admin => "admin",
});

/// User account as returned by the API
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "ts-gen", derive(TS))]
#[cfg_attr(feature = "ts-gen", ts(export))]
pub struct User {
    pub id: String,
    pub email: String,
    pub full_name: String,
    #[serde(default)]
    pub role: UserRole,
    #[serde(deserialize_with = "timestamp::deserialize")]
    pub created_at: DateTime<Utc>,
    #[serde(deserialize_with = "timestamp::deserialize")]
    pub updated_at: DateTime<Utc>,
    #[serde(default, deserialize_with = "timestamp::option::deserialize")]
    pub last_login: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,
}

impl User {
    pub fn is_admin(&self) -> bool {
        self.role == UserRole::Admin
    }
}

/// UI colour scheme preference
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "ts-gen", derive(TS))]
#[cfg_attr(feature = "ts-gen", ts(export))]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
    System,
}

impl_wire_enum_conversions!(Theme {
    Light => "light",
    Dark => "dark",
    System => "system",
});

/// Per-user preferences stored server side
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "ts-gen", derive(TS))]
#[cfg_attr(feature = "ts-gen", ts(export))]
#[serde(default)]
pub struct Preferences {
    pub theme: Theme,
    pub language: String,
    pub notifications_email: bool,
    pub notifications_push: bool,
    pub timezone: String,
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            theme: Theme::Light,
            language: "en".to_string(),
            notifications_email: true,
            notifications_push: true,
            timezone: "UTC".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "ts-gen", derive(TS))]
#[cfg_attr(feature = "ts-gen", ts(export))]
pub struct UserSettings {
    pub id: String,
    pub user_id: String,
    #[serde(default)]
    pub preferences: Preferences,
}

/// Partial profile update; omitted fields stay unchanged on the server.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "ts-gen", derive(TS))]
#[cfg_attr(feature = "ts-gen", ts(export))]
pub struct ProfileUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

/// Partial preferences update; omitted fields stay unchanged on the server.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "ts-gen", derive(TS))]
#[cfg_attr(feature = "ts-gen", ts(export))]
pub struct SettingsUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub theme: Option<Theme>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notifications_email: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notifications_push: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timezone: Option<String>,
}

/// Admin role change payload
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoleUpdate {
    pub role: UserRole,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_accepts_naive_timestamps_and_missing_optionals() {
        let json = r#"{
            "id": "3f0e6a7c-0000-4000-8000-000000000001",
            "email": "ana@example.com",
            "full_name": "Ana Silva",
            "role": "coach",
            "created_at": "2025-03-01T08:30:00.123456",
            "updated_at": "2025-03-02T08:30:00Z",
            "last_login": null
        }"#;

        let user: User = serde_json::from_str(json).unwrap();
        assert_eq!(user.role, UserRole::Coach);
        assert!(user.last_login.is_none());
        assert!(user.avatar_url.is_none());
        assert!(!user.is_admin());
    }

    #[test]
    fn settings_fill_missing_preferences() {
        let json = r#"{"id":"s1","user_id":"u1","preferences":{"theme":"dark"}}"#;
        let settings: UserSettings = serde_json::from_str(json).unwrap();
        assert_eq!(settings.preferences.theme, Theme::Dark);
        assert_eq!(settings.preferences.language, "en");
        assert!(settings.preferences.notifications_push);
    }

    #[test]
    fn updates_skip_unset_fields() {
        let update = SettingsUpdate { theme: Some(Theme::System), ..Default::default() };
        let body = serde_json::to_value(&update).unwrap();
        assert_eq!(body, serde_json::json!({"theme": "system"}));

        let profile = ProfileUpdate { full_name: Some("Ana".into()), email: None };
        assert_eq!(serde_json::to_value(&profile).unwrap(), serde_json::json!({"full_name": "Ana"}));
    }

    #[test]
    fn role_update_serializes_lowercase() {
        let body = serde_json::to_value(RoleUpdate { role: UserRole::Admin }).unwrap();
        assert_eq!(body, serde_json::json!({"role": "admin"}));
    }
}
