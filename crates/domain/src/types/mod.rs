//! Wire types exchanged with the WellPulse API

pub mod auth;
pub mod checkin;
pub mod insight;
pub mod user;

use serde::{Deserialize, Serialize};
#[cfg(feature = "ts-gen")]
use ts_rs::TS;

pub use auth::{
    AuthPayload, ForgotPasswordRequest, LoginRequest, MessagePayload, ResetPasswordRequest,
    SignupRequest,
};
pub use checkin::{CheckinCreated, CheckinRequest, DailyCheckin, DateRange};
pub use insight::{
    Alert, AlertStatus, AlertStatusUpdate, AlertType, AnalysisLabels, AnalysisResult,
    DashboardStats, InsightData, MoodPoint, SleepPoint, StressSlice,
};
pub use user::{
    Preferences, ProfileUpdate, RoleUpdate, SettingsUpdate, Theme, User, UserRole, UserSettings,
};

/// One page of an admin listing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "ts-gen", derive(TS))]
#[cfg_attr(feature = "ts-gen", ts(export))]
pub struct Paginated<T> {
    pub items: Vec<T>,
    pub total: u64,
    pub page: u32,
    pub per_page: u32,
    pub has_next: bool,
}
