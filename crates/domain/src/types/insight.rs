//! AI analysis, insight, alert and dashboard types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
#[cfg(feature = "ts-gen")]
use ts_rs::TS;

use super::checkin::DailyCheckin;
use crate::impl_wire_enum_conversions;
use crate::utils::timestamp;

/// Scores attached to an analysis; the backend may add more keys over time.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "ts-gen", derive(TS))]
#[cfg_attr(feature = "ts-gen", ts(export))]
#[serde(default)]
pub struct AnalysisLabels {
    pub stress_level: f64,
    pub risk_score: f64,
    pub overall_wellness: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "ts-gen", derive(TS))]
#[cfg_attr(feature = "ts-gen", ts(export))]
pub struct AnalysisResult {
    pub id: String,
    pub checkin_id: String,
    pub user_id: String,
    pub model_version: String,
    pub summary: String,
    #[serde(default)]
    pub labels: AnalysisLabels,
    pub confidence: f64,
    #[serde(deserialize_with = "timestamp::deserialize")]
    pub created_at: DateTime<Utc>,
}

/// A check-in together with its analysis
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "ts-gen", derive(TS))]
#[cfg_attr(feature = "ts-gen", ts(export))]
pub struct InsightData {
    pub id: String,
    pub checkin: DailyCheckin,
    pub analysis: AnalysisResult,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "ts-gen", derive(TS))]
#[cfg_attr(feature = "ts-gen", ts(export))]
#[serde(rename_all = "snake_case")]
pub enum AlertType {
    LowSleep,
    HighStress,
    RiskDetected,
    PositiveTrend,
}

impl_wire_enum_conversions!(AlertType {
    LowSleep => "low_sleep",
    HighStress => "high_stress",
    RiskDetected => "risk_detected",
    PositiveTrend => "positive_trend",
});

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "ts-gen", derive(TS))]
#[cfg_attr(feature = "ts-gen", ts(export))]
#[serde(rename_all = "lowercase")]
pub enum AlertStatus {
    #[default]
    Open,
    Acknowledged,
    Closed,
}

impl_wire_enum_conversions!(AlertStatus {
    Open => "open",
    Acknowledged => "acknowledged",
    Closed => "closed",
});

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "ts-gen", derive(TS))]
#[cfg_attr(feature = "ts-gen", ts(export))]
pub struct Alert {
    pub id: String,
    pub user_id: String,
    #[serde(default)]
    pub ai_result_id: Option<String>,
    #[serde(rename = "type")]
    pub alert_type: AlertType,
    #[serde(default)]
    pub status: AlertStatus,
    #[serde(default)]
    #[cfg_attr(feature = "ts-gen", ts(type = "Record<string, unknown>"))]
    pub payload: Map<String, Value>,
    #[serde(deserialize_with = "timestamp::deserialize")]
    pub created_at: DateTime<Utc>,
}

/// Body of `PATCH /alerts/{id}`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlertStatusUpdate {
    pub status: AlertStatus,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "ts-gen", derive(TS))]
#[cfg_attr(feature = "ts-gen", ts(export))]
pub struct MoodPoint {
    pub date: String,
    pub mood: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "ts-gen", derive(TS))]
#[cfg_attr(feature = "ts-gen", ts(export))]
pub struct SleepPoint {
    pub date: String,
    pub hours: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "ts-gen", derive(TS))]
#[cfg_attr(feature = "ts-gen", ts(export))]
pub struct StressSlice {
    pub name: String,
    pub value: u32,
}

/// Aggregates behind the dashboard page
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "ts-gen", derive(TS))]
#[cfg_attr(feature = "ts-gen", ts(export))]
pub struct DashboardStats {
    pub avg_mood: f64,
    pub avg_sleep: f64,
    pub checkin_streak: u32,
    pub open_alerts: u32,
    #[serde(default)]
    pub mood_trend: Vec<MoodPoint>,
    #[serde(default)]
    pub sleep_trend: Vec<SleepPoint>,
    #[serde(default)]
    pub stress_distribution: Vec<StressSlice>,
    #[serde(default)]
    pub recent_checkins: Vec<DailyCheckin>,
}
