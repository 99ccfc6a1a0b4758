//! Daily check-in types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
#[cfg(feature = "ts-gen")]
use ts_rs::TS;

use crate::impl_wire_enum_conversions;
use crate::utils::timestamp;

/// Look-back window accepted by the check-in listing and the dashboard
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "ts-gen", derive(TS))]
#[cfg_attr(feature = "ts-gen", ts(export))]
pub enum DateRange {
    #[serde(rename = "7d")]
    Week,
    #[default]
    #[serde(rename = "30d")]
    Month,
    #[serde(rename = "90d")]
    Quarter,
}

impl_wire_enum_conversions!(DateRange {
    Week => "7d",
    Month => "30d",
    Quarter => "90d",
});

impl DateRange {
    pub const fn days(&self) -> u32 {
        match self {
            Self::Week => 7,
            Self::Month => 30,
            Self::Quarter => 90,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "ts-gen", derive(TS))]
#[cfg_attr(feature = "ts-gen", ts(export))]
pub struct DailyCheckin {
    pub id: String,
    pub user_id: String,
    /// 1 (worst) to 10 (best)
    pub mood: u8,
    pub sleep_hours: f64,
    #[serde(default)]
    pub notes: String,
    #[serde(deserialize_with = "timestamp::deserialize")]
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "ts-gen", derive(TS))]
#[cfg_attr(feature = "ts-gen", ts(export))]
pub struct CheckinRequest {
    pub mood: u8,
    pub sleep_hours: f64,
    #[serde(default)]
    pub notes: String,
}

/// Returned when a check-in is stored; analysis runs in the background.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "ts-gen", derive(TS))]
#[cfg_attr(feature = "ts-gen", ts(export))]
pub struct CheckinCreated {
    pub checkin: DailyCheckin,
    pub analysis_id: String,
}
