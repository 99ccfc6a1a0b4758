//! Lenient timestamp deserialization
//!
//! The backend emits timestamps either as RFC 3339 strings (`...Z` or with an
//! offset) or as naive ISO strings written by the database layer
//! (`2025-03-01T08:30:00.123456`). Naive values are taken as UTC.
//!
//! # Usage
//! ```rust
//! use chrono::{DateTime, Utc};
//! use serde::Deserialize;
//! use wellpulse_domain::utils::timestamp;
//!
//! #[derive(Deserialize)]
//! struct Example {
//!     #[serde(deserialize_with = "timestamp::deserialize")]
//!     created_at: DateTime<Utc>,
//! }
//! ```

use chrono::{DateTime, NaiveDateTime, Utc};
use serde::de::Error as _;
use serde::{Deserialize, Deserializer};

/// Parse a timestamp string in either RFC 3339 or naive ISO form.
pub fn parse(value: &str) -> Option<DateTime<Utc>> {
    if let Ok(parsed) = DateTime::parse_from_rfc3339(value) {
        return Some(parsed.with_timezone(&Utc));
    }

    ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"]
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(value, format).ok())
        .map(|naive| naive.and_utc())
}

pub fn deserialize<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse(&raw).ok_or_else(|| D::Error::custom(format!("invalid timestamp: {raw}")))
}

/// Same as [`deserialize`] for nullable fields.
pub mod option {
    use super::{parse, DateTime, Deserialize, Deserializer, Utc};
    use serde::de::Error as _;

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
    where
        D: Deserializer<'de>,
    {
        match Option::<String>::deserialize(deserializer)? {
            Some(raw) => parse(&raw)
                .map(Some)
                .ok_or_else(|| D::Error::custom(format!("invalid timestamp: {raw}"))),
            None => Ok(None),
        }
    }
}
