//! Response envelope shared by every API endpoint
//!
//! The backend wraps every payload as `{"ok": bool, "data": ..., "error": ...}`.
//! [`WireEnvelope`] is the lenient wire shape; [`Envelope`] is the validated
//! form where exactly one of success-with-data or failure-with-error holds.
//!
//! Framework-level rejections (validation errors, missing routes) sometimes
//! bypass the envelope and arrive as `{"detail": ...}`. Those are folded into
//! an [`ErrorBody`] so callers see a single failure shape.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;
#[cfg(feature = "ts-gen")]
use ts_rs::TS;

use crate::constants::GENERIC_ERROR_MESSAGE;
use crate::{Result, WellPulseError};

/// Error object carried by a failed envelope
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "ts-gen", derive(TS))]
#[cfg_attr(feature = "ts-gen", ts(export))]
pub struct ErrorBody {
    #[serde(default)]
    pub code: String,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[cfg_attr(feature = "ts-gen", ts(type = "Record<string, unknown> | null"))]
    pub details: Option<Value>,
}

impl ErrorBody {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self { code: code.into(), message: message.into(), details: None }
    }

    /// Fallback used when a failure carries no usable message.
    pub fn generic() -> Self {
        Self::new("unknown_error", GENERIC_ERROR_MESSAGE)
    }

    fn from_detail(detail: Value) -> Self {
        match detail {
            Value::String(message) if !message.is_empty() => Self::new("http_error", message),
            Value::Null => Self::generic(),
            other => Self { details: Some(other), ..Self::generic() },
        }
    }
}

/// Raw envelope as it appears on the wire
#[derive(Debug, Clone, Default, Deserialize)]
pub struct WireEnvelope {
    #[serde(default)]
    pub ok: bool,
    #[serde(default)]
    pub data: Value,
    #[serde(default)]
    pub error: Option<ErrorBody>,
    #[serde(default)]
    pub detail: Option<Value>,
}

/// Validated envelope: success with data, or failure with an error
#[derive(Debug, Clone, PartialEq)]
pub enum Envelope<T> {
    Success(T),
    Failure(ErrorBody),
}

impl WireEnvelope {
    /// Parse a response body.
    ///
    /// # Errors
    /// Returns `WellPulseError::Serialization` if the body is not a JSON
    /// object of the envelope shape.
    pub fn parse(body: &str) -> Result<Self> {
        serde_json::from_str(body)
            .map_err(|e| WellPulseError::Serialization(format!("Invalid response envelope: {e}")))
    }

    /// Validate into an [`Envelope`], decoding `data` as `T`.
    ///
    /// `ok` is authoritative. A success with no `data` decodes `T` from
    /// `null`, which works for `()` and `Option<_>`.
    ///
    /// # Errors
    /// Returns `WellPulseError::Serialization` if a successful envelope's data
    /// does not match `T`.
    pub fn into_envelope<T: DeserializeOwned>(self) -> Result<Envelope<T>> {
        if self.ok {
            let data = serde_json::from_value(self.data).map_err(|e| {
                WellPulseError::Serialization(format!("Unexpected response data: {e}"))
            })?;
            return Ok(Envelope::Success(data));
        }

        Ok(Envelope::Failure(self.into_error_body()))
    }

    /// Best available error for a failed response, regardless of `ok`.
    ///
    /// Prefers the envelope's `error`, then a framework `detail`, then the
    /// generic fallback.
    pub fn into_error_body(self) -> ErrorBody {
        match (self.error, self.detail) {
            (Some(error), _) => error,
            (None, Some(detail)) => ErrorBody::from_detail(detail),
            (None, None) => ErrorBody::generic(),
        }
    }
}

impl<T> Envelope<T> {
    /// Whether the envelope reports `ok: true`.
    pub const fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    pub fn into_result(self) -> std::result::Result<T, ErrorBody> {
        match self {
            Self::Success(data) => Ok(data),
            Self::Failure(error) => Err(error),
        }
    }
}

#[cfg(test)]
mod tests {
    use serde::Deserialize;

    use super::*;

    #[derive(Debug, Deserialize, PartialEq)]
    struct Message {
        message: String,
    }

    #[test]
    fn success_envelope_decodes_data() {
        let wire =
            WireEnvelope::parse(r#"{"ok":true,"data":{"message":"Logged out"},"error":null}"#)
                .unwrap();
        let envelope: Envelope<Message> = wire.into_envelope().unwrap();
        assert_eq!(envelope, Envelope::Success(Message { message: "Logged out".into() }));
    }

    #[test]
    fn success_without_data_decodes_unit() {
        let wire = WireEnvelope::parse(r#"{"ok":true}"#).unwrap();
        let envelope: Envelope<()> = wire.into_envelope().unwrap();
        assert!(envelope.is_success());
    }

    #[test]
    fn failure_envelope_keeps_error_body() {
        let wire = WireEnvelope::parse(
            r#"{"ok":false,"data":null,"error":{"code":"internal_error","message":"An unexpected error occurred"}}"#,
        )
        .unwrap();
        let envelope: Envelope<Message> = wire.into_envelope().unwrap();
        let error = envelope.into_result().unwrap_err();
        assert_eq!(error.code, "internal_error");
        assert_eq!(error.message, "An unexpected error occurred");
        assert!(error.details.is_none());
    }

    #[test]
    fn ok_flag_wins_over_stray_error() {
        let wire = WireEnvelope::parse(
            r#"{"ok":true,"data":{"message":"fine"},"error":{"code":"x","message":"ignored"}}"#,
        )
        .unwrap();
        let envelope: Envelope<Message> = wire.into_envelope().unwrap();
        assert!(envelope.is_success());
    }

    #[test]
    fn detail_string_becomes_message() {
        let wire = WireEnvelope::parse(r#"{"detail":"Invalid email or password"}"#).unwrap();
        let error = wire.into_envelope::<Message>().unwrap().into_result().unwrap_err();
        assert_eq!(error.code, "http_error");
        assert_eq!(error.message, "Invalid email or password");
    }

    #[test]
    fn structured_detail_keeps_details_with_generic_message() {
        let wire = WireEnvelope::parse(
            r#"{"detail":[{"loc":["body","mood"],"msg":"ensure this value is less than or equal to 10"}]}"#,
        )
        .unwrap();
        let error = wire.into_envelope::<Message>().unwrap().into_result().unwrap_err();
        assert_eq!(error.message, GENERIC_ERROR_MESSAGE);
        assert!(error.details.unwrap().is_array());
    }

    #[test]
    fn failure_without_error_uses_generic_message() {
        let wire = WireEnvelope::parse(r#"{"ok":false}"#).unwrap();
        let error = wire.into_envelope::<Message>().unwrap().into_result().unwrap_err();
        assert_eq!(error, ErrorBody::generic());
    }

    #[test]
    fn error_body_ignores_ok_flag() {
        let wire = WireEnvelope::parse(r#"{"ok":true,"data":null}"#).unwrap();
        assert_eq!(wire.into_error_body(), ErrorBody::generic());

        let wire = WireEnvelope::parse(
            r#"{"ok":true,"error":{"code":"forbidden","message":"Admin only"}}"#,
        )
        .unwrap();
        assert_eq!(wire.into_error_body().message, "Admin only");
    }

    #[test]
    fn mismatched_data_is_serialization_error() {
        let wire = WireEnvelope::parse(r#"{"ok":true,"data":{"unexpected":1}}"#).unwrap();
        let result = wire.into_envelope::<Message>();
        assert!(matches!(result, Err(WellPulseError::Serialization(_))));
    }

    #[test]
    fn non_json_body_is_serialization_error() {
        assert!(matches!(
            WireEnvelope::parse("<html>502 Bad Gateway</html>"),
            Err(WellPulseError::Serialization(_))
        ));
    }
}
