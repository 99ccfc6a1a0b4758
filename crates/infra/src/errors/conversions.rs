//! Conversions from external infrastructure errors into domain errors.

use reqwest::Error as HttpError;
use wellpulse_domain::WellPulseError;

/// Error newtype that keeps conversions on the infrastructure side and can be
/// converted back into the domain error.
#[derive(Debug)]
pub struct InfraError(pub WellPulseError);

impl From<InfraError> for WellPulseError {
    fn from(value: InfraError) -> Self {
        value.0
    }
}

impl From<WellPulseError> for InfraError {
    fn from(value: WellPulseError) -> Self {
        InfraError(value)
    }
}

/// Extension trait to make the conversion logic explicit in tests and within
/// this module.
trait IntoWellPulseError {
    fn into_wellpulse(self) -> WellPulseError;
}

/* -------------------------------------------------------------------------- */
/* reqwest::Error → WellPulseError */
/* -------------------------------------------------------------------------- */

impl IntoWellPulseError for HttpError {
    fn into_wellpulse(self) -> WellPulseError {
        if self.is_timeout() {
            return WellPulseError::Network("HTTP request timed out".into());
        }

        if self.is_connect() {
            return WellPulseError::Network("HTTP connection failure".into());
        }

        if self.is_builder() {
            return WellPulseError::Config(format!("Invalid HTTP request: {self}"));
        }

        if self.is_decode() || self.is_body() {
            return WellPulseError::Network(format!("Failed to read HTTP response body: {self}"));
        }

        if let Some(status) = self.status() {
            let code = status.as_u16();
            let message =
                format!("HTTP {} {}", code, status.canonical_reason().unwrap_or("unknown status"));

            return match code {
                401 | 403 => WellPulseError::Auth(message),
                400..=499 => WellPulseError::InvalidInput(message),
                _ => WellPulseError::Network(message),
            };
        }

        WellPulseError::Network(self.to_string())
    }
}

impl From<HttpError> for InfraError {
    fn from(value: HttpError) -> Self {
        InfraError(value.into_wellpulse())
    }
}

/* -------------------------------------------------------------------------- */
/* Tests */
/* -------------------------------------------------------------------------- */
