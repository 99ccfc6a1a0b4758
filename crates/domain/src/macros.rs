//! Macro for wire-string enums
//!
//! Several API enums (roles, alert states, date ranges) travel as short
//! lowercase strings, both in JSON bodies and in query strings. This macro
//! gives them one consistent `as_str`, `Display` and `FromStr`.
//!
//! # Example
//!
//! ```rust
//! use wellpulse_domain::impl_wire_enum_conversions;
//!
//! #[derive(Debug, Clone, Copy, PartialEq, Eq)]
//! pub enum Theme {
//!     Light,
//!     Dark,
//! }
//!
//! impl_wire_enum_conversions!(Theme {
//!     Light => "light",
//!     Dark => "dark",
//! });
//!
//! assert_eq!(Theme::Dark.as_str(), "dark");
//! assert_eq!("LIGHT".parse::<Theme>().unwrap(), Theme::Light);
//! ```

/// Implements `as_str`, `Display` and `FromStr` for wire-string enums
///
/// Parsing is case-insensitive; output is always the canonical string given
/// in the mapping.
#[macro_export]
macro_rules! impl_wire_enum_conversions {
    ($enum_name:ident { $($variant:ident => $str:expr),+ $(,)? }) => {
        impl $enum_name {
            /// Canonical wire representation.
            pub const fn as_str(&self) -> &'static str {
                match self {
                    $(Self::$variant => $str,)+
                }
            }
        }

        impl std::fmt::Display for $enum_name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl std::str::FromStr for $enum_name {
            type Err = $crate::WellPulseError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s.to_lowercase().as_str() {
                    $($str => Ok(Self::$variant),)+
                    _ => Err($crate::WellPulseError::InvalidInput(format!(
                        "Invalid {}: {}",
                        stringify!($enum_name),
                        s
                    ))),
                }
            }
        }
    };
}
