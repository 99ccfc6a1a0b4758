//! Logging setup
//!
//! The library only emits `tracing` events; binaries and tests pick a
//! subscriber here. `RUST_LOG` overrides the default directive.

use tracing_subscriber::{fmt, EnvFilter};

/// Default filter when `RUST_LOG` is unset
pub const DEFAULT_DIRECTIVE: &str = "info";

fn env_filter(default_directive: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive))
}

/// Install a human-readable subscriber.
///
/// Returns `false` if a global subscriber was already installed, in which case
/// nothing changes.
pub fn init_tracing(default_directive: &str) -> bool {
    fmt().with_env_filter(env_filter(default_directive)).with_target(true).try_init().is_ok()
}

/// Install a subscriber that writes one JSON object per event.
pub fn init_json_tracing(default_directive: &str) -> bool {
    fmt().json().with_env_filter(env_filter(default_directive)).try_init().is_ok()
}

/// Subscriber for tests: debug level, captured by the test harness.
pub fn init_test_tracing() {
    let _ = fmt().with_env_filter(env_filter("debug")).with_test_writer().try_init();
}
