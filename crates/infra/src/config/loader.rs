//! Configuration loader
//!
//! Loads application configuration from files and environment variables.
//!
//! ## Loading Strategy
//! 1. Start from the first config file found by [`probe_config_paths`], or
//!    from defaults when there is none
//! 2. Apply environment variable overrides
//! 3. Validate the result
//!
//! ## Environment Variables
//! - `WELLPULSE_API_BASE_URL`: API base URL (e.g. `https://host/api/v1`)
//! - `WELLPULSE_REQUEST_TIMEOUT`: Per-request timeout in seconds
//! - `WELLPULSE_REFRESH_TIMEOUT`: Session renewal timeout in seconds
//!
//! ## File Locations
//! The loader probes the following paths (in order):
//! 1. `./wellpulse.json` or `./wellpulse.toml` (current working directory)
//! 2. `./config.json` or `./config.toml` (current working directory)
//! 3. `../config.json` or `../config.toml` (parent directory)
//! 4. `../../config.json` or `../../config.toml` (grandparent directory)
//! 5. Relative to executable location

use std::path::{Path, PathBuf};

use wellpulse_domain::constants::{ENV_API_BASE_URL, ENV_REFRESH_TIMEOUT, ENV_REQUEST_TIMEOUT};
use wellpulse_domain::{Config, Result, WellPulseError};

/// Load configuration: file (if any), then environment overrides.
///
/// # Errors
/// Returns `WellPulseError::Config` if:
/// - A probed config file cannot be read or parsed
/// - An environment variable has an invalid value
/// - The resulting configuration fails validation
pub fn load() -> Result<Config> {
    let mut config = match probe_config_paths() {
        Some(path) => read_config_file(&path)?,
        None => {
            tracing::debug!("No config file found, using defaults");
            Config::default()
        }
    };

    apply_env_overrides(&mut config)?;
    config.api.validate()?;
    Ok(config)
}

/// Load configuration from defaults and environment variables only
///
/// # Environment Variables
/// See module documentation for the complete list.
///
/// # Errors
/// Returns `WellPulseError::Config` if a variable has an invalid value or the
/// result fails validation.
pub fn load_from_env() -> Result<Config> {
    let mut config = Config::default();
    apply_env_overrides(&mut config)?;
    config.api.validate()?;

    tracing::info!(base_url = %config.api.base_url, "Configuration loaded from environment");
    Ok(config)
}

/// Load configuration from a file
///
/// If `path` is `None`, probes multiple locations for config files.
/// Supports both JSON and TOML formats (detected by file extension).
///
/// # Arguments
/// * `path` - Optional path to config file. If `None`, uses
///   [`probe_config_paths`].
///
/// # Errors
/// Returns `WellPulseError::Config` if:
/// - File not found (when path is specified)
/// - No config file found (when path is `None`)
/// - File format is invalid
/// - The configuration fails validation
pub fn load_from_file(path: Option<PathBuf>) -> Result<Config> {
    let config_path = match path {
        Some(p) => {
            if !p.exists() {
                return Err(WellPulseError::Config(format!(
                    "Config file not found: {}",
                    p.display()
                )));
            }
            p
        }
        None => probe_config_paths().ok_or_else(|| {
            WellPulseError::Config(
                "No config file found in any of the standard locations".to_string(),
            )
        })?,
    };

    let config = read_config_file(&config_path)?;
    config.api.validate()?;
    Ok(config)
}

fn read_config_file(path: &Path) -> Result<Config> {
    tracing::info!(path = %path.display(), "Loading configuration from file");

    let contents = std::fs::read_to_string(path)
        .map_err(|e| WellPulseError::Config(format!("Failed to read config file: {}", e)))?;

    parse_config(&contents, path)
}

/// Parse configuration from string content
///
/// Format is detected by file extension (`.json` or `.toml`).
///
/// # Errors
/// Returns `WellPulseError::Config` if format is invalid or parsing fails.
fn parse_config(contents: &str, path: &Path) -> Result<Config> {
    let extension = path.extension().and_then(|e| e.to_str()).unwrap_or("json");

    match extension {
        "toml" => toml::from_str(contents)
            .map_err(|e| WellPulseError::Config(format!("Invalid TOML format: {}", e))),
        "json" => serde_json::from_str(contents)
            .map_err(|e| WellPulseError::Config(format!("Invalid JSON format: {}", e))),
        _ => Err(WellPulseError::Config(format!("Unsupported config format: {}", extension))),
    }
}

fn apply_env_overrides(config: &mut Config) -> Result<()> {
    if let Some(base_url) = env_var(ENV_API_BASE_URL) {
        config.api.base_url = base_url;
    }

    if let Some(secs) = env_secs(ENV_REQUEST_TIMEOUT)? {
        config.api.request_timeout_secs = secs;
    }

    if let Some(secs) = env_secs(ENV_REFRESH_TIMEOUT)? {
        config.api.refresh_timeout_secs = secs;
    }

    Ok(())
}

/// Probe multiple paths for configuration files
///
/// Searches for config files in the following locations (in order):
/// 1. Current working directory (`./wellpulse.{json,toml}`,
///    `./config.{json,toml}`)
/// 2. Parent directories (up to 2 levels)
/// 3. Relative to executable location
///
/// # Returns
/// The first config file found, or `None` if no file exists.
pub fn probe_config_paths() -> Option<PathBuf> {
    let mut candidates = Vec::new();

    if let Ok(cwd) = std::env::current_dir() {
        candidates.extend(candidates_in(&cwd));
    }

    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            candidates.extend(candidates_in(exe_dir));
        }
    }

    candidates.into_iter().find(|path| path.exists())
}

fn candidates_in(dir: &Path) -> Vec<PathBuf> {
    vec![
        dir.join("wellpulse.json"),
        dir.join("wellpulse.toml"),
        dir.join("config.json"),
        dir.join("config.toml"),
        dir.join("../config.json"),
        dir.join("../config.toml"),
        dir.join("../../config.json"),
        dir.join("../../config.toml"),
    ]
}

/// Non-empty environment variable
fn env_var(key: &str) -> Option<String> {
    std::env::var(key).ok().map(|s| s.trim().to_string()).filter(|s| !s.is_empty())
}

/// Parse a number of seconds from an environment variable
///
/// # Errors
/// Returns `WellPulseError::Config` if the variable is set but not a number.
fn env_secs(key: &str) -> Result<Option<u64>> {
    env_var(key)
        .map(|s| {
            s.parse::<u64>()
                .map_err(|e| WellPulseError::Config(format!("Invalid value for {}: {}", key, e)))
        })
        .transpose()
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use once_cell::sync::Lazy;

    use super::*;

    static ENV_LOCK: Lazy<Mutex<()>> = Lazy::new(|| Mutex::new(()));

    fn clear_env() {
        std::env::remove_var(ENV_API_BASE_URL);
        std::env::remove_var(ENV_REQUEST_TIMEOUT);
        std::env::remove_var(ENV_REFRESH_TIMEOUT);
    }

    #[test]
    fn test_env_secs_parsing() {
        let _guard = ENV_LOCK.lock().expect("env mutex poisoned");

        std::env::set_var("WELLPULSE_TEST_SECS", "15");
        assert_eq!(env_secs("WELLPULSE_TEST_SECS").unwrap(), Some(15));

        std::env::set_var("WELLPULSE_TEST_SECS", "  ");
        assert_eq!(env_secs("WELLPULSE_TEST_SECS").unwrap(), None);

        std::env::set_var("WELLPULSE_TEST_SECS", "soon");
        assert!(matches!(env_secs("WELLPULSE_TEST_SECS"), Err(WellPulseError::Config(_))));

        std::env::remove_var("WELLPULSE_TEST_SECS");
        assert_eq!(env_secs("WELLPULSE_TEST_SECS").unwrap(), None);
    }

    #[test]
    fn test_load_from_env_defaults() {
        let _guard = ENV_LOCK.lock().expect("env mutex poisoned");
        clear_env();

        let config = load_from_env().unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_load_from_env_overrides() {
        let _guard = ENV_LOCK.lock().expect("env mutex poisoned");
        clear_env();

        std::env::set_var(ENV_API_BASE_URL, "https://wellpulse.example/api/v1");
        std::env::set_var(ENV_REQUEST_TIMEOUT, "12");
        std::env::set_var(ENV_REFRESH_TIMEOUT, "4");

        let config = load_from_env().unwrap();
        assert_eq!(config.api.base_url, "https://wellpulse.example/api/v1");
        assert_eq!(config.api.request_timeout_secs, 12);
        assert_eq!(config.api.refresh_timeout_secs, 4);

        clear_env();
    }

    #[test]
    fn test_load_from_env_rejects_invalid_values() {
        let _guard = ENV_LOCK.lock().expect("env mutex poisoned");
        clear_env();

        std::env::set_var(ENV_REQUEST_TIMEOUT, "not-a-number");
        assert!(matches!(load_from_env(), Err(WellPulseError::Config(_))));
        clear_env();

        std::env::set_var(ENV_API_BASE_URL, "localhost:8000");
        assert!(matches!(load_from_env(), Err(WellPulseError::Config(_))));
        clear_env();
    }

    #[test]
    fn test_load_from_file_not_found() {
        let result = load_from_file(Some(PathBuf::from("/nonexistent/wellpulse.json")));
        assert!(matches!(result, Err(WellPulseError::Config(_))));
    }

    #[test]
    fn test_parse_config_json() {
        let json_content = r#"{"api": {"base_url": "https://a.example/api/v1", "request_timeout_secs": 5}}"#;

        let config = parse_config(json_content, Path::new("test.json")).unwrap();
        assert_eq!(config.api.base_url, "https://a.example/api/v1");
        assert_eq!(config.api.request_timeout_secs, 5);
        assert_eq!(config.api.refresh_timeout_secs, 10);
    }

    #[test]
    fn test_parse_config_toml() {
        let toml_content = r#"
[api]
base_url = "https://b.example/api/v1"
refresh_timeout_secs = 3
user_agent = "wellpulse-cli/0.1"
"#;

        let config = parse_config(toml_content, Path::new("test.toml")).unwrap();
        assert_eq!(config.api.base_url, "https://b.example/api/v1");
        assert_eq!(config.api.refresh_timeout_secs, 3);
        assert_eq!(config.api.user_agent.as_deref(), Some("wellpulse-cli/0.1"));
    }

    #[test]
    fn test_parse_config_empty_toml_uses_defaults() {
        let config = parse_config("", Path::new("wellpulse.toml")).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_parse_config_unsupported_format() {
        let result = parse_config("some content", Path::new("test.yaml"));
        assert!(result.is_err(), "Should fail with unsupported format");
    }

    #[test]
    fn test_candidates_prefer_wellpulse_files() {
        let candidates = candidates_in(Path::new("/srv/app"));
        assert_eq!(candidates[0], PathBuf::from("/srv/app/wellpulse.json"));
        assert_eq!(candidates[1], PathBuf::from("/srv/app/wellpulse.toml"));
        assert_eq!(candidates.len(), 8);
    }
}
