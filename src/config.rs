//! Environment-based configuration.
//!
//! All settings come from `TINYLINK_*` environment variables (a `.env` file
//! is honored via dotenvy in main). Defaults target a registry running on
//! localhost.

use std::env;
use std::time::Duration;

pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8080";
const DEFAULT_TIMEOUT_SECS: u64 = 10;
const DEFAULT_LOG_LEVEL: &str = "warn";

#[derive(Debug, Clone)]
pub struct DashConfig {
    /// Base URL of the link registry, no trailing slash
    pub base_url: String,
    /// Per-request transport timeout
    pub request_timeout: Duration,
    /// tracing env-filter directive, e.g. "info" or "tinydash=debug"
    pub log_level: String,
    /// Optional log file; empty means stdout
    pub log_file: Option<String>,
}

impl Default for DashConfig {
    fn default() -> Self {
        DashConfig {
            base_url: DEFAULT_BASE_URL.to_string(),
            request_timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            log_level: DEFAULT_LOG_LEVEL.to_string(),
            log_file: None,
        }
    }
}

impl DashConfig {
    pub fn from_env() -> Self {
        let base_url = env::var("TINYLINK_BASE_URL")
            .unwrap_or_else(|_| DEFAULT_BASE_URL.to_string())
            .trim_end_matches('/')
            .to_string();

        let timeout_secs = env::var("TINYLINK_TIMEOUT_SECS")
            .ok()
            .and_then(|v| v.parse::<u64>().ok())
            .filter(|&v| v > 0)
            .unwrap_or(DEFAULT_TIMEOUT_SECS);

        let log_level =
            env::var("TINYLINK_LOG").unwrap_or_else(|_| DEFAULT_LOG_LEVEL.to_string());

        let log_file = env::var("TINYLINK_LOG_FILE").ok().filter(|f| !f.is_empty());

        DashConfig {
            base_url,
            request_timeout: Duration::from_secs(timeout_secs),
            log_level,
            log_file,
        }
    }

    /// The public short URL for a code, used for display and copy only.
    /// Redirect resolution never builds its destination from this.
    pub fn short_url(&self, code: &str) -> String {
        format!("{}/{}", self.base_url, code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = DashConfig::default();
        assert_eq!(config.base_url, "http://127.0.0.1:8080");
        assert_eq!(config.request_timeout, Duration::from_secs(10));
        assert_eq!(config.log_level, "warn");
        assert!(config.log_file.is_none());
    }

    #[test]
    fn test_short_url() {
        let config = DashConfig {
            base_url: "https://tl.example.com".to_string(),
            ..DashConfig::default()
        };
        assert_eq!(config.short_url("abc123"), "https://tl.example.com/abc123");
    }

    #[test]
    fn test_from_env_strips_trailing_slash() {
        // Env vars are process-global; use a dedicated variable value and
        // restore nothing (tests in this module never rely on absence).
        unsafe {
            env::set_var("TINYLINK_BASE_URL", "http://registry.local:9000/");
        }
        let config = DashConfig::from_env();
        assert_eq!(config.base_url, "http://registry.local:9000");
        unsafe {
            env::remove_var("TINYLINK_BASE_URL");
        }
    }

    #[test]
    fn test_invalid_timeout_falls_back() {
        unsafe {
            env::set_var("TINYLINK_TIMEOUT_SECS", "not-a-number");
        }
        let config = DashConfig::from_env();
        assert_eq!(config.request_timeout, Duration::from_secs(10));
        unsafe {
            env::remove_var("TINYLINK_TIMEOUT_SECS");
        }
    }
}
