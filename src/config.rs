//! Runtime configuration loaded from the environment

use std::fmt::Display;
use std::str::FromStr;
use std::time::Duration;

use tracing::{info, warn};

pub const DEFAULT_API_BASE: &str = "http://127.0.0.1:8000";

/// Settings shared by the desktop app and the CLI
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Base URL of the detection / recipe backend, without trailing slash
    pub api_base: String,
    pub request_timeout: Duration,
    pub toast_duration: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_API_BASE.to_string(),
            request_timeout: Duration::from_secs(30),
            toast_duration: Duration::from_millis(3000),
        }
    }
}

impl Config {
    pub fn load() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a config from an arbitrary key lookup (env in production)
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let api_base = try_load(&lookup, "RATATOUILLE_API_BASE", DEFAULT_API_BASE.to_string());
        let timeout_secs: u64 = try_load(&lookup, "RATATOUILLE_TIMEOUT_SECS", 30);
        let toast_ms: u64 = try_load(&lookup, "RATATOUILLE_TOAST_MS", 3000);

        let api_base = api_base.trim().trim_end_matches('/').to_string();
        let api_base = if api_base.is_empty() {
            warn!("RATATOUILLE_API_BASE is blank, using default: {DEFAULT_API_BASE}");
            DEFAULT_API_BASE.to_string()
        } else {
            api_base
        };

        Self {
            api_base,
            request_timeout: Duration::from_secs(timeout_secs.max(1)),
            toast_duration: Duration::from_millis(toast_ms),
        }
    }
}

fn try_load<T>(lookup: &impl Fn(&str) -> Option<String>, key: &str, default: T) -> T
where
    T: FromStr + Display,
    T::Err: Display,
{
    let Some(raw) = lookup(key) else {
        info!("{key} not set, using default: {default}");
        return default;
    };

    raw.trim().parse().unwrap_or_else(|e| {
        warn!("Invalid {key} value {raw:?}: {e}, using default: {default}");
        default
    })
}
