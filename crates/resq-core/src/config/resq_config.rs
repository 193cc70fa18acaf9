//! Top-level ResQ configuration.

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::{DashboardConfig, GestureConfig, ObservabilityConfig, StoreConfig};
use crate::errors::ConfigError;

const ENV_STORE_URL: &str = "RESQ_STORE_URL";
const ENV_STORE_API_KEY: &str = "RESQ_STORE_API_KEY";
const ENV_TAP_TIMEOUT_MS: &str = "RESQ_TAP_TIMEOUT_MS";
const ENV_POLL_INTERVAL_SECS: &str = "RESQ_POLL_INTERVAL_SECS";
const ENV_LOG_LEVEL: &str = "RESQ_LOG_LEVEL";

const KNOWN_FILTERS: [&str; 3] = ["all", "active", "critical"];

/// Top-level configuration aggregating all sub-configs.
///
/// Resolution order (highest priority first):
/// 1. Environment variables (`RESQ_*`)
/// 2. Config file
/// 3. Compiled defaults
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ResqConfig {
    pub gesture: GestureConfig,
    pub dashboard: DashboardConfig,
    pub store: StoreConfig,
    pub observability: ObservabilityConfig,
}

impl ResqConfig {
    /// Load configuration: optional TOML file, then environment overrides,
    /// then validation.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let mut config = match path {
            Some(p) => Self::from_file(p)?,
            None => Self::default(),
        };
        config.apply_env_with(|key| std::env::var(key).ok())?;
        config.validate()?;
        Ok(config)
    }

    /// Parse a TOML file. Missing keys fall back to defaults.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
            path: path.display().to_string(),
        })?;
        toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.display().to_string(),
            message: e.to_string(),
        })
    }

    /// Load configuration from a TOML string (for testing).
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })
    }

    /// Apply `RESQ_*` overrides read through `lookup`.
    pub fn apply_env_with<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(url) = lookup(ENV_STORE_URL) {
            self.store.endpoint_url = Some(url);
        }
        if let Some(key) = lookup(ENV_STORE_API_KEY) {
            self.store.api_key = Some(key);
        }
        if let Some(raw) = lookup(ENV_TAP_TIMEOUT_MS) {
            self.gesture.tap_timeout_ms = parse_env_number(ENV_TAP_TIMEOUT_MS, &raw)?;
        }
        if let Some(raw) = lookup(ENV_POLL_INTERVAL_SECS) {
            self.dashboard.poll_interval_secs = parse_env_number(ENV_POLL_INTERVAL_SECS, &raw)?;
        }
        if let Some(level) = lookup(ENV_LOG_LEVEL) {
            self.observability.log_level = level;
        }
        Ok(())
    }

    /// Validate the configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.gesture.tap_timeout_ms == 0 {
            return Err(ConfigError::ValidationFailed {
                field: "gesture.tap_timeout_ms".to_string(),
                message: "must be greater than 0".to_string(),
            });
        }
        if self.gesture.required_taps < 2 {
            return Err(ConfigError::ValidationFailed {
                field: "gesture.required_taps".to_string(),
                message: "must be at least 2".to_string(),
            });
        }
        if self.dashboard.poll_interval_secs == 0 {
            return Err(ConfigError::ValidationFailed {
                field: "dashboard.poll_interval_secs".to_string(),
                message: "must be greater than 0".to_string(),
            });
        }
        if !KNOWN_FILTERS.contains(&self.dashboard.default_filter.as_str()) {
            return Err(ConfigError::ValidationFailed {
                field: "dashboard.default_filter".to_string(),
                message: format!("must be one of {}", KNOWN_FILTERS.join(", ")),
            });
        }
        if self.store.request_timeout_secs == 0 {
            return Err(ConfigError::ValidationFailed {
                field: "store.request_timeout_secs".to_string(),
                message: "must be greater than 0".to_string(),
            });
        }
        Ok(())
    }
}

fn parse_env_number(var: &str, raw: &str) -> Result<u64, ConfigError> {
    raw.trim()
        .parse::<u64>()
        .map_err(|e| ConfigError::ValidationFailed {
            field: var.to_string(),
            message: e.to_string(),
        })
}
