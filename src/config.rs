//! Runtime configuration read from the environment.
//!
//! [`LookupConfig`] controls where the catalog is loaded from, how many
//! suggestions are shown and how often a degraded catalog is reloaded.

use std::path::PathBuf;
use std::time::Duration;

use crate::error::{LookupError, Result};

/// Dataset file generated from the provider spreadsheet
pub const DEFAULT_DATA_PATH: &str = "obras-sociales.json";

/// Configuration for loading and serving the catalog
#[derive(Debug, Clone)]
pub struct LookupConfig {
    /// API base URL without trailing slash. `None` skips the remote fetch.
    pub api_base: Option<String>,
    /// Local dataset used when the remote fetch fails
    pub data_path: PathBuf,
    /// HTTP server port
    pub port: u16,
    /// Maximum suggestions returned per query
    pub suggestion_limit: usize,
    /// Remote fetch timeout in seconds
    pub timeout_secs: u64,
    /// Reload interval while the catalog is not from the remote source
    pub refresh_interval_secs: u64,
}

impl Default for LookupConfig {
    fn default() -> Self {
        Self {
            api_base: None,
            data_path: PathBuf::from(DEFAULT_DATA_PATH),
            port: 8090,
            suggestion_limit: 10,
            timeout_secs: 10,
            refresh_interval_secs: 30,
        }
    }
}

impl LookupConfig {
    /// Build from `OBRAS_*` environment variables over the defaults
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(get: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let mut config = Self::default();

        if let Some(base) = get("OBRAS_API_BASE") {
            config = config.with_api_base(base);
        }
        if let Some(path) = get("OBRAS_DATA_PATH") {
            config.data_path = PathBuf::from(path);
        }
        if let Some(port) = get("PORT") {
            config.port = parse_var("PORT", &port)?;
        }
        if let Some(limit) = get("OBRAS_SUGGESTION_LIMIT") {
            config.suggestion_limit = parse_var("OBRAS_SUGGESTION_LIMIT", &limit)?;
        }
        if let Some(secs) = get("OBRAS_TIMEOUT_SECS") {
            config.timeout_secs = parse_var("OBRAS_TIMEOUT_SECS", &secs)?;
        }
        if let Some(secs) = get("OBRAS_REFRESH_SECS") {
            config.refresh_interval_secs = parse_var("OBRAS_REFRESH_SECS", &secs)?;
        }

        config.validate()?;
        Ok(config)
    }

    /// Set the API base, dropping trailing slashes and blank values
    pub fn with_api_base(mut self, base: impl Into<String>) -> Self {
        let base: String = base.into();
        let base = base.trim().trim_end_matches('/');
        self.api_base = (!base.is_empty()).then(|| base.to_string());
        self
    }

    /// Validates this configuration.
    ///
    /// `suggestion_limit`, `timeout_secs` and `refresh_interval_secs` must be
    /// greater than 0.
    pub fn validate(&self) -> Result<()> {
        if self.suggestion_limit == 0 {
            return Err(LookupError::Config(
                "suggestion_limit must be greater than 0".into(),
            ));
        }
        if self.timeout_secs == 0 {
            return Err(LookupError::Config(
                "timeout_secs must be greater than 0".into(),
            ));
        }
        if self.refresh_interval_secs == 0 {
            return Err(LookupError::Config(
                "refresh_interval_secs must be greater than 0".into(),
            ));
        }
        Ok(())
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    pub fn refresh_interval(&self) -> Duration {
        Duration::from_secs(self.refresh_interval_secs)
    }
}

fn parse_var<T: std::str::FromStr>(key: &str, value: &str) -> Result<T> {
    value
        .trim()
        .parse()
        .map_err(|_| LookupError::Config(format!("invalid value for {}: {:?}", key, value)))
}
