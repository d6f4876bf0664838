//! Agent configuration
//!
//! Loaded from a TOML file; every field has a default so an absent file still
//! yields a runnable agent.
//!
//! ```toml
//! window_size = 5
//! interval_secs = 5
//! endpoint = "https://yourserver.com/api/sensordata"
//! timeout_secs = 10
//! allow_insecure = false
//! # seed = 42
//! # max_ticks = 100
//! ```

use std::path::{Path, PathBuf};

use edgepulse_core::DEFAULT_WINDOW_SIZE;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Default collector endpoint
pub const DEFAULT_ENDPOINT: &str = "https://yourserver.com/api/sensordata";

/// Default seconds between ticks
pub const DEFAULT_INTERVAL_SECS: u64 = 5;

/// Default transport timeout
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Largest accepted `window_size`
pub const MAX_WINDOW_SIZE: usize = 100_000;

/// Configuration loading and validation errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read '{path}': {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("TOML parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid value for {field}: {reason}")]
    Invalid {
        field: &'static str,
        reason: &'static str,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AgentConfig {
    /// Samples retained per channel
    pub window_size: usize,
    /// Seconds between ticks
    pub interval_secs: u64,
    /// Collector URL
    pub endpoint: String,
    /// Transport timeout in seconds
    pub timeout_secs: u64,
    /// Accept plain http:// collectors
    pub allow_insecure: bool,
    /// Seed for the demo sensor source; entropy when absent
    pub seed: Option<u64>,
    /// Stop after this many ticks; run until interrupted when absent
    pub max_ticks: Option<u64>,
}

impl Default for AgentConfig {
    fn default() -> Self {
        Self {
            window_size: DEFAULT_WINDOW_SIZE,
            interval_secs: DEFAULT_INTERVAL_SECS,
            endpoint: DEFAULT_ENDPOINT.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            allow_insecure: false,
            seed: None,
            max_ticks: None,
        }
    }
}

impl AgentConfig {
    /// Reject values the agent cannot run with
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.window_size == 0 {
            return Err(ConfigError::Invalid {
                field: "window_size",
                reason: "must be at least 1",
            });
        }

        if self.window_size > MAX_WINDOW_SIZE {
            return Err(ConfigError::Invalid {
                field: "window_size",
                reason: "must be at most 100000",
            });
        }

        if self.interval_secs == 0 {
            return Err(ConfigError::Invalid {
                field: "interval_secs",
                reason: "must be at least 1",
            });
        }

        if self.timeout_secs == 0 {
            return Err(ConfigError::Invalid {
                field: "timeout_secs",
                reason: "must be at least 1",
            });
        }

        Ok(())
    }
}

/// Load configuration from a TOML file. Returns `AgentConfig::default()` if
/// the file doesn't exist.
pub fn load(path: impl AsRef<Path>) -> Result<AgentConfig, ConfigError> {
    let path = path.as_ref();
    if !path.exists() {
        tracing::warn!(
            "Config file not found at '{}'; using defaults.",
            path.display()
        );
        return Ok(AgentConfig::default());
    }

    let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    parse(&raw)
}

/// Parse configuration from TOML text
pub fn parse(raw: &str) -> Result<AgentConfig, ConfigError> {
    Ok(toml::from_str(raw)?)
}
