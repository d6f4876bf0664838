//! HTTPS Connector for EdgePulse - Collector Delivery
//!
//! ## Overview
//!
//! Posts each smoothed reading as a flat JSON object to a collector endpoint:
//!
//! ```text
//! POST /api/sensordata HTTP/1.1
//! Content-Type: application/json
//!
//! {"vibration":2.1,"temperature":27.4,"pressure":1.9}
//! ```
//!
//! ## Design Decisions
//!
//! We intentionally keep this simple and lightweight:
//! - Blocking `ureq` client, one request per reading
//! - JSON as the only format
//! - Keep-alive via the agent's connection pool
//! - No retries: a failed reading is reported and dropped
//!
//! ## Security
//!
//! - **HTTPS by default**: plain `http://` endpoints are rejected unless
//!   [`HttpConfig::allow_insecure`] is set (local collectors, tests)
//! - **Certificate validation**: `ureq` verifies the peer chain and host name
//!   through rustls; there is no switch to turn that off
//!
//! ## Example Usage
//!
//! ```no_run
//! use edgepulse_connectors::http::{HttpConfig, HttpConnector};
//! use edgepulse_core::SmoothedReading;
//!
//! let config = HttpConfig::new("https://collector.example.com/api/sensordata")
//!     .timeout_secs(10)
//!     .header("X-Device-Id", "press-04");
//!
//! let mut http = HttpConnector::new(config)?;
//! http.post_json(&SmoothedReading { vibration: 2.1, temperature: 27.4, pressure: 1.9 })?;
//! # Ok::<(), edgepulse_connectors::http::HttpError>(())
//! ```

use std::collections::BTreeMap;
use std::time::Duration;

use edgepulse_core::{ReadingSink, SmoothedReading};
use log::debug;
use thiserror::Error;

use crate::ConnectionStats;

/// HTTP-specific errors
#[derive(Debug, Error)]
pub enum HttpError {
    /// Network or TLS failure before a response arrived
    #[error("Request failed: {0}")]
    Request(String),

    /// Collector answered with a non-success status
    #[error("Server error {status}: {message}")]
    Status { status: u16, message: String },

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

/// HTTP configuration
#[derive(Debug, Clone)]
pub struct HttpConfig {
    /// Full collector URL, path included
    pub url: String,
    /// Request timeout
    pub timeout: Duration,
    /// Custom headers
    pub headers: BTreeMap<String, String>,
    /// Accept plain `http://` endpoints
    pub allow_insecure: bool,
    /// User agent string
    pub user_agent: String,
}

impl HttpConfig {
    /// Create new configuration for a collector URL
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            timeout: Duration::from_secs(10),
            headers: BTreeMap::new(),
            allow_insecure: false,
            user_agent: format!("EdgePulse/{}", env!("CARGO_PKG_VERSION")),
        }
    }

    /// Set request timeout in seconds
    pub fn timeout_secs(mut self, secs: u64) -> Self {
        self.timeout = Duration::from_secs(secs);
        self
    }

    /// Add custom header
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }

    /// Permit unencrypted `http://` endpoints
    pub fn allow_insecure(mut self, allow: bool) -> Self {
        self.allow_insecure = allow;
        self
    }

    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    fn validate(&self) -> Result<(), HttpError> {
        if self.url.starts_with("https://") {
            return Ok(());
        }

        if self.url.starts_with("http://") {
            if self.allow_insecure {
                return Ok(());
            }
            return Err(HttpError::Config(
                "Plain http:// endpoint refused; use https:// or allow_insecure".into(),
            ));
        }

        Err(HttpError::Config("URL must start with https:// or http://".into()))
    }
}

/// HTTP connector using lightweight ureq client
pub struct HttpConnector {
    config: HttpConfig,
    agent: ureq::Agent,
    stats: ConnectionStats,
}

impl HttpConnector {
    /// Create new HTTP connector
    pub fn new(config: HttpConfig) -> Result<Self, HttpError> {
        config.validate()?;

        let agent = ureq::AgentBuilder::new()
            .timeout(config.timeout)
            .user_agent(&config.user_agent)
            .build();

        Ok(Self {
            config,
            agent,
            stats: ConnectionStats::default(),
        })
    }

    /// POST one reading as JSON
    pub fn post_json(&mut self, reading: &SmoothedReading) -> Result<(), HttpError> {
        let json = serde_json::to_string(reading)
            .map_err(|e| HttpError::Serialization(e.to_string()))?;

        match self.execute(&json) {
            Ok(()) => {
                self.stats.record_success(json.len());
                debug!("Data sent successfully to {}", self.config.url);
                Ok(())
            }
            Err(e) => {
                self.stats.record_failure(&e);
                debug!("Delivery to {} failed: {}", self.config.url, e);
                Err(e)
            }
        }
    }

    pub fn config(&self) -> &HttpConfig {
        &self.config
    }

    pub fn stats(&self) -> &ConnectionStats {
        &self.stats
    }

    /// Build request with headers and send the body once
    fn execute(&self, json: &str) -> Result<(), HttpError> {
        let mut request = self.agent.post(&self.config.url);

        for (name, value) in &self.config.headers {
            request = request.set(name, value);
        }

        let response = request
            .set("Content-Type", "application/json")
            .set("Accept", "application/json")
            .send_string(json);

        match response {
            Ok(_) => Ok(()),
            Err(ureq::Error::Status(status, resp)) => Err(HttpError::Status {
                status,
                message: resp.into_string().unwrap_or_default(),
            }),
            Err(ureq::Error::Transport(e)) => Err(HttpError::Request(e.to_string())),
        }
    }
}

impl ReadingSink for HttpConnector {
    type Error = HttpError;

    fn send(&mut self, reading: &SmoothedReading) -> Result<(), Self::Error> {
        self.post_json(reading)
    }
}
