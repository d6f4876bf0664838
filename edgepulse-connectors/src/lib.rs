//! Transport Connectors for Edge-to-Collector Delivery
//!
//! ## Overview
//!
//! Connectors implement [`ReadingSink`](edgepulse_core::ReadingSink) so the
//! telemetry loop can hand them one smoothed reading per tick without knowing
//! how it travels.
//!
//! ### HTTPS
//!
//! **When to use:**
//! - Integration with existing web collectors
//! - Firewall-friendly environments
//!
//! **Characteristics:**
//! - One POST per reading, JSON body
//! - TLS with peer and host verification
//! - Plain `http://` refused unless explicitly allowed
//!
//! ## Delivery Semantics
//!
//! Connectors make exactly one attempt per reading. A failure is reported to
//! the caller and recorded in [`ConnectionStats`]; nothing is retried or
//! buffered. The aggregation core never waits on, or is altered by, a failed
//! delivery.
//!
//! ## Example Usage
//!
//! ```no_run
//! use edgepulse_connectors::http::{HttpConfig, HttpConnector};
//! use edgepulse_core::{ReadingSink, SmoothedReading};
//!
//! let config = HttpConfig::new("https://collector.example.com/api/sensordata")
//!     .timeout_secs(10);
//! let mut http = HttpConnector::new(config)?;
//!
//! let reading = SmoothedReading { vibration: 2.1, temperature: 27.4, pressure: 1.9 };
//! http.send(&reading)?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

#[cfg(feature = "http")]
pub mod http;

// Re-export common types
#[cfg(feature = "http")]
pub use http::{HttpConfig, HttpConnector, HttpError};

/// Connection statistics common to all connectors
#[derive(Debug, Default, Clone, PartialEq)]
pub struct ConnectionStats {
    /// Total messages sent successfully
    pub messages_sent: u64,
    /// Total messages failed to send
    pub messages_failed: u64,
    /// Total bytes sent
    pub bytes_sent: u64,
    /// Last error message
    pub last_error: Option<String>,
}

impl ConnectionStats {
    /// Record a successful delivery of `bytes` payload bytes
    pub fn record_success(&mut self, bytes: usize) {
        self.messages_sent += 1;
        self.bytes_sent += bytes as u64;
    }

    /// Record a failed delivery
    pub fn record_failure(&mut self, error: impl ToString) {
        self.messages_failed += 1;
        self.last_error = Some(error.to_string());
    }
}
