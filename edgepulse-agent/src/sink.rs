//! Sink selection for the agent

use edgepulse_connectors::http::{HttpConfig, HttpConnector, HttpError};
use edgepulse_core::{ReadingSink, SmoothedReading};

use crate::config::AgentConfig;

/// Transport chosen at startup
pub enum AgentSink {
    /// POST each reading to the collector
    Http(HttpConnector),
    /// Log the payload that would have been sent
    DryRun,
}

impl AgentSink {
    /// Build the sink described by `config`
    pub fn from_config(config: &AgentConfig, dry_run: bool) -> Result<Self, HttpError> {
        if dry_run {
            return Ok(Self::DryRun);
        }

        let http = HttpConfig::new(&config.endpoint)
            .timeout_secs(config.timeout_secs)
            .allow_insecure(config.allow_insecure);

        Ok(Self::Http(HttpConnector::new(http)?))
    }
}

impl ReadingSink for AgentSink {
    type Error = HttpError;

    fn send(&mut self, reading: &SmoothedReading) -> Result<(), Self::Error> {
        match self {
            Self::Http(http) => http.send(reading),
            Self::DryRun => {
                let body = serde_json::to_string(reading)
                    .map_err(|e| HttpError::Serialization(e.to_string()))?;
                tracing::info!(%body, "dry run, reading not sent");
                Ok(())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dry_run_ignores_endpoint() {
        let config = AgentConfig { endpoint: "not-a-url".into(), ..AgentConfig::default() };
        let mut sink = AgentSink::from_config(&config, true).unwrap();
        assert!(sink.send(&SmoothedReading::default()).is_ok());
    }

    #[test]
    fn insecure_endpoint_needs_opt_in() {
        let mut config = AgentConfig {
            endpoint: "http://127.0.0.1:9000/api/sensordata".into(),
            ..AgentConfig::default()
        };
        assert!(AgentSink::from_config(&config, false).is_err());

        config.allow_insecure = true;
        assert!(matches!(AgentSink::from_config(&config, false), Ok(AgentSink::Http(_))));
    }
}
