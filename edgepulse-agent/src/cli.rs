//! Command-line interface
//!
//! Flags override values from the configuration file.

use std::path::PathBuf;

use clap::Parser;

use crate::config::AgentConfig;

#[derive(Debug, Parser)]
#[command(name = "edgepulse")]
#[command(version, about = "Sample, smooth and forward sensor telemetry", long_about = None)]
pub struct Cli {
    /// Configuration file (TOML format)
    #[arg(long, default_value = "edgepulse.toml")]
    pub config: PathBuf,

    /// Collector URL
    #[arg(long)]
    pub endpoint: Option<String>,

    /// Seconds between ticks
    #[arg(long)]
    pub interval_secs: Option<u64>,

    /// Samples retained per channel
    #[arg(long)]
    pub window_size: Option<usize>,

    /// Stop after this many ticks
    #[arg(long)]
    pub ticks: Option<u64>,

    /// Seed for the demo sensor source
    #[arg(long)]
    pub seed: Option<u64>,

    /// Log readings instead of sending them
    #[arg(long)]
    pub dry_run: bool,
}

impl Cli {
    /// Overlay flags that were given onto `config`
    pub fn apply(&self, config: &mut AgentConfig) {
        if let Some(endpoint) = &self.endpoint {
            config.endpoint = endpoint.clone();
        }
        if let Some(interval_secs) = self.interval_secs {
            config.interval_secs = interval_secs;
        }
        if let Some(window_size) = self.window_size {
            config.window_size = window_size;
        }
        if let Some(ticks) = self.ticks {
            config.max_ticks = Some(ticks);
        }
        if let Some(seed) = self.seed {
            config.seed = Some(seed);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_override_file_values() {
        let cli = Cli::try_parse_from([
            "edgepulse",
            "--window-size", "3",
            "--ticks", "10",
            "--endpoint", "https://collector.local/ingest",
        ])
        .unwrap();

        let mut config = AgentConfig { seed: Some(9), ..AgentConfig::default() };
        cli.apply(&mut config);

        assert_eq!(config.window_size, 3);
        assert_eq!(config.max_ticks, Some(10));
        assert_eq!(config.endpoint, "https://collector.local/ingest");
        assert_eq!(config.seed, Some(9));
        assert_eq!(config.interval_secs, 5);
    }

    #[test]
    fn defaults_leave_config_alone() {
        let cli = Cli::try_parse_from(["edgepulse"]).unwrap();
        assert_eq!(cli.config, PathBuf::from("edgepulse.toml"));
        assert!(!cli.dry_run);

        let mut config = AgentConfig::default();
        cli.apply(&mut config);
        assert_eq!(config, AgentConfig::default());
    }
}
