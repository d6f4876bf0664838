//! EdgePulse agent: wires a sensor source, the aggregation core and a
//! transport together and paces them on a fixed interval.

pub mod cli;
pub mod config;
pub mod runner;
pub mod sink;

pub use cli::Cli;
pub use config::{AgentConfig, ConfigError};
pub use sink::AgentSink;
