//! edgepulse: edge telemetry agent.
//!
//! Run with:  `RUST_LOG=info edgepulse --config edgepulse.toml`

use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use edgepulse_agent::{config, runner, AgentSink, Cli};
use edgepulse_core::{source::RandomSource, ChannelAggregator, TelemetryLoop};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // RUST_LOG controls verbosity (default: info); log records from the
    // library crates are bridged in.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    let mut config = config::load(&cli.config)
        .with_context(|| format!("loading {}", cli.config.display()))?;
    cli.apply(&mut config);
    config.validate()?;

    tracing::info!(
        window_size = config.window_size,
        interval_secs = config.interval_secs,
        endpoint = %config.endpoint,
        dry_run = cli.dry_run,
        "edgepulse v{} starting",
        env!("CARGO_PKG_VERSION")
    );

    let source = match config.seed {
        Some(seed) => RandomSource::with_seed(seed),
        None => RandomSource::new(),
    };
    let aggregator = ChannelAggregator::new(config.window_size)?;
    let sink = AgentSink::from_config(&config, cli.dry_run)?;

    let mut telemetry = TelemetryLoop::new(source, aggregator, sink);
    let stats = runner::run(
        &mut telemetry,
        Duration::from_secs(config.interval_secs),
        config.max_ticks,
        runner::shutdown_signal(),
    )
    .await;

    tracing::info!(
        ticks = stats.ticks,
        delivered = stats.delivered,
        dropped = stats.dropped,
        rejected = stats.rejected,
        "edgepulse stopped"
    );

    Ok(())
}
