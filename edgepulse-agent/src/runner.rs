//! Tick scheduling
//!
//! Paces a [`TelemetryLoop`] with a tokio interval until a tick limit is hit,
//! the source runs dry, or the shutdown future resolves. The tick itself is
//! synchronous and may block on the transport, so on a multi-threaded runtime
//! it runs under `block_in_place`.

use std::future::Future;
use std::time::Duration;

use edgepulse_core::{LoopStats, ReadingSink, SensorSource, TelemetryLoop, TickOutcome};
use tokio::runtime::{Handle, RuntimeFlavor};
use tokio::time::MissedTickBehavior;
use tracing::info;

/// Tick `telemetry` every `period` and return the final totals
pub async fn run<S, K, F>(
    telemetry: &mut TelemetryLoop<S, K>,
    period: Duration,
    max_ticks: Option<u64>,
    shutdown: F,
) -> LoopStats
where
    S: SensorSource,
    K: ReadingSink,
    F: Future<Output = ()>,
{
    let mut interval = tokio::time::interval(period);
    // A slow send delays the schedule rather than bursting afterwards
    interval.set_missed_tick_behavior(MissedTickBehavior::Delay);

    let multi_thread = Handle::current().runtime_flavor() == RuntimeFlavor::MultiThread;

    tokio::pin!(shutdown);
    let mut ticks = 0u64;

    loop {
        if max_ticks.is_some_and(|max| ticks >= max) {
            info!(ticks, "Tick limit reached");
            break;
        }

        tokio::select! {
            biased;
            _ = &mut shutdown => {
                info!("Shutdown requested");
                break;
            }
            _ = interval.tick() => {}
        }

        let outcome = if multi_thread {
            tokio::task::block_in_place(|| telemetry.tick())
        } else {
            telemetry.tick()
        };

        if outcome == TickOutcome::Exhausted {
            info!("Sensor source exhausted");
            break;
        }
        ticks += 1;
    }

    telemetry.stats()
}

/// Resolves on Ctrl-C
pub async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!("Cannot listen for Ctrl-C: {e}");
        std::future::pending::<()>().await;
    }
}
