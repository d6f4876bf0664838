//! Sliding-Window Smoothing Example
//!
//! This example feeds a short scripted run through the aggregation core and
//! prints the smoothed reading after every tick.
//!
//! ## What You'll Learn
//!
//! - Creating a `ChannelAggregator` with a window size
//! - Watching the window fill, then evict oldest-first
//! - Driving ticks with `TelemetryLoop` and an in-memory sink
//!
//! ## Running the Example
//!
//! ```bash
//! cargo run --example 01_window_smoothing
//! ```

use edgepulse_core::{
    driver::{TelemetryLoop, TickOutcome},
    sink::MemorySink,
    source::ScriptedSource,
    AggregationError, Channel, ChannelAggregator, RawReading,
};

fn main() -> Result<(), AggregationError> {
    println!("EdgePulse Window Smoothing Example");
    println!("==================================\n");

    // Machine spinning up: vibration ramps, temperature creeps, pressure holds
    let readings: Vec<RawReading> = (0..8)
        .map(|i| RawReading::new(0.5 * (i + 1) as f32, 22.0 + 0.25 * i as f32, 1.8))
        .collect();

    let window_size = 5;
    let source = ScriptedSource::new(readings.clone());
    let aggregator = ChannelAggregator::new(window_size)?;
    let mut telemetry = TelemetryLoop::new(source, aggregator, MemorySink::new());

    println!("Window size: {} samples per channel\n", window_size);

    for raw in &readings {
        match telemetry.tick() {
            TickOutcome::Delivered(smoothed) => {
                println!("raw vibration {:>4.2}g -> {}", raw.vibration, smoothed);
            }
            other => println!("unexpected outcome: {:?}", other),
        }
    }

    let vibration = telemetry.aggregator().window(Channel::Vibration);
    let retained: Vec<f32> = vibration.iter().collect();
    println!("\nRetained vibration samples: {:?}", retained);
    println!("Ticks delivered: {}", telemetry.stats().delivered);

    Ok(())
}
