//! Tick driver: sample -> aggregate -> transmit
//!
//! [`TelemetryLoop`] performs exactly one tick per call to
//! [`tick`](TelemetryLoop::tick). It owns no clock and never sleeps; pacing
//! belongs to whoever calls it (the agent's interval timer, or a test feeding a
//! scripted source as fast as it likes).
//!
//! ## Delivery Policy
//!
//! A failed send is logged, counted and dropped. The smoothed reading is not
//! retried or buffered, and the aggregator state is unaffected: the next tick
//! averages over every sample ingested so far, delivered or not.
//!
//! ## Input Policy
//!
//! Raw readings with a non-finite channel are rejected before ingestion. A
//! single NaN would otherwise poison the running sum until it was evicted and
//! the sum resynced.
//!
//! ```rust
//! use edgepulse_core::driver::{TelemetryLoop, TickOutcome};
//! use edgepulse_core::sink::MemorySink;
//! use edgepulse_core::source::ScriptedSource;
//! use edgepulse_core::{ChannelAggregator, RawReading};
//!
//! let source = ScriptedSource::new(vec![RawReading::new(1.0, 20.0, 1.0)]);
//! let aggregator = ChannelAggregator::new(5)?;
//! let mut telemetry = TelemetryLoop::new(source, aggregator, MemorySink::new());
//!
//! assert!(matches!(telemetry.tick(), TickOutcome::Delivered(_)));
//! assert!(matches!(telemetry.tick(), TickOutcome::Exhausted));
//! # Ok::<(), edgepulse_core::AggregationError>(())
//! ```

use crate::aggregator::ChannelAggregator;
use crate::reading::SmoothedReading;
use crate::traits::{ReadingSink, SensorSource};

/// Result of a single tick
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TickOutcome {
    /// Reading smoothed and accepted by the sink
    Delivered(SmoothedReading),
    /// Reading smoothed but the sink failed; it is not retried
    Dropped(SmoothedReading),
    /// Raw reading had a non-finite channel and was not ingested
    Rejected,
    /// Source has no more readings
    Exhausted,
}

/// Running totals across ticks
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoopStats {
    /// Ticks that obtained a reading from the source
    pub ticks: u64,
    /// Readings accepted by the sink
    pub delivered: u64,
    /// Readings the sink failed to deliver
    pub dropped: u64,
    /// Raw readings with a non-finite channel
    pub rejected: u64,
}

/// Drives one source, one aggregator and one sink, a tick at a time
pub struct TelemetryLoop<S, K> {
    source: S,
    aggregator: ChannelAggregator,
    sink: K,
    stats: LoopStats,
}

impl<S: SensorSource, K: ReadingSink> TelemetryLoop<S, K> {
    /// Wire up a loop with zeroed stats
    pub fn new(source: S, aggregator: ChannelAggregator, sink: K) -> Self {
        Self {
            source,
            aggregator,
            sink,
            stats: LoopStats::default(),
        }
    }

    /// Run one sample -> aggregate -> transmit cycle
    pub fn tick(&mut self) -> TickOutcome {
        let Some(raw) = self.source.read() else {
            return TickOutcome::Exhausted;
        };
        self.stats.ticks += 1;

        if let Err(e) = raw.validate() {
            self.stats.rejected += 1;
            log_warn!("Rejected raw reading: {}", e);
            return TickOutcome::Rejected;
        }

        let smoothed = self.aggregator.ingest(raw);
        log_info!("Processed sensor data: {}", smoothed);

        match self.sink.send(&smoothed) {
            Ok(()) => {
                self.stats.delivered += 1;
                log_debug!("Smoothed reading delivered");
                TickOutcome::Delivered(smoothed)
            }
            Err(e) => {
                self.stats.dropped += 1;
                log_warn!("Failed to send data: {}", e);
                TickOutcome::Dropped(smoothed)
            }
        }
    }

    /// Tick until the source is exhausted or `max_ticks` ticks have run
    ///
    /// Returns the number of ticks run, including rejected ones.
    pub fn run(&mut self, max_ticks: Option<u64>) -> u64 {
        let mut count = 0;

        while max_ticks.map_or(true, |max| count < max) {
            if self.tick() == TickOutcome::Exhausted {
                break;
            }
            count += 1;
        }

        count
    }

    /// Totals so far
    pub fn stats(&self) -> LoopStats {
        self.stats
    }

    /// Aggregator state
    pub fn aggregator(&self) -> &ChannelAggregator {
        &self.aggregator
    }

    /// Sink, e.g. to inspect what a test sink recorded
    pub fn sink(&self) -> &K {
        &self.sink
    }

    /// Mutable sink access
    pub fn sink_mut(&mut self) -> &mut K {
        &mut self.sink
    }

    /// Take back the collaborators
    pub fn into_parts(self) -> (S, ChannelAggregator, K) {
        (self.source, self.aggregator, self.sink)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reading::RawReading;
    use crate::sink::{MemorySink, NullSink};
    use crate::source::ScriptedSource;
    use alloc::vec;

    fn scripted(values: &[(f32, f32, f32)]) -> ScriptedSource {
        values.iter().map(|&(v, t, p)| RawReading::new(v, t, p)).collect()
    }

    #[test]
    fn delivers_each_tick() {
        let source = scripted(&[(1.0, 20.0, 1.0), (3.0, 22.0, 2.0)]);
        let mut telemetry = TelemetryLoop::new(source, ChannelAggregator::new(5).unwrap(), MemorySink::new());

        assert_eq!(telemetry.run(None), 2);

        let delivered = telemetry.sink().delivered();
        assert_eq!(delivered.len(), 2);
        assert_eq!(delivered[1], SmoothedReading { vibration: 2.0, temperature: 21.0, pressure: 1.5 });
        assert_eq!(telemetry.stats(), LoopStats { ticks: 2, delivered: 2, dropped: 0, rejected: 0 });
    }

    #[test]
    fn sink_failure_does_not_touch_aggregation() {
        let source = scripted(&[(1.0, 20.0, 1.0), (3.0, 22.0, 2.0), (5.0, 24.0, 3.0)]);
        let mut sink = MemorySink::new();
        sink.fail_next(1);
        let mut telemetry = TelemetryLoop::new(source, ChannelAggregator::new(5).unwrap(), sink);

        assert!(matches!(telemetry.tick(), TickOutcome::Dropped(_)));
        telemetry.run(None);

        // First reading was dropped but still counts towards the mean
        let delivered = telemetry.sink().delivered();
        assert_eq!(delivered.len(), 2);
        assert_eq!(delivered[1].vibration, 3.0);
        assert_eq!(telemetry.stats().dropped, 1);
        assert_eq!(telemetry.aggregator().samples_seen(), 3);
    }

    #[test]
    fn non_finite_reading_rejected() {
        let source = ScriptedSource::new(vec![
            RawReading::new(2.0, 20.0, 1.0),
            RawReading::new(f32::NAN, 20.0, 1.0),
            RawReading::new(4.0, 20.0, 1.0),
        ]);
        let mut telemetry = TelemetryLoop::new(source, ChannelAggregator::new(5).unwrap(), NullSink);

        assert!(matches!(telemetry.tick(), TickOutcome::Delivered(_)));
        assert_eq!(telemetry.tick(), TickOutcome::Rejected);

        match telemetry.tick() {
            TickOutcome::Delivered(smoothed) => assert_eq!(smoothed.vibration, 3.0),
            other => panic!("Expected delivery, got {:?}", other),
        }
        assert_eq!(telemetry.stats().rejected, 1);
        assert_eq!(telemetry.stats().ticks, 3);
    }

    #[test]
    fn run_respects_tick_limit() {
        let source = scripted(&[(1.0, 1.0, 1.0); 10]);
        let mut telemetry = TelemetryLoop::new(source, ChannelAggregator::new(3).unwrap(), NullSink);

        assert_eq!(telemetry.run(Some(4)), 4);
        assert_eq!(telemetry.run(Some(0)), 0);
        assert_eq!(telemetry.run(None), 6);
        assert_eq!(telemetry.tick(), TickOutcome::Exhausted);
    }
}
