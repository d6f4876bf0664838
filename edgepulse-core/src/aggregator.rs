//! Three-channel aggregator
//!
//! Owns one [`SlidingWindow`] per channel and turns each raw reading into a
//! smoothed reading in a single call. Channels never interact: a sample only
//! ever lands in its own channel's window.
//!
//! ```rust
//! use edgepulse_core::{ChannelAggregator, RawReading};
//!
//! let mut aggregator = ChannelAggregator::new(5)?;
//! let smoothed = aggregator.ingest(RawReading::new(1.0, 22.0, 1.5));
//! assert_eq!(smoothed.temperature, 22.0);
//! # Ok::<(), edgepulse_core::AggregationError>(())
//! ```

use crate::errors::AggregationResult;
use crate::reading::{Channel, RawReading, SmoothedReading};
use crate::window::SlidingWindow;

/// Default samples per channel window
pub const DEFAULT_WINDOW_SIZE: usize = 5;

/// Per-channel sliding-window smoother
#[derive(Debug, Clone)]
pub struct ChannelAggregator {
    vibration: SlidingWindow<f32>,
    temperature: SlidingWindow<f32>,
    pressure: SlidingWindow<f32>,
    samples_seen: u64,
}

impl ChannelAggregator {
    /// Create three windows sharing the same `window_size`
    pub fn new(window_size: usize) -> AggregationResult<Self> {
        Ok(Self {
            vibration: SlidingWindow::new(window_size)?,
            temperature: SlidingWindow::new(window_size)?,
            pressure: SlidingWindow::new(window_size)?,
            samples_seen: 0,
        })
    }

    /// Push each channel into its window and return the updated means
    pub fn ingest(&mut self, raw: RawReading) -> SmoothedReading {
        self.vibration.push(raw.vibration);
        self.temperature.push(raw.temperature);
        self.pressure.push(raw.pressure);
        self.samples_seen += 1;

        self.current()
    }

    /// Current means without ingesting anything
    pub fn current(&self) -> SmoothedReading {
        SmoothedReading {
            vibration: self.vibration.mean(),
            temperature: self.temperature.mean(),
            pressure: self.pressure.mean(),
        }
    }

    /// Window backing a channel
    pub fn window(&self, channel: Channel) -> &SlidingWindow<f32> {
        match channel {
            Channel::Vibration => &self.vibration,
            Channel::Temperature => &self.temperature,
            Channel::Pressure => &self.pressure,
        }
    }

    /// Capacity shared by the three windows
    pub fn window_size(&self) -> usize {
        self.vibration.capacity()
    }

    /// Raw readings ingested since construction
    pub fn samples_seen(&self) -> u64 {
        self.samples_seen
    }
}
