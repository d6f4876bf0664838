//! Core aggregation engine for EdgePulse
//!
//! Smooths vibration, temperature and pressure readings with a fixed-size
//! sliding-window average per channel, then hands the smoothed reading to a
//! transport.
//!
//! Key constraints:
//! - Bounded memory: at most `window_size` samples per channel
//! - O(1) amortized update per sample
//! - No I/O, no locking, no blocking in the core
//!
//! ```no_run
//! use edgepulse_core::{ChannelAggregator, RawReading};
//!
//! let mut aggregator = ChannelAggregator::new(5)?;
//!
//! // One raw reading per tick
//! let smoothed = aggregator.ingest(RawReading::new(1.2, 24.0, 1.8));
//! println!("{}", smoothed);
//! # Ok::<(), edgepulse_core::AggregationError>(())
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![deny(unsafe_code)]
#![warn(missing_docs)]

extern crate alloc;

// Macros for optional logging
#[cfg(feature = "log")]
macro_rules! log_info {
    ($($arg:tt)*) => { log::info!($($arg)*) };
}

#[cfg(not(feature = "log"))]
macro_rules! log_info {
    ($($arg:tt)*) => {};
}

#[cfg(feature = "log")]
macro_rules! log_warn {
    ($($arg:tt)*) => { log::warn!($($arg)*) };
}

#[cfg(not(feature = "log"))]
macro_rules! log_warn {
    ($($arg:tt)*) => {};
}

#[cfg(feature = "log")]
macro_rules! log_debug {
    ($($arg:tt)*) => { log::debug!($($arg)*) };
}

#[cfg(not(feature = "log"))]
macro_rules! log_debug {
    ($($arg:tt)*) => {};
}

pub mod aggregator;
pub mod driver;
pub mod errors;
pub mod reading;
pub mod sink;
pub mod source;
pub mod traits;
pub mod window;

// Public API
pub use aggregator::{ChannelAggregator, DEFAULT_WINDOW_SIZE};
pub use driver::{LoopStats, TelemetryLoop, TickOutcome};
pub use errors::{AggregationError, AggregationResult};
pub use reading::{Channel, RawReading, SmoothedReading};
pub use traits::{ReadingSink, Sample, SensorSource};
pub use window::SlidingWindow;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
