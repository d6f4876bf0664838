//! Sensor sources
//!
//! Two implementations of [`SensorSource`]:
//!
//! 1. [`RandomSource`]: uniform synthetic readings for demos (feature
//!    `simulate`). Never exhausts.
//! 2. [`ScriptedSource`]: replays a fixed sequence, for tests and replay of
//!    recorded data.
//!
//! ## Example
//!
//! ```rust
//! use edgepulse_core::source::ScriptedSource;
//! use edgepulse_core::{RawReading, SensorSource};
//!
//! let mut source = ScriptedSource::new(vec![
//!     RawReading::new(0.5, 21.0, 1.1),
//!     RawReading::new(1.0, 21.5, 1.2),
//! ]);
//!
//! while let Some(_reading) = source.read() {
//!     // Feed the aggregator
//! }
//! assert!(source.is_exhausted());
//! ```

use alloc::vec::Vec;

use crate::reading::RawReading;
use crate::traits::SensorSource;

/// Vibration range produced by the demo source, in g
pub const VIBRATION_RANGE: (f32, f32) = (0.5, 5.5);

/// Temperature range produced by the demo source, in °C
pub const TEMPERATURE_RANGE: (f32, f32) = (20.0, 35.0);

/// Pressure range produced by the demo source, in atm
pub const PRESSURE_RANGE: (f32, f32) = (1.0, 3.0);

/// Pseudo-random readings, uniform within each channel's range
#[cfg(feature = "simulate")]
pub struct RandomSource {
    rng: rand::rngs::StdRng,
}

#[cfg(feature = "simulate")]
impl RandomSource {
    /// Seed from OS entropy
    pub fn new() -> Self {
        use rand::SeedableRng;

        Self { rng: rand::rngs::StdRng::from_entropy() }
    }

    /// Reproducible sequence for a given seed
    pub fn with_seed(seed: u64) -> Self {
        use rand::SeedableRng;

        Self { rng: rand::rngs::StdRng::seed_from_u64(seed) }
    }

    fn sample(&mut self, (low, high): (f32, f32)) -> f32 {
        use rand::Rng;

        self.rng.gen_range(low..=high)
    }
}

#[cfg(feature = "simulate")]
impl Default for RandomSource {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(feature = "simulate")]
impl SensorSource for RandomSource {
    fn read(&mut self) -> Option<RawReading> {
        Some(RawReading {
            vibration: self.sample(VIBRATION_RANGE),
            temperature: self.sample(TEMPERATURE_RANGE),
            pressure: self.sample(PRESSURE_RANGE),
        })
    }
}

/// Replays a fixed sequence of readings in order
#[derive(Debug, Clone, Default)]
pub struct ScriptedSource {
    readings: Vec<RawReading>,
    position: usize,
}

impl ScriptedSource {
    /// Replay `readings` from the start
    pub fn new(readings: Vec<RawReading>) -> Self {
        Self { readings, position: 0 }
    }

    /// Reset to beginning
    pub fn reset(&mut self) {
        self.position = 0;
    }

    /// Get current position
    pub fn position(&self) -> usize {
        self.position
    }

    /// Readings not yet replayed
    pub fn remaining(&self) -> usize {
        self.readings.len() - self.position
    }

    /// Check if every reading has been replayed
    pub fn is_exhausted(&self) -> bool {
        self.position >= self.readings.len()
    }
}

impl FromIterator<RawReading> for ScriptedSource {
    fn from_iter<I: IntoIterator<Item = RawReading>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl SensorSource for ScriptedSource {
    fn read(&mut self) -> Option<RawReading> {
        let reading = self.readings.get(self.position).copied()?;
        self.position += 1;
        Some(reading)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    #[test]
    fn scripted_replays_in_order() {
        let mut source = ScriptedSource::new(vec![
            RawReading::new(1.0, 20.0, 1.0),
            RawReading::new(2.0, 21.0, 1.5),
        ]);

        assert_eq!(source.remaining(), 2);
        assert_eq!(source.read().map(|r| r.vibration), Some(1.0));
        assert_eq!(source.read().map(|r| r.vibration), Some(2.0));
        assert!(source.is_exhausted());
        assert!(source.read().is_none());
        assert_eq!(source.position(), 2);
    }

    #[test]
    fn scripted_reset() {
        let mut source: ScriptedSource = [RawReading::new(4.0, 30.0, 2.0)].into_iter().collect();

        source.read();
        assert!(source.is_exhausted());

        source.reset();
        assert!(!source.is_exhausted());
        assert_eq!(source.read().map(|r| r.temperature), Some(30.0));
    }

    #[cfg(feature = "simulate")]
    #[test]
    fn random_stays_in_range() {
        let mut source = RandomSource::with_seed(7);

        for _ in 0..500 {
            let reading = source.read().unwrap();
            assert!(reading.vibration >= VIBRATION_RANGE.0 && reading.vibration <= VIBRATION_RANGE.1);
            assert!(reading.temperature >= TEMPERATURE_RANGE.0 && reading.temperature <= TEMPERATURE_RANGE.1);
            assert!(reading.pressure >= PRESSURE_RANGE.0 && reading.pressure <= PRESSURE_RANGE.1);
        }
    }

    #[cfg(feature = "simulate")]
    #[test]
    fn random_is_reproducible_with_seed() {
        let mut a = RandomSource::with_seed(42);
        let mut b = RandomSource::with_seed(42);

        for _ in 0..10 {
            assert_eq!(a.read(), b.read());
        }
    }
}
