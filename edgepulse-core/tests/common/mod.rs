//! Common test utilities for integration tests
//!
//! Provides:
//! - A deterministic RNG so failures reproduce
//! - Reading generators that mimic the demo sensor ranges
//! - Reference averaging used to check the incremental window

#![allow(dead_code)]

use edgepulse_core::{
    source::{ScriptedSource, PRESSURE_RANGE, TEMPERATURE_RANGE, VIBRATION_RANGE},
    RawReading,
};

/// Xorshift generator for reproducible test data
pub struct TestRng {
    state: u32,
}

impl TestRng {
    pub fn new(seed: u32) -> Self {
        // Xorshift gets stuck at zero
        Self { state: seed.max(1) }
    }

    pub fn next_u32(&mut self) -> u32 {
        self.state ^= self.state << 13;
        self.state ^= self.state >> 17;
        self.state ^= self.state << 5;
        self.state
    }

    /// Uniform float in [0, 1]
    pub fn next_f32(&mut self) -> f32 {
        self.next_u32() as f32 / u32::MAX as f32
    }

    pub fn in_range(&mut self, (low, high): (f32, f32)) -> f32 {
        low + self.next_f32() * (high - low)
    }
}

/// Plausible raw readings within the demo sensor ranges
pub fn plausible_readings(seed: u32, count: usize) -> Vec<RawReading> {
    let mut rng = TestRng::new(seed);

    (0..count)
        .map(|_| RawReading {
            vibration: rng.in_range(VIBRATION_RANGE),
            temperature: rng.in_range(TEMPERATURE_RANGE),
            pressure: rng.in_range(PRESSURE_RANGE),
        })
        .collect()
}

/// Scripted source replaying `plausible_readings`
pub fn plausible_source(seed: u32, count: usize) -> ScriptedSource {
    ScriptedSource::new(plausible_readings(seed, count))
}

/// Machine spinning up: vibration ramps while temperature and pressure hold
pub fn spin_up_readings() -> Vec<RawReading> {
    [0.5, 1.0, 1.5, 2.0, 2.5, 3.0]
        .into_iter()
        .map(|vibration| RawReading::new(vibration, 25.0, 1.0))
        .collect()
}

/// Exact mean of the last `window` values, computed in f64
pub fn reference_mean(values: &[f32], window: usize) -> f64 {
    let tail = &values[values.len().saturating_sub(window)..];
    if tail.is_empty() {
        return 0.0;
    }

    tail.iter().map(|&v| v as f64).sum::<f64>() / tail.len() as f64
}

/// Assert two floats agree within `epsilon`
pub fn assert_close(actual: f64, expected: f64, epsilon: f64) {
    assert!(
        (actual - expected).abs() <= epsilon,
        "expected {expected}, got {actual} (epsilon {epsilon})"
    );
}
