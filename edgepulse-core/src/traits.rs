//! Core traits for the aggregation pipeline
//!
//! These traits define the seams between the aggregation core and the world
//! around it. Keep them simple - embedded devices don't need complex
//! abstractions.
//!
//! - [`Sample`]: numeric type a [`SlidingWindow`](crate::window::SlidingWindow) can average
//! - [`SensorSource`]: produces one raw reading per tick
//! - [`ReadingSink`]: delivers one smoothed reading per tick

use core::fmt;
use core::ops::{AddAssign, SubAssign};

use crate::reading::{RawReading, SmoothedReading};

/// Scalar measurement that can be accumulated and averaged
///
/// Accumulation stays in `Self` throughout; there is no widening to a larger
/// float and narrowing back.
pub trait Sample: Copy + PartialEq + fmt::Debug + AddAssign + SubAssign {
    /// Additive identity, also the mean of an empty window
    const ZERO: Self;

    /// Divide an accumulated sum by a sample count
    fn div_count(self, count: usize) -> Self;

    /// Check if the value is a usable number (not NaN, infinite, etc)
    fn is_valid(&self) -> bool;
}

impl Sample for f32 {
    const ZERO: Self = 0.0;

    fn div_count(self, count: usize) -> Self {
        self / count as f32
    }

    fn is_valid(&self) -> bool {
        self.is_finite()
    }
}

impl Sample for f64 {
    const ZERO: Self = 0.0;

    fn div_count(self, count: usize) -> Self {
        self / count as f64
    }

    fn is_valid(&self) -> bool {
        self.is_finite()
    }
}

/// Produces raw readings, one per tick
pub trait SensorSource {
    /// Read the next sample triple
    ///
    /// Returns `None` once the source is exhausted. Live sources never are.
    fn read(&mut self) -> Option<RawReading>;
}

/// Delivers smoothed readings to a collector
///
/// Implementations own their failure policy. The driver only reports the
/// outcome; it never retries or buffers.
pub trait ReadingSink {
    /// Transport-specific failure
    type Error: fmt::Display;

    /// Deliver one smoothed reading
    fn send(&mut self, reading: &SmoothedReading) -> Result<(), Self::Error>;
}

impl<S: SensorSource + ?Sized> SensorSource for &mut S {
    fn read(&mut self) -> Option<RawReading> {
        (**self).read()
    }
}

impl<K: ReadingSink + ?Sized> ReadingSink for &mut K {
    type Error = K::Error;

    fn send(&mut self, reading: &SmoothedReading) -> Result<(), Self::Error> {
        (**self).send(reading)
    }
}
