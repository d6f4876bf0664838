//! In-memory sinks for testing and dry runs
//!
//! Network transports live in `edgepulse-connectors`. The sinks here never
//! leave the process: [`MemorySink`] records what it receives and can be
//! scripted to fail, [`NullSink`] discards everything.

use alloc::vec::Vec;
use thiserror_no_std::Error;

use crate::reading::SmoothedReading;
use crate::traits::ReadingSink;

/// Failure injected into a [`MemorySink`]
#[derive(Error, Debug, Clone, Copy, PartialEq)]
#[error("Injected delivery failure")]
pub struct InjectedFailure;

/// Records every delivered reading
#[derive(Debug, Clone, Default)]
pub struct MemorySink {
    delivered: Vec<SmoothedReading>,
    fail_next: usize,
    attempts: usize,
}

impl MemorySink {
    /// Empty sink that accepts every send
    pub fn new() -> Self {
        Self::default()
    }

    /// Make the next `count` sends fail without recording anything
    pub fn fail_next(&mut self, count: usize) {
        self.fail_next = count;
    }

    /// Readings delivered so far, in order
    pub fn delivered(&self) -> &[SmoothedReading] {
        &self.delivered
    }

    /// Send calls, successful or not
    pub fn attempts(&self) -> usize {
        self.attempts
    }
}

impl ReadingSink for MemorySink {
    type Error = InjectedFailure;

    fn send(&mut self, reading: &SmoothedReading) -> Result<(), Self::Error> {
        self.attempts += 1;

        if self.fail_next > 0 {
            self.fail_next -= 1;
            return Err(InjectedFailure);
        }

        self.delivered.push(*reading);
        Ok(())
    }
}

/// Discards every reading
#[derive(Debug, Clone, Copy, Default)]
pub struct NullSink;

impl ReadingSink for NullSink {
    type Error = core::convert::Infallible;

    fn send(&mut self, _reading: &SmoothedReading) -> Result<(), Self::Error> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_sink_records_and_fails_on_demand() {
        let mut sink = MemorySink::new();
        let reading = SmoothedReading { vibration: 1.0, temperature: 2.0, pressure: 3.0 };

        sink.fail_next(1);
        assert_eq!(sink.send(&reading), Err(InjectedFailure));
        assert!(sink.send(&reading).is_ok());

        assert_eq!(sink.attempts(), 2);
        assert_eq!(sink.delivered(), &[reading]);
    }
}
