//! Reading types exchanged between source, aggregator and sink
//!
//! A [`RawReading`] is produced once per tick by a sensor source and consumed
//! immediately by the aggregator. A [`SmoothedReading`] carries the three
//! window means and is handed to the transport. Both are plain `Copy` values.

use core::fmt;

use crate::errors::{AggregationError, AggregationResult};
use crate::traits::Sample;

/// One independently tracked measurement stream
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Channel {
    /// Machine vibration, in g
    Vibration,
    /// Temperature, in °C
    Temperature,
    /// Pressure, in atm
    Pressure,
}

impl Channel {
    /// All channels in wire order
    pub const ALL: [Channel; 3] = [Channel::Vibration, Channel::Temperature, Channel::Pressure];

    /// Field name used in logs and on the wire
    pub const fn name(self) -> &'static str {
        match self {
            Channel::Vibration => "vibration",
            Channel::Temperature => "temperature",
            Channel::Pressure => "pressure",
        }
    }

    /// Display unit
    pub const fn unit(self) -> &'static str {
        match self {
            Channel::Vibration => "g",
            Channel::Temperature => "°C",
            Channel::Pressure => "atm",
        }
    }
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Unprocessed sample triple from a sensor source
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RawReading {
    /// Vibration, in g
    pub vibration: f32,
    /// Temperature, in °C
    pub temperature: f32,
    /// Pressure, in atm
    pub pressure: f32,
}

impl RawReading {
    /// Reading from three channel values
    pub const fn new(vibration: f32, temperature: f32, pressure: f32) -> Self {
        Self { vibration, temperature, pressure }
    }

    /// Value for a single channel
    pub fn get(&self, channel: Channel) -> f32 {
        match channel {
            Channel::Vibration => self.vibration,
            Channel::Temperature => self.temperature,
            Channel::Pressure => self.pressure,
        }
    }

    /// Check that every channel carries a finite value
    ///
    /// Reports the first offending channel in wire order.
    pub fn validate(&self) -> AggregationResult<()> {
        for channel in Channel::ALL {
            if !self.get(channel).is_valid() {
                return Err(AggregationError::InvalidSample { channel });
            }
        }
        Ok(())
    }
}

/// Per-channel window means, computed once per tick
///
/// Serializes to the flat object the collector expects:
/// `{"vibration":..,"temperature":..,"pressure":..}`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SmoothedReading {
    /// Mean vibration, in g
    pub vibration: f32,
    /// Mean temperature, in °C
    pub temperature: f32,
    /// Mean pressure, in atm
    pub pressure: f32,
}

impl SmoothedReading {
    /// Mean for a single channel
    pub fn get(&self, channel: Channel) -> f32 {
        match channel {
            Channel::Vibration => self.vibration,
            Channel::Temperature => self.temperature,
            Channel::Pressure => self.pressure,
        }
    }
}

impl fmt::Display for SmoothedReading {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, channel) in Channel::ALL.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{}={:.3}{}", channel.name(), self.get(*channel), channel.unit())?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validate_reports_first_bad_channel() {
        assert!(RawReading::new(1.0, 20.0, 1.5).validate().is_ok());

        let err = RawReading::new(1.0, f32::NAN, f32::INFINITY).validate().unwrap_err();
        assert_eq!(err, AggregationError::InvalidSample { channel: Channel::Temperature });
    }

    #[test]
    fn display_includes_units() {
        let reading = SmoothedReading { vibration: 2.0, temperature: 25.5, pressure: 1.25 };
        let text = reading.to_string();
        assert_eq!(text, "vibration=2.000g temperature=25.500°C pressure=1.250atm");
    }

    #[cfg(feature = "serde")]
    #[test]
    fn smoothed_reading_wire_shape() {
        let reading = SmoothedReading { vibration: 2.0, temperature: 25.5, pressure: 1.25 };
        let json = serde_json::to_value(reading).unwrap();
        assert_eq!(json, serde_json::json!({
            "vibration": 2.0,
            "temperature": 25.5,
            "pressure": 1.25
        }));
    }
}
