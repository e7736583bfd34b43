use uom::si::{
    f64::{Power, TemperatureInterval, ThermodynamicTemperature},
    power::watt,
};

use crate::support::pinch::{SegmentError, TemperatureShift};

use super::is_finite_temperature;

/// A segment that exchanges heat at a constant temperature.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LatentSegment {
    heat_flow: Power,
    temperature: ThermodynamicTemperature,
    temperature_shift: Option<TemperatureShift>,
}

impl LatentSegment {
    /// Creates a latent segment.
    ///
    /// # Errors
    ///
    /// Returns [`SegmentError::InvalidSegment`] if any quantity is not finite.
    pub fn new(
        heat_flow: Power,
        temperature: ThermodynamicTemperature,
        temperature_shift: Option<TemperatureShift>,
    ) -> Result<Self, SegmentError> {
        if !heat_flow.get::<watt>().is_finite() {
            return Err(SegmentError::InvalidSegment {
                reason: "heat flow must be finite",
            });
        }

        if !is_finite_temperature(temperature) {
            return Err(SegmentError::InvalidSegment {
                reason: "temperatures must be finite",
            });
        }

        Ok(Self {
            heat_flow,
            temperature,
            temperature_shift,
        })
    }

    #[must_use]
    pub fn heat_flow(&self) -> Power {
        self.heat_flow
    }

    /// Supply and target temperature of the segment.
    #[must_use]
    pub fn temperature(&self) -> ThermodynamicTemperature {
        self.temperature
    }

    #[must_use]
    pub fn temperature_shift(&self) -> Option<TemperatureShift> {
        self.temperature_shift
    }

    pub(super) fn translated(&self, offset: TemperatureInterval) -> Self {
        Self {
            temperature: self.temperature + offset,
            temperature_shift: Some(TemperatureShift::ZERO),
            ..*self
        }
    }

    pub(super) fn with_inverted_heat_flow(&self) -> Self {
        Self {
            heat_flow: -self.heat_flow,
            ..*self
        }
    }

    /// Sums heat flows at the same temperature.
    pub(super) fn add(&self, other: &Self, temperature_shift: Option<TemperatureShift>) -> Self {
        Self {
            heat_flow: self.heat_flow + other.heat_flow,
            temperature: self.temperature,
            temperature_shift,
        }
    }
}
