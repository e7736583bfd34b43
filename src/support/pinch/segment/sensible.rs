use std::cmp::Ordering;

use uom::si::{
    f64::{Power, TemperatureInterval, ThermalConductance, ThermodynamicTemperature},
    thermal_conductance::watt_per_kelvin,
};

use crate::support::{
    pinch::{CombineError, SegmentError, TemperatureShift},
    units::TemperatureDifference,
};

use super::is_finite_temperature;

/// A segment whose temperature changes at a constant heat capacity flow rate.
///
/// The supply and target temperatures always differ.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SensibleSegment {
    capacity_rate: ThermalConductance,
    supply_temperature: ThermodynamicTemperature,
    target_temperature: ThermodynamicTemperature,
    temperature_shift: Option<TemperatureShift>,
}

impl SensibleSegment {
    /// Creates a sensible segment from its heat capacity flow rate.
    ///
    /// # Errors
    ///
    /// Returns [`SegmentError::InvalidSegment`] if the temperatures are equal
    /// or any quantity is not finite.
    pub fn new(
        capacity_rate: ThermalConductance,
        supply_temperature: ThermodynamicTemperature,
        target_temperature: ThermodynamicTemperature,
        temperature_shift: Option<TemperatureShift>,
    ) -> Result<Self, SegmentError> {
        if !capacity_rate.get::<watt_per_kelvin>().is_finite() {
            return Err(SegmentError::InvalidSegment {
                reason: "heat capacity flow rate must be finite",
            });
        }

        if !is_finite_temperature(supply_temperature) || !is_finite_temperature(target_temperature)
        {
            return Err(SegmentError::InvalidSegment {
                reason: "temperatures must be finite",
            });
        }

        if supply_temperature == target_temperature {
            return Err(SegmentError::InvalidSegment {
                reason: "sensible segment needs distinct supply and target temperatures",
            });
        }

        Ok(Self {
            capacity_rate,
            supply_temperature,
            target_temperature,
            temperature_shift,
        })
    }

    /// Creates a sensible segment that releases `heat_flow` over its range.
    ///
    /// The capacity rate is `heat_flow / (supply - target)`.
    ///
    /// # Errors
    ///
    /// Returns [`SegmentError::InvalidSegment`] if the temperatures are equal
    /// or any quantity is not finite.
    pub fn from_heat_flow(
        heat_flow: Power,
        supply_temperature: ThermodynamicTemperature,
        target_temperature: ThermodynamicTemperature,
        temperature_shift: Option<TemperatureShift>,
    ) -> Result<Self, SegmentError> {
        if supply_temperature == target_temperature {
            return Err(SegmentError::InvalidSegment {
                reason: "sensible segment needs distinct supply and target temperatures",
            });
        }

        let capacity_rate: ThermalConductance =
            heat_flow / supply_temperature.minus(target_temperature);

        Self::new(
            capacity_rate,
            supply_temperature,
            target_temperature,
            temperature_shift,
        )
    }

    #[must_use]
    pub fn capacity_rate(&self) -> ThermalConductance {
        self.capacity_rate
    }

    #[must_use]
    pub fn supply_temperature(&self) -> ThermodynamicTemperature {
        self.supply_temperature
    }

    #[must_use]
    pub fn target_temperature(&self) -> ThermodynamicTemperature {
        self.target_temperature
    }

    #[must_use]
    pub fn temperature_shift(&self) -> Option<TemperatureShift> {
        self.temperature_shift
    }

    /// Heat released over the range: `capacity_rate * (supply - target)`.
    #[must_use]
    pub fn heat_flow(&self) -> Power {
        self.capacity_rate * self.supply_temperature.minus(self.target_temperature)
    }

    fn runs_upward(&self) -> bool {
        self.supply_temperature < self.target_temperature
    }

    pub(super) fn translated(&self, offset: TemperatureInterval) -> Self {
        Self {
            supply_temperature: self.supply_temperature + offset,
            target_temperature: self.target_temperature + offset,
            temperature_shift: Some(TemperatureShift::ZERO),
            ..*self
        }
    }

    pub(super) fn with_low_supply_temperature(&self) -> Self {
        if self.runs_upward() {
            return *self;
        }

        Self {
            capacity_rate: -self.capacity_rate,
            supply_temperature: self.target_temperature,
            target_temperature: self.supply_temperature,
            ..*self
        }
    }

    pub(super) fn with_inverted_heat_flow(&self) -> Self {
        Self {
            capacity_rate: -self.capacity_rate,
            ..*self
        }
    }

    pub(super) fn split<I>(&self, temperatures: I) -> Vec<Self>
    where
        I: IntoIterator<Item = ThermodynamicTemperature>,
    {
        let (low, high) = if self.runs_upward() {
            (self.supply_temperature, self.target_temperature)
        } else {
            (self.target_temperature, self.supply_temperature)
        };

        let mut cuts: Vec<_> = temperatures
            .into_iter()
            .filter(|&temperature| temperature > low && temperature < high)
            .collect();
        cuts.sort_by(|a, b| a.partial_cmp(b).unwrap_or(Ordering::Equal));
        cuts.dedup();

        if !self.runs_upward() {
            cuts.reverse();
        }

        let mut pieces = Vec::with_capacity(cuts.len() + 1);
        let mut start = self.supply_temperature;
        for cut in cuts {
            pieces.push(Self {
                supply_temperature: start,
                target_temperature: cut,
                ..*self
            });
            start = cut;
        }
        pieces.push(Self {
            supply_temperature: start,
            ..*self
        });

        pieces
    }

    /// Combines capacity rates over an identical range.
    ///
    /// The caller has already checked that both segments span the same range.
    pub(super) fn add(&self, other: &Self, temperature_shift: Option<TemperatureShift>) -> Self {
        let capacity_rate = if self.supply_temperature == other.supply_temperature {
            self.capacity_rate + other.capacity_rate
        } else {
            self.capacity_rate - other.capacity_rate
        };

        Self {
            capacity_rate,
            temperature_shift,
            ..*self
        }
    }

    pub(super) fn link(
        &self,
        other: &Self,
        temperature_shift: Option<TemperatureShift>,
    ) -> Result<Self, CombineError> {
        let not_linkable = CombineError::NotLinkable {
            capacity_rates: Some((self.capacity_rate, other.capacity_rate)),
        };

        if self.capacity_rate != other.capacity_rate {
            return Err(not_linkable);
        }

        let (supply_temperature, target_temperature) =
            if self.target_temperature == other.supply_temperature {
                (self.supply_temperature, other.target_temperature)
            } else if self.supply_temperature == other.target_temperature {
                (other.supply_temperature, self.target_temperature)
            } else {
                return Err(not_linkable);
            };

        // Opposed segments would fold back onto a single temperature.
        if supply_temperature == target_temperature {
            return Err(not_linkable);
        }

        Ok(Self {
            capacity_rate: self.capacity_rate,
            supply_temperature,
            target_temperature,
            temperature_shift,
        })
    }
}
