use uom::{
    ConstZero,
    si::f64::{Power, ThermodynamicTemperature},
};

use crate::support::pinch::CompositeCurve;

/// Minimum utility targets and pinch location.
#[derive(Debug, Clone, PartialEq)]
pub struct PinchTargets {
    /// Minimum external heating.
    pub hot_utility: Power,

    /// Minimum external cooling.
    pub cold_utility: Power,

    /// Shifted temperatures where the grand composite curve reaches its
    /// minimum, lowest first.
    ///
    /// Empty when there is nothing to cascade.
    pub pinch_temperatures: Vec<ThermodynamicTemperature>,
}

impl Default for PinchTargets {
    fn default() -> Self {
        Self {
            hot_utility: Power::ZERO,
            cold_utility: Power::ZERO,
            pinch_temperatures: Vec::new(),
        }
    }
}

impl PinchTargets {
    /// Reads the targets off a grand composite curve built with zero offset.
    ///
    /// Cold utility lifts the low end of the curve and hot utility the high
    /// end, each by however far the curve dips below them.
    pub(super) fn from_grand_curve(curve: &CompositeCurve) -> Self {
        let heat_flows = curve.heat_flows();

        let (Some(min), Some(&first), Some(&last)) =
            (curve.min_heat_flow(), heat_flows.first(), heat_flows.last())
        else {
            return Self::default();
        };

        let pinch_temperatures = curve
            .points()
            .filter(|&(_, heat_flow)| heat_flow == min)
            .map(|(temperature, _)| temperature)
            .collect();

        Self {
            hot_utility: last - min,
            cold_utility: first - min,
            pinch_temperatures,
        }
    }
}
