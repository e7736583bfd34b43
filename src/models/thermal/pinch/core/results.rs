//! Owned snapshot of a pinch analysis.

use uom::si::f64::{Power, ThermodynamicTemperature};

use crate::support::pinch::CompositeCurve;

/// Demands, targets and composite curves of a completed pinch analysis.
///
/// Composite curves run from the lowest to the highest temperature.
#[derive(Debug, Clone, PartialEq)]
pub struct PinchResults {
    /// Total heat absorbed by the cold segments.
    pub heating_demand: Power,

    /// Total heat released by the hot segments.
    pub cooling_demand: Power,

    /// Minimum external heating.
    pub hot_utility_target: Power,

    /// Minimum external cooling.
    pub cold_utility_target: Power,

    /// Heat that can be exchanged between hot and cold segments.
    pub heat_recovery_target: Power,

    /// Shifted pinch temperatures, lowest first.
    pub pinch_temperatures: Vec<ThermodynamicTemperature>,

    /// Cold composite curve, offset by the cold utility target.
    pub cold_composite_curve: CompositeCurve,

    /// Hot composite curve, starting at zero.
    pub hot_composite_curve: CompositeCurve,

    /// Cold composite curve at shifted temperatures, offset by the cold utility target.
    pub shifted_cold_composite_curve: CompositeCurve,

    /// Hot composite curve at shifted temperatures, starting at zero.
    pub shifted_hot_composite_curve: CompositeCurve,

    /// Grand composite curve, offset by the cold utility target.
    pub grand_composite_curve: CompositeCurve,
}
