//! Fixtures for pinch tests.
//!
//! Temperatures are in kelvin, heat flows in kilowatts and capacity rates in
//! kilowatts per kelvin. Whole-number inputs keep cascade arithmetic exact,
//! so intervals can be compared with `assert_eq!`.

use uom::si::{
    f64::{Power, ThermalConductance, ThermodynamicTemperature},
    power::kilowatt,
    temperature_interval::kelvin as delta_kelvin,
    thermal_conductance::kilowatt_per_kelvin,
    thermodynamic_temperature::kelvin as abs_kelvin,
};

use super::{CompositeCurve, Segment, Stream, TemperatureShift};

pub(crate) fn kelvin(value: f64) -> ThermodynamicTemperature {
    ThermodynamicTemperature::new::<abs_kelvin>(value)
}

pub(crate) fn kilowatts(value: f64) -> Power {
    Power::new::<kilowatt>(value)
}

pub(crate) fn kw_per_k(value: f64) -> ThermalConductance {
    ThermalConductance::new::<kilowatt_per_kelvin>(value)
}

pub(crate) fn shift(value: f64) -> TemperatureShift {
    TemperatureShift::new::<delta_kelvin>(value).expect("valid temperature shift")
}

/// Segment from `(heat_flow, supply, target)` without its own shift.
pub(crate) fn segment(heat_flow: f64, supply: f64, target: f64) -> Segment {
    Segment::new(kilowatts(heat_flow), kelvin(supply), kelvin(target), None)
        .expect("valid segment")
}

/// Stream built from `(heat_flow, supply, target)` triples.
pub(crate) fn stream(segments: &[(f64, f64, f64)]) -> Stream {
    Stream::new(
        segments
            .iter()
            .map(|&(heat_flow, supply, target)| segment(heat_flow, supply, target)),
    )
    .expect("continuous stream")
}

/// Composite curve from temperatures in kelvin and heat flows in kilowatts.
pub(crate) fn curve(temperatures: &[f64], heat_flows: &[f64]) -> CompositeCurve {
    let mut curve = CompositeCurve::default();
    for (&temperature, &heat_flow) in temperatures.iter().zip(heat_flows) {
        curve.push(kelvin(temperature), kilowatts(heat_flow));
    }
    curve
}
