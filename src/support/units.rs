//! Extensions to [`uom`].
//!
//! All physical quantities in this crate are [`uom`] quantities with `f64`
//! storage: temperatures are [`ThermodynamicTemperature`], heat flows are
//! [`Power`], heat capacity flow rates are [`ThermalConductance`] (W/K) and
//! temperature shifts are [`TemperatureInterval`].
//!
//! ## Temperature differences
//!
//! [`uom`] does not allow subtracting one absolute temperature from another.
//! The [`TemperatureDifference`] trait fills that gap:
//!
//! ```
//! use uom::si::f64::ThermodynamicTemperature;
//! use uom::si::thermodynamic_temperature::kelvin;
//! use twine_pinch::support::units::TemperatureDifference;
//!
//! let supply = ThermodynamicTemperature::new::<kelvin>(420.0);
//! let target = ThermodynamicTemperature::new::<kelvin>(320.0);
//! let span = supply.minus(target);
//! // span is a TemperatureInterval of 100 K
//! ```
//!
//! [`ThermodynamicTemperature`]: uom::si::f64::ThermodynamicTemperature
//! [`Power`]: uom::si::f64::Power
//! [`ThermalConductance`]: uom::si::f64::ThermalConductance
//! [`TemperatureInterval`]: uom::si::f64::TemperatureInterval

mod temperature_difference;

pub use temperature_difference::TemperatureDifference;
