//! Pinch analysis models.
//!
//! [`PinchAnalysis`] is the [`twine_core::Model`] for a one-shot analysis of a
//! set of streams. The computational core lives in an internal `core` module;
//! its [`PinchAnalyzer`] is re-exported for incremental use.

mod core;

pub use self::core::{PinchAnalyzer, PinchConfig, PinchError, PinchResults, PinchTargets};

use twine_core::Model;

use crate::support::pinch::Stream;

/// Pinch analysis of a fixed set of streams.
///
/// Each call analyzes its input streams as a single batch and returns an
/// owned snapshot of the results.
///
/// # Example
///
/// ```
/// use twine_core::Model;
/// use twine_pinch::models::thermal::pinch::{PinchAnalysis, PinchConfig};
/// use twine_pinch::support::pinch::{Stream, TemperatureShift};
/// use uom::si::{
///     f64::{Power, ThermodynamicTemperature},
///     power::kilowatt,
///     temperature_interval::kelvin as delta_kelvin,
///     thermodynamic_temperature::degree_celsius,
/// };
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let model = PinchAnalysis::new(PinchConfig::with_default_temperature_shift(
///     TemperatureShift::new::<delta_kelvin>(5.0)?,
/// ));
///
/// let condensing = Stream::from_heat_flow(
///     Power::new::<kilowatt>(260.0),
///     ThermodynamicTemperature::new::<degree_celsius>(150.0),
///     ThermodynamicTemperature::new::<degree_celsius>(20.0),
///     None,
/// )?;
///
/// let results = model.call(&vec![condensing])?;
/// assert_eq!(results.hot_utility_target, Power::new::<kilowatt>(0.0));
/// assert_eq!(results.pinch_temperatures.len(), 1);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PinchAnalysis {
    pub config: PinchConfig,
}

impl PinchAnalysis {
    #[must_use]
    pub fn new(config: PinchConfig) -> Self {
        Self { config }
    }
}

impl Model for PinchAnalysis {
    type Input = Vec<Stream>;
    type Output = PinchResults;
    type Error = PinchError;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        let analyzer = PinchAnalyzer::with_streams(self.config, input.iter().cloned())?;
        Ok(analyzer.results())
    }
}
