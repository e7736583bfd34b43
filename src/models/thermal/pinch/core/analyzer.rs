use tracing::debug;
use uom::{
    ConstZero,
    si::f64::{Power, ThermodynamicTemperature},
};

use crate::support::pinch::{
    CompositeCurve, HeatCascade, Segment, SegmentError, Stream, TemperatureShift,
};

use super::{PinchConfig, PinchError, PinchResults, PinchTargets};

/// Incremental pinch analysis over a growing set of streams.
///
/// The analyzer keeps five heat cascades up to date:
///
/// - cold and hot composites at actual temperatures,
/// - cold and hot composites at shifted temperatures,
/// - the grand composite, which nets hot against cold at shifted
///   temperatures and locates the pinch.
///
/// Composite cascades hold absolute heat flows. Targets are recomputed after
/// every batch of streams.
///
/// # Example
///
/// ```
/// use twine_pinch::models::thermal::pinch::{PinchAnalyzer, PinchConfig};
/// use twine_pinch::support::pinch::{Stream, TemperatureShift};
/// use uom::si::{
///     f64::{Power, ThermodynamicTemperature},
///     power::kilowatt,
///     temperature_interval::kelvin as delta_kelvin,
///     thermodynamic_temperature::kelvin,
/// };
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let stream = |heat, supply, target| {
///     Stream::from_heat_flow(
///         Power::new::<kilowatt>(heat),
///         ThermodynamicTemperature::new::<kelvin>(supply),
///         ThermodynamicTemperature::new::<kelvin>(target),
///         None,
///     )
/// };
///
/// let config =
///     PinchConfig::with_default_temperature_shift(TemperatureShift::new::<delta_kelvin>(10.0)?);
/// let analyzer = PinchAnalyzer::with_streams(
///     config,
///     [stream(-180.0, 300.0, 480.0)?, stream(180.0, 430.0, 330.0)?],
/// )?;
///
/// assert_eq!(analyzer.hot_utility_target(), Power::new::<kilowatt>(70.0));
/// assert_eq!(analyzer.cold_utility_target(), Power::new::<kilowatt>(70.0));
/// assert_eq!(analyzer.heat_recovery_target(), Power::new::<kilowatt>(110.0));
/// assert_eq!(
///     analyzer.pinch_temperatures(),
///     [ThermodynamicTemperature::new::<kelvin>(420.0)]
/// );
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Default)]
pub struct PinchAnalyzer {
    config: PinchConfig,
    streams: Vec<Stream>,
    cold: HeatCascade,
    hot: HeatCascade,
    shifted_cold: HeatCascade,
    shifted_hot: HeatCascade,
    grand: HeatCascade,
    targets: PinchTargets,
}

impl PinchAnalyzer {
    /// Creates an analyzer without streams.
    #[must_use]
    pub fn new(config: PinchConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    /// Creates an analyzer and adds `streams` as a single batch.
    ///
    /// # Errors
    ///
    /// Returns [`PinchError::Segment`] if a segment cannot be shifted.
    pub fn with_streams<I>(config: PinchConfig, streams: I) -> Result<Self, PinchError>
    where
        I: IntoIterator<Item = Stream>,
    {
        let mut analyzer = Self::new(config);
        analyzer.add_streams(streams)?;
        Ok(analyzer)
    }

    /// Adds a batch of streams and updates the targets.
    ///
    /// Every segment is shifted before anything is recorded, so a failing
    /// batch leaves the analyzer unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`PinchError::Segment`] if a non-neutral segment has no
    /// temperature shift of its own and no default is configured.
    pub fn add_streams<I>(&mut self, streams: I) -> Result<(), PinchError>
    where
        I: IntoIterator<Item = Stream>,
    {
        let default_shift = self.config.default_temperature_shift;

        let batch = streams
            .into_iter()
            .map(|stream| -> Result<_, PinchError> {
                let shifted = shift_segments(&stream, default_shift)?;
                Ok((stream, shifted))
            })
            .collect::<Result<Vec<_>, PinchError>>()?;

        let stream_count = batch.len();

        for (stream, shifted) in batch {
            for (segment, shifted) in stream.segments().iter().zip(shifted) {
                self.add_segment(segment, &shifted);
            }
            self.streams.push(stream);
        }

        let grand_curve = self.grand.cumulative_heat_flow(Power::ZERO);
        self.targets = PinchTargets::from_grand_curve(&grand_curve);

        debug!(
            streams = stream_count,
            hot_utility = ?self.targets.hot_utility,
            cold_utility = ?self.targets.cold_utility,
            pinch_temperatures = self.targets.pinch_temperatures.len(),
            "added streams to pinch analysis"
        );

        Ok(())
    }

    fn add_segment(&mut self, segment: &Segment, shifted: &Segment) {
        let (composite, shifted_composite) = if segment.is_cold() {
            (&mut self.cold, &mut self.shifted_cold)
        } else if segment.is_hot() {
            (&mut self.hot, &mut self.shifted_hot)
        } else {
            return;
        };

        composite.add_segments([segment.with_absolute_heat_flow()]);
        shifted_composite.add_segments([shifted.with_absolute_heat_flow()]);
        self.grand.add_segments([shifted.with_inverted_heat_flow()]);
    }

    /// Streams added so far, in insertion order.
    #[must_use]
    pub fn streams(&self) -> &[Stream] {
        &self.streams
    }

    #[must_use]
    pub fn config(&self) -> PinchConfig {
        self.config
    }

    #[must_use]
    pub fn default_temperature_shift(&self) -> Option<TemperatureShift> {
        self.config.default_temperature_shift
    }

    #[must_use]
    pub fn targets(&self) -> &PinchTargets {
        &self.targets
    }

    /// Total heat absorbed by the cold segments.
    #[must_use]
    pub fn heating_demand(&self) -> Power {
        self.cold.net_heat_flow()
    }

    /// Total heat released by the hot segments.
    #[must_use]
    pub fn cooling_demand(&self) -> Power {
        self.hot.net_heat_flow()
    }

    #[must_use]
    pub fn hot_utility_target(&self) -> Power {
        self.targets.hot_utility
    }

    #[must_use]
    pub fn cold_utility_target(&self) -> Power {
        self.targets.cold_utility
    }

    /// Heat exchanged between hot and cold segments at minimum utility use.
    #[must_use]
    pub fn heat_recovery_target(&self) -> Power {
        self.heating_demand() - self.hot_utility_target()
    }

    #[must_use]
    pub fn pinch_temperatures(&self) -> &[ThermodynamicTemperature] {
        &self.targets.pinch_temperatures
    }

    /// Cold composite curve, offset by the cold utility target.
    #[must_use]
    pub fn cold_composite_curve(&self) -> CompositeCurve {
        self.cold.cumulative_heat_flow(self.cold_utility_target())
    }

    #[must_use]
    pub fn hot_composite_curve(&self) -> CompositeCurve {
        self.hot.cumulative_heat_flow(Power::ZERO)
    }

    #[must_use]
    pub fn shifted_cold_composite_curve(&self) -> CompositeCurve {
        self.shifted_cold.cumulative_heat_flow(self.cold_utility_target())
    }

    #[must_use]
    pub fn shifted_hot_composite_curve(&self) -> CompositeCurve {
        self.shifted_hot.cumulative_heat_flow(Power::ZERO)
    }

    /// Grand composite curve, offset by the cold utility target.
    ///
    /// The curve touches zero at every pinch temperature.
    #[must_use]
    pub fn grand_composite_curve(&self) -> CompositeCurve {
        self.grand.cumulative_heat_flow(self.cold_utility_target())
    }

    /// Returns an owned snapshot of the current demands, targets and curves.
    #[must_use]
    pub fn results(&self) -> PinchResults {
        PinchResults {
            heating_demand: self.heating_demand(),
            cooling_demand: self.cooling_demand(),
            hot_utility_target: self.hot_utility_target(),
            cold_utility_target: self.cold_utility_target(),
            heat_recovery_target: self.heat_recovery_target(),
            pinch_temperatures: self.targets.pinch_temperatures.clone(),
            cold_composite_curve: self.cold_composite_curve(),
            hot_composite_curve: self.hot_composite_curve(),
            shifted_cold_composite_curve: self.shifted_cold_composite_curve(),
            shifted_hot_composite_curve: self.shifted_hot_composite_curve(),
            grand_composite_curve: self.grand_composite_curve(),
        }
    }
}

fn shift_segments(
    stream: &Stream,
    default_shift: Option<TemperatureShift>,
) -> Result<Vec<Segment>, SegmentError> {
    stream
        .segments()
        .iter()
        .map(|segment| segment.shift(default_shift))
        .collect()
}
