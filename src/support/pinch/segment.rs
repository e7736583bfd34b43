//! Constant-capacity pieces of a stream.

mod latent;
mod sensible;

pub use latent::LatentSegment;
pub use sensible::SensibleSegment;

use uom::{
    ConstZero,
    si::{
        f64::{Power, TemperatureInterval, ThermalConductance, ThermodynamicTemperature},
        thermodynamic_temperature::kelvin,
    },
};

use super::{CombineError, SegmentError, TemperatureShift};

/// How heat is transferred within a segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HeatType {
    /// Temperature changes along the segment at a constant capacity rate.
    Sensible,
    /// Temperature stays constant along the segment.
    Latent,
}

/// A piece of a stream with a single constant heat-capacity behaviour.
///
/// # Sign convention
///
/// [`heat_flow`](Self::heat_flow) is the heat *released* by the segment:
///
/// - Positive: a hot segment that must be cooled.
/// - Negative: a cold segment that must be heated.
/// - Zero: a neutral segment.
///
/// Sensible segments satisfy `heat_flow = capacity_rate * (supply - target)`,
/// so any physical stream has a positive capacity rate regardless of its
/// direction.
///
/// Segments are immutable values; every transformation returns a new one.
///
/// # Example
///
/// ```
/// use twine_pinch::support::pinch::{HeatType, Segment};
/// use uom::si::{
///     f64::{Power, ThermodynamicTemperature},
///     power::kilowatt,
///     thermal_conductance::kilowatt_per_kelvin,
///     thermodynamic_temperature::kelvin,
/// };
///
/// let cold = Segment::new(
///     Power::new::<kilowatt>(-180.0),
///     ThermodynamicTemperature::new::<kelvin>(300.0),
///     ThermodynamicTemperature::new::<kelvin>(480.0),
///     None,
/// )?;
///
/// assert_eq!(cold.heat_type(), HeatType::Sensible);
/// assert!(cold.is_cold());
/// assert_eq!(
///     cold.capacity_rate().map(|rate| rate.get::<kilowatt_per_kelvin>()),
///     Some(1.0)
/// );
/// # Ok::<(), twine_pinch::support::pinch::SegmentError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Segment {
    /// A segment over a nonzero temperature range.
    Sensible(SensibleSegment),
    /// A segment at a single temperature.
    Latent(LatentSegment),
}

impl Segment {
    /// Creates a segment from its heat flow and end temperatures.
    ///
    /// Equal temperatures produce a [`Segment::Latent`]; otherwise a
    /// [`Segment::Sensible`] is created whose capacity rate reproduces
    /// `heat_flow` over the range.
    ///
    /// # Errors
    ///
    /// Returns [`SegmentError::InvalidSegment`] if any quantity is not finite.
    pub fn new(
        heat_flow: Power,
        supply_temperature: ThermodynamicTemperature,
        target_temperature: ThermodynamicTemperature,
        temperature_shift: Option<TemperatureShift>,
    ) -> Result<Self, SegmentError> {
        if supply_temperature == target_temperature {
            Self::latent(heat_flow, supply_temperature, temperature_shift)
        } else {
            SensibleSegment::from_heat_flow(
                heat_flow,
                supply_temperature,
                target_temperature,
                temperature_shift,
            )
            .map(Self::Sensible)
        }
    }

    /// Creates a sensible segment from its heat capacity flow rate.
    ///
    /// # Errors
    ///
    /// Returns [`SegmentError::InvalidSegment`] if the temperatures are equal
    /// or any quantity is not finite.
    pub fn sensible(
        capacity_rate: ThermalConductance,
        supply_temperature: ThermodynamicTemperature,
        target_temperature: ThermodynamicTemperature,
        temperature_shift: Option<TemperatureShift>,
    ) -> Result<Self, SegmentError> {
        SensibleSegment::new(
            capacity_rate,
            supply_temperature,
            target_temperature,
            temperature_shift,
        )
        .map(Self::Sensible)
    }

    /// Creates a latent segment at a single temperature.
    ///
    /// # Errors
    ///
    /// Returns [`SegmentError::InvalidSegment`] if any quantity is not finite.
    pub fn latent(
        heat_flow: Power,
        temperature: ThermodynamicTemperature,
        temperature_shift: Option<TemperatureShift>,
    ) -> Result<Self, SegmentError> {
        LatentSegment::new(heat_flow, temperature, temperature_shift).map(Self::Latent)
    }

    #[must_use]
    pub fn heat_type(&self) -> HeatType {
        match self {
            Self::Sensible(_) => HeatType::Sensible,
            Self::Latent(_) => HeatType::Latent,
        }
    }

    /// Returns the signed heat released by the segment.
    #[must_use]
    pub fn heat_flow(&self) -> Power {
        match self {
            Self::Sensible(segment) => segment.heat_flow(),
            Self::Latent(segment) => segment.heat_flow(),
        }
    }

    #[must_use]
    pub fn supply_temperature(&self) -> ThermodynamicTemperature {
        match self {
            Self::Sensible(segment) => segment.supply_temperature(),
            Self::Latent(segment) => segment.temperature(),
        }
    }

    #[must_use]
    pub fn target_temperature(&self) -> ThermodynamicTemperature {
        match self {
            Self::Sensible(segment) => segment.target_temperature(),
            Self::Latent(segment) => segment.temperature(),
        }
    }

    /// Returns the segment's own temperature shift, if it overrides the default.
    #[must_use]
    pub fn temperature_shift(&self) -> Option<TemperatureShift> {
        match self {
            Self::Sensible(segment) => segment.temperature_shift(),
            Self::Latent(segment) => segment.temperature_shift(),
        }
    }

    /// Returns the heat capacity flow rate of a sensible segment.
    #[must_use]
    pub fn capacity_rate(&self) -> Option<ThermalConductance> {
        match self {
            Self::Sensible(segment) => Some(segment.capacity_rate()),
            Self::Latent(_) => None,
        }
    }

    #[must_use]
    pub fn min_temperature(&self) -> ThermodynamicTemperature {
        lower(self.supply_temperature(), self.target_temperature())
    }

    #[must_use]
    pub fn max_temperature(&self) -> ThermodynamicTemperature {
        upper(self.supply_temperature(), self.target_temperature())
    }

    /// Returns `true` if the segment releases heat.
    #[must_use]
    pub fn is_hot(&self) -> bool {
        self.heat_flow() > Power::ZERO
    }

    /// Returns `true` if the segment absorbs heat.
    #[must_use]
    pub fn is_cold(&self) -> bool {
        self.heat_flow() < Power::ZERO
    }

    #[must_use]
    pub fn is_neutral(&self) -> bool {
        self.heat_flow() == Power::ZERO
    }

    /// Returns the segment moved by its temperature difference contribution.
    ///
    /// Hot segments move down and cold segments move up. The segment's own
    /// shift takes precedence over `default_shift`. Neutral segments are
    /// never moved. The returned segment carries a shift of zero.
    ///
    /// # Errors
    ///
    /// Returns [`SegmentError::MissingTemperatureShift`] if the segment has a
    /// nonzero heat flow and neither shift is available.
    pub fn shift(&self, default_shift: Option<TemperatureShift>) -> Result<Self, SegmentError> {
        let heat_flow = self.heat_flow();

        let amount = if heat_flow == Power::ZERO {
            TemperatureInterval::ZERO
        } else {
            self.temperature_shift()
                .or(default_shift)
                .ok_or(SegmentError::MissingTemperatureShift)?
                .into_inner()
        };

        let offset = if heat_flow > Power::ZERO {
            -amount
        } else {
            amount
        };

        Ok(match self {
            Self::Sensible(segment) => Self::Sensible(segment.translated(offset)),
            Self::Latent(segment) => Self::Latent(segment.translated(offset)),
        })
    }

    /// Returns an equivalent segment whose supply is its minimum temperature.
    ///
    /// The heat flow and its sign are unchanged.
    #[must_use]
    pub fn with_low_supply_temperature(&self) -> Self {
        match self {
            Self::Sensible(segment) => Self::Sensible(segment.with_low_supply_temperature()),
            Self::Latent(_) => *self,
        }
    }

    /// Returns the segment with a non-negative heat flow.
    ///
    /// Supply and target temperatures are not swapped.
    #[must_use]
    pub fn with_absolute_heat_flow(&self) -> Self {
        if self.heat_flow() < Power::ZERO {
            self.with_inverted_heat_flow()
        } else {
            *self
        }
    }

    /// Returns the segment with its heat flow negated.
    ///
    /// Supply and target temperatures are not swapped.
    #[must_use]
    pub fn with_inverted_heat_flow(&self) -> Self {
        match self {
            Self::Sensible(segment) => Self::Sensible(segment.with_inverted_heat_flow()),
            Self::Latent(segment) => Self::Latent(segment.with_inverted_heat_flow()),
        }
    }

    /// Splits the segment at the given temperatures.
    ///
    /// Only temperatures strictly between the minimum and maximum temperature
    /// cut the segment; duplicates and values outside the range are ignored.
    /// The pieces are ordered from supply to target. Without any applicable
    /// cut, and always for latent segments, the result is `[self]`.
    #[must_use]
    pub fn split<I>(&self, temperatures: I) -> Vec<Self>
    where
        I: IntoIterator<Item = ThermodynamicTemperature>,
    {
        match self {
            Self::Sensible(segment) => segment
                .split(temperatures)
                .into_iter()
                .map(Self::Sensible)
                .collect(),
            Self::Latent(_) => vec![*self],
        }
    }

    /// Combines the heat flows of two segments over the same temperature range.
    ///
    /// Sensible capacity rates are added when both segments run in the same
    /// direction and subtracted otherwise. The result keeps the orientation
    /// of `self` and carries `temperature_shift`.
    ///
    /// # Errors
    ///
    /// Returns [`CombineError::TypeMismatch`] if the heat types differ and
    /// [`CombineError::RangeMismatch`] if the minimum or maximum temperatures
    /// differ.
    pub fn add(
        &self,
        other: &Self,
        temperature_shift: Option<TemperatureShift>,
    ) -> Result<Self, CombineError> {
        match (self, other) {
            (Self::Sensible(left), Self::Sensible(right)) => {
                self.check_range(other)?;
                Ok(Self::Sensible(left.add(right, temperature_shift)))
            }
            (Self::Latent(left), Self::Latent(right)) => {
                self.check_range(other)?;
                Ok(Self::Latent(left.add(right, temperature_shift)))
            }
            _ => Err(self.type_mismatch(other)),
        }
    }

    /// Joins two touching segments into one spanning both ranges.
    ///
    /// Sensible segments must share a capacity rate and one's target must be
    /// the other's supply. Latent segments link when they sit at the same
    /// temperature, which sums their heat flows.
    ///
    /// # Errors
    ///
    /// Returns [`CombineError::TypeMismatch`] if the heat types differ and
    /// [`CombineError::NotLinkable`] otherwise.
    pub fn link(
        &self,
        other: &Self,
        temperature_shift: Option<TemperatureShift>,
    ) -> Result<Self, CombineError> {
        match (self, other) {
            (Self::Sensible(left), Self::Sensible(right)) => left
                .link(right, temperature_shift)
                .map(Self::Sensible),
            (Self::Latent(left), Self::Latent(right)) => {
                if left.temperature() == right.temperature() {
                    Ok(Self::Latent(left.add(right, temperature_shift)))
                } else {
                    Err(CombineError::NotLinkable {
                        capacity_rates: None,
                    })
                }
            }
            _ => Err(self.type_mismatch(other)),
        }
    }

    fn type_mismatch(&self, other: &Self) -> CombineError {
        CombineError::TypeMismatch {
            left: self.heat_type(),
            right: other.heat_type(),
        }
    }

    fn check_range(&self, other: &Self) -> Result<(), CombineError> {
        if self.min_temperature() == other.min_temperature()
            && self.max_temperature() == other.max_temperature()
        {
            return Ok(());
        }

        Err(CombineError::RangeMismatch {
            left_min: self.min_temperature(),
            left_max: self.max_temperature(),
            right_min: other.min_temperature(),
            right_max: other.max_temperature(),
        })
    }
}

impl From<SensibleSegment> for Segment {
    fn from(segment: SensibleSegment) -> Self {
        Self::Sensible(segment)
    }
}

impl From<LatentSegment> for Segment {
    fn from(segment: LatentSegment) -> Self {
        Self::Latent(segment)
    }
}

fn lower(a: ThermodynamicTemperature, b: ThermodynamicTemperature) -> ThermodynamicTemperature {
    if a <= b { a } else { b }
}

fn upper(a: ThermodynamicTemperature, b: ThermodynamicTemperature) -> ThermodynamicTemperature {
    if a >= b { a } else { b }
}

fn is_finite_temperature(temperature: ThermodynamicTemperature) -> bool {
    temperature.get::<kelvin>().is_finite()
}
