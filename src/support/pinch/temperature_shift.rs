use std::ops::Deref;

use uom::{
    ConstZero,
    si::{f64::TemperatureInterval, temperature_interval::kelvin as delta_kelvin},
};

use super::SegmentError;

/// Temperature difference contribution of a segment.
///
/// Hot segments are shifted down and cold segments up by this amount before
/// they are cascaded, which reserves a minimum driving temperature difference
/// between the hot and cold profiles.
///
/// The value must be finite and non-negative.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct TemperatureShift(TemperatureInterval);

impl TemperatureShift {
    /// A shift of zero, carried by segments that have already been shifted.
    pub const ZERO: Self = Self(TemperatureInterval::ZERO);

    /// Create a [`TemperatureShift`] from a scalar value.
    ///
    /// # Errors
    ///
    /// Returns [`SegmentError::InvalidTemperatureShift`] if the value is
    /// negative or not finite.
    pub fn new<U>(value: f64) -> Result<Self, SegmentError>
    where
        U: uom::si::temperature_interval::Unit + uom::Conversion<f64, T = f64>,
    {
        Self::from_quantity(TemperatureInterval::new::<U>(value))
    }

    /// Create a [`TemperatureShift`] from a temperature interval.
    ///
    /// # Errors
    ///
    /// Returns [`SegmentError::InvalidTemperatureShift`] if the interval is
    /// negative or not finite.
    pub fn from_quantity(quantity: TemperatureInterval) -> Result<Self, SegmentError> {
        if quantity.get::<delta_kelvin>().is_finite() && quantity >= TemperatureInterval::ZERO {
            Ok(Self(quantity))
        } else {
            Err(SegmentError::InvalidTemperatureShift { shift: quantity })
        }
    }

    /// Returns the shift as a plain temperature interval.
    #[must_use]
    pub fn into_inner(self) -> TemperatureInterval {
        self.0
    }
}

impl Deref for TemperatureShift {
    type Target = TemperatureInterval;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}
