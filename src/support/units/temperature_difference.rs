use uom::si::{
    f64::{TemperatureInterval, ThermodynamicTemperature},
    temperature_interval::kelvin as delta_kelvin,
    thermodynamic_temperature::kelvin as abs_kelvin,
};

/// Extension trait for subtracting absolute temperatures.
///
/// [`minus`](Self::minus) returns the [`TemperatureInterval`] between two
/// [`ThermodynamicTemperature`] values. It is what turns a segment's supply
/// and target temperatures into the span that multiplies its heat capacity
/// flow rate.
///
/// Upstream discussion of why [`uom`] lacks this operation:
/// [#380](https://github.com/iliekturtles/uom/issues/380),
/// [#403](https://github.com/iliekturtles/uom/issues/403).
pub trait TemperatureDifference {
    /// Returns the temperature difference `self - other`.
    fn minus(self, other: Self) -> TemperatureInterval;
}

impl TemperatureDifference for ThermodynamicTemperature {
    fn minus(self, other: Self) -> TemperatureInterval {
        TemperatureInterval::new::<delta_kelvin>(
            self.get::<abs_kelvin>() - other.get::<abs_kelvin>(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::thermodynamic_temperature::degree_celsius;

    #[test]
    fn span_sign_follows_operand_order() {
        let cool = ThermodynamicTemperature::new::<abs_kelvin>(293.0);
        let warm = ThermodynamicTemperature::new::<abs_kelvin>(473.0);

        assert_relative_eq!(warm.minus(cool).get::<delta_kelvin>(), 180.0);
        assert_relative_eq!(cool.minus(warm).get::<delta_kelvin>(), -180.0);
        assert_relative_eq!(cool.minus(cool).get::<delta_kelvin>(), 0.0);
    }

    #[test]
    fn celsius_and_kelvin_share_a_scale() {
        let boiling = ThermodynamicTemperature::new::<degree_celsius>(100.0);
        let freezing = ThermodynamicTemperature::new::<abs_kelvin>(273.15);

        assert_relative_eq!(
            boiling.minus(freezing).get::<delta_kelvin>(),
            100.0,
            epsilon = 1e-9
        );
    }
}
