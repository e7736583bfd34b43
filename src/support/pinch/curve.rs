use uom::si::f64::{Power, ThermodynamicTemperature};

/// Cumulative heat flow of a cascade as a function of temperature.
///
/// Points are ordered from the lowest to the highest temperature. A
/// temperature can appear twice in a row, which marks a latent step or the
/// end of a flat stretch across a gap between intervals.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CompositeCurve {
    temperatures: Vec<ThermodynamicTemperature>,
    heat_flows: Vec<Power>,
}

impl CompositeCurve {
    pub(crate) fn push(&mut self, temperature: ThermodynamicTemperature, heat_flow: Power) {
        self.temperatures.push(temperature);
        self.heat_flows.push(heat_flow);
    }

    #[must_use]
    pub fn temperatures(&self) -> &[ThermodynamicTemperature] {
        &self.temperatures
    }

    /// Cumulative heat flow at each point, matching [`temperatures`](Self::temperatures).
    #[must_use]
    pub fn heat_flows(&self) -> &[Power] {
        &self.heat_flows
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.temperatures.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.temperatures.is_empty()
    }

    /// Iterates over `(temperature, cumulative heat flow)` points.
    pub fn points(&self) -> impl Iterator<Item = (ThermodynamicTemperature, Power)> + '_ {
        self.temperatures
            .iter()
            .copied()
            .zip(self.heat_flows.iter().copied())
    }

    /// Returns the lowest cumulative heat flow on the curve.
    #[must_use]
    pub fn min_heat_flow(&self) -> Option<Power> {
        self.heat_flows
            .iter()
            .copied()
            .reduce(|min, heat_flow| if heat_flow < min { heat_flow } else { min })
    }

    /// Consumes the curve and returns its temperatures and heat flows.
    #[must_use]
    pub fn into_parts(self) -> (Vec<ThermodynamicTemperature>, Vec<Power>) {
        (self.temperatures, self.heat_flows)
    }
}
