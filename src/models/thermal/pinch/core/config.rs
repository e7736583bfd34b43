use crate::support::pinch::TemperatureShift;

/// Configuration for a pinch analysis.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PinchConfig {
    /// Shift applied to segments that do not carry their own.
    ///
    /// When `None`, every non-neutral segment must bring its own shift or
    /// adding its stream fails.
    pub default_temperature_shift: Option<TemperatureShift>,
}

impl PinchConfig {
    /// Creates a configuration with the given default temperature shift.
    #[must_use]
    pub fn with_default_temperature_shift(shift: TemperatureShift) -> Self {
        Self {
            default_temperature_shift: Some(shift),
        }
    }
}
