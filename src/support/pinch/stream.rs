use uom::{
    ConstZero,
    si::f64::{Power, ThermodynamicTemperature},
};

use super::{Segment, StreamError, TemperatureShift};

/// A fluid stream made of one or more continuous segments.
///
/// Each segment's supply temperature equals the previous segment's target
/// temperature, so the stream has no temperature gaps.
#[derive(Debug, Clone, PartialEq)]
pub struct Stream {
    segments: Vec<Segment>,
}

impl Stream {
    /// Builds a stream from its segments, in flow order.
    ///
    /// # Errors
    ///
    /// Returns [`StreamError::Empty`] if no segment is given and
    /// [`StreamError::Discontinuity`] if adjacent segments do not touch.
    pub fn new<I>(segments: I) -> Result<Self, StreamError>
    where
        I: IntoIterator<Item = Segment>,
    {
        let segments: Vec<Segment> = segments.into_iter().collect();

        if segments.is_empty() {
            return Err(StreamError::Empty);
        }

        for (index, pair) in segments.windows(2).enumerate() {
            let (previous, current) = (&pair[0], &pair[1]);
            if current.supply_temperature() != previous.target_temperature() {
                return Err(StreamError::Discontinuity {
                    index: index + 1,
                    previous_target: previous.target_temperature(),
                    supply: current.supply_temperature(),
                });
            }
        }

        Ok(Self { segments })
    }

    /// Builds a single-segment stream.
    ///
    /// # Errors
    ///
    /// Returns [`StreamError::Segment`] if the segment cannot be built.
    pub fn from_heat_flow(
        heat_flow: Power,
        supply_temperature: ThermodynamicTemperature,
        target_temperature: ThermodynamicTemperature,
        temperature_shift: Option<TemperatureShift>,
    ) -> Result<Self, StreamError> {
        let segment = Segment::new(
            heat_flow,
            supply_temperature,
            target_temperature,
            temperature_shift,
        )?;
        Ok(Self {
            segments: vec![segment],
        })
    }

    #[must_use]
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Net heat released by the whole stream.
    #[must_use]
    pub fn heat_flow(&self) -> Power {
        self.segments
            .iter()
            .fold(Power::ZERO, |total, segment| total + segment.heat_flow())
    }

    #[must_use]
    pub fn supply_temperature(&self) -> ThermodynamicTemperature {
        self.segments[0].supply_temperature()
    }

    #[must_use]
    pub fn target_temperature(&self) -> ThermodynamicTemperature {
        self.segments[self.segments.len() - 1].target_temperature()
    }

    /// Segments that absorb heat.
    pub fn cold_segments(&self) -> impl Iterator<Item = &Segment> {
        self.segments.iter().filter(|segment| segment.is_cold())
    }

    /// Segments that release heat.
    pub fn hot_segments(&self) -> impl Iterator<Item = &Segment> {
        self.segments.iter().filter(|segment| segment.is_hot())
    }

    /// Segments with zero heat flow.
    pub fn neutral_segments(&self) -> impl Iterator<Item = &Segment> {
        self.segments.iter().filter(|segment| segment.is_neutral())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::support::pinch::{
        SegmentError,
        test_support::{kelvin, kilowatts, segment, stream},
    };

    #[test]
    fn rejects_empty_stream() {
        assert_eq!(Stream::new([]), Err(StreamError::Empty));
    }

    #[test]
    fn rejects_temperature_gaps() {
        let result = Stream::new([segment(-50.0, 50.0, 100.0), segment(-100.0, 110.0, 200.0)]);

        assert_eq!(
            result,
            Err(StreamError::Discontinuity {
                index: 1,
                previous_target: kelvin(100.0),
                supply: kelvin(110.0),
            })
        );
    }

    #[test]
    fn from_heat_flow_propagates_segment_errors() {
        let result = Stream::from_heat_flow(
            kilowatts(f64::NAN),
            kelvin(20.0),
            kelvin(200.0),
            None,
        );
        assert!(matches!(
            result,
            Err(StreamError::Segment(SegmentError::InvalidSegment { .. }))
        ));
    }

    #[test]
    fn segmented_stream_properties() {
        let staged = stream(&[
            (-50.0, 50.0, 100.0),
            (-40.0, 100.0, 100.0),
            (0.0, 100.0, 120.0),
            (-100.0, 120.0, 200.0),
        ]);

        assert_eq!(staged.segments().len(), 4);
        assert_eq!(staged.supply_temperature(), kelvin(50.0));
        assert_eq!(staged.target_temperature(), kelvin(200.0));
        assert_eq!(staged.heat_flow(), kilowatts(-190.0));
        assert_eq!(staged.cold_segments().count(), 3);
        assert_eq!(staged.hot_segments().count(), 0);
        assert_eq!(staged.neutral_segments().count(), 1);
    }

    #[test]
    fn single_segment_stream() -> Result<(), StreamError> {
        let hot = Stream::from_heat_flow(kilowatts(260.0), kelvin(150.0), kelvin(20.0), None)?;

        assert_eq!(hot.segments(), &[segment(260.0, 150.0, 20.0)]);
        assert_eq!(hot.hot_segments().count(), 1);
        assert_eq!(hot, stream(&[(260.0, 150.0, 20.0)]));
        Ok(())
    }
}
