use tracing::trace;
use uom::{ConstZero, si::f64::Power};

use super::{CompositeCurve, Segment};

/// Temperature-ordered aggregate of heat segments.
///
/// Every segment added to a cascade is merged with the segments already
/// present, so that the cascade always holds a list of intervals which:
///
/// - are sorted by temperature, lowest first,
/// - touch at most at their end temperatures,
/// - each carry a nonzero heat flow,
/// - cannot be linked with their neighbours.
///
/// Intervals are stored with their supply at the low end. Where intervals
/// overlap in the inputs, their heat flows are summed, so hot and cold
/// contributions over the same range cancel.
///
/// # Example
///
/// ```
/// use twine_pinch::support::pinch::{HeatCascade, Segment};
/// use uom::si::{
///     f64::{Power, ThermodynamicTemperature},
///     power::kilowatt,
///     thermodynamic_temperature::kelvin,
/// };
///
/// let cold = |heat, supply, target| {
///     Segment::new(
///         Power::new::<kilowatt>(heat),
///         ThermodynamicTemperature::new::<kelvin>(supply),
///         ThermodynamicTemperature::new::<kelvin>(target),
///         None,
///     )
/// };
///
/// let cascade: HeatCascade = [cold(-65.0, 300.0, 365.0)?, cold(-120.0, 340.0, 400.0)?]
///     .into_iter()
///     .collect();
///
/// assert_eq!(cascade.len(), 3);
/// assert_eq!(cascade.net_heat_flow(), Power::new::<kilowatt>(-185.0));
/// # Ok::<(), twine_pinch::support::pinch::SegmentError>(())
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HeatCascade {
    intervals: Vec<Segment>,
}

impl HeatCascade {
    /// Creates an empty cascade.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn intervals(&self) -> &[Segment] {
        &self.intervals
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.intervals.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.intervals.is_empty()
    }

    /// Merges segments into the cascade, one at a time and in order.
    pub fn add_segments<I>(&mut self, segments: I)
    where
        I: IntoIterator<Item = Segment>,
    {
        for segment in segments {
            self.add_segment(segment);
        }
    }

    /// Sum of the heat flows of all intervals.
    #[must_use]
    pub fn net_heat_flow(&self) -> Power {
        self.intervals
            .iter()
            .fold(Power::ZERO, |total, interval| total + interval.heat_flow())
    }

    /// Returns the running heat flow over the intervals, starting from `heat_offset`.
    ///
    /// Each interval contributes a point at its supply and at its target
    /// temperature. A gap between two intervals shows up as a flat stretch.
    /// An empty cascade yields an empty curve.
    #[must_use]
    pub fn cumulative_heat_flow(&self, heat_offset: Power) -> CompositeCurve {
        let mut curve = CompositeCurve::default();

        let Some(first) = self.intervals.first() else {
            return curve;
        };

        let mut running = heat_offset;
        let mut last_temperature = first.supply_temperature();
        curve.push(last_temperature, running);

        for interval in &self.intervals {
            if interval.supply_temperature() != last_temperature {
                curve.push(interval.supply_temperature(), running);
            }
            running += interval.heat_flow();
            last_temperature = interval.target_temperature();
            curve.push(last_temperature, running);
        }

        curve
    }

    fn add_segment(&mut self, segment: Segment) {
        let segment = segment.with_low_supply_temperature();

        let pieces = segment.split(
            self.intervals
                .iter()
                .flat_map(|interval| [interval.min_temperature(), interval.max_temperature()]),
        );

        let cuts = [segment.min_temperature(), segment.max_temperature()];
        self.intervals = self
            .intervals
            .iter()
            .flat_map(|interval| interval.split(cuts))
            .collect();

        let piece_count = pieces.len();
        self.merge(pieces);
        self.normalize();

        trace!(
            pieces = piece_count,
            intervals = self.intervals.len(),
            "added segment to heat cascade"
        );
    }

    /// Adds pieces that line up with the interval boundaries.
    ///
    /// Pieces must be ordered by temperature. A piece covering the same range
    /// as an interval is summed into it; any other piece is inserted ahead of
    /// the first interval that ends above the piece's start.
    fn merge(&mut self, pieces: Vec<Segment>) {
        let mut index = 0;

        for piece in pieces {
            while self
                .intervals
                .get(index)
                .is_some_and(|interval| piece.min_temperature() >= interval.max_temperature())
            {
                index += 1;
            }

            match self.intervals.get(index).map(|interval| interval.add(&piece, None)) {
                Some(Ok(combined)) => self.intervals[index] = combined,
                Some(Err(_)) => self.intervals.insert(index, piece),
                None => self.intervals.push(piece),
            }
        }
    }

    /// Links neighbouring intervals and drops those without heat flow.
    ///
    /// After a drop the walk steps back one interval, since the two intervals
    /// that now touch may be linkable.
    fn normalize(&mut self) {
        let mut index = 0;

        while index < self.intervals.len() {
            if self.intervals[index].is_neutral() {
                self.intervals.remove(index);
                index = index.saturating_sub(1);
                continue;
            }

            let linked = self
                .intervals
                .get(index + 1)
                .and_then(|next| self.intervals[index].link(next, None).ok());

            match linked {
                Some(linked) => {
                    self.intervals[index] = linked;
                    self.intervals.remove(index + 1);
                }
                None => index += 1,
            }
        }
    }
}

impl FromIterator<Segment> for HeatCascade {
    fn from_iter<I: IntoIterator<Item = Segment>>(segments: I) -> Self {
        let mut cascade = Self::new();
        cascade.add_segments(segments);
        cascade
    }
}

impl Extend<Segment> for HeatCascade {
    fn extend<I: IntoIterator<Item = Segment>>(&mut self, segments: I) {
        self.add_segments(segments);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use proptest::prelude::*;

    use crate::support::pinch::test_support::{curve, kelvin, kilowatts, kw_per_k, segment};

    fn cascade(segments: &[(f64, f64, f64)]) -> HeatCascade {
        segments
            .iter()
            .map(|&(heat_flow, supply, target)| segment(heat_flow, supply, target))
            .collect()
    }

    fn intervals(segments: &[(f64, f64, f64)]) -> Vec<Segment> {
        segments
            .iter()
            .map(|&(heat_flow, supply, target)| segment(heat_flow, supply, target))
            .collect()
    }

    #[test]
    fn empty_cascade() {
        let cascade = HeatCascade::new();

        assert!(cascade.is_empty());
        assert_eq!(cascade.net_heat_flow(), Power::ZERO);
        assert!(cascade.cumulative_heat_flow(Power::ZERO).is_empty());
        assert!(cascade.cumulative_heat_flow(kilowatts(50.0)).is_empty());
    }

    #[test]
    fn neutral_segments_leave_no_intervals() -> Result<(), crate::support::pinch::SegmentError> {
        let mut cascade = HeatCascade::new();
        cascade.add_segments([
            Segment::sensible(kw_per_k(0.0), kelvin(20.0), kelvin(200.0), None)?,
            segment(0.0, 100.0, 100.0),
        ]);

        assert!(cascade.is_empty());
        Ok(())
    }

    #[test]
    fn single_cold_sensible_segment() {
        let cascade = cascade(&[(-180.0, 20.0, 200.0)]);

        assert_eq!(cascade.intervals(), intervals(&[(-180.0, 20.0, 200.0)]));
        assert_eq!(cascade.net_heat_flow(), kilowatts(-180.0));
        assert_eq!(
            cascade.cumulative_heat_flow(Power::ZERO),
            curve(&[20.0, 200.0], &[0.0, -180.0])
        );
        assert_eq!(
            cascade.cumulative_heat_flow(kilowatts(50.0)),
            curve(&[20.0, 200.0], &[50.0, -130.0])
        );
    }

    #[test]
    fn hot_segment_is_stored_low_end_first() {
        let cascade = cascade(&[(180.0, 150.0, 50.0)]);

        assert_eq!(cascade.intervals(), intervals(&[(180.0, 50.0, 150.0)]));
        assert_eq!(cascade.net_heat_flow(), kilowatts(180.0));
        assert_eq!(
            cascade.cumulative_heat_flow(Power::ZERO),
            curve(&[50.0, 150.0], &[0.0, 180.0])
        );
    }

    #[test]
    fn single_latent_segment() {
        let cascade = cascade(&[(-200.0, 100.0, 100.0)]);

        assert_eq!(cascade.intervals(), intervals(&[(-200.0, 100.0, 100.0)]));
        assert_eq!(
            cascade.cumulative_heat_flow(Power::ZERO),
            curve(&[100.0, 100.0], &[0.0, -200.0])
        );
    }

    #[test]
    fn touching_segments_with_different_rates_stay_apart() {
        let cascade = cascade(&[(-60.0, 20.0, 80.0), (-80.0, 80.0, 120.0)]);

        assert_eq!(
            cascade.intervals(),
            intervals(&[(-60.0, 20.0, 80.0), (-80.0, 80.0, 120.0)])
        );
        assert_eq!(
            cascade.cumulative_heat_flow(Power::ZERO),
            curve(&[20.0, 80.0, 120.0], &[0.0, -60.0, -140.0])
        );
    }

    #[test]
    fn gap_between_segments_is_flat() {
        let cascade = cascade(&[(-80.0, 80.0, 120.0), (-30.0, 20.0, 50.0)]);

        assert_eq!(
            cascade.intervals(),
            intervals(&[(-30.0, 20.0, 50.0), (-80.0, 80.0, 120.0)])
        );
        assert_eq!(
            cascade.cumulative_heat_flow(Power::ZERO),
            curve(&[20.0, 50.0, 80.0, 120.0], &[0.0, -30.0, -30.0, -110.0])
        );
    }

    #[test]
    fn overlapping_cold_segments_sum() {
        let cascade = cascade(&[(-65.0, 20.0, 85.0), (-120.0, 60.0, 120.0)]);

        assert_eq!(
            cascade.intervals(),
            intervals(&[(-40.0, 20.0, 60.0), (-75.0, 60.0, 85.0), (-70.0, 85.0, 120.0)])
        );
        assert_eq!(cascade.net_heat_flow(), kilowatts(-185.0));
        assert_eq!(
            cascade.cumulative_heat_flow(Power::ZERO),
            curve(&[20.0, 60.0, 85.0, 120.0], &[0.0, -40.0, -115.0, -185.0])
        );
    }

    #[test]
    fn overlapping_hot_segments_sum() {
        let cascade = cascade(&[(60.0, 120.0, 60.0), (130.0, 85.0, 20.0)]);

        assert_eq!(
            cascade.intervals(),
            intervals(&[(80.0, 20.0, 60.0), (75.0, 60.0, 85.0), (35.0, 85.0, 120.0)])
        );
        assert_eq!(cascade.net_heat_flow(), kilowatts(190.0));
    }

    #[test]
    fn equal_rate_neighbours_are_linked() {
        let cold = cascade(&[(-120.0, 20.0, 80.0), (-80.0, 80.0, 120.0)]);
        assert_eq!(cold.intervals(), intervals(&[(-200.0, 20.0, 120.0)]));

        let hot = cascade(&[(80.0, 120.0, 80.0), (120.0, 80.0, 20.0)]);
        assert_eq!(hot.intervals(), intervals(&[(200.0, 20.0, 120.0)]));
    }

    #[test]
    fn latent_segments_at_one_temperature_combine() {
        let cascade = cascade(&[
            (-200.0, 100.0, 100.0),
            (-150.0, 100.0, 100.0),
            (250.0, 100.0, 100.0),
        ]);

        assert_eq!(cascade.intervals(), intervals(&[(-100.0, 100.0, 100.0)]));
    }

    #[test]
    fn latent_segments_at_different_temperatures() {
        let cascade = cascade(&[(-150.0, 200.0, 200.0), (-200.0, 100.0, 100.0)]);

        assert_eq!(
            cascade.intervals(),
            intervals(&[(-200.0, 100.0, 100.0), (-150.0, 200.0, 200.0)])
        );
        assert_eq!(
            cascade.cumulative_heat_flow(Power::ZERO),
            curve(&[100.0, 100.0, 200.0, 200.0], &[0.0, -200.0, -200.0, -350.0])
        );
    }

    #[test]
    fn latent_segment_splits_sensible_interval() {
        let expected = intervals(&[
            (-40.0, 80.0, 100.0),
            (-200.0, 100.0, 100.0),
            (-40.0, 100.0, 120.0),
        ]);

        let sensible_first = cascade(&[(-80.0, 80.0, 120.0), (-200.0, 100.0, 100.0)]);
        let latent_first = cascade(&[(-200.0, 100.0, 100.0), (-80.0, 80.0, 120.0)]);

        assert_eq!(sensible_first.intervals(), expected);
        assert_eq!(latent_first, sensible_first);
        assert_eq!(sensible_first.net_heat_flow(), kilowatts(-280.0));
        assert_eq!(
            sensible_first.cumulative_heat_flow(Power::ZERO),
            curve(&[80.0, 100.0, 100.0, 120.0], &[0.0, -40.0, -240.0, -280.0])
        );
    }

    #[test]
    fn latent_at_interval_ends_keeps_order() {
        let cascade = cascade(&[
            (-30.0, 50.0, 50.0),
            (-60.0, 20.0, 50.0),
            (-70.0, 50.0, 120.0),
        ]);

        assert_eq!(
            cascade.intervals(),
            intervals(&[
                (-60.0, 20.0, 50.0),
                (-30.0, 50.0, 50.0),
                (-70.0, 50.0, 120.0),
            ])
        );
    }

    #[test]
    fn cancelled_latent_lets_neighbours_link() {
        let mut cascade = cascade(&[(-80.0, 80.0, 120.0), (-200.0, 100.0, 100.0)]);
        assert_eq!(cascade.len(), 3);

        cascade.add_segments([segment(200.0, 100.0, 100.0)]);
        assert_eq!(cascade.intervals(), intervals(&[(-80.0, 80.0, 120.0)]));
    }

    #[test]
    fn mixed_hot_and_cold_segments() {
        let cascade = cascade(&[
            (-60.0, 60.0, 120.0),
            (-10.0, 60.0, 70.0),
            (130.0, 85.0, 20.0),
        ]);

        assert_eq!(
            cascade.intervals(),
            intervals(&[(80.0, 20.0, 60.0), (15.0, 70.0, 85.0), (-35.0, 85.0, 120.0)])
        );
        assert_eq!(cascade.net_heat_flow(), kilowatts(60.0));
        assert_eq!(
            cascade.cumulative_heat_flow(Power::ZERO),
            curve(&[20.0, 60.0, 70.0, 85.0, 120.0], &[0.0, 80.0, 80.0, 95.0, 60.0])
        );
    }

    #[test]
    fn opposite_segments_neutralize() {
        let cascade = cascade(&[(-60.0, 60.0, 120.0), (60.0, 120.0, 60.0)]);
        assert!(cascade.is_empty());
        assert!(cascade.cumulative_heat_flow(kilowatts(10.0)).is_empty());
    }

    #[test]
    fn cascade_built_from_other_cascades() {
        let cold = cascade(&[(-230.0, 25.0, 140.0), (-240.0, 85.0, 145.0)]);
        let hot = cascade(&[(330.0, 165.0, 55.0), (180.0, 145.0, 25.0)]);

        let mut mixed: HeatCascade = cold.intervals().iter().copied().collect();
        mixed.extend(hot.intervals().iter().copied());

        assert_eq!(
            mixed.intervals(),
            intervals(&[
                (-15.0, 25.0, 55.0),
                (75.0, 55.0, 85.0),
                (-82.5, 85.0, 140.0),
                (2.5, 140.0, 145.0),
                (60.0, 145.0, 165.0),
            ])
        );
        assert_eq!(mixed.net_heat_flow(), kilowatts(40.0));
        assert_eq!(
            mixed.cumulative_heat_flow(Power::ZERO),
            curve(
                &[25.0, 55.0, 85.0, 140.0, 145.0, 165.0],
                &[0.0, -15.0, 60.0, -22.5, -20.0, 40.0]
            )
        );
        assert_eq!(
            mixed.cumulative_heat_flow(kilowatts(22.5)),
            curve(
                &[25.0, 55.0, 85.0, 140.0, 145.0, 165.0],
                &[22.5, 7.5, 82.5, 0.0, 2.5, 62.5]
            )
        );
    }

    #[test]
    fn equality_compares_intervals() {
        let first = cascade(&[(-60.0, 20.0, 80.0)]);
        let second = cascade(&[(-30.0, 20.0, 50.0), (-30.0, 50.0, 80.0)]);
        let third = cascade(&[(-60.0, 20.0, 80.0), (-10.0, 90.0, 100.0)]);

        assert_eq!(first, second);
        assert_ne!(first, third);
        assert_ne!(first, HeatCascade::new());
    }

    fn arb_segment() -> impl Strategy<Value = Segment> {
        (-4_i32..=4, 0_i32..12, 0_i32..12).prop_map(|(rate, supply, target)| {
            let (supply, target) = (kelvin(f64::from(supply)), kelvin(f64::from(target)));
            let segment = if supply == target {
                Segment::latent(kilowatts(f64::from(rate * 10)), supply, None)
            } else {
                Segment::sensible(kw_per_k(f64::from(rate)), supply, target, None)
            };
            segment.expect("whole-number segment")
        })
    }

    proptest! {
        #[test]
        fn insertion_order_does_not_matter(segments in prop::collection::vec(arb_segment(), 1..8)) {
            let forward: HeatCascade = segments.iter().copied().collect();
            let backward: HeatCascade = segments.iter().rev().copied().collect();
            prop_assert_eq!(forward, backward);
        }

        #[test]
        fn net_heat_flow_is_conserved(segments in prop::collection::vec(arb_segment(), 1..8)) {
            let cascade: HeatCascade = segments.iter().copied().collect();
            let expected = segments
                .iter()
                .fold(Power::ZERO, |total, segment| total + segment.heat_flow());
            prop_assert_eq!(cascade.net_heat_flow(), expected);
        }

        #[test]
        fn intervals_stay_ordered_and_canonical(segments in prop::collection::vec(arb_segment(), 1..8)) {
            let cascade: HeatCascade = segments.iter().copied().collect();

            for interval in cascade.intervals() {
                prop_assert!(!interval.is_neutral());
                prop_assert!(interval.supply_temperature() <= interval.target_temperature());
            }
            for pair in cascade.intervals().windows(2) {
                prop_assert!(pair[0].max_temperature() <= pair[1].min_temperature());
                prop_assert!(pair[0].link(&pair[1], None).is_err());
            }

            let curve = cascade.cumulative_heat_flow(Power::ZERO);
            prop_assert_eq!(curve.temperatures().len(), curve.heat_flows().len());
            if let Some(&last) = curve.heat_flows().last() {
                prop_assert_eq!(last, cascade.net_heat_flow());
            }
        }
    }
}
