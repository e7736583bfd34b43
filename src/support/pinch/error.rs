use thiserror::Error;
use uom::si::f64::{TemperatureInterval, ThermalConductance, ThermodynamicTemperature};

use super::HeatType;

/// Errors that can occur while building or shifting a [`Segment`].
///
/// [`Segment`]: super::Segment
#[derive(Debug, Clone, Copy, PartialEq, Error)]
#[non_exhaustive]
pub enum SegmentError {
    /// The supplied quantities do not describe a valid segment.
    #[error("invalid segment: {reason}")]
    InvalidSegment {
        /// Which requirement was violated.
        reason: &'static str,
    },

    /// A temperature shift was negative or not a number.
    #[error("invalid temperature shift: {shift:?}")]
    InvalidTemperatureShift {
        /// The rejected shift.
        shift: TemperatureInterval,
    },

    /// A segment with nonzero heat flow was shifted without any shift available.
    ///
    /// Neither the segment's own temperature shift nor a default was given.
    #[error("no temperature shift given")]
    MissingTemperatureShift,
}

/// Reasons why [`Segment::add`] or [`Segment::link`] cannot combine two segments.
///
/// [`HeatCascade`] treats these as "not applicable here" and never returns
/// them to its callers.
///
/// [`Segment::add`]: super::Segment::add
/// [`Segment::link`]: super::Segment::link
/// [`HeatCascade`]: super::HeatCascade
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum CombineError {
    /// One segment is sensible and the other latent.
    #[error("heat type mismatch: {left:?} != {right:?}")]
    TypeMismatch {
        /// Heat type of the receiving segment.
        left: HeatType,
        /// Heat type of the other segment.
        right: HeatType,
    },

    /// The segments do not cover the same temperature range.
    #[error("temperature range mismatch: [{left_min:?}, {left_max:?}] != [{right_min:?}, {right_max:?}]")]
    RangeMismatch {
        left_min: ThermodynamicTemperature,
        left_max: ThermodynamicTemperature,
        right_min: ThermodynamicTemperature,
        right_max: ThermodynamicTemperature,
    },

    /// The segments differ in heat capacity flow rate or do not touch.
    #[error("segments cannot be linked")]
    NotLinkable {
        /// Heat capacity flow rates of both segments, if sensible.
        capacity_rates: Option<(ThermalConductance, ThermalConductance)>,
    },
}

/// Errors that can occur while building a [`Stream`].
///
/// [`Stream`]: super::Stream
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum StreamError {
    /// A stream needs at least one segment.
    #[error("stream has no segments")]
    Empty,

    /// Adjacent segments leave a temperature gap.
    #[error(
        "temperature gap before segment {index}: previous target {previous_target:?}, supply {supply:?}"
    )]
    Discontinuity {
        /// Index of the segment whose supply temperature does not match.
        index: usize,
        /// Target temperature of the preceding segment.
        previous_target: ThermodynamicTemperature,
        /// Supply temperature of the segment at `index`.
        supply: ThermodynamicTemperature,
    },

    /// A segment could not be built.
    #[error("invalid stream segment")]
    Segment(#[from] SegmentError),
}
