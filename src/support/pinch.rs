//! Heat cascade toolkit for pinch analysis.
//!
//! Pinch analysis finds the minimum external heating and cooling a process
//! needs once heat is recovered between its hot and cold streams. The
//! building blocks are:
//!
//! - **Segments**: [`Segment`] is a piece of a stream with constant behaviour,
//!   either [`SensibleSegment`] (constant capacity rate over a range) or
//!   [`LatentSegment`] (heat at a single temperature).
//! - **Streams**: [`Stream`] chains continuous segments.
//! - **Temperature shifts**: [`TemperatureShift`] is the temperature
//!   difference contribution applied before cascading.
//! - **Cascades**: [`HeatCascade`] merges segments into non-overlapping
//!   temperature intervals and yields a [`CompositeCurve`].
//!
//! Heat flows are signed: positive for heat released (hot), negative for heat
//! absorbed (cold). See [`Segment`] for details.
//!
//! Interval boundaries are compared exactly. Temperatures that are meant to
//! coincide must come from identical arithmetic.

mod cascade;
mod curve;
mod error;
mod segment;
mod stream;
mod temperature_shift;

#[cfg(test)]
pub(crate) mod test_support;

pub use cascade::HeatCascade;
pub use curve::CompositeCurve;
pub use error::{CombineError, SegmentError, StreamError};
pub use segment::{HeatType, LatentSegment, Segment, SensibleSegment};
pub use stream::Stream;
pub use temperature_shift::TemperatureShift;
