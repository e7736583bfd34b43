use thiserror::Error;

use crate::support::pinch::SegmentError;

/// Errors that can occur while adding streams to a pinch analysis.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum PinchError {
    /// A segment could not be shifted.
    ///
    /// This happens when a non-neutral segment has no temperature shift of
    /// its own and no default is configured.
    #[error("segment could not be shifted")]
    Segment(#[from] SegmentError),
}
