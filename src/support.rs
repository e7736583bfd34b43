//! Supporting utilities used by models.
//!
//! - [`pinch`]: Segments, streams and heat cascades for pinch analysis.
//! - [`units`]: Extensions to [`uom`].

pub mod pinch;
pub mod units;
