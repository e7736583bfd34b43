//! Incremental pinch analysis.
//!
//! Streams are shifted by their temperature difference contribution and
//! merged into heat cascades. The grand composite cascade yields the minimum
//! hot and cold utility and the pinch temperatures.

mod analyzer;
mod config;
mod error;
mod results;
mod targets;

pub use analyzer::PinchAnalyzer;
pub use config::PinchConfig;
pub use error::PinchError;
pub use results::PinchResults;
pub use targets::PinchTargets;
