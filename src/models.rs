//! Public Twine models.
//!
//! Models are the primary public interface of this crate.
//!
//! # Model structure
//!
//! Each model lives in its own module and keeps its computation in an internal
//! `core` submodule. The [`twine_core::Model`] implementation is a thin adapter
//! that delegates to that core. Core types that are useful on their own, such
//! as [`thermal::pinch::PinchAnalyzer`], are re-exported by the model module.

pub mod thermal;
