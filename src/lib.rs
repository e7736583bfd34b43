//! # Twine Pinch
//!
//! Pinch analysis models and heat cascade tools for
//! [Twine](https://github.com/isentropic-dev/twine).
//!
//! Pinch analysis determines how much heat a process can recover between its
//! hot and cold streams, how much external heating and cooling it still needs,
//! and at which temperatures heat recovery is constrained.
//!
//! ## Crate layout
//!
//! - [`models`]: Domain-specific [`twine_core::Model`] implementations.
//! - [`support`]: Supporting utilities used by models.
//!
//! ## Utility code lifecycle
//!
//! Modules in [`support`] are part of the public API because they're useful,
//! but their APIs are not stable. Breaking changes may occur as needed.
//!
//! Model-specific code starts in a model's internal `core` module and moves to
//! [`support`] once it is useful on its own. The heat cascade in
//! [`support::pinch`] is such a case: it is independent of any stream
//! classification or targeting logic.

pub mod models;
pub mod support;
