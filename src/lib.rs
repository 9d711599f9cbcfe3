//! # Twine Solids
//!
//! Heat capacity models for solid species (minerals, refractories, oxides)
//! and tools for checking empirical correlations against reference
//! thermodynamic fits, built for [Twine](https://github.com/isentropic-dev/twine).
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
//! [`support`] once it is useful across models.

pub mod models;
pub mod support;
