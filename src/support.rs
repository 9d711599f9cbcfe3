//! Supporting utilities used by models.
//!
//! - [`constraint`]: Numeric invariants checked at construction time.
//! - [`thermo`]: Solid-species data, heat capacity fits and correlations.
//! - [`sampling`]: Temperature ranges and evenly spaced sampling grids.
//! - [`plot`]: Rendering seam for overlaying labelled series.

pub mod constraint;
pub mod plot;
pub mod sampling;
pub mod thermo;
