//! Temperature validity ranges and the grids sampled from them.
//!
//! A species' thermodynamic fit is valid over one or more contiguous
//! intervals delimited by strictly increasing breakpoints. [`TemperatureRanges`]
//! stores those breakpoints together with the number of points a comparison
//! should sample across the full span, and [`TemperatureRanges::grid`]
//! produces the evenly spaced [`TemperatureGrid`].
//!
//! ## Legacy layout
//!
//! Some materials databases store both pieces of information in a single
//! array, `[b0, b1, ..., bk, hint]`, where the trailing element is a sample
//! count rather than a temperature. [`TemperatureRanges::from_legacy`] and
//! [`sample`] decode that layout.
//!
//! ```
//! use twine_solids::support::sampling::sample;
//!
//! let grid = sample(&[100.0, 1000.0, 50.0]).unwrap();
//! assert_eq!(grid.len(), 50);
//! assert_eq!(grid.first(), 100.0);
//! assert_eq!(grid.last(), 1000.0);
//! ```

mod error;
mod grid;
mod ranges;

pub use error::SampleError;
pub use grid::TemperatureGrid;
pub use ranges::{MAX_SAMPLE_COUNT, TemperatureRanges};

/// Samples an evenly spaced grid from a legacy `[b0, ..., bk, hint]` array.
///
/// The grid spans the first to the last breakpoint, both inclusive, with
/// `round(hint)` points.
///
/// # Errors
///
/// Returns a [`SampleError`] if fewer than two breakpoints are present, the
/// breakpoints are not finite and strictly increasing, or the rounded hint is
/// less than two or above [`MAX_SAMPLE_COUNT`].
pub fn sample(temperature_ranges: &[f64]) -> Result<TemperatureGrid, SampleError> {
    TemperatureRanges::from_legacy(temperature_ranges).map(|ranges| ranges.grid())
}
