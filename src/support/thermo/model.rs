//! Molar heat capacity models for solids.
//!
//! - [`MaierKelley`]: three-term empirical correlation from tabulated
//!   handbook coefficients.
//! - [`Nasa7`] and [`Shomate`]: polynomial segments of reference fits,
//!   assembled over validity ranges by [`PiecewiseFit`].
//! - [`ConstantCp`]: a temperature-independent segment.

pub mod maier_kelley;
pub mod piecewise;

mod constant;
mod nasa7;
mod shomate;

pub use constant::ConstantCp;
pub use maier_kelley::{CoefficientUnits, MaierKelley};
pub use nasa7::Nasa7;
pub use piecewise::{PiecewiseFit, Segment};
pub use shomate::Shomate;
