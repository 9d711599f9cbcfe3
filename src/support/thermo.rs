//! Heat capacity modeling for solid species.
//!
//! Two families of molar heat capacity evaluators live here:
//!
//! - empirical correlations tabulated in handbooks, such as
//!   [`MaierKelley`](model::MaierKelley), and
//! - reference fits from structured thermodynamic databases, piecewise over
//!   the species' validity ranges (see [`SpeciesThermo`]).
//!
//! Both implement [`HasMolarCp`](capability::HasMolarCp), so anything that
//! can report a molar `cp` can be compared against anything else.

mod error;
mod species;

pub mod capability;
pub mod database;
pub mod model;

pub use error::PropertyError;
pub use species::{SolidSpecies, SpeciesThermo};
