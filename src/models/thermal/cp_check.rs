//! Heat capacity correlation check for a single solid species.
//!
//! This module provides a [`twine_core::Model`] that evaluates a Maier–Kelley
//! correlation and a species' reference fit on the same temperature grid.
//! The computational core is in the internal `core` module.
//!
//! # Example
//!
//! ```
//! use twine_core::Model;
//! use twine_solids::{
//!     models::thermal::cp_check::{ComparisonConfig, CpCheck},
//!     support::{
//!         sampling::TemperatureRanges,
//!         thermo::{SolidSpecies, model::{ConstantCp, PiecewiseFit}},
//!     },
//! };
//! use uom::si::{
//!     f64::{MolarHeatCapacity, MolarMass},
//!     molar_heat_capacity::joule_per_kelvin_mole,
//!     molar_mass::gram_per_mole,
//! };
//!
//! let fit = PiecewiseFit::new(
//!     TemperatureRanges::from_legacy(&[300.0, 1500.0, 200.0]).unwrap(),
//!     vec![ConstantCp::new(MolarHeatCapacity::new::<joule_per_kelvin_mole>(380.0))],
//! )
//! .unwrap();
//! let species = SolidSpecies::new("mullite", MolarMass::new::<gram_per_mole>(221.0), fit).unwrap();
//!
//! let check = CpCheck::new(&species, ComparisonConfig::default());
//! let comparison = check.call(&vec![84.22, 20.0e-3, -25.0e5]).unwrap();
//!
//! assert_eq!(comparison.grid.len(), 200);
//! assert_eq!(comparison.correlation.len(), 200);
//! assert_eq!(comparison.reference.len(), 200);
//! ```

mod core;

pub use self::core::{CompareError, Comparison, ComparisonConfig, SpecificHeatSeries, compare};

use twine_core::Model;

use crate::support::thermo::capability::ThermoSpecies;

/// Model adapter comparing raw correlation coefficients against one species.
///
/// The model input is the raw coefficient vector `[a0, a1, a2]` in the units
/// named by [`ComparisonConfig::coefficient_units`].
#[derive(Debug, Clone)]
pub struct CpCheck<'a, S> {
    species: &'a S,
    config: ComparisonConfig,
}

impl<'a, S: ThermoSpecies> CpCheck<'a, S> {
    #[must_use]
    pub fn new(species: &'a S, config: ComparisonConfig) -> Self {
        Self { species, config }
    }

    #[must_use]
    pub fn species(&self) -> &S {
        self.species
    }

    #[must_use]
    pub fn config(&self) -> &ComparisonConfig {
        &self.config
    }
}

impl<S: ThermoSpecies> Model for CpCheck<'_, S> {
    type Input = Vec<f64>;
    type Output = Comparison;
    type Error = CompareError;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        compare(self.species, input, &self.config)
    }
}
