use uom::si::f64::MolarMass;

use crate::support::sampling::TemperatureRanges;

use super::HasMolarCp;

/// A single species as seen by a heat capacity comparison.
///
/// The molar `cp` from [`HasMolarCp`] is the reference value; dividing it by
/// [`molar_mass`](Self::molar_mass) gives the mass-specific heat capacity.
pub trait ThermoSpecies: HasMolarCp {
    /// Species name, as listed in its materials database.
    fn name(&self) -> &str;

    /// Molar mass, always strictly positive.
    fn molar_mass(&self) -> MolarMass;

    /// Validity ranges of the reference fit and the sampling density.
    fn temperature_ranges(&self) -> &TemperatureRanges;
}
