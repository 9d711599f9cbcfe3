use uom::si::f64::{MolarHeatCapacity, MolarMass, ThermodynamicTemperature};

use crate::support::{
    constraint::{Constrained, StrictlyPositive},
    sampling::TemperatureRanges,
    thermo::{
        PropertyError,
        capability::{HasMolarCp, ThermoSpecies},
        model::{ConstantCp, Nasa7, PiecewiseFit, Shomate},
    },
};

/// Reference heat capacity fit of one species.
#[derive(Debug, Clone, PartialEq)]
pub enum SpeciesThermo {
    Nasa7(PiecewiseFit<Nasa7>),
    Shomate(PiecewiseFit<Shomate>),
    Constant(PiecewiseFit<ConstantCp>),
}

impl SpeciesThermo {
    /// Validity ranges of the fit.
    #[must_use]
    pub fn ranges(&self) -> &TemperatureRanges {
        match self {
            Self::Nasa7(fit) => fit.ranges(),
            Self::Shomate(fit) => fit.ranges(),
            Self::Constant(fit) => fit.ranges(),
        }
    }
}

impl HasMolarCp for SpeciesThermo {
    fn molar_cp(
        &self,
        temperature: ThermodynamicTemperature,
    ) -> Result<MolarHeatCapacity, PropertyError> {
        match self {
            Self::Nasa7(fit) => fit.molar_cp(temperature),
            Self::Shomate(fit) => fit.molar_cp(temperature),
            Self::Constant(fit) => fit.molar_cp(temperature),
        }
    }
}

impl From<PiecewiseFit<Nasa7>> for SpeciesThermo {
    fn from(fit: PiecewiseFit<Nasa7>) -> Self {
        Self::Nasa7(fit)
    }
}

impl From<PiecewiseFit<Shomate>> for SpeciesThermo {
    fn from(fit: PiecewiseFit<Shomate>) -> Self {
        Self::Shomate(fit)
    }
}

impl From<PiecewiseFit<ConstantCp>> for SpeciesThermo {
    fn from(fit: PiecewiseFit<ConstantCp>) -> Self {
        Self::Constant(fit)
    }
}

/// A solid species with its molar mass and reference heat capacity fit.
///
/// # Example
///
/// ```
/// use twine_solids::support::{
///     sampling::TemperatureRanges,
///     thermo::{SolidSpecies, capability::ThermoSpecies, model::{PiecewiseFit, Shomate}},
/// };
/// use uom::si::{f64::MolarMass, molar_mass::gram_per_mole};
///
/// let ranges = TemperatureRanges::new(vec![298.0, 2327.0], 100).unwrap();
/// let fit = PiecewiseFit::new(
///     ranges,
///     vec![Shomate::new([102.4290, 38.74980, -15.91090, 2.628181, -3.007551])],
/// )
/// .unwrap();
///
/// let corundum =
///     SolidSpecies::new("corundum", MolarMass::new::<gram_per_mole>(101.96), fit).unwrap();
/// assert_eq!(corundum.temperature_ranges().sample_count(), 100);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct SolidSpecies {
    name: String,
    molar_mass: Constrained<MolarMass, StrictlyPositive>,
    thermo: SpeciesThermo,
}

impl SolidSpecies {
    /// Creates a species.
    ///
    /// # Errors
    ///
    /// Returns [`PropertyError::InvalidArgument`] if `molar_mass` is not
    /// strictly positive.
    pub fn new(
        name: impl Into<String>,
        molar_mass: MolarMass,
        thermo: impl Into<SpeciesThermo>,
    ) -> Result<Self, PropertyError> {
        let name = name.into();
        let molar_mass =
            StrictlyPositive::new(molar_mass).map_err(|error| PropertyError::InvalidArgument {
                context: format!("molar mass of {name}: {error}"),
            })?;

        Ok(Self {
            name,
            molar_mass,
            thermo: thermo.into(),
        })
    }

    #[must_use]
    pub fn thermo(&self) -> &SpeciesThermo {
        &self.thermo
    }
}

impl HasMolarCp for SolidSpecies {
    fn molar_cp(
        &self,
        temperature: ThermodynamicTemperature,
    ) -> Result<MolarHeatCapacity, PropertyError> {
        self.thermo.molar_cp(temperature)
    }
}

impl ThermoSpecies for SolidSpecies {
    fn name(&self) -> &str {
        &self.name
    }

    fn molar_mass(&self) -> MolarMass {
        *self.molar_mass.as_ref()
    }

    fn temperature_ranges(&self) -> &TemperatureRanges {
        self.thermo.ranges()
    }
}
