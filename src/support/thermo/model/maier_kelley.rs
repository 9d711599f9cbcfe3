//! Maier–Kelley heat capacity correlation.
//!
//! `MaierKelley` implements the classic three-term empirical fit for the molar
//! heat capacity of crystalline solids:
//!
//! ```text
//! cp(T) = a0 + a1·T + a2·T⁻²
//! ```
//!
//! # Assumptions
//!
//! - `T` is an absolute temperature and strictly positive
//! - No range validation beyond positivity: extrapolating outside the
//!   temperature range a correlation was fitted over is the caller's concern
//!
//! # Units
//!
//! The free functions [`evaluate`] and [`evaluate_all`] are unit-agnostic and
//! return `(a0 + a1·T + a2·T⁻²) / M` in whatever system the caller's
//! coefficients and molar mass share. For example, coefficients scaled by
//! `4184` (cal → J, times 1000 g/kg) with `M` in g/mol yield J/(kg·K).
//!
//! The typed API ([`MaierKelley::molar_cp`], [`MaierKelley::specific_cp`])
//! stores coefficients in J/(mol·K), J/(mol·K²) and J·K/mol. Use
//! [`MaierKelley::from_units`] to convert handbook values given in calories.
//!
//! # Example
//!
//! ```
//! use twine_solids::support::thermo::model::maier_kelley::evaluate;
//!
//! let cp = evaluate(600.0, 221.0, &[4184.0 * 84.22, 4184.0 * 0.02, 4184.0 * -2.5e6]).unwrap();
//! assert!((cp - 1690.176).abs() < 1e-2);
//! ```

use uom::si::{
    f64::{MolarHeatCapacity, MolarMass, SpecificHeatCapacity, ThermodynamicTemperature},
    molar_heat_capacity::{calorie_per_kelvin_mole, joule_per_kelvin_mole},
    thermodynamic_temperature::kelvin,
};

use crate::support::{
    constraint::{Constraint, StrictlyPositive},
    thermo::{PropertyError, capability::HasMolarCp},
};

/// Number of terms in the truncated correlation.
pub const COEFFICIENT_COUNT: usize = 3;

/// Evaluates `(a0 + a1·T + a2·T⁻²) / M` at a single temperature.
///
/// # Errors
///
/// Returns [`PropertyError::InvalidArgument`] if `coefficients` does not hold
/// exactly three values or `molar_mass` is not strictly positive, and
/// [`PropertyError::OutOfDomain`] if `t` is not strictly positive.
pub fn evaluate(t: f64, molar_mass: f64, coefficients: &[f64]) -> Result<f64, PropertyError> {
    let correlation = MaierKelley::try_from(coefficients)?;
    let molar_mass = checked_molar_mass(molar_mass)?;

    Ok(correlation.evaluate(t)? / molar_mass)
}

/// Evaluates [`evaluate`] elementwise over `temperatures`.
///
/// The result has the same length and order as `temperatures`. Evaluation
/// stops at the first invalid temperature and no partial result is returned.
///
/// # Errors
///
/// Returns the same errors as [`evaluate`].
pub fn evaluate_all(
    temperatures: &[f64],
    molar_mass: f64,
    coefficients: &[f64],
) -> Result<Vec<f64>, PropertyError> {
    let correlation = MaierKelley::try_from(coefficients)?;
    let molar_mass = checked_molar_mass(molar_mass)?;

    temperatures
        .iter()
        .map(|&t| Ok(correlation.evaluate(t)? / molar_mass))
        .collect()
}

fn checked_molar_mass(molar_mass: f64) -> Result<f64, PropertyError> {
    StrictlyPositive::check(&molar_mass).map_err(|error| PropertyError::InvalidArgument {
        context: format!("molar mass {molar_mass}: {error}"),
    })?;
    Ok(molar_mass)
}

/// Unit system of raw handbook coefficients.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CoefficientUnits {
    /// Thermochemical calories: cal/(mol·K), cal/(mol·K²), cal·K/mol.
    #[default]
    CaloriePerMoleKelvin,

    /// Joules: J/(mol·K), J/(mol·K²), J·K/mol.
    JoulePerMoleKelvin,
}

impl CoefficientUnits {
    /// Multiplier converting coefficients in these units to joule-based units.
    #[must_use]
    pub fn joule_factor(self) -> f64 {
        match self {
            Self::CaloriePerMoleKelvin => {
                MolarHeatCapacity::new::<calorie_per_kelvin_mole>(1.0)
                    .get::<joule_per_kelvin_mole>()
            }
            Self::JoulePerMoleKelvin => 1.0,
        }
    }
}

/// Three-term Maier–Kelley correlation `a0 + a1·T + a2·T⁻²`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MaierKelley {
    pub a0: f64,
    pub a1: f64,
    pub a2: f64,
}

impl MaierKelley {
    #[must_use]
    pub fn new(a0: f64, a1: f64, a2: f64) -> Self {
        Self { a0, a1, a2 }
    }

    /// Builds a correlation from a tabulated handbook row.
    ///
    /// Handbook tables often list further columns (formation enthalpy,
    /// standard entropy) after the three heat capacity terms; only the first
    /// three values are kept.
    ///
    /// # Errors
    ///
    /// Returns [`PropertyError::InvalidArgument`] if `row` holds fewer than
    /// three values.
    pub fn from_tabulated(row: &[f64]) -> Result<Self, PropertyError> {
        match row {
            [a0, a1, a2, ..] => Ok(Self::new(*a0, *a1, *a2)),
            _ => Err(wrong_count(row.len())),
        }
    }

    /// Builds a correlation from three raw coefficients in `units`,
    /// converting them to joule-based units.
    ///
    /// # Errors
    ///
    /// Returns [`PropertyError::InvalidArgument`] unless exactly three
    /// coefficients are given.
    pub fn from_units(coefficients: &[f64], units: CoefficientUnits) -> Result<Self, PropertyError> {
        Ok(Self::try_from(coefficients)?.scaled(units.joule_factor()))
    }

    /// Returns the correlation with every coefficient multiplied by `factor`.
    #[must_use]
    pub fn scaled(self, factor: f64) -> Self {
        Self::new(self.a0 * factor, self.a1 * factor, self.a2 * factor)
    }

    #[must_use]
    pub fn coefficients(&self) -> [f64; COEFFICIENT_COUNT] {
        [self.a0, self.a1, self.a2]
    }

    /// Evaluates `a0 + a1·T + a2·T⁻²` in the coefficients' own units.
    ///
    /// # Errors
    ///
    /// Returns [`PropertyError::OutOfDomain`] if `t` is zero, negative or NaN.
    pub fn evaluate(&self, t: f64) -> Result<f64, PropertyError> {
        StrictlyPositive::check(&t).map_err(|error| PropertyError::OutOfDomain {
            context: format!("temperature {t} K: {error}"),
        })?;

        Ok(self.a0 + self.a1 * t + self.a2 * t.powi(-2))
    }

    /// Returns the mass-specific heat capacity `cp(T) / M`.
    ///
    /// # Errors
    ///
    /// Returns [`PropertyError::InvalidArgument`] for a non-positive molar
    /// mass and [`PropertyError::OutOfDomain`] for a non-positive temperature.
    pub fn specific_cp(
        &self,
        temperature: ThermodynamicTemperature,
        molar_mass: MolarMass,
    ) -> Result<SpecificHeatCapacity, PropertyError> {
        StrictlyPositive::check(&molar_mass).map_err(|error| PropertyError::InvalidArgument {
            context: format!("molar mass {molar_mass:?}: {error}"),
        })?;

        let cp: SpecificHeatCapacity = self.molar_cp(temperature)? / molar_mass;
        Ok(cp)
    }
}

impl TryFrom<&[f64]> for MaierKelley {
    type Error = PropertyError;

    fn try_from(coefficients: &[f64]) -> Result<Self, Self::Error> {
        match coefficients {
            [a0, a1, a2] => Ok(Self::new(*a0, *a1, *a2)),
            _ => Err(wrong_count(coefficients.len())),
        }
    }
}

impl From<[f64; COEFFICIENT_COUNT]> for MaierKelley {
    fn from([a0, a1, a2]: [f64; COEFFICIENT_COUNT]) -> Self {
        Self::new(a0, a1, a2)
    }
}

impl HasMolarCp for MaierKelley {
    /// Interprets the coefficients in joule-based units.
    fn molar_cp(
        &self,
        temperature: ThermodynamicTemperature,
    ) -> Result<MolarHeatCapacity, PropertyError> {
        let cp = self.evaluate(temperature.get::<kelvin>())?;
        Ok(MolarHeatCapacity::new::<joule_per_kelvin_mole>(cp))
    }
}

fn wrong_count(count: usize) -> PropertyError {
    PropertyError::InvalidArgument {
        context: format!("expected {COEFFICIENT_COUNT} correlation coefficients, got {count}"),
    }
}
