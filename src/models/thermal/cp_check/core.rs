//! Sample, evaluate twice, compare.
//!
//! A comparison draws one temperature grid from the species' validity
//! ranges, evaluates the correlation and the reference fit independently on
//! that grid, and converts both to a mass basis with the species' molar mass.
//! Nothing is cached between calls.

mod config;
mod error;
mod results;

#[cfg(test)]
pub(super) mod test_support;

pub use config::ComparisonConfig;
pub use error::CompareError;
pub use results::{Comparison, SpecificHeatSeries};

use tracing::debug;
use uom::si::{f64::SpecificHeatCapacity, specific_heat_capacity::joule_per_kilogram_kelvin};

use crate::support::thermo::{PropertyError, capability::ThermoSpecies, model::MaierKelley};

/// Compares raw Maier–Kelley coefficients against a species' reference fit.
///
/// The coefficients are converted from [`ComparisonConfig::coefficient_units`]
/// to joule-based units before evaluation. Both returned series are in
/// J/(kg·K) and share the returned grid.
///
/// # Errors
///
/// - [`CompareError::Sample`] if the configured sample count is invalid.
/// - [`CompareError::Correlation`] if the coefficients are malformed or a
///   grid temperature is non-positive.
/// - [`CompareError::Reference`] if the reference fit cannot be evaluated
///   at a grid temperature.
pub fn compare<S: ThermoSpecies + ?Sized>(
    species: &S,
    coefficients: &[f64],
    config: &ComparisonConfig,
) -> Result<Comparison, CompareError> {
    let ranges = species.temperature_ranges();
    let grid = match config.sample_count {
        Some(count) => ranges.clone().with_sample_count(count)?.grid(),
        None => ranges.grid(),
    };

    let correlation = MaierKelley::from_units(coefficients, config.coefficient_units)
        .map_err(CompareError::Correlation)?;
    let molar_mass = species.molar_mass();

    debug!(
        species = species.name(),
        points = grid.len(),
        min_kelvin = grid.first(),
        max_kelvin = grid.last(),
        "comparing heat capacity correlation against reference"
    );

    let correlation_cp = grid
        .temperatures()
        .map(|t| {
            let cp = correlation.specific_cp(t, molar_mass)?;
            Ok(cp.get::<joule_per_kilogram_kelvin>())
        })
        .collect::<Result<Vec<_>, PropertyError>>()
        .map_err(CompareError::Correlation)?;

    let reference_cp = grid
        .temperatures()
        .map(|t| {
            let cp: SpecificHeatCapacity = species.molar_cp(t)? / molar_mass;
            Ok(cp.get::<joule_per_kilogram_kelvin>())
        })
        .collect::<Result<Vec<_>, PropertyError>>()
        .map_err(CompareError::Reference)?;

    let comparison = Comparison {
        grid,
        correlation: SpecificHeatSeries::new(correlation_cp),
        reference: SpecificHeatSeries::new(reference_cp),
    };

    debug!(
        species = species.name(),
        max_relative_deviation = comparison.max_relative_deviation(),
        "comparison complete"
    );

    Ok(comparison)
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    use crate::support::{
        sampling::{SampleError, TemperatureRanges},
        thermo::model::{CoefficientUnits, maier_kelley},
    };

    use super::test_support::{MockSpecies, RAW_MULLITE};

    #[test]
    fn mullite_end_to_end() -> Result<(), CompareError> {
        let species = MockSpecies::mullite();
        let comparison = compare(&species, &RAW_MULLITE, &ComparisonConfig::default())?;

        let grid = &comparison.grid;
        assert_eq!(grid.len(), 200);
        assert_eq!(grid.first(), 300.0);
        assert_eq!(grid.last(), 1500.0);
        assert!(grid.kelvin().windows(2).all(|pair| pair[0] < pair[1]));

        let in_joules = RAW_MULLITE.map(|a| 4184.0 * a);
        for (t, cp) in grid.kelvin().iter().zip(comparison.correlation.values()) {
            let expected = maier_kelley::evaluate(*t, 221.0, &in_joules)
                .expect("grid temperatures are positive");
            assert_relative_eq!(*cp, expected, max_relative = 1e-9);
        }

        for cp in comparison.reference.values() {
            assert_relative_eq!(*cp, MockSpecies::MULLITE_CP / 0.221, max_relative = 1e-9);
        }

        Ok(())
    }

    #[test]
    fn series_are_positional_with_grid() -> Result<(), CompareError> {
        let species = MockSpecies::mullite();
        let comparison = compare(&species, &RAW_MULLITE, &ComparisonConfig::default())?;

        assert_eq!(comparison.correlation.len(), comparison.grid.len());
        assert_eq!(comparison.reference.len(), comparison.grid.len());
        Ok(())
    }

    #[test]
    fn repeated_calls_are_bit_identical() -> Result<(), CompareError> {
        let species = MockSpecies::mullite();
        let config = ComparisonConfig::default();

        let first = compare(&species, &RAW_MULLITE, &config)?;
        let second = compare(&species, &RAW_MULLITE, &config)?;

        assert_eq!(first, second);
        Ok(())
    }

    #[test]
    fn joule_coefficients_skip_conversion() -> Result<(), CompareError> {
        let species = MockSpecies::mullite();
        let in_joules = RAW_MULLITE.map(|a| 4.184 * a);
        let config = ComparisonConfig {
            coefficient_units: CoefficientUnits::JoulePerMoleKelvin,
            ..ComparisonConfig::default()
        };

        let converted = compare(&species, &RAW_MULLITE, &ComparisonConfig::default())?;
        let native = compare(&species, &in_joules, &config)?;

        for (a, b) in converted
            .correlation
            .values()
            .iter()
            .zip(native.correlation.values())
        {
            assert_relative_eq!(*a, *b, max_relative = 1e-12);
        }
        Ok(())
    }

    #[test]
    fn sample_count_override() -> Result<(), CompareError> {
        let species = MockSpecies::mullite();
        let config = ComparisonConfig {
            sample_count: Some(13),
            ..ComparisonConfig::default()
        };

        let comparison = compare(&species, &RAW_MULLITE, &config)?;
        assert_eq!(comparison.grid.len(), 13);
        assert_eq!(comparison.grid.last(), 1500.0);
        Ok(())
    }

    #[test]
    fn invalid_sample_count_is_a_sample_error() {
        let species = MockSpecies::mullite();
        let config = ComparisonConfig {
            sample_count: Some(1),
            ..ComparisonConfig::default()
        };

        assert_eq!(
            compare(&species, &RAW_MULLITE, &config),
            Err(CompareError::Sample(SampleError::SampleCount { count: 1 }))
        );
    }

    #[test]
    fn malformed_coefficients_are_a_correlation_error() {
        let species = MockSpecies::mullite();

        assert!(matches!(
            compare(&species, &[84.22, 20.0e-3], &ComparisonConfig::default()),
            Err(CompareError::Correlation(PropertyError::InvalidArgument { .. }))
        ));
    }

    #[test]
    fn non_positive_grid_temperature_is_a_correlation_error() {
        let ranges = TemperatureRanges::new(vec![-100.0, 500.0], 10).expect("valid ranges");
        let species = MockSpecies::new("odd", 100.0, 30.0, ranges);

        assert!(matches!(
            compare(&species, &RAW_MULLITE, &ComparisonConfig::default()),
            Err(CompareError::Correlation(PropertyError::OutOfDomain { .. }))
        ));
    }

    #[test]
    fn reference_failure_is_isolated_to_its_species() {
        let failing = MockSpecies::mullite().failing_above(1000.0);
        let healthy = MockSpecies::mullite();
        let config = ComparisonConfig::default();

        assert!(matches!(
            compare(&failing, &RAW_MULLITE, &config),
            Err(CompareError::Reference(PropertyError::OutOfDomain { .. }))
        ));
        assert!(compare(&healthy, &RAW_MULLITE, &config).is_ok());
    }
}
