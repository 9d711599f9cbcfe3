use uom::si::{f64::ThermodynamicTemperature, thermodynamic_temperature::kelvin};

/// Ascending absolute temperatures, in kelvin, shared by every evaluator in
/// one comparison.
///
/// A grid always holds at least two points and is never mutated once built.
#[derive(Debug, Clone, PartialEq)]
pub struct TemperatureGrid {
    kelvin: Vec<f64>,
}

impl TemperatureGrid {
    /// Builds `count` linearly spaced points from `min` to `max`, both included.
    ///
    /// Callers guarantee `min < max` and `count >= 2`.
    pub(super) fn linspace(min: f64, max: f64, count: usize) -> Self {
        let last = count - 1;
        #[allow(clippy::cast_precision_loss)]
        let step = (max - min) / last as f64;

        #[allow(clippy::cast_precision_loss)]
        let values = (0..count)
            .map(|i| if i == last { max } else { min + step * i as f64 })
            .collect();

        Self { kelvin: values }
    }

    /// Returns the grid values in kelvin.
    #[must_use]
    pub fn kelvin(&self) -> &[f64] {
        &self.kelvin
    }

    /// Iterates over the grid as typed temperatures.
    pub fn temperatures(&self) -> impl Iterator<Item = ThermodynamicTemperature> + '_ {
        self.kelvin
            .iter()
            .map(|&t| ThermodynamicTemperature::new::<kelvin>(t))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.kelvin.len()
    }

    /// Always `false`; present for API symmetry with `len`.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.kelvin.is_empty()
    }

    /// Lowest temperature, in kelvin.
    #[must_use]
    pub fn first(&self) -> f64 {
        self.kelvin[0]
    }

    /// Highest temperature, in kelvin.
    #[must_use]
    pub fn last(&self) -> f64 {
        self.kelvin[self.kelvin.len() - 1]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn endpoints_are_exact() {
        let grid = TemperatureGrid::linspace(300.0, 1500.0, 200);

        assert_eq!(grid.len(), 200);
        assert_eq!(grid.first(), 300.0);
        assert_eq!(grid.last(), 1500.0);
    }

    #[test]
    fn spacing_is_uniform() {
        let grid = TemperatureGrid::linspace(100.0, 1000.0, 10);

        for pair in grid.kelvin().windows(2) {
            assert_relative_eq!(pair[1] - pair[0], 100.0, max_relative = 1e-12);
        }
    }

    #[test]
    fn two_points_are_the_bounds() {
        let grid = TemperatureGrid::linspace(273.15, 373.15, 2);
        assert_eq!(grid.kelvin(), &[273.15, 373.15]);
    }

    #[test]
    fn typed_temperatures_match_kelvin_values() {
        let grid = TemperatureGrid::linspace(200.0, 400.0, 3);
        let typed: Vec<f64> = grid.temperatures().map(|t| t.get::<kelvin>()).collect();

        assert_eq!(typed, vec![200.0, 300.0, 400.0]);
    }
}
