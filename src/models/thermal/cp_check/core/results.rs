use tracing::trace;
use uom::si::{f64::SpecificHeatCapacity, specific_heat_capacity::joule_per_kilogram_kelvin};

use crate::support::{
    plot::{Overlay, SeriesLengthMismatch, SeriesSink},
    sampling::TemperatureGrid,
};

use super::ComparisonConfig;

/// Mass-specific heat capacities in J/(kg·K), one per grid point.
#[derive(Debug, Clone, PartialEq)]
pub struct SpecificHeatSeries {
    values: Vec<f64>,
}

impl SpecificHeatSeries {
    pub(super) fn new(values: Vec<f64>) -> Self {
        Self { values }
    }

    /// Returns the raw values in J/(kg·K).
    #[must_use]
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Returns the value at `index` as a typed quantity.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<SpecificHeatCapacity> {
        self.values
            .get(index)
            .map(|&cp| SpecificHeatCapacity::new::<joule_per_kilogram_kelvin>(cp))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Result of one comparison: a grid and two series positional with it.
///
/// The series are never merged; they are compared by the caller, either
/// numerically or by rendering them on a shared axis.
#[derive(Debug, Clone, PartialEq)]
pub struct Comparison {
    pub grid: TemperatureGrid,
    pub correlation: SpecificHeatSeries,
    pub reference: SpecificHeatSeries,
}

impl Comparison {
    /// Largest `|correlation − reference| / |reference|` over the grid.
    ///
    /// Points where both series are equal count as zero deviation, including
    /// where both are zero. A nonzero correlation against a zero reference
    /// gives infinity, and a NaN at any point makes the result NaN.
    #[must_use]
    pub fn max_relative_deviation(&self) -> f64 {
        self.correlation
            .values()
            .iter()
            .zip(self.reference.values())
            .map(|(c, r)| if c == r { 0.0 } else { ((c - r) / r).abs() })
            .fold(0.0, |worst, deviation| {
                if deviation.is_nan() || deviation > worst {
                    deviation
                } else {
                    worst
                }
            })
    }

    /// Draws the correlation series, then the reference series, onto `sink`.
    ///
    /// # Errors
    ///
    /// Returns the sink's error if either series cannot be drawn.
    pub fn render<K: SeriesSink>(
        &self,
        sink: &mut K,
        config: &ComparisonConfig,
    ) -> Result<(), K::Error> {
        let x = self.grid.kelvin();

        trace!(label = %config.correlation_label, points = x.len(), "rendering series");
        sink.render_series(x, self.correlation.values(), &config.correlation_label)?;

        trace!(label = %config.reference_label, points = x.len(), "rendering series");
        sink.render_series(x, self.reference.values(), &config.reference_label)
    }

    /// Renders into a fresh [`Overlay`] using the configured axis labels.
    ///
    /// # Errors
    ///
    /// Returns [`SeriesLengthMismatch`] if a series does not match the grid.
    pub fn overlay(&self, config: &ComparisonConfig) -> Result<Overlay, SeriesLengthMismatch> {
        let mut overlay = Overlay::new(config.axis_labels.clone());
        self.render(&mut overlay, config)?;
        Ok(overlay)
    }
}
