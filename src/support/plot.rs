//! Rendering seam for overlaying labelled `x`/`y` series on a shared axis.
//!
//! Drawing is left to a backend implementing [`SeriesSink`]. Axis styling is
//! an explicit [`AxisLabels`] value handed to the backend, not something
//! wrapped around a plotting call.
//!
//! [`Overlay`] is an in-memory sink that records what would be drawn, which
//! is enough for notebooks, reports and tests to inspect a comparison.

use thiserror::Error;

/// Axis titles for a figure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AxisLabels {
    pub x_label: String,
    pub y_label: String,
}

impl AxisLabels {
    #[must_use]
    pub fn new(x_label: impl Into<String>, y_label: impl Into<String>) -> Self {
        Self {
            x_label: x_label.into(),
            y_label: y_label.into(),
        }
    }
}

impl Default for AxisLabels {
    /// Temperature in kelvin against mass-specific heat capacity.
    fn default() -> Self {
        Self::new("Temperature [K]", "Specific heat [J/(kg K)]")
    }
}

/// A backend that draws labelled series onto one shared axis.
pub trait SeriesSink {
    type Error;

    /// Draws `y` against `x` and adds `label` to the legend.
    ///
    /// # Errors
    ///
    /// Returns `Self::Error` if the backend cannot draw the series.
    fn render_series(&mut self, x: &[f64], y: &[f64], label: &str) -> Result<(), Self::Error>;
}

/// Returned when `x` and `y` differ in length.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[error("series `x` has {x_len} points but `y` has {y_len}")]
pub struct SeriesLengthMismatch {
    pub x_len: usize,
    pub y_len: usize,
}

/// One recorded series.
#[derive(Debug, Clone, PartialEq)]
pub struct Series {
    pub label: String,
    pub x: Vec<f64>,
    pub y: Vec<f64>,
}

/// In-memory figure that records every rendered series, in order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Overlay {
    labels: AxisLabels,
    series: Vec<Series>,
}

impl Overlay {
    #[must_use]
    pub fn new(labels: AxisLabels) -> Self {
        Self {
            labels,
            series: Vec::new(),
        }
    }

    #[must_use]
    pub fn labels(&self) -> &AxisLabels {
        &self.labels
    }

    #[must_use]
    pub fn series(&self) -> &[Series] {
        &self.series
    }

    /// Legend entries, in the order the series were drawn.
    pub fn legend(&self) -> impl Iterator<Item = &str> {
        self.series.iter().map(|series| series.label.as_str())
    }
}

impl SeriesSink for Overlay {
    type Error = SeriesLengthMismatch;

    fn render_series(&mut self, x: &[f64], y: &[f64], label: &str) -> Result<(), Self::Error> {
        if x.len() != y.len() {
            return Err(SeriesLengthMismatch {
                x_len: x.len(),
                y_len: y.len(),
            });
        }

        self.series.push(Series {
            label: label.to_owned(),
            x: x.to_vec(),
            y: y.to_vec(),
        });
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn records_series_and_legend_in_order() -> Result<(), SeriesLengthMismatch> {
        let mut overlay = Overlay::new(AxisLabels::default());
        overlay.render_series(&[300.0, 600.0], &[800.0, 900.0], "Maier-Kelley")?;
        overlay.render_series(&[300.0, 600.0], &[810.0, 905.0], "Reference")?;

        assert_eq!(
            overlay.legend().collect::<Vec<_>>(),
            vec!["Maier-Kelley", "Reference"]
        );
        assert_eq!(overlay.series()[1].y, vec![810.0, 905.0]);
        assert_eq!(overlay.labels().x_label, "Temperature [K]");

        Ok(())
    }

    #[test]
    fn rejects_mismatched_lengths() {
        let mut overlay = Overlay::default();
        let result = overlay.render_series(&[1.0, 2.0, 3.0], &[1.0], "broken");

        assert_eq!(result, Err(SeriesLengthMismatch { x_len: 3, y_len: 1 }));
        assert!(overlay.series().is_empty());
    }

    #[test]
    fn custom_axis_labels() {
        let labels = AxisLabels::new("T [K]", "cp [J/(kg K)]");
        assert_eq!(Overlay::new(labels.clone()).labels(), &labels);
    }
}
