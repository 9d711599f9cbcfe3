use crate::support::{plot::AxisLabels, thermo::model::CoefficientUnits};

/// Configuration for one heat capacity comparison.
#[derive(Debug, Clone, PartialEq)]
pub struct ComparisonConfig {
    /// Units of the raw correlation coefficients.
    pub coefficient_units: CoefficientUnits,

    /// Overrides the species' own sample count when set.
    pub sample_count: Option<usize>,

    /// Axis titles used when rendering.
    pub axis_labels: AxisLabels,

    /// Legend entry for the correlation series.
    pub correlation_label: String,

    /// Legend entry for the reference series.
    pub reference_label: String,
}

impl Default for ComparisonConfig {
    fn default() -> Self {
        Self {
            coefficient_units: CoefficientUnits::CaloriePerMoleKelvin,
            sample_count: None,
            axis_labels: AxisLabels::default(),
            correlation_label: "Maier-Kelley".to_owned(),
            reference_label: "Reference fit".to_owned(),
        }
    }
}
