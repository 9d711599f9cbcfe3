use uom::si::f64::{MolarHeatCapacity, ThermodynamicTemperature};

use crate::support::thermo::PropertyError;

/// Capability for evaluating a molar heat capacity at a temperature.
///
/// Implemented by empirical correlations and reference fits alike.
pub trait HasMolarCp {
    /// Returns the molar heat capacity at constant pressure at `temperature`.
    ///
    /// # Errors
    ///
    /// Returns [`PropertyError`] if `cp` cannot be evaluated at `temperature`.
    fn molar_cp(
        &self,
        temperature: ThermodynamicTemperature,
    ) -> Result<MolarHeatCapacity, PropertyError>;
}
