use uom::si::{
    f64::{MolarHeatCapacity, MolarMass, ThermodynamicTemperature},
    molar_heat_capacity::joule_per_kelvin_mole,
    molar_mass::gram_per_mole,
    thermodynamic_temperature::kelvin,
};

use crate::support::{
    sampling::TemperatureRanges,
    thermo::{
        PropertyError,
        capability::{HasMolarCp, ThermoSpecies},
    },
};

/// Mullite coefficients in cal/(mol·K), cal/(mol·K²) and cal·K/mol.
pub(crate) const RAW_MULLITE: [f64; 3] = [84.22, 20.0e-3, -25.0e5];

/// Species with a constant reference `cp` that can be made to fail.
#[derive(Debug, Clone)]
pub(crate) struct MockSpecies {
    name: String,
    molar_mass: MolarMass,
    cp: MolarHeatCapacity,
    ranges: TemperatureRanges,
    fail_above: Option<f64>,
}

impl MockSpecies {
    /// Reference molar `cp` of the mullite mock, J/(mol·K).
    pub(crate) const MULLITE_CP: f64 = 380.0;

    pub(crate) fn new(name: &str, molar_mass: f64, cp: f64, ranges: TemperatureRanges) -> Self {
        Self {
            name: name.to_owned(),
            molar_mass: MolarMass::new::<gram_per_mole>(molar_mass),
            cp: MolarHeatCapacity::new::<joule_per_kelvin_mole>(cp),
            ranges,
            fail_above: None,
        }
    }

    /// 221 g/mol, 300–1500 K, 200 samples.
    pub(crate) fn mullite() -> Self {
        let ranges = TemperatureRanges::from_legacy(&[300.0, 1500.0, 200.0])
            .expect("legacy ranges are valid");
        Self::new("mullite", 221.0, Self::MULLITE_CP, ranges)
    }

    pub(crate) fn failing_above(self, limit: f64) -> Self {
        Self {
            fail_above: Some(limit),
            ..self
        }
    }
}

impl HasMolarCp for MockSpecies {
    fn molar_cp(
        &self,
        temperature: ThermodynamicTemperature,
    ) -> Result<MolarHeatCapacity, PropertyError> {
        let t = temperature.get::<kelvin>();
        match self.fail_above {
            Some(limit) if t > limit => Err(PropertyError::OutOfDomain {
                context: format!("mock reference undefined above {limit} K, got {t} K"),
            }),
            _ => Ok(self.cp),
        }
    }
}

impl ThermoSpecies for MockSpecies {
    fn name(&self) -> &str {
        &self.name
    }

    fn molar_mass(&self) -> MolarMass {
        self.molar_mass
    }

    fn temperature_ranges(&self) -> &TemperatureRanges {
        &self.ranges
    }
}
