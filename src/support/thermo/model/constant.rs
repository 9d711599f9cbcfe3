use uom::si::{f64::MolarHeatCapacity, molar_heat_capacity::joule_per_kelvin_mole};

use super::Segment;

/// A temperature-independent heat capacity segment.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConstantCp {
    cp: f64,
}

impl ConstantCp {
    #[must_use]
    pub fn new(cp: MolarHeatCapacity) -> Self {
        Self {
            cp: cp.get::<joule_per_kelvin_mole>(),
        }
    }
}

impl Segment for ConstantCp {
    fn molar_cp_at(&self, _t: f64) -> f64 {
        self.cp
    }
}
