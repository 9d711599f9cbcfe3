//! NASA 7-coefficient polynomial segments.

use super::Segment;

/// Molar gas constant, J/(mol·K).
const MOLAR_GAS_CONSTANT: f64 = 8.314_462_618;

/// One NASA-7 polynomial: `cp/R = a0 + a1·T + a2·T² + a3·T³ + a4·T⁴`.
///
/// The remaining two coefficients (`a5`, `a6`) are the enthalpy and entropy
/// integration constants. They are stored so database rows round-trip
/// unchanged, but do not enter `cp`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Nasa7 {
    pub coefficients: [f64; 7],
}

impl Nasa7 {
    #[must_use]
    pub fn new(coefficients: [f64; 7]) -> Self {
        Self { coefficients }
    }
}

impl Segment for Nasa7 {
    fn molar_cp_at(&self, t: f64) -> f64 {
        let [a0, a1, a2, a3, a4, ..] = self.coefficients;
        MOLAR_GAS_CONSTANT * (a0 + t * (a1 + t * (a2 + t * (a3 + t * a4))))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn constant_term_scales_by_gas_constant() {
        let segment = Nasa7::new([3.5, 0.0, 0.0, 0.0, 0.0, -1000.0, 4.0]);
        assert_relative_eq!(segment.molar_cp_at(500.0), 3.5 * MOLAR_GAS_CONSTANT);
    }

    #[test]
    fn matches_expanded_polynomial() {
        let a = [2.1, 3.2e-3, -1.1e-6, 2.4e-10, -1.3e-14, -9.0e4, 10.0];
        let segment = Nasa7::new(a);

        for t in [300.0, 1000.0, 2500.0] {
            let expected = MOLAR_GAS_CONSTANT
                * (a[0] + a[1] * t + a[2] * t.powi(2) + a[3] * t.powi(3) + a[4] * t.powi(4));
            assert_relative_eq!(segment.molar_cp_at(t), expected, max_relative = 1e-12);
        }
    }
}
