//! Shomate equation segments, as tabulated by the NIST Chemistry WebBook.

use super::Segment;

/// One Shomate polynomial: `cp = A + B·t + C·t² + D·t³ + E/t²` with `t = T/1000`.
///
/// Coefficients are in J/(mol·K) for `cp`. Only `A` through `E` are needed
/// for heat capacity; the enthalpy and entropy constants (`F`, `G`, `H`) are
/// not carried.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Shomate {
    pub a: f64,
    pub b: f64,
    pub c: f64,
    pub d: f64,
    pub e: f64,
}

impl Shomate {
    #[must_use]
    pub fn new([a, b, c, d, e]: [f64; 5]) -> Self {
        Self { a, b, c, d, e }
    }
}

impl Segment for Shomate {
    fn molar_cp_at(&self, t: f64) -> f64 {
        let t = t / 1000.0;
        self.a + t * (self.b + t * (self.c + t * self.d)) + self.e / (t * t)
    }
}
