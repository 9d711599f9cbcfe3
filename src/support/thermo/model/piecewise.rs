//! Reference fits defined piecewise over a species' validity ranges.
//!
//! Thermodynamic databases describe a species' heat capacity with one
//! polynomial per temperature interval. [`PiecewiseFit`] pairs the interval
//! breakpoints with one [`Segment`] per interval and selects the right one at
//! evaluation time.

use uom::si::{
    f64::{MolarHeatCapacity, ThermodynamicTemperature},
    molar_heat_capacity::joule_per_kelvin_mole,
    thermodynamic_temperature::kelvin,
};

use crate::support::{
    sampling::TemperatureRanges,
    thermo::{PropertyError, capability::HasMolarCp},
};

/// One polynomial of a piecewise fit.
pub trait Segment {
    /// Returns the molar heat capacity in J/(mol·K) at `t` kelvin.
    ///
    /// Called only with temperatures inside the segment's interval.
    fn molar_cp_at(&self, t: f64) -> f64;
}

/// A heat capacity fit with one segment per temperature interval.
#[derive(Debug, Clone, PartialEq)]
pub struct PiecewiseFit<S> {
    ranges: TemperatureRanges,
    segments: Vec<S>,
}

impl<S> PiecewiseFit<S> {
    /// Creates a fit from validity ranges and their segments, in order.
    ///
    /// # Errors
    ///
    /// Returns [`PropertyError::InvalidArgument`] unless there is exactly one
    /// segment per interval.
    pub fn new(ranges: TemperatureRanges, segments: Vec<S>) -> Result<Self, PropertyError> {
        if segments.len() != ranges.interval_count() {
            return Err(PropertyError::InvalidArgument {
                context: format!(
                    "{} intervals need as many segments, got {}",
                    ranges.interval_count(),
                    segments.len()
                ),
            });
        }

        Ok(Self { ranges, segments })
    }

    #[must_use]
    pub fn ranges(&self) -> &TemperatureRanges {
        &self.ranges
    }

    #[must_use]
    pub fn segments(&self) -> &[S] {
        &self.segments
    }
}

impl<S: Segment> HasMolarCp for PiecewiseFit<S> {
    /// Evaluates the segment whose interval contains `temperature`.
    ///
    /// Temperatures outside the outermost breakpoints are rejected rather
    /// than extrapolated.
    fn molar_cp(
        &self,
        temperature: ThermodynamicTemperature,
    ) -> Result<MolarHeatCapacity, PropertyError> {
        let t = temperature.get::<kelvin>();
        let Some(index) = self.ranges.interval_containing(t) else {
            return Err(PropertyError::OutOfDomain {
                context: format!(
                    "temperature {t} K outside fit range [{}, {}] K",
                    self.ranges.min(),
                    self.ranges.max()
                ),
            });
        };

        let cp = self.segments[index].molar_cp_at(t);
        Ok(MolarHeatCapacity::new::<joule_per_kelvin_mole>(cp))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::support::sampling::SampleError;

    /// Segment returning a fixed tag, to check segment selection.
    #[derive(Debug)]
    struct Marker(f64);

    impl Segment for Marker {
        fn molar_cp_at(&self, _t: f64) -> f64 {
            self.0
        }
    }

    fn three_interval_fit() -> PiecewiseFit<Marker> {
        let ranges = TemperatureRanges::new(vec![300.0, 600.0, 900.0, 1200.0], 10)
            .expect("breakpoints are increasing");
        PiecewiseFit::new(ranges, vec![Marker(0.0), Marker(1.0), Marker(2.0)])
            .expect("one segment per interval")
    }

    fn at(fit: &PiecewiseFit<Marker>, t: f64) -> Result<f64, PropertyError> {
        fit.molar_cp(ThermodynamicTemperature::new::<kelvin>(t))
            .map(|cp| cp.get::<joule_per_kelvin_mole>())
    }

    #[test]
    fn selects_segment_by_interval() -> Result<(), PropertyError> {
        let fit = three_interval_fit();

        assert_eq!(at(&fit, 300.0)?, 0.0);
        assert_eq!(at(&fit, 599.0)?, 0.0);
        assert_eq!(at(&fit, 600.0)?, 1.0);
        assert_eq!(at(&fit, 1000.0)?, 2.0);
        assert_eq!(at(&fit, 1200.0)?, 2.0);

        Ok(())
    }

    #[test]
    fn rejects_temperatures_outside_fit() {
        let fit = three_interval_fit();

        assert!(matches!(
            at(&fit, 250.0),
            Err(PropertyError::OutOfDomain { .. })
        ));
        assert!(matches!(
            at(&fit, 1200.5),
            Err(PropertyError::OutOfDomain { .. })
        ));
    }

    #[test]
    fn segment_count_must_match_intervals() -> Result<(), SampleError> {
        let ranges = TemperatureRanges::new(vec![300.0, 600.0, 900.0], 10)?;
        let result = PiecewiseFit::new(ranges, vec![Marker(0.0)]);

        assert!(matches!(result, Err(PropertyError::InvalidArgument { .. })));
        Ok(())
    }
}
