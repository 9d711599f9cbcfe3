use super::{SampleError, TemperatureGrid};

/// Largest sample count a grid may be built with.
pub const MAX_SAMPLE_COUNT: usize = 1_000_000;

/// Piecewise validity intervals of a thermodynamic fit plus the number of
/// points to sample across them.
///
/// Breakpoints are in kelvin, finite and strictly increasing, with at least a
/// lower and an upper bound. The sample count is at least two and at most
/// [`MAX_SAMPLE_COUNT`].
#[derive(Debug, Clone, PartialEq)]
pub struct TemperatureRanges {
    breakpoints: Vec<f64>,
    sample_count: usize,
}

impl TemperatureRanges {
    /// Creates validated ranges from explicit breakpoints and a sample count.
    ///
    /// # Errors
    ///
    /// Returns a [`SampleError`] if the breakpoints are too few, not finite,
    /// or not strictly increasing, or if `sample_count` is below 2 or above
    /// [`MAX_SAMPLE_COUNT`].
    pub fn new(breakpoints: Vec<f64>, sample_count: usize) -> Result<Self, SampleError> {
        if breakpoints.len() < 2 {
            return Err(SampleError::TooFewBreakpoints {
                count: breakpoints.len(),
            });
        }

        if let Some((index, &value)) = breakpoints
            .iter()
            .enumerate()
            .find(|(_, value)| !value.is_finite())
        {
            return Err(SampleError::NonFinite { index, value });
        }

        let min = breakpoints[0];
        let max = breakpoints[breakpoints.len() - 1];
        if max <= min {
            return Err(SampleError::EmptySpan { min, max });
        }

        if let Some(index) = (1..breakpoints.len()).find(|&i| breakpoints[i] <= breakpoints[i - 1])
        {
            return Err(SampleError::NotIncreasing {
                index,
                value: breakpoints[index],
            });
        }

        if sample_count < 2 {
            return Err(SampleError::SampleCount {
                count: sample_count,
            });
        }

        if sample_count > MAX_SAMPLE_COUNT {
            return Err(SampleError::TooManySamples {
                count: sample_count,
                max: MAX_SAMPLE_COUNT,
            });
        }

        Ok(Self {
            breakpoints,
            sample_count,
        })
    }

    /// Decodes the legacy `[b0, ..., bk, hint]` layout.
    ///
    /// The trailing element is read as a sample count and rounded to the
    /// nearest integer. Every other element is a breakpoint.
    ///
    /// # Errors
    ///
    /// Returns a [`SampleError`] under the same conditions as [`Self::new`],
    /// or if the hint is not finite.
    pub fn from_legacy(values: &[f64]) -> Result<Self, SampleError> {
        let Some((&hint, breakpoints)) = values.split_last() else {
            return Err(SampleError::TooFewBreakpoints { count: 0 });
        };

        if !hint.is_finite() {
            return Err(SampleError::InvalidHint { hint });
        }

        // Out-of-range hints saturate to 0 or `usize::MAX`; `new` rejects both.
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let sample_count = hint.round().max(0.0) as usize;

        Self::new(breakpoints.to_vec(), sample_count)
    }

    /// Returns a copy with a different sample count.
    ///
    /// # Errors
    ///
    /// Returns [`SampleError::SampleCount`] if `sample_count < 2`, or
    /// [`SampleError::TooManySamples`] above [`MAX_SAMPLE_COUNT`].
    pub fn with_sample_count(self, sample_count: usize) -> Result<Self, SampleError> {
        Self::new(self.breakpoints, sample_count)
    }

    #[must_use]
    pub fn breakpoints(&self) -> &[f64] {
        &self.breakpoints
    }

    #[must_use]
    pub fn sample_count(&self) -> usize {
        self.sample_count
    }

    /// Lower bound of the full validity span, in kelvin.
    #[must_use]
    pub fn min(&self) -> f64 {
        self.breakpoints[0]
    }

    /// Upper bound of the full validity span, in kelvin.
    #[must_use]
    pub fn max(&self) -> f64 {
        self.breakpoints[self.breakpoints.len() - 1]
    }

    /// Number of contiguous intervals between breakpoints.
    #[must_use]
    pub fn interval_count(&self) -> usize {
        self.breakpoints.len() - 1
    }

    /// Returns the index of the interval containing `t`, in kelvin.
    ///
    /// Interior breakpoints belong to the interval above them, and the upper
    /// bound belongs to the last interval. Returns `None` outside the span.
    #[must_use]
    pub fn interval_containing(&self, t: f64) -> Option<usize> {
        if !(self.min()..=self.max()).contains(&t) {
            return None;
        }

        let above = self.breakpoints[1..].partition_point(|&b| b <= t);
        Some(above.min(self.interval_count() - 1))
    }

    /// Samples `sample_count` evenly spaced points from `min` to `max`.
    #[must_use]
    pub fn grid(&self) -> TemperatureGrid {
        TemperatureGrid::linspace(self.min(), self.max(), self.sample_count)
    }
}
