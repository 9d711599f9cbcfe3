use thiserror::Error;

/// Errors raised while building [`TemperatureRanges`](super::TemperatureRanges).
///
/// Every variant describes a malformed argument; none are transient.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum SampleError {
    /// At least a lower and an upper breakpoint are required.
    #[error("at least 2 breakpoints are required, got {count}")]
    TooFewBreakpoints { count: usize },

    /// A breakpoint is infinite or NaN.
    #[error("breakpoint {index} is not finite: {value}")]
    NonFinite { index: usize, value: f64 },

    /// The upper bound does not exceed the lower bound.
    #[error("empty temperature span: max {max} K must exceed min {min} K")]
    EmptySpan { min: f64, max: f64 },

    /// An interior breakpoint does not exceed its predecessor.
    #[error("breakpoint {index} ({value} K) does not exceed the previous breakpoint")]
    NotIncreasing { index: usize, value: f64 },

    /// The sample count hint is not a finite number.
    #[error("sample count hint is not finite: {hint}")]
    InvalidHint { hint: f64 },

    /// The grid needs both endpoints.
    #[error("sample count must be at least 2, got {count}")]
    SampleCount { count: usize },

    /// The sample count exceeds [`MAX_SAMPLE_COUNT`](super::MAX_SAMPLE_COUNT).
    #[error("sample count must not exceed {max}, got {count}")]
    TooManySamples { count: usize, max: usize },
}
