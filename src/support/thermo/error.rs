use thiserror::Error;

/// Errors that may occur when evaluating heat capacities.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PropertyError {
    /// An input is malformed independent of temperature.
    ///
    /// For example, a correlation with the wrong number of coefficients or a
    /// non-positive molar mass.
    #[error("invalid argument: {context}")]
    InvalidArgument { context: String },

    /// The temperature is outside the evaluator's valid domain.
    ///
    /// For example, a non-positive absolute temperature in a correlation with
    /// an inverse-square term, or a temperature beyond a fit's breakpoints.
    #[error("out of domain: {context}")]
    OutOfDomain { context: String },
}
