use thiserror::Error;

use crate::support::{sampling::SampleError, thermo::PropertyError};

/// Errors that can occur while comparing a correlation against a reference.
///
/// Each variant names the stage that failed and carries its error unchanged.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum CompareError {
    /// The temperature grid could not be sampled.
    #[error("temperature sampling failed")]
    Sample(#[from] SampleError),

    /// The correlation rejected its coefficients or a grid temperature.
    #[error("correlation evaluation failed")]
    Correlation(#[source] PropertyError),

    /// The reference fit could not be evaluated on the grid.
    #[error("reference evaluation failed")]
    Reference(#[source] PropertyError),
}
