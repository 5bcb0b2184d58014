//! Error types for scorekit-core.
//!
//! Every failure is a deterministic function of the input, so there is a single
//! error enum shared by the loss and ranking modules.

use thiserror::Error;

/// Errors that can occur while computing a metric.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum MetricError {
    /// Ground truth and prediction sequences differ in length
    #[error("Length mismatch: y_true has {expected} elements, y_pred has {actual}")]
    LengthMismatch { expected: usize, actual: usize },
    /// A mean was requested over an empty input
    #[error("Empty input: {0}")]
    EmptyInput(&'static str),
    /// A prediction used as a divisor is zero
    #[error("Zero prediction at index {index}")]
    ZeroPrediction { index: usize },
    /// Unrecognized DCG method tag
    #[error("Unknown DCG method: {0:?} (expected \"standard\" or \"industry\")")]
    UnknownMethod(String),
    /// Asymmetry coefficient is not a finite positive number
    #[error("Invalid {name} weight: {value} (must be finite and > 0)")]
    InvalidWeight { name: &'static str, value: f64 },
}

/// Convenience alias used across the crate.
pub type Result<T> = std::result::Result<T, MetricError>;

impl From<MetricError> for String {
    fn from(err: MetricError) -> String {
        err.to_string()
    }
}
