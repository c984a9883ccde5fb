//! Error types for the ts-transform library.

use thiserror::Error;

/// Result type alias for transform operations.
pub type Result<T> = std::result::Result<T, TransformError>;

/// Errors that can occur during transform operations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum TransformError {
    /// Input data is empty.
    #[error("empty input data")]
    EmptyData,

    /// Insufficient data points for the operation.
    #[error("insufficient data: need at least {needed}, got {got}")]
    InsufficientData { needed: usize, got: usize },

    /// Dimension mismatch between data structures.
    #[error("dimension mismatch: expected {expected}, got {got}")]
    DimensionMismatch { expected: usize, got: usize },

    /// Invalid parameter value.
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    /// Malformed time index.
    #[error("invalid time index: {0}")]
    InvalidIndex(String),

    /// Malformed forecasting horizon.
    #[error("invalid forecasting horizon: {0}")]
    InvalidHorizon(String),

    /// Multiplicative seasonal component at numerical zero.
    #[error("multiplicative seasonal component is zero")]
    DegenerateSeasonal,

    /// Computation error (e.g., numerical issues).
    #[error("computation error: {0}")]
    ComputationError(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_messages_are_descriptive() {
        let err = TransformError::EmptyData;
        assert_eq!(err.to_string(), "empty input data");

        let err = TransformError::InsufficientData { needed: 3, got: 2 };
        assert_eq!(err.to_string(), "insufficient data: need at least 3, got 2");

        let err = TransformError::DimensionMismatch {
            expected: 10,
            got: 8,
        };
        assert_eq!(err.to_string(), "dimension mismatch: expected 10, got 8");

        let err = TransformError::InvalidHorizon("offsets must be positive".to_string());
        assert_eq!(
            err.to_string(),
            "invalid forecasting horizon: offsets must be positive"
        );

        let err = TransformError::DegenerateSeasonal;
        assert_eq!(err.to_string(), "multiplicative seasonal component is zero");
    }

    #[test]
    fn errors_are_clonable_and_comparable() {
        let err1 = TransformError::EmptyData;
        let err2 = err1.clone();
        assert_eq!(err1, err2);
    }
}
