//! Error types for the depth model.

use thiserror::Error;

/// Depth-model error types.
#[derive(Debug, Error)]
pub enum ModelError {
    /// Invalid model parameters. Fatal at construction.
    #[error("Invalid model configuration: {0}")]
    Configuration(String),

    /// The value transform hit a non-positive entry before the logarithm.
    /// Fatal for this parameter set; callers fall back to the asymptotic
    /// schedule or reject the configuration.
    #[error("Non-positive transform value {value} at step {step}, offset {offset}")]
    NumericDomain {
        step: usize,
        offset: usize,
        value: f64,
    },
}

/// Result type alias for depth-model operations.
pub type Result<T> = std::result::Result<T, ModelError>;
