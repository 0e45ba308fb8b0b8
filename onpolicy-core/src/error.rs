//! Errors in the library.
use thiserror::Error;

/// Errors in the library.
#[derive(Error, Debug, PartialEq)]
pub enum OnPolicyError {
    /// No supervision observation recognized by the loss was found in the batch.
    #[error("Unsupported supervision mode: {0}")]
    UnsupportedSupervisionMode(String),

    /// Shapes of tensors given to a loss do not satisfy its contract.
    #[error("Shape contract violation: {0}")]
    ShapeContractViolation(String),

    /// Record key error.
    #[error("Record key error: {0}")]
    RecordKeyError(String),
}
