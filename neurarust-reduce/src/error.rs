use crate::device::StorageDevice;
use thiserror::Error;

/// Error type for reduction shape inference and operand validation.
#[derive(Error, Debug, PartialEq, Clone)] // PartialEq for easier testing
pub enum NeuraRustError {
    /// Operand element types (or other arguments) violate the operator contract.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// The operator node is malformed, e.g. it has no declared arguments.
    #[error("Illegal state: {0}")]
    IllegalState(String),

    #[error("Invalid axis {axis} for tensor of rank {rank}")]
    InvalidAxis { axis: isize, rank: usize },

    #[error("Shape mismatch: expected {expected:?}, got {actual:?} during operation {operation}")]
    ShapeMismatch {
        expected: Vec<usize>,
        actual: Vec<usize>,
        operation: String,
    },

    #[error("Device mismatch for operation '{operation}': expected {expected:?}, got {actual:?}")]
    DeviceMismatch {
        expected: StorageDevice,
        actual: StorageDevice,
        operation: String,
    },

    #[error("Unsupported operation: {0}")]
    UnsupportedOperation(String),
}
