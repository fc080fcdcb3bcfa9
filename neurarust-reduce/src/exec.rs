//! Executor seam: output allocation and kernel dispatch for reduction nodes.
//!
//! The numeric work belongs to a [`ReductionKernel`]; this module only makes
//! sure the kernel receives an output of the inferred shape and type.

use crate::error::NeuraRustError;
use crate::ops::reduction::{ReduceSameOp, ShapeInference};
use crate::ops::traits::ReductionOp;
use crate::tensor::Tensor;
use log::debug;

/// Performs the reduction arithmetic into an already-allocated output.
pub trait ReductionKernel {
    fn reduce(&self, op: &ReduceSameOp, out: &Tensor) -> Result<(), NeuraRustError>;
}

/// Validates `op` and returns the array its result should be written to.
///
/// Returns the pre-allocated `z` when present, otherwise a new array on
/// `x`'s device. `Ok(None)` means the output shape is not known yet.
///
/// # Errors
/// - Errors from [`ReductionOp::validate_data_types`] and
///   [`ReductionOp::calculate_output_shape`].
/// - `ShapeMismatch` if `z` does not have the inferred shape.
/// - `DeviceMismatch` if `z` lives on a different device than `x`.
pub fn prepare_output(op: &ReduceSameOp) -> Result<Option<Tensor>, NeuraRustError> {
    op.validate_data_types()?;
    let descriptor = match op.calculate_output_shape()? {
        ShapeInference::Resolved(descriptor) => descriptor,
        ShapeInference::Deferred => return Ok(None),
    };
    let operands = op.operands();
    let device = operands.x().map(|x| x.device()).unwrap_or_default();

    if let Some(z) = operands.z() {
        let z_shape = z.shape();
        if z_shape != descriptor.shape() {
            return Err(NeuraRustError::ShapeMismatch {
                expected: descriptor.shape().to_vec(),
                actual: z_shape,
                operation: op.op_name().to_string(),
            });
        }
        if z.device() != device {
            return Err(NeuraRustError::DeviceMismatch {
                expected: device,
                actual: z.device(),
                operation: op.op_name().to_string(),
            });
        }
        return Ok(Some(z));
    }

    debug!(
        "{}: allocating output {} on {:?}",
        op.op_name(),
        descriptor,
        device
    );
    Ok(Some(Tensor::empty_on(
        descriptor.shape().to_vec(),
        descriptor.dtype(),
        device,
    )))
}

/// Prepares the output of `op` and runs `kernel` on it.
///
/// # Errors
/// `IllegalState` if the input shape is still unresolved, plus anything
/// [`prepare_output`] or the kernel reports.
pub fn execute<K: ReductionKernel + ?Sized>(
    op: &ReduceSameOp,
    kernel: &K,
) -> Result<Tensor, NeuraRustError> {
    let out = prepare_output(op)?.ok_or_else(|| {
        NeuraRustError::IllegalState(format!(
            "{}: cannot execute, input shape not resolved",
            op.op_name()
        ))
    })?;
    kernel.reduce(op, &out)?;
    Ok(out)
}

#[cfg(test)]
#[path = "exec_test.rs"]
mod tests;
