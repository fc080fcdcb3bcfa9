use crate::error::NeuraRustError;
use crate::ops::reduction::{ReduceOperands, ShapeInference};
use crate::ops::OpType;
use crate::shape::ShapeDescriptor;
use crate::types::DType;
use std::fmt::Debug;

/// Contract between a reduction operator and the graph/executor that drives it.
///
/// Every query is pure: calling it any number of times with unchanged
/// operands gives the same answer. Implementations are `Send + Sync` so that
/// distinct operator instances can be queried from several threads.
pub trait ReductionOp: Debug + Send + Sync {
    /// Operands and reduction settings the operator was built with.
    fn operands(&self) -> &ReduceOperands;

    /// Family tag used for kernel and gradient-rule lookup.
    fn op_type(&self) -> OpType;

    /// Stable name of the concrete reduction (e.g. `"reduce_sum"`).
    fn op_name(&self) -> &'static str;

    /// Element type of the single output.
    fn result_type(&self) -> Result<DType, NeuraRustError>;

    /// Checks operand element types against the family's typing rule.
    ///
    /// # Errors
    /// `NeuraRustError::InvalidArgument` naming the mismatched operand pair.
    fn validate_data_types(&self) -> Result<(), NeuraRustError>;

    /// Infers the output descriptor, or reports that the input shape is not known yet.
    ///
    /// # Errors
    /// `NeuraRustError::IllegalState` if the operator has no arguments.
    fn calculate_output_shape(&self) -> Result<ShapeInference, NeuraRustError>;

    /// List form of [`ReductionOp::calculate_output_shape`]: one descriptor, or none if deferred.
    fn output_shapes(&self) -> Result<Vec<ShapeDescriptor>, NeuraRustError> {
        Ok(self.calculate_output_shape()?.into_vec())
    }
}
