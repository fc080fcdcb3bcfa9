//! Operands and settings shared by every reduction family.

use crate::config::ShapeFormat;
use crate::error::NeuraRustError;
use crate::graph::Operand;
use crate::tensor::Tensor;
use crate::types::DType;

use super::ReductionSpec;

/// Inputs, optional pre-allocated output and reduction settings of a reduction node.
///
/// The first argument is the primary input `x`, the optional second one is
/// `y`. `z` is an output array supplied ahead of execution.
#[derive(Debug, Clone)]
pub struct ReduceOperands {
    args: Vec<Operand>,
    z: Option<Tensor>,
    spec: ReductionSpec,
    format: ShapeFormat,
    n: Option<usize>,
}

impl ReduceOperands {
    pub(crate) fn new(
        args: Vec<Operand>,
        z: Option<Tensor>,
        spec: ReductionSpec,
        format: ShapeFormat,
        n: Option<usize>,
    ) -> Self {
        ReduceOperands {
            args,
            z,
            spec,
            format,
            n,
        }
    }

    pub fn args(&self) -> &[Operand] {
        &self.args
    }

    /// The primary argument, if the node declares any.
    pub fn arg(&self) -> Option<&Operand> {
        self.args.first()
    }

    /// Concrete primary input: the array given directly, or the one bound to the first variable.
    pub fn x(&self) -> Option<Tensor> {
        self.args.first().and_then(Operand::array)
    }

    /// Concrete secondary input, if any.
    pub fn y(&self) -> Option<Tensor> {
        self.args.get(1).and_then(Operand::array)
    }

    /// Pre-allocated output, if any.
    pub fn z(&self) -> Option<Tensor> {
        self.z.clone()
    }

    pub(crate) fn set_z(&mut self, z: Tensor) {
        self.z = Some(z);
    }

    /// Element type of `x`, falling back to the primary argument's declared type.
    pub fn x_dtype(&self) -> Option<DType> {
        self.x()
            .map(|x| x.dtype())
            .or_else(|| self.arg().map(Operand::dtype))
    }

    /// Element type of `y`, falling back to the secondary argument's declared type.
    pub fn y_dtype(&self) -> Option<DType> {
        self.y()
            .map(|y| y.dtype())
            .or_else(|| self.args.get(1).map(Operand::dtype))
    }

    pub fn spec(&self) -> &ReductionSpec {
        &self.spec
    }

    pub(crate) fn set_spec(&mut self, spec: ReductionSpec) {
        self.spec = spec;
    }

    pub fn axes(&self) -> &[isize] {
        self.spec.axes()
    }

    pub fn is_keep_dims(&self) -> bool {
        self.spec.keep_dims()
    }

    pub fn shape_format(&self) -> ShapeFormat {
        self.format
    }

    /// Number of elements the kernel walks: the explicit count, else `x`'s length.
    pub fn n(&self) -> Option<usize> {
        self.n.or_else(|| self.x().map(|x| x.numel()))
    }

    /// Shape the reduction is applied to.
    ///
    /// Prefers the primary argument's declared shape, then the shape of a
    /// bound `x`. `Ok(None)` means neither is known yet.
    ///
    /// # Errors
    /// `NeuraRustError::IllegalState` if no argument is declared.
    pub fn input_shape(&self) -> Result<Option<Vec<usize>>, NeuraRustError> {
        let arg = self.arg().ok_or_else(|| {
            NeuraRustError::IllegalState(
                "Unable to compute input shape. No arguments found.".to_string(),
            )
        })?;
        match arg.shape() {
            Some(shape) => Ok(Some(shape)),
            None => Ok(self.x().map(|x| x.shape())),
        }
    }
}
