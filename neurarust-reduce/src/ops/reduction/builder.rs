use crate::config::{default_shape_format, ShapeFormat};
use crate::graph::Operand;
use crate::tensor::Tensor;

use super::{ReduceOperands, ReduceSameKind, ReduceSameOp, ReductionSpec};

/// Builder for [`ReduceSameOp`].
///
/// Arguments are positional: the first one added is `x`, the second `y`.
/// The shape format falls back to the process-wide default when `build` runs.
///
/// ```
/// use neurarust_reduce::{ReduceSameKind, ReduceSameOp, Tensor, DType};
/// use neurarust_reduce::ops::traits::ReductionOp;
///
/// let x = Tensor::empty(vec![4, 5, 6], DType::F32);
/// let op = ReduceSameOp::builder(ReduceSameKind::Sum)
///     .arg(&x)
///     .axes(&[1])
///     .keep_dims(true)
///     .build();
/// let shapes = op.output_shapes().unwrap();
/// assert_eq!(shapes[0].shape(), &[4, 1, 6]);
/// ```
#[derive(Debug, Clone)]
pub struct ReduceOpBuilder {
    kind: ReduceSameKind,
    args: Vec<Operand>,
    z: Option<Tensor>,
    axes: Vec<isize>,
    keep_dims: bool,
    format: Option<ShapeFormat>,
    n: Option<usize>,
}

impl ReduceOpBuilder {
    pub fn new(kind: ReduceSameKind) -> Self {
        ReduceOpBuilder {
            kind,
            args: Vec::new(),
            z: None,
            axes: Vec::new(),
            keep_dims: false,
            format: None,
            n: None,
        }
    }

    /// Appends an input (graph variable or array).
    pub fn arg(mut self, operand: impl Into<Operand>) -> Self {
        self.args.push(operand.into());
        self
    }

    /// Pre-allocated output array.
    pub fn output(mut self, z: &Tensor) -> Self {
        self.z = Some(z.clone());
        self
    }

    /// Axes to reduce over; empty means all axes.
    pub fn axes(mut self, axes: &[isize]) -> Self {
        self.axes = axes.to_vec();
        self
    }

    pub fn keep_dims(mut self, keep_dims: bool) -> Self {
        self.keep_dims = keep_dims;
        self
    }

    pub fn shape_format(mut self, format: ShapeFormat) -> Self {
        self.format = Some(format);
        self
    }

    /// Explicit number of elements the kernel walks.
    pub fn element_count(mut self, n: usize) -> Self {
        self.n = Some(n);
        self
    }

    pub fn build(self) -> ReduceSameOp {
        let format = self.format.unwrap_or_else(default_shape_format);
        let operands = ReduceOperands::new(
            self.args,
            self.z,
            ReductionSpec::new(&self.axes, self.keep_dims),
            format,
            self.n,
        );
        ReduceSameOp::from_parts(self.kind, operands)
    }
}
