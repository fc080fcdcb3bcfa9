//! Type-preserving reductions: the output element type is the input element type.

use crate::config::ShapeFormat;
use crate::error::NeuraRustError;
use crate::graph::Variable;
use crate::ops::traits::ReductionOp;
use crate::ops::OpType;
use crate::shape::ShapeDescriptor;
use crate::tensor::Tensor;
use crate::types::DType;
use log::{debug, trace};
use std::fmt;

use super::{ReduceOpBuilder, ReduceOperands, ReductionSpec, ShapeInference};

/// The concrete aggregations of the [`OpType::ReduceSame`] family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReduceSameKind {
    Sum,
    Max,
    Min,
    Prod,
    /// Sum of absolute values.
    ASum,
    /// Largest absolute value.
    AMax,
    /// Smallest absolute value.
    AMin,
}

impl ReduceSameKind {
    pub const ALL: [ReduceSameKind; 7] = [
        ReduceSameKind::Sum,
        ReduceSameKind::Max,
        ReduceSameKind::Min,
        ReduceSameKind::Prod,
        ReduceSameKind::ASum,
        ReduceSameKind::AMax,
        ReduceSameKind::AMin,
    ];

    pub fn op_name(&self) -> &'static str {
        match self {
            ReduceSameKind::Sum => "reduce_sum",
            ReduceSameKind::Max => "reduce_max",
            ReduceSameKind::Min => "reduce_min",
            ReduceSameKind::Prod => "reduce_prod",
            ReduceSameKind::ASum => "reduce_asum",
            ReduceSameKind::AMax => "reduce_amax",
            ReduceSameKind::AMin => "reduce_amin",
        }
    }

    /// Index of this reduction inside the family's kernel table.
    pub fn op_num(&self) -> usize {
        match self {
            ReduceSameKind::Sum => 0,
            ReduceSameKind::Max => 1,
            ReduceSameKind::Min => 2,
            ReduceSameKind::Prod => 3,
            ReduceSameKind::ASum => 4,
            ReduceSameKind::AMax => 5,
            ReduceSameKind::AMin => 6,
        }
    }
}

impl fmt::Display for ReduceSameKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.op_name())
    }
}

/// A reduction whose single output has the element type of its primary input.
///
/// Built either from graph variables (shape possibly unknown) or from
/// concrete arrays. Axes and `keep_dims` are fixed at construction; changing
/// them needs `&mut self`.
#[derive(Debug, Clone)]
pub struct ReduceSameOp {
    kind: ReduceSameKind,
    operands: ReduceOperands,
}

impl ReduceSameOp {
    pub(crate) fn from_parts(kind: ReduceSameKind, operands: ReduceOperands) -> Self {
        ReduceSameOp { kind, operands }
    }

    /// Starts a builder for an operator of the given kind.
    pub fn builder(kind: ReduceSameKind) -> ReduceOpBuilder {
        ReduceOpBuilder::new(kind)
    }

    /// Reduction of a graph variable over `axes`.
    pub fn from_graph(
        kind: ReduceSameKind,
        input: &Variable,
        axes: &[isize],
        keep_dims: bool,
    ) -> Self {
        Self::builder(kind)
            .arg(input)
            .axes(axes)
            .keep_dims(keep_dims)
            .build()
    }

    /// Reduction with a primary and a secondary graph variable.
    pub fn from_graph_pair(
        kind: ReduceSameKind,
        x: &Variable,
        y: &Variable,
        axes: &[isize],
    ) -> Self {
        Self::builder(kind).arg(x).arg(y).axes(axes).build()
    }

    /// Reduction of an array over all of its axes.
    pub fn from_array(kind: ReduceSameKind, x: &Tensor) -> Self {
        Self::builder(kind).arg(x).build()
    }

    /// Reduction of an array into an optional pre-allocated output.
    pub fn with_output(
        kind: ReduceSameKind,
        x: &Tensor,
        z: Option<&Tensor>,
        format: ShapeFormat,
        keep_dims: bool,
        axes: &[isize],
    ) -> Self {
        let mut builder = Self::builder(kind)
            .arg(x)
            .shape_format(format)
            .keep_dims(keep_dims)
            .axes(axes);
        if let Some(z) = z {
            builder = builder.output(z);
        }
        builder.build()
    }

    /// Reduction over arrays; the element count is `x`'s length.
    pub fn from_arrays(
        kind: ReduceSameKind,
        x: &Tensor,
        y: Option<&Tensor>,
        z: Option<&Tensor>,
    ) -> Self {
        Self::from_arrays_with_count(kind, x, y, z, x.numel())
    }

    /// Reduction over arrays with an explicit element count.
    pub fn from_arrays_with_count(
        kind: ReduceSameKind,
        x: &Tensor,
        y: Option<&Tensor>,
        z: Option<&Tensor>,
        n: usize,
    ) -> Self {
        let mut builder = Self::builder(kind).arg(x).element_count(n);
        if let Some(y) = y {
            builder = builder.arg(y);
        }
        if let Some(z) = z {
            builder = builder.output(z);
        }
        builder.build()
    }

    pub fn kind(&self) -> ReduceSameKind {
        self.kind
    }

    /// Attaches a pre-allocated output array.
    pub fn set_z(&mut self, z: Tensor) {
        self.operands.set_z(z);
    }

    /// Replaces the axes and `keep_dims` setting.
    pub fn set_spec(&mut self, spec: ReductionSpec) {
        self.operands.set_spec(spec);
    }

    fn primary_dtype(&self) -> Result<DType, NeuraRustError> {
        self.operands.x_dtype().ok_or_else(|| {
            NeuraRustError::IllegalState(format!(
                "{}: no input array or argument to take the element type from",
                self.kind
            ))
        })
    }
}

impl ReductionOp for ReduceSameOp {
    fn operands(&self) -> &ReduceOperands {
        &self.operands
    }

    fn op_type(&self) -> OpType {
        OpType::ReduceSame
    }

    fn op_name(&self) -> &'static str {
        self.kind.op_name()
    }

    fn result_type(&self) -> Result<DType, NeuraRustError> {
        self.primary_dtype()
    }

    fn validate_data_types(&self) -> Result<(), NeuraRustError> {
        let x_type = self.primary_dtype()?;

        if let Some(y_type) = self.operands.y_dtype() {
            if y_type != x_type {
                return Err(NeuraRustError::InvalidArgument(format!(
                    "{}: Op.X type must be the same as Op.Y type (x: {}, y: {})",
                    self.kind, x_type, y_type
                )));
            }
        }

        if let Some(z) = self.operands.z() {
            let z_type = z.dtype();
            if z_type != x_type {
                return Err(NeuraRustError::InvalidArgument(format!(
                    "{}: Op.Z type must be the same as Op.X type (x: {}, z: {})",
                    self.kind, x_type, z_type
                )));
            }
        }

        trace!("{}: operand types validated ({})", self.kind, x_type);
        Ok(())
    }

    fn calculate_output_shape(&self) -> Result<ShapeInference, NeuraRustError> {
        let input_shape = match self.operands.input_shape()? {
            Some(shape) => shape,
            None => {
                debug!("{}: input shape unknown, deferring inference", self.kind);
                return Ok(ShapeInference::Deferred);
            }
        };

        let reduced = self
            .operands
            .spec()
            .apply(&input_shape, self.operands.shape_format())?;
        let descriptor = ShapeDescriptor::from_shape(reduced, self.result_type()?);
        debug!(
            "{}: {:?} reduced over {:?} (keep_dims={}) -> {}",
            self.kind,
            input_shape,
            self.operands.axes(),
            self.operands.is_keep_dims(),
            descriptor
        );
        Ok(ShapeInference::Resolved(descriptor))
    }
}

#[cfg(test)]
#[path = "same_test.rs"]
mod tests;
