use crate::tensor::Tensor;
use crate::types::DType;

use super::Variable;

/// An operator input: either a graph variable or a concrete array.
#[derive(Debug, Clone, PartialEq)]
pub enum Operand {
    /// Graph-level reference whose shape may not be known yet.
    Symbolic(Variable),
    /// Array with a concrete shape and type.
    Materialized(Tensor),
}

impl Operand {
    pub fn dtype(&self) -> DType {
        match self {
            Operand::Symbolic(var) => var.dtype(),
            Operand::Materialized(t) => t.dtype(),
        }
    }

    /// The shape this operand declares.
    ///
    /// For a variable this is the shape the graph declared for it; an array
    /// bound later is reachable through [`Operand::array`] instead.
    pub fn shape(&self) -> Option<Vec<usize>> {
        match self {
            Operand::Symbolic(var) => var.declared_shape(),
            Operand::Materialized(t) => Some(t.shape()),
        }
    }

    /// The concrete array behind this operand, if there is one yet.
    pub fn array(&self) -> Option<Tensor> {
        match self {
            Operand::Symbolic(var) => var.array(),
            Operand::Materialized(t) => Some(t.clone()),
        }
    }

    pub fn is_materialized(&self) -> bool {
        matches!(self, Operand::Materialized(_))
    }
}

impl From<Variable> for Operand {
    fn from(var: Variable) -> Self {
        Operand::Symbolic(var)
    }
}

impl From<&Variable> for Operand {
    fn from(var: &Variable) -> Self {
        Operand::Symbolic(var.clone())
    }
}

impl From<Tensor> for Operand {
    fn from(t: Tensor) -> Self {
        Operand::Materialized(t)
    }
}

impl From<&Tensor> for Operand {
    fn from(t: &Tensor) -> Self {
        Operand::Materialized(t.clone())
    }
}
