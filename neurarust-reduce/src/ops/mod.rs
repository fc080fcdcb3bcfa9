//! # Operator contracts (`ops`)
//!
//! Operators are classified into families by [`OpType`]. The family decides
//! how the output element type is derived from the input and is what the
//! executor uses to pick kernels and gradient rules.
//!
//! ## Key Submodules:
//!
//! - [`reduction`]: reductions over a subset of axes (sum, max, min, prod, ...).
//! - [`traits`]: the [`ReductionOp`](traits::ReductionOp) contract shared by reduction families.

use crate::types::DType;
use std::fmt;

pub mod reduction;
pub mod traits;

/// Operator family tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OpType {
    /// Reductions whose output type equals the input type (sum, max, min, prod).
    ReduceSame,
    /// Reductions producing a floating type (mean, norms, variance).
    ReduceFloat,
    /// Reductions producing booleans (any, all).
    ReduceBool,
    /// Reductions producing 64-bit integers (count non-zero).
    ReduceLong,
}

impl OpType {
    /// Output element type this family produces for an input of type `input`.
    pub fn resolve_result_type(&self, input: DType) -> DType {
        match self {
            OpType::ReduceSame => input,
            OpType::ReduceFloat => {
                if input.is_float() {
                    input
                } else {
                    DType::F32
                }
            }
            OpType::ReduceBool => DType::Bool,
            OpType::ReduceLong => DType::I64,
        }
    }

    pub fn is_type_preserving(&self) -> bool {
        *self == OpType::ReduceSame
    }

    pub fn name(&self) -> &'static str {
        match self {
            OpType::ReduceSame => "REDUCE_SAME",
            OpType::ReduceFloat => "REDUCE_FLOAT",
            OpType::ReduceBool => "REDUCE_BOOL",
            OpType::ReduceLong => "REDUCE_LONG",
        }
    }
}

impl fmt::Display for OpType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::OpType;
    use crate::types::DType;

    #[test]
    fn test_family_result_types() {
        assert_eq!(OpType::ReduceSame.resolve_result_type(DType::I32), DType::I32);
        assert_eq!(OpType::ReduceSame.resolve_result_type(DType::BF16), DType::BF16);
        assert_eq!(OpType::ReduceFloat.resolve_result_type(DType::F64), DType::F64);
        assert_eq!(OpType::ReduceFloat.resolve_result_type(DType::I64), DType::F32);
        assert_eq!(OpType::ReduceBool.resolve_result_type(DType::F32), DType::Bool);
        assert_eq!(OpType::ReduceLong.resolve_result_type(DType::U8), DType::I64);
    }

    #[test]
    fn test_only_same_family_preserves_type() {
        assert!(OpType::ReduceSame.is_type_preserving());
        assert!(!OpType::ReduceFloat.is_type_preserving());
        assert_eq!(OpType::ReduceSame.to_string(), "REDUCE_SAME");
    }
}
