// src/ops/reduction/mod.rs
// Reduction operators: shared operands, shape inference outcome, and the
// type-preserving family (sum, max, min, prod, ...).

pub mod base;
pub mod builder;
pub mod inference;
pub mod same;
pub mod spec;

pub use base::ReduceOperands;
pub use builder::ReduceOpBuilder;
pub use inference::ShapeInference;
pub use same::{ReduceSameKind, ReduceSameOp};
pub use spec::ReductionSpec;
