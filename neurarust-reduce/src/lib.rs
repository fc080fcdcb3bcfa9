//! # NeuraRust reductions
//!
//! Shape inference and element-type validation for type-preserving
//! reductions (sum, max, min, prod, ...) in a NeuraRust computation graph.
//! A graph builds [`ReduceSameOp`] nodes from variables or arrays, asks them
//! for their output descriptor before allocating, and hands the allocated
//! output to an opaque kernel through [`exec`].

pub mod config;
pub mod device;
pub mod error;
pub mod exec;
pub mod graph;
pub mod ops;
pub mod shape;
pub mod tensor;
pub mod tensor_data;
pub mod types;

pub use config::ShapeFormat;
pub use device::StorageDevice;
pub use error::NeuraRustError;
pub use graph::{Graph, Operand, Variable};
pub use ops::reduction::{ReduceSameKind, ReduceSameOp, ReductionSpec, ShapeInference};
pub use ops::traits::ReductionOp;
pub use ops::OpType;
pub use shape::ShapeDescriptor;
pub use tensor::Tensor;
pub use types::DType;
