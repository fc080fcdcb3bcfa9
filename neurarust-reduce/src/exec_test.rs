// neurarust-reduce/src/exec_test.rs

use super::{execute, prepare_output, ReductionKernel};
use crate::config::ShapeFormat;
use crate::device::StorageDevice;
use crate::error::NeuraRustError;
use crate::graph::Graph;
use crate::ops::reduction::{ReduceSameKind, ReduceSameOp};
use crate::tensor::Tensor;
use crate::types::DType;
use std::cell::Cell;

/// Records how often it ran and the rank of the output it saw.
#[derive(Default)]
struct RecordingKernel {
    calls: Cell<usize>,
    last_rank: Cell<Option<usize>>,
}

impl ReductionKernel for RecordingKernel {
    fn reduce(&self, _op: &ReduceSameOp, out: &Tensor) -> Result<(), NeuraRustError> {
        self.calls.set(self.calls.get() + 1);
        self.last_rank.set(Some(out.rank()));
        Ok(())
    }
}

struct FailingKernel;

impl ReductionKernel for FailingKernel {
    fn reduce(&self, op: &ReduceSameOp, _out: &Tensor) -> Result<(), NeuraRustError> {
        Err(NeuraRustError::UnsupportedOperation(format!("{} not available", op.kind())))
    }
}

#[test]
fn test_prepare_allocates_on_x_device() -> Result<(), NeuraRustError> {
    let x = Tensor::empty_on(vec![4, 5, 6], DType::F16, StorageDevice::GPU);
    let op = ReduceSameOp::with_output(ReduceSameKind::Sum, &x, None, ShapeFormat::Current, false, &[1]);
    let out = prepare_output(&op)?.expect("Output should be allocated");
    assert_eq!(out.shape(), vec![4, 6]);
    assert_eq!(out.dtype(), DType::F16);
    assert_eq!(out.device(), StorageDevice::GPU);
    Ok(())
}

#[test]
fn test_prepare_reuses_z() -> Result<(), NeuraRustError> {
    let x = Tensor::empty(vec![3, 3], DType::I32);
    let z = Tensor::scalar(DType::I32);
    let op = ReduceSameOp::from_arrays(ReduceSameKind::Max, &x, None, Some(&z));
    let out = prepare_output(&op)?.expect("Output should be z");
    assert!(std::sync::Arc::ptr_eq(&out.data, &z.data));
    Ok(())
}

#[test]
fn test_prepare_rejects_bad_z() {
    let x = Tensor::empty(vec![3, 3], DType::I32);

    let wrong_shape = Tensor::empty(vec![3], DType::I32);
    let op = ReduceSameOp::from_arrays(ReduceSameKind::Max, &x, None, Some(&wrong_shape));
    assert!(matches!(
        prepare_output(&op),
        Err(NeuraRustError::ShapeMismatch { .. })
    ));

    let wrong_type = Tensor::empty(vec![], DType::I64);
    let op = ReduceSameOp::from_arrays(ReduceSameKind::Max, &x, None, Some(&wrong_type));
    assert!(matches!(
        prepare_output(&op),
        Err(NeuraRustError::InvalidArgument(_))
    ));

    let wrong_device = Tensor::empty_on(vec![], DType::I32, StorageDevice::GPU);
    let op = ReduceSameOp::from_arrays(ReduceSameKind::Max, &x, None, Some(&wrong_device));
    assert!(matches!(
        prepare_output(&op),
        Err(NeuraRustError::DeviceMismatch { .. })
    ));
}

#[test]
fn test_prepare_deferred() -> Result<(), NeuraRustError> {
    let graph = Graph::new();
    let v = graph.placeholder("v", DType::F32, None)?;
    let op = ReduceSameOp::from_graph(ReduceSameKind::Sum, &v, &[], false);
    assert!(prepare_output(&op)?.is_none());
    Ok(())
}

#[test]
fn test_execute_runs_kernel() -> Result<(), NeuraRustError> {
    let x = Tensor::empty(vec![2, 3], DType::F32);
    let op = ReduceSameOp::from_array(ReduceSameKind::Sum, &x);
    let kernel = RecordingKernel::default();
    let out = execute(&op, &kernel)?;
    assert!(out.is_scalar());
    assert_eq!(kernel.calls.get(), 1);
    assert_eq!(kernel.last_rank.get(), Some(0));
    Ok(())
}

#[test]
fn test_execute_deferred_is_illegal_state() -> Result<(), NeuraRustError> {
    let graph = Graph::new();
    let v = graph.placeholder("v", DType::F32, None)?;
    let op = ReduceSameOp::from_graph(ReduceSameKind::Sum, &v, &[], false);
    let kernel = RecordingKernel::default();
    assert!(matches!(
        execute(&op, &kernel),
        Err(NeuraRustError::IllegalState(_))
    ));
    assert_eq!(kernel.calls.get(), 0);
    Ok(())
}

#[test]
fn test_execute_skips_kernel_on_type_error() {
    let x = Tensor::empty(vec![2], DType::F64);
    let y = Tensor::empty(vec![2], DType::F32);
    let op = ReduceSameOp::from_arrays(ReduceSameKind::Sum, &x, Some(&y), None);
    let kernel = RecordingKernel::default();
    assert!(execute(&op, &kernel).is_err());
    assert_eq!(kernel.calls.get(), 0);
}

#[test]
fn test_execute_propagates_kernel_error() {
    let x = Tensor::empty(vec![2], DType::F64);
    let op = ReduceSameOp::from_array(ReduceSameKind::AMin, &x);
    assert!(matches!(
        execute(&op, &FailingKernel),
        Err(NeuraRustError::UnsupportedOperation(_))
    ));
}
