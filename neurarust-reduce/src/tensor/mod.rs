// src/tensor/mod.rs

use crate::device::StorageDevice;
use crate::tensor_data::TensorData;
use crate::types::DType;
use std::sync::{Arc, RwLock};

mod traits;
pub mod utils;

/// A materialized operand: an array with a concrete shape and element type.
///
/// `Tensor` uses `Arc<RwLock<TensorData>>` internally to allow for:
/// 1.  **Shared Ownership:** the graph owns arrays while operators hold cheap
///     clones pointing at the same metadata.
/// 2.  **Interior Mutability:** metadata can be updated through an immutable
///     `Tensor` reference, with read/write locks ensuring thread safety.
pub struct Tensor {
    /// Arc for shared ownership, RwLock for interior mutability of TensorData.
    pub(crate) data: Arc<RwLock<TensorData>>,
}

impl Tensor {
    /// Creates an array of the given shape and type on the CPU.
    ///
    /// No element storage is attached; kernels fill outputs through their own
    /// buffers.
    pub fn empty(shape: Vec<usize>, dtype: DType) -> Self {
        Self::empty_on(shape, dtype, StorageDevice::CPU)
    }

    /// Same as [`Tensor::empty`] on an explicit device.
    pub fn empty_on(shape: Vec<usize>, dtype: DType, device: StorageDevice) -> Self {
        Tensor {
            data: Arc::new(RwLock::new(TensorData::new(shape, dtype, device))),
        }
    }

    /// Creates a rank-0 array.
    pub fn scalar(dtype: DType) -> Self {
        Self::empty(vec![], dtype)
    }

    /// Creates a new, independent array with the same shape, type and device.
    pub fn empty_like(other: &Tensor) -> Self {
        let guard = other.read_data();
        Self::empty_on(guard.shape.clone(), guard.dtype, guard.device)
    }

    /// Acquires a read lock on the tensor's metadata.
    ///
    /// # Panics
    /// Panics if the lock is poisoned.
    pub fn read_data(&self) -> std::sync::RwLockReadGuard<'_, TensorData> {
        self.data.read().expect("RwLock poisoned")
    }

    /// Acquires a write lock on the tensor's metadata.
    ///
    /// # Panics
    /// Panics if the lock is poisoned.
    pub(crate) fn write_data(&self) -> std::sync::RwLockWriteGuard<'_, TensorData> {
        self.data.write().expect("RwLock poisoned")
    }

    /// Returns a clone of the tensor's shape (dimensions).
    pub fn shape(&self) -> Vec<usize> {
        self.read_data().shape.clone()
    }

    /// Returns a clone of the tensor's strides.
    pub fn strides(&self) -> Vec<usize> {
        self.read_data().strides.clone()
    }

    /// Returns the data type (`DType`) of the tensor elements.
    pub fn dtype(&self) -> DType {
        self.read_data().dtype
    }

    /// Returns the device (`StorageDevice`) where the tensor's data resides.
    pub fn device(&self) -> StorageDevice {
        self.read_data().device
    }

    /// Returns the rank (number of dimensions) of the tensor.
    pub fn rank(&self) -> usize {
        self.read_data().shape.len()
    }

    /// Returns the total number of elements in the tensor.
    pub fn numel(&self) -> usize {
        self.read_data().numel()
    }

    pub fn is_scalar(&self) -> bool {
        self.read_data().shape.is_empty()
    }

    /// Moves the array to another device, in place.
    pub fn set_device(&self, device: StorageDevice) {
        self.write_data().device = device;
    }
}
