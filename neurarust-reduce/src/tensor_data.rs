// src/tensor_data.rs
use crate::device::StorageDevice;
use crate::tensor::utils::calculate_strides;
use crate::types::DType;

/// Internal metadata for a materialized array.
///
/// Reductions only need to know what an operand looks like, not what it
/// holds, so this carries shape, layout, element type and device. It is
/// wrapped in `Arc<RwLock<TensorData>>` by the `Tensor` struct.
#[derive(Debug, Clone, PartialEq)]
pub struct TensorData {
    /// The device where the array resides.
    pub(crate) device: StorageDevice,
    /// The data type of the elements.
    pub(crate) dtype: DType,
    /// The shape (dimensions) of the tensor.
    pub(crate) shape: Vec<usize>,
    /// The strides for each dimension, in elements.
    pub(crate) strides: Vec<usize>,
}

impl TensorData {
    /// Creates contiguous metadata for an array of the given shape and type.
    pub fn new(shape: Vec<usize>, dtype: DType, device: StorageDevice) -> Self {
        let strides = calculate_strides(&shape);
        TensorData {
            device,
            dtype,
            shape,
            strides,
        }
    }

    /// Total number of elements. A rank-0 array holds one element.
    pub fn numel(&self) -> usize {
        self.shape.iter().product()
    }
}
