// src/tensor/traits.rs

use crate::tensor::Tensor;
use std::fmt::{self, Debug};
use std::sync::Arc;

impl Clone for Tensor {
    /// Shallow clone: increases the reference count of the shared metadata.
    fn clone(&self) -> Self {
        Tensor {
            data: Arc::clone(&self.data),
        }
    }
}

impl Debug for Tensor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let td = self.read_data();
        write!(
            f,
            "Tensor(shape={:?}, dtype={}, device={:?}, strides={:?})",
            td.shape, td.dtype, td.device, td.strides
        )
    }
}

impl PartialEq for Tensor {
    /// Two tensors are equal when they share storage or describe the same array layout.
    fn eq(&self, other: &Self) -> bool {
        if Arc::ptr_eq(&self.data, &other.data) {
            return true;
        }
        *self.read_data() == *other.read_data()
    }
}

#[cfg(test)]
mod tests {
    use crate::device::StorageDevice;
    use crate::tensor::Tensor;
    use crate::types::DType;

    #[test]
    fn test_clone_is_shallow() {
        let t = Tensor::empty(vec![2, 3], DType::F32);
        let c = t.clone();
        c.set_device(StorageDevice::GPU);
        assert_eq!(t.device(), StorageDevice::GPU);
    }

    #[test]
    fn test_eq_compares_metadata() {
        let a = Tensor::empty(vec![2, 3], DType::F32);
        let b = Tensor::empty(vec![2, 3], DType::F32);
        let c = Tensor::empty(vec![2, 3], DType::F64);
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_scalar_has_one_element() {
        let s = Tensor::scalar(DType::I64);
        assert!(s.is_scalar());
        assert_eq!(s.rank(), 0);
        assert_eq!(s.numel(), 1);
        assert_eq!(s.strides(), Vec::<usize>::new());
        assert_eq!(s, Tensor::empty(vec![], DType::I64));
    }

    #[test]
    fn test_empty_like_is_independent() {
        let t = Tensor::empty_on(vec![2, 5], DType::F16, StorageDevice::GPU);
        let like = Tensor::empty_like(&t);
        assert_eq!(like, t);
        assert!(!std::sync::Arc::ptr_eq(&like.data, &t.data));

        like.set_device(StorageDevice::CPU);
        assert_eq!(t.device(), StorageDevice::GPU);
        assert_ne!(like, t);
    }

    #[test]
    fn test_debug_format() {
        let t = Tensor::empty(vec![4], DType::I32);
        let s = format!("{:?}", t);
        assert!(s.contains("shape=[4]"));
        assert!(s.contains("dtype=i32"));
    }
}
