use crate::tensor::utils::calculate_strides;
use crate::types::DType;
use std::fmt;

/// An output shape declared ahead of execution: what the graph must allocate.
///
/// Descriptors always describe a contiguous row-major layout.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ShapeDescriptor {
    shape: Vec<usize>,
    strides: Vec<usize>,
    dtype: DType,
}

impl ShapeDescriptor {
    /// Builds a descriptor for a contiguous array of `shape` holding `dtype` elements.
    pub fn from_shape(shape: Vec<usize>, dtype: DType) -> Self {
        let strides = calculate_strides(&shape);
        ShapeDescriptor {
            shape,
            strides,
            dtype,
        }
    }

    pub fn shape(&self) -> &[usize] {
        &self.shape
    }

    pub fn strides(&self) -> &[usize] {
        &self.strides
    }

    pub fn dtype(&self) -> DType {
        self.dtype
    }

    pub fn rank(&self) -> usize {
        self.shape.len()
    }

    /// Number of elements. Rank-0 descriptors describe a single element.
    pub fn length(&self) -> usize {
        self.shape.iter().product()
    }

    pub fn is_scalar(&self) -> bool {
        self.shape.is_empty()
    }
}

impl fmt::Display for ShapeDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{:?}", self.dtype, self.shape)
    }
}

#[cfg(test)]
mod tests {
    use super::ShapeDescriptor;
    use crate::types::DType;

    #[test]
    fn test_from_shape() {
        let d = ShapeDescriptor::from_shape(vec![4, 6], DType::F64);
        assert_eq!(d.shape(), &[4, 6]);
        assert_eq!(d.strides(), &[6, 1]);
        assert_eq!(d.dtype(), DType::F64);
        assert_eq!(d.rank(), 2);
        assert_eq!(d.length(), 24);
        assert!(!d.is_scalar());
        assert_eq!(d.to_string(), "f64[4, 6]");
    }

    #[test]
    fn test_scalar_descriptor() {
        let d = ShapeDescriptor::from_shape(vec![], DType::I32);
        assert!(d.is_scalar());
        assert_eq!(d.length(), 1);
        assert!(d.strides().is_empty());
    }
}
