use crate::config::ShapeFormat;
use crate::error::NeuraRustError;
use crate::shape::reduced_shape;

/// Which axes a reduction collapses and whether they stay as size-1 dimensions.
///
/// An empty axis list reduces over every axis. Negative axes count from the
/// end of the input shape.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct ReductionSpec {
    axes: Vec<isize>,
    keep_dims: bool,
}

impl ReductionSpec {
    pub fn new(axes: &[isize], keep_dims: bool) -> Self {
        ReductionSpec {
            axes: axes.to_vec(),
            keep_dims,
        }
    }

    /// Reduction over every axis.
    pub fn all(keep_dims: bool) -> Self {
        Self::new(&[], keep_dims)
    }

    pub fn axes(&self) -> &[isize] {
        &self.axes
    }

    pub fn keep_dims(&self) -> bool {
        self.keep_dims
    }

    /// `true` if the axis list is empty. An explicit list naming every axis
    /// reduces the whole array as well but is not detected here, since that
    /// depends on the input rank.
    pub fn reduces_all(&self) -> bool {
        self.axes.is_empty()
    }

    /// Output shape of this reduction applied to `input_shape`.
    pub fn apply(
        &self,
        input_shape: &[usize],
        format: ShapeFormat,
    ) -> Result<Vec<usize>, NeuraRustError> {
        reduced_shape(input_shape, &self.axes, self.keep_dims, format)
    }
}
