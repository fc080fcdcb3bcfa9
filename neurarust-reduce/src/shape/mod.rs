//! # Shape utilities
//!
//! Shape arithmetic consumed by reduction operators: axis normalization,
//! the reduced output shape, and the (shape, dtype) descriptor handed back
//! to the graph.

pub mod descriptor;
pub mod reduced;

pub use descriptor::ShapeDescriptor;
pub use reduced::{is_whole_array, normalize_axes, reduced_shape};
