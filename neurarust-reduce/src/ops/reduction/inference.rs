use crate::shape::ShapeDescriptor;

/// Outcome of output-shape inference.
///
/// `Deferred` is the normal state of a node whose input is a graph variable
/// without a known shape; the graph asks again once the input is resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShapeInference {
    Resolved(ShapeDescriptor),
    Deferred,
}

impl ShapeInference {
    pub fn is_resolved(&self) -> bool {
        matches!(self, ShapeInference::Resolved(_))
    }

    pub fn is_deferred(&self) -> bool {
        matches!(self, ShapeInference::Deferred)
    }

    pub fn descriptor(&self) -> Option<&ShapeDescriptor> {
        match self {
            ShapeInference::Resolved(d) => Some(d),
            ShapeInference::Deferred => None,
        }
    }

    /// Converts to the list form: one descriptor when resolved, empty when deferred.
    pub fn into_vec(self) -> Vec<ShapeDescriptor> {
        match self {
            ShapeInference::Resolved(d) => vec![d],
            ShapeInference::Deferred => Vec::new(),
        }
    }
}
