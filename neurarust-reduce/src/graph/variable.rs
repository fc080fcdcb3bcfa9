use crate::tensor::Tensor;
use crate::types::DType;
use std::fmt;
use std::sync::{RwLock, Weak};

use super::GraphState;

/// A symbolic operand: a named value in a [`Graph`](super::Graph).
///
/// The handle does not own the graph. Its shape may be unknown until the
/// graph declares one or binds an array to it.
#[derive(Clone)]
pub struct Variable {
    pub(crate) name: String,
    pub(crate) dtype: DType,
    pub(crate) graph: Weak<RwLock<GraphState>>,
}

impl Variable {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn dtype(&self) -> DType {
        self.dtype
    }

    /// Returns the declared shape, falling back to the bound array's shape.
    ///
    /// `None` while the shape is not yet known, or if the owning graph is gone.
    pub fn shape(&self) -> Option<Vec<usize>> {
        let graph = self.graph.upgrade()?;
        let state = graph.read().expect("RwLock poisoned");
        let entry = state.variables.get(&self.name)?;
        entry
            .shape
            .clone()
            .or_else(|| entry.array.as_ref().map(|a| a.shape()))
    }

    /// Returns only the shape declared in the graph, ignoring any bound array.
    pub fn declared_shape(&self) -> Option<Vec<usize>> {
        let graph = self.graph.upgrade()?;
        let state = graph.read().expect("RwLock poisoned");
        state.variables.get(&self.name)?.shape.clone()
    }

    /// Returns the array bound to this variable, if any.
    pub fn array(&self) -> Option<Tensor> {
        let graph = self.graph.upgrade()?;
        let state = graph.read().expect("RwLock poisoned");
        state.variables.get(&self.name)?.array.clone()
    }

    pub fn is_materialized(&self) -> bool {
        self.array().is_some()
    }
}

impl PartialEq for Variable {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name && Weak::ptr_eq(&self.graph, &other.graph)
    }
}

impl fmt::Debug for Variable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Variable({}: {}, shape={:?})", self.name, self.dtype, self.shape())
    }
}
