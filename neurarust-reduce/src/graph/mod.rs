//! # Graph context
//!
//! A minimal graph: named variables with a dtype, an optional declared shape
//! and an optional bound array, plus helpers that add reduction nodes and
//! keep their output variables' shapes in sync.

use crate::error::NeuraRustError;
use crate::ops::reduction::{ReduceSameKind, ReduceSameOp, ShapeInference};
use crate::ops::traits::ReductionOp;
use crate::tensor::Tensor;
use crate::types::DType;
use log::{debug, warn};
use std::collections::HashMap;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

mod operand;
mod variable;

pub use operand::Operand;
pub use variable::Variable;

#[derive(Debug)]
pub(crate) struct VariableEntry {
    pub(crate) dtype: DType,
    pub(crate) shape: Option<Vec<usize>>,
    pub(crate) array: Option<Tensor>,
}

#[derive(Debug, Default)]
pub(crate) struct GraphState {
    pub(crate) variables: HashMap<String, VariableEntry>,
    op_counter: usize,
}

/// Owner of the variables that reduction nodes refer to.
///
/// Clones share the same state.
#[derive(Debug, Clone, Default)]
pub struct Graph {
    state: Arc<RwLock<GraphState>>,
}

impl Graph {
    pub fn new() -> Self {
        Self::default()
    }

    fn read_state(&self) -> RwLockReadGuard<'_, GraphState> {
        self.state.read().expect("RwLock poisoned")
    }

    fn write_state(&self) -> RwLockWriteGuard<'_, GraphState> {
        self.state.write().expect("RwLock poisoned")
    }

    fn owns(&self, var: &Variable) -> bool {
        std::ptr::eq(var.graph.as_ptr(), Arc::as_ptr(&self.state))
    }

    fn check_owned(&self, var: &Variable) -> Result<(), NeuraRustError> {
        if self.owns(var) {
            Ok(())
        } else {
            Err(NeuraRustError::InvalidArgument(format!(
                "Variable '{}' does not belong to this graph",
                var.name()
            )))
        }
    }

    fn handle(&self, name: &str, dtype: DType) -> Variable {
        Variable {
            name: name.to_string(),
            dtype,
            graph: Arc::downgrade(&self.state),
        }
    }

    fn register(
        &self,
        name: &str,
        dtype: DType,
        shape: Option<Vec<usize>>,
        array: Option<Tensor>,
    ) -> Result<Variable, NeuraRustError> {
        let mut state = self.write_state();
        if state.variables.contains_key(name) {
            return Err(NeuraRustError::InvalidArgument(format!(
                "Variable '{}' already exists",
                name
            )));
        }
        state.variables.insert(
            name.to_string(),
            VariableEntry {
                dtype,
                shape,
                array,
            },
        );
        Ok(self.handle(name, dtype))
    }

    /// Declares a variable whose array is supplied later. `shape` may be unknown.
    pub fn placeholder(
        &self,
        name: &str,
        dtype: DType,
        shape: Option<Vec<usize>>,
    ) -> Result<Variable, NeuraRustError> {
        self.register(name, dtype, shape, None)
    }

    /// Declares a variable backed by a concrete array.
    pub fn constant(&self, name: &str, array: &Tensor) -> Result<Variable, NeuraRustError> {
        self.register(name, array.dtype(), Some(array.shape()), Some(array.clone()))
    }

    /// Looks up a variable by name.
    pub fn variable(&self, name: &str) -> Option<Variable> {
        let state = self.read_state();
        state
            .variables
            .get(name)
            .map(|entry| self.handle(name, entry.dtype))
    }

    pub fn num_variables(&self) -> usize {
        self.read_state().variables.len()
    }

    /// Binds a concrete array to a variable.
    ///
    /// # Errors
    /// - `InvalidArgument` if the dtypes differ or the variable is foreign.
    /// - `ShapeMismatch` if the variable declares a different shape.
    pub fn bind(&self, var: &Variable, array: &Tensor) -> Result<(), NeuraRustError> {
        self.check_owned(var)?;
        let mut state = self.write_state();
        let entry = state.variables.get_mut(var.name()).ok_or_else(|| {
            NeuraRustError::InvalidArgument(format!("Unknown variable '{}'", var.name()))
        })?;
        if entry.dtype != array.dtype() {
            return Err(NeuraRustError::InvalidArgument(format!(
                "Cannot bind {} array to variable '{}' of type {}",
                array.dtype(),
                var.name(),
                entry.dtype
            )));
        }
        let array_shape = array.shape();
        if let Some(declared) = &entry.shape {
            if *declared != array_shape {
                return Err(NeuraRustError::ShapeMismatch {
                    expected: declared.clone(),
                    actual: array_shape,
                    operation: format!("bind '{}'", var.name()),
                });
            }
        }
        debug!("Bound {:?} to variable '{}'", array_shape, var.name());
        entry.array = Some(array.clone());
        Ok(())
    }

    /// Declares (or re-declares) the shape of a variable.
    ///
    /// # Errors
    /// `ShapeMismatch` if an array with a different shape is already bound.
    pub fn set_shape(&self, var: &Variable, shape: Vec<usize>) -> Result<(), NeuraRustError> {
        self.check_owned(var)?;
        let mut state = self.write_state();
        let entry = state.variables.get_mut(var.name()).ok_or_else(|| {
            NeuraRustError::InvalidArgument(format!("Unknown variable '{}'", var.name()))
        })?;
        if let Some(array) = &entry.array {
            let bound = array.shape();
            if bound != shape {
                return Err(NeuraRustError::ShapeMismatch {
                    expected: bound,
                    actual: shape,
                    operation: format!("set_shape '{}'", var.name()),
                });
            }
        }
        if let Some(previous) = &entry.shape {
            if *previous != shape {
                warn!(
                    "Variable '{}' shape changed from {:?} to {:?}",
                    var.name(),
                    previous,
                    shape
                );
            }
        }
        entry.shape = Some(shape);
        Ok(())
    }

    /// Adds a type-preserving reduction of `input` and its output variable.
    ///
    /// The output variable is named `"{op_name}_{n}"`, has the input's dtype,
    /// and gets a shape right away if the input shape is known.
    pub fn reduce_same(
        &self,
        kind: ReduceSameKind,
        input: &Variable,
        axes: &[isize],
        keep_dims: bool,
    ) -> Result<(ReduceSameOp, Variable), NeuraRustError> {
        self.check_owned(input)?;
        let op = ReduceSameOp::from_graph(kind, input, axes, keep_dims);
        op.validate_data_types()?;
        let inference = op.calculate_output_shape()?;
        let dtype = op.result_type()?;

        let shape = inference.descriptor().map(|d| d.shape().to_vec());
        let name = {
            // Names taken by user variables are skipped; lookup and insert share one lock.
            let mut state = self.write_state();
            let name = loop {
                state.op_counter += 1;
                let candidate = format!("{}_{}", kind.op_name(), state.op_counter);
                if !state.variables.contains_key(&candidate) {
                    break candidate;
                }
            };
            state.variables.insert(
                name.clone(),
                VariableEntry {
                    dtype,
                    shape,
                    array: None,
                },
            );
            name
        };
        let output = self.handle(&name, dtype);
        debug!("Added {} on '{}' -> '{}'", kind, input.name(), name);
        Ok((op, output))
    }

    /// Re-runs inference for `op` and records a newly resolved shape on `output`.
    pub fn refresh_output(
        &self,
        op: &ReduceSameOp,
        output: &Variable,
    ) -> Result<ShapeInference, NeuraRustError> {
        self.check_owned(output)?;
        let inference = op.calculate_output_shape()?;
        if let ShapeInference::Resolved(descriptor) = &inference {
            if output.declared_shape().as_deref() != Some(descriptor.shape()) {
                self.set_shape(output, descriptor.shape().to_vec())?;
            }
        }
        Ok(inference)
    }
}

#[cfg(test)]
#[path = "graph_test.rs"]
mod tests;
