//! Shape arithmetic for reductions.

use crate::config::ShapeFormat;
use crate::error::NeuraRustError;

/// Processes the axes provided for a reduction operation.
///
/// Negative axes count from the end (`-1` is the last dimension). The result
/// is sorted and free of duplicates. An empty slice stays empty; callers treat
/// that as "every axis".
///
/// # Errors
/// `NeuraRustError::InvalidAxis` if an axis lies outside `[-rank, rank)`.
pub fn normalize_axes(rank: usize, axes: &[isize]) -> Result<Vec<usize>, NeuraRustError> {
    let signed_rank = rank as isize;
    let mut processed = Vec::with_capacity(axes.len());
    for &axis in axes {
        let resolved = if axis < 0 { axis + signed_rank } else { axis };
        if resolved < 0 || resolved >= signed_rank {
            return Err(NeuraRustError::InvalidAxis { axis, rank });
        }
        processed.push(resolved as usize);
    }
    processed.sort_unstable();
    processed.dedup();
    Ok(processed)
}

/// Returns `true` if reducing over `axes` collapses every dimension.
///
/// `axes` must already be normalized (see [`normalize_axes`]).
pub fn is_whole_array(rank: usize, axes: &[usize]) -> bool {
    axes.is_empty() || axes.len() == rank
}

/// Computes the shape produced by reducing `input_shape` over `axes`.
///
/// - Whole-array reductions give `[]`, or `[1; rank]` with `keep_dims`.
/// - With `keep_dims`, every reduced axis is kept with size 1.
/// - Otherwise reduced axes are removed. Under [`ShapeFormat::Legacy`] a rank-2
///   input reduced along a single axis keeps rank 2 with that axis set to 1.
///
/// # Errors
/// `NeuraRustError::InvalidAxis` for axes outside the input rank.
pub fn reduced_shape(
    input_shape: &[usize],
    axes: &[isize],
    keep_dims: bool,
    format: ShapeFormat,
) -> Result<Vec<usize>, NeuraRustError> {
    let rank = input_shape.len();
    let axes = normalize_axes(rank, axes)?;

    if is_whole_array(rank, &axes) {
        return Ok(if keep_dims { vec![1; rank] } else { vec![] });
    }

    if keep_dims || (format.is_legacy() && rank == 2 && axes.len() == 1) {
        let mut output_shape = input_shape.to_vec();
        for &axis in &axes {
            output_shape[axis] = 1;
        }
        return Ok(output_shape);
    }

    Ok(input_shape
        .iter()
        .enumerate()
        .filter(|(i, _)| !axes.contains(i))
        .map(|(_, &dim)| dim)
        .collect())
}

#[cfg(test)]
#[path = "reduced_test.rs"]
mod tests;
