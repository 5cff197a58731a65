//! Gather operators: indexed reads from dense buffers.

use axial::{ArrayError, ArrayResult, BackendContext, Buffer};

use crate::dispatch::with_element;
use crate::index::{compute_strides, index_values, linearize_rows, normalize_axis, unravel_index};
use crate::outbuf::{commit, validate_out};

/// Take-along-axis: selects elements of `params` along `axis` at the
/// positions named by `indices`.
pub(crate) fn gather(
    context: &BackendContext,
    params: &Buffer,
    indices: &Buffer,
    axis: isize,
    out: Option<&mut Buffer>,
) -> ArrayResult<Buffer> {
    let axis = normalize_axis("axis", axis, params.rank())?;
    if indices.rank() != params.rank() {
        return Err(ArrayError::invalid_argument(
            "indices",
            format!(
                "expected rank {} to match params, got rank {}",
                params.rank(),
                indices.rank()
            ),
        ));
    }
    let mut expected_dims = params.dims().to_vec();
    expected_dims[axis] = indices.dims()[axis];
    if indices.dims() != expected_dims.as_slice() {
        return Err(ArrayError::shape_mismatch(
            "indices",
            &expected_dims,
            indices.dims(),
        ));
    }

    let idx = index_values("indices", indices)?;
    let result_shape = indices.shape().clone();
    validate_out(out.as_deref(), result_shape.dims(), params.dtype())?;

    let params_strides = compute_strides(params.dims());
    let axis_extent = params.dims()[axis];
    let result_dims = result_shape.dims().to_vec();

    let staged = with_element!(params.dtype(), E, {
        let source = params.values::<E>()?;
        let mut values = Vec::with_capacity(idx.len());
        for (flat, &index) in idx.iter().enumerate() {
            if index < 0 || index as usize >= axis_extent {
                return Err(ArrayError::index_out_of_bounds(index, axis, axis_extent));
            }
            let mut coords = unravel_index(flat, &result_dims);
            coords[axis] = index as usize;
            let offset: usize = coords.iter().zip(&params_strides).map(|(c, s)| c * s).sum();
            values.push(source[offset]);
        }
        Buffer::from_vec(values, result_shape.clone())?
    });
    commit(context, staged, out)
}

/// Gathers whole trailing slices of `params` addressed by coordinate rows;
/// result shape is `indices.shape[:-1] + params.shape[k:]`.
pub(crate) fn gather_nd(
    context: &BackendContext,
    params: &Buffer,
    indices: &Buffer,
    out: Option<&mut Buffer>,
) -> ArrayResult<Buffer> {
    if indices.rank() == 0 {
        return Err(ArrayError::invalid_argument(
            "indices",
            "expected coordinate rows with a trailing coordinate axis, got rank 0".to_string(),
        ));
    }
    let indices_dims = indices.dims();
    let row_len = indices_dims[indices_dims.len() - 1];
    if row_len > params.rank() {
        return Err(ArrayError::invalid_argument(
            "indices",
            format!(
                "coordinate rows of length {row_len} exceed params rank {}",
                params.rank()
            ),
        ));
    }

    let idx = index_values("indices", indices)?;
    let rows = linearize_rows("indices", &idx, row_len, params.dims())?;

    let mut result_dims = indices_dims[..indices_dims.len() - 1].to_vec();
    result_dims.extend_from_slice(&params.dims()[row_len..]);
    validate_out(out.as_deref(), &result_dims, params.dtype())?;

    let staged = with_element!(params.dtype(), E, {
        let source = params.values::<E>()?;
        let mut values = Vec::with_capacity(rows.position_count());
        for &base in &rows.base_offsets {
            values.extend_from_slice(&source[base..base + rows.block_len]);
        }
        Buffer::from_vec(values, result_dims.clone())?
    });
    commit(context, staged, out)
}
