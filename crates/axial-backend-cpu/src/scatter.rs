//! Scatter operators: sparse indexed writes with collision reduction.

use axial::{ArrayError, ArrayResult, BackendContext, Buffer, Reduction, Shape};

use crate::dispatch::with_element;
use crate::index::{broadcast_offset, broadcast_strides, index_values, linearize_rows};
use crate::outbuf::commit;
use crate::reduce::scatter_apply;

/// Scatters `updates` into a rank-1 target at the flat positions named by
/// `indices`.
pub(crate) fn scatter_flat(
    context: &BackendContext,
    indices: &Buffer,
    updates: &Buffer,
    size: Option<usize>,
    reduction: Reduction,
    out: Option<&mut Buffer>,
) -> ArrayResult<Buffer> {
    if indices.rank() != 1 {
        return Err(ArrayError::invalid_argument(
            "indices",
            format!(
                "expected a rank-1 buffer of flat positions, got rank {}",
                indices.rank()
            ),
        ));
    }
    let idx = index_values("indices", indices)?;

    let out_ref = out.as_deref();
    let length = resolve_flat_length(size, out_ref)?;
    let target_shape = Shape::from([length]);
    let expected_update_dims = [idx.len()];

    let staged = scatter_into(
        &idx,
        1,
        &target_shape,
        updates,
        &expected_update_dims,
        reduction,
        out_ref,
    )?;
    commit(context, staged, out)
}

/// Scatters `updates` into an N-dimensional target addressed by coordinate
/// rows; rows shorter than the target rank address whole trailing blocks.
pub(crate) fn scatter_nd(
    context: &BackendContext,
    indices: &Buffer,
    updates: &Buffer,
    shape: Option<&Shape>,
    reduction: Reduction,
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

    let out_ref = out.as_deref();
    let target_shape = resolve_nd_shape(shape, out_ref)?;
    if row_len > target_shape.rank() {
        return Err(ArrayError::invalid_argument(
            "indices",
            format!(
                "coordinate rows of length {row_len} exceed target rank {}",
                target_shape.rank()
            ),
        ));
    }

    let idx = index_values("indices", indices)?;
    let mut expected_update_dims = indices_dims[..indices_dims.len() - 1].to_vec();
    expected_update_dims.extend_from_slice(&target_shape.dims()[row_len..]);

    let staged = scatter_into(
        &idx,
        row_len,
        &target_shape,
        updates,
        &expected_update_dims,
        reduction,
        out_ref,
    )?;
    commit(context, staged, out)
}

/// Shared scatter core: validates dtypes and broadcast compatibility,
/// linearizes every row (bounds included), then applies the reduction onto
/// a staged target. The caller's `out` is never written here.
fn scatter_into(
    idx: &[i64],
    row_len: usize,
    target_shape: &Shape,
    updates: &Buffer,
    expected_update_dims: &[usize],
    reduction: Reduction,
    out: Option<&Buffer>,
) -> ArrayResult<Buffer> {
    let target_dtype = match out {
        Some(existing) => existing.dtype(),
        None => updates.dtype(),
    };
    if !updates.dtype().safely_casts_to(target_dtype) {
        return Err(ArrayError::dtype_mismatch(
            "updates",
            target_dtype,
            updates.dtype(),
        ));
    }
    let coerced;
    let updates = if updates.dtype() == target_dtype {
        updates
    } else {
        coerced = updates.cast(target_dtype);
        &coerced
    };

    let update_strides = broadcast_strides("updates", updates.dims(), expected_update_dims)?;
    let rows = linearize_rows("indices", idx, row_len, target_shape.dims())?;

    let fresh_minmax = out.is_none() && matches!(reduction, Reduction::Min | Reduction::Max);
    let mut staged = match out {
        Some(existing) => existing.clone(),
        None => Buffer::zeros(target_dtype, target_shape.clone())?,
    };

    with_element!(target_dtype, E, {
        let update_values = updates.values::<E>()?;
        let target_values = staged.values_mut::<E>()?;
        let mut mask;
        let touched = if fresh_minmax {
            mask = vec![false; target_values.len()];
            Some(&mut mask[..])
        } else {
            None
        };
        scatter_apply(
            reduction,
            target_values,
            touched,
            &rows.base_offsets,
            rows.block_len,
            |pos| update_values[broadcast_offset(pos, expected_update_dims, &update_strides)],
        );
    });

    Ok(staged)
}

fn resolve_flat_length(size: Option<usize>, out: Option<&Buffer>) -> ArrayResult<usize> {
    match (size, out) {
        (Some(size), Some(existing)) => {
            if existing.rank() != 1 || existing.dims()[0] != size {
                return Err(ArrayError::shape_mismatch("out", &[size], existing.dims()));
            }
            Ok(size)
        }
        (Some(size), None) => Ok(size),
        (None, Some(existing)) => {
            if existing.rank() != 1 {
                return Err(ArrayError::invalid_argument(
                    "out",
                    format!("flat scatter target must be rank 1, got rank {}", existing.rank()),
                ));
            }
            Ok(existing.dims()[0])
        }
        (None, None) => Err(ArrayError::invalid_argument(
            "size",
            "either size or an output buffer must determine the target length".to_string(),
        )),
    }
}

fn resolve_nd_shape(shape: Option<&Shape>, out: Option<&Buffer>) -> ArrayResult<Shape> {
    match (shape, out) {
        (Some(shape), Some(existing)) => {
            if existing.dims() != shape.dims() {
                return Err(ArrayError::shape_mismatch(
                    "out",
                    shape.dims(),
                    existing.dims(),
                ));
            }
            Ok(shape.clone())
        }
        (Some(shape), None) => {
            // A declared target has no buffer vouching for it yet.
            shape.element_count()?;
            Ok(shape.clone())
        }
        (None, Some(existing)) => Ok(existing.shape().clone()),
        (None, None) => Err(ArrayError::invalid_argument(
            "shape",
            "either shape or an output buffer must determine the target shape".to_string(),
        )),
    }
}
