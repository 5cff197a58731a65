//! Structural helpers: axis unstacking and boolean coordinate extraction.

use axial::{ArrayError, ArrayResult, BackendContext, Buffer, DType, Shape};

use crate::dispatch::with_element;
use crate::index::{extent_product, normalize_axis, unravel_index};

/// Splits `x` into its slices along `axis`. With `keepdims` the split axis
/// survives with extent 1, otherwise it is removed.
pub(crate) fn unstack(
    context: &BackendContext,
    x: &Buffer,
    axis: isize,
    keepdims: bool,
) -> ArrayResult<Vec<Buffer>> {
    if x.rank() == 0 {
        return Ok(vec![x.clone()]);
    }
    let axis = normalize_axis("axis", axis, x.rank())?;
    let dims = x.dims();
    let outer = extent_product(&dims[..axis]);
    let n = dims[axis];
    let inner = extent_product(&dims[axis + 1..]);

    let mut slice_dims = dims.to_vec();
    if keepdims {
        slice_dims[axis] = 1;
    } else {
        slice_dims.remove(axis);
    }
    let slice_shape = Shape::new(slice_dims);

    let mut slices = Vec::with_capacity(n);
    with_element!(x.dtype(), E, {
        let source = x.values::<E>()?;
        for s in 0..n {
            let mut values = Vec::with_capacity(outer * inner);
            for o in 0..outer {
                let start = (o * n + s) * inner;
                values.extend_from_slice(&source[start..start + inner]);
            }
            let slice = Buffer::from_vec(values, slice_shape.clone())?;
            slices.push(slice.with_device(context.device().clone()));
        }
    });
    Ok(slices)
}

/// Coordinates of every true cell in `mask`, one row per hit, shaped
/// `[count, rank]`. Rows follow row-major order of the mask.
pub(crate) fn indices_where(context: &BackendContext, mask: &Buffer) -> ArrayResult<Buffer> {
    if mask.dtype() != DType::Bool {
        return Err(ArrayError::dtype_mismatch("mask", DType::Bool, mask.dtype()));
    }
    let dims = mask.dims();
    let values = mask.values::<bool>()?;

    let mut coords: Vec<i64> = Vec::new();
    let mut count = 0usize;
    for (flat, &hit) in values.iter().enumerate() {
        if hit {
            count += 1;
            for coord in unravel_index(flat, dims) {
                coords.push(coord as i64);
            }
        }
    }

    let found = Buffer::from_vec(coords, Shape::new(vec![count, mask.rank()]))?;
    Ok(found.with_device(context.device().clone()))
}
