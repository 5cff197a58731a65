//! One-hot encoding along a new trailing axis.

use axial::{ArrayError, ArrayResult, BackendContext, Buffer, Element, Shape};

use crate::dispatch::with_element;
use crate::index::index_values;

/// Encodes integer `indices` as one-hot rows of length `depth` appended as
/// a new trailing axis, in the context's default float dtype.
pub(crate) fn one_hot(
    context: &BackendContext,
    indices: &Buffer,
    depth: usize,
) -> ArrayResult<Buffer> {
    let idx = index_values("indices", indices)?;
    let mut result_dims = indices.dims().to_vec();
    result_dims.push(depth);
    let result_shape = Shape::new(result_dims);
    let count = result_shape.element_count()?;
    let depth_axis = indices.rank();

    let encoded = with_element!(context.default_float(), E, {
        let mut values = vec![E::zero(); count];
        for (row, &index) in idx.iter().enumerate() {
            if index < 0 || index as usize >= depth {
                return Err(ArrayError::index_out_of_bounds(index, depth_axis, depth));
            }
            values[row * depth + index as usize] = E::one();
        }
        Buffer::from_vec(values, result_shape.clone())?
    });
    Ok(encoded.with_device(context.device().clone()))
}
