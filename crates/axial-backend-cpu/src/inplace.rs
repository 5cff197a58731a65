//! In-place collaborators and whole-buffer utilities.

use axial::{ArrayError, ArrayResult, BackendContext, Buffer, Element};

use crate::dispatch::with_element;

/// Deep copy with fresh storage, tagged with the context device.
pub(crate) fn copy(context: &BackendContext, x: &Buffer) -> ArrayResult<Buffer> {
    Ok(x.clone().with_device(context.device().clone()))
}

/// True iff shapes, dtypes and every element agree. Device tags are
/// deliberately ignored.
pub(crate) fn array_equal(lhs: &Buffer, rhs: &Buffer) -> bool {
    lhs.dtype() == rhs.dtype() && lhs.dims() == rhs.dims() && lhs.data() == rhs.data()
}

#[derive(Debug, Clone, Copy)]
enum InplaceOp {
    Assign,
    Add,
    Sub,
}

pub(crate) fn inplace_update(x: &mut Buffer, values: &Buffer) -> ArrayResult<()> {
    apply_inplace(x, values, InplaceOp::Assign)
}

pub(crate) fn inplace_increment(x: &mut Buffer, values: &Buffer) -> ArrayResult<()> {
    apply_inplace(x, values, InplaceOp::Add)
}

pub(crate) fn inplace_decrement(x: &mut Buffer, values: &Buffer) -> ArrayResult<()> {
    apply_inplace(x, values, InplaceOp::Sub)
}

/// Shared core for the in-place trio: exact shape match, safe dtype
/// coercion toward `x`, then a single elementwise pass. `x` keeps its
/// device tag. Validation happens before the first write.
fn apply_inplace(x: &mut Buffer, values: &Buffer, op: InplaceOp) -> ArrayResult<()> {
    if values.dims() != x.dims() {
        return Err(ArrayError::shape_mismatch("values", x.dims(), values.dims()));
    }
    if !values.dtype().safely_casts_to(x.dtype()) {
        return Err(ArrayError::dtype_mismatch(
            "values",
            x.dtype(),
            values.dtype(),
        ));
    }
    let coerced;
    let values = if values.dtype() == x.dtype() {
        values
    } else {
        coerced = values.cast(x.dtype());
        &coerced
    };

    with_element!(x.dtype(), E, {
        let src = values.values::<E>()?;
        let dst = x.values_mut::<E>()?;
        match op {
            InplaceOp::Assign => dst.copy_from_slice(src),
            InplaceOp::Add => {
                for (d, &s) in dst.iter_mut().zip(src) {
                    *d = d.add(s);
                }
            }
            InplaceOp::Sub => {
                for (d, &s) in dst.iter_mut().zip(src) {
                    *d = d.sub(s);
                }
            }
        }
    });
    Ok(())
}
