//! The all-or-nothing protocol for caller-supplied output buffers.

use axial::{ArrayError, ArrayResult, BackendContext, Buffer, DType};

/// Checks a caller output buffer against the shape and dtype the operation
/// will produce. Runs before any computation that could be committed.
pub(crate) fn validate_out(out: Option<&Buffer>, dims: &[usize], dtype: DType) -> ArrayResult<()> {
    let Some(existing) = out else {
        return Ok(());
    };
    if existing.dims() != dims {
        return Err(ArrayError::shape_mismatch("out", dims, existing.dims()));
    }
    if existing.dtype() != dtype {
        return Err(ArrayError::dtype_mismatch("out", dtype, existing.dtype()));
    }
    Ok(())
}

/// Moves the staged result into `out` (keeping its device tag) or stamps
/// the fresh buffer with the context device. The only place a caller
/// buffer is ever written, so a failure anywhere earlier leaves `out`
/// untouched.
pub(crate) fn commit(
    context: &BackendContext,
    staged: Buffer,
    out: Option<&mut Buffer>,
) -> ArrayResult<Buffer> {
    match out {
        Some(slot) => {
            let device = slot.device().clone();
            *slot = staged.with_device(device);
            Ok(slot.clone())
        }
        None => Ok(staged.with_device(context.device().clone())),
    }
}
