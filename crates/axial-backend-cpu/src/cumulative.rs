//! Cumulative reductions along an axis.

use axial::{ArrayResult, BackendContext, Buffer, DType, Element};

use crate::dispatch::with_element;
use crate::index::normalize_axis;
use crate::outbuf::{commit, validate_out};

#[derive(Debug, Clone, Copy)]
enum Accumulate {
    Sum,
    Prod,
}

impl Accumulate {
    fn identity<E: Element>(self) -> E {
        match self {
            Accumulate::Sum => E::zero(),
            Accumulate::Prod => E::one(),
        }
    }

    fn apply<E: Element>(self, acc: E, value: E) -> E {
        match self {
            Accumulate::Sum => acc.add(value),
            Accumulate::Prod => acc.mul(value),
        }
    }
}

/// Running sum along `axis`.
pub(crate) fn cumsum(
    context: &BackendContext,
    x: &Buffer,
    axis: isize,
    dtype: Option<DType>,
    out: Option<&mut Buffer>,
) -> ArrayResult<Buffer> {
    cumulative(context, x, axis, Accumulate::Sum, false, dtype, out)
}

/// Running product along `axis`; the exclusive variant shifts values right
/// by one along the axis and seeds position 0 with the multiplicative
/// identity, so the last input element never contributes.
pub(crate) fn cumprod(
    context: &BackendContext,
    x: &Buffer,
    axis: isize,
    exclusive: bool,
    dtype: Option<DType>,
    out: Option<&mut Buffer>,
) -> ArrayResult<Buffer> {
    cumulative(context, x, axis, Accumulate::Prod, exclusive, dtype, out)
}

fn cumulative(
    context: &BackendContext,
    x: &Buffer,
    axis: isize,
    kind: Accumulate,
    exclusive: bool,
    dtype: Option<DType>,
    out: Option<&mut Buffer>,
) -> ArrayResult<Buffer> {
    let axis = normalize_axis("axis", axis, x.rank())?;
    let result_dtype = dtype.unwrap_or_else(|| context.working_dtype(x.dtype()));
    validate_out(out.as_deref(), x.dims(), result_dtype)?;

    let coerced;
    let source = if x.dtype() == result_dtype {
        x
    } else {
        coerced = x.cast(result_dtype);
        &coerced
    };

    let mut staged = Buffer::zeros(result_dtype, x.shape().clone())?;
    if x.element_count() == 0 {
        return commit(context, staged, out);
    }

    // Past the empty check every extent is nonzero and the loop products
    // divide the checked element count.
    let dims = x.dims();
    let axis_len = dims[axis];
    let outer: usize = dims[..axis].iter().product();
    let inner: usize = dims[axis + 1..].iter().product();
    with_element!(result_dtype, E, {
        let src = source.values::<E>()?;
        let dst = staged.values_mut::<E>()?;
        for o in 0..outer {
            for i in 0..inner {
                let mut acc = kind.identity::<E>();
                for a in 0..axis_len {
                    let offset = (o * axis_len + a) * inner + i;
                    if exclusive {
                        dst[offset] = acc;
                        acc = kind.apply(acc, src[offset]);
                    } else {
                        acc = kind.apply(acc, src[offset]);
                        dst[offset] = acc;
                    }
                }
            }
        }
    });
    commit(context, staged, out)
}
