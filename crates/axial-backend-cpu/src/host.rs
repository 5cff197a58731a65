//! The host-memory backend adapter.

use axial::{ArrayBackend, ArrayResult, BackendContext, Buffer, DType, Reduction, Shape};

use crate::{cumulative, gather, inplace, one_hot, scatter, util};

/// Reference backend operating on buffers in host memory.
///
/// Every operation is a straightforward sequential kernel. The adapter holds
/// its [`BackendContext`] by value; construct one per configuration instead
/// of mutating a shared instance.
#[derive(Debug, Clone, Default)]
pub struct HostBackend {
    context: BackendContext,
}

impl HostBackend {
    pub fn new(context: BackendContext) -> Self {
        HostBackend { context }
    }
}

impl ArrayBackend for HostBackend {
    type Handle = Buffer;

    fn backend_name(&self) -> &'static str {
        "cpu"
    }

    fn context(&self) -> &BackendContext {
        &self.context
    }

    fn scatter_flat(
        &self,
        indices: &Buffer,
        updates: &Buffer,
        size: Option<usize>,
        reduction: Reduction,
        out: Option<&mut Buffer>,
    ) -> ArrayResult<Buffer> {
        scatter::scatter_flat(&self.context, indices, updates, size, reduction, out)
    }

    fn scatter_nd(
        &self,
        indices: &Buffer,
        updates: &Buffer,
        shape: Option<&Shape>,
        reduction: Reduction,
        out: Option<&mut Buffer>,
    ) -> ArrayResult<Buffer> {
        scatter::scatter_nd(&self.context, indices, updates, shape, reduction, out)
    }

    fn gather(
        &self,
        params: &Buffer,
        indices: &Buffer,
        axis: isize,
        out: Option<&mut Buffer>,
    ) -> ArrayResult<Buffer> {
        gather::gather(&self.context, params, indices, axis, out)
    }

    fn gather_nd(
        &self,
        params: &Buffer,
        indices: &Buffer,
        out: Option<&mut Buffer>,
    ) -> ArrayResult<Buffer> {
        gather::gather_nd(&self.context, params, indices, out)
    }

    fn one_hot(&self, indices: &Buffer, depth: usize) -> ArrayResult<Buffer> {
        one_hot::one_hot(&self.context, indices, depth)
    }

    fn cumsum(
        &self,
        x: &Buffer,
        axis: isize,
        dtype: Option<DType>,
        out: Option<&mut Buffer>,
    ) -> ArrayResult<Buffer> {
        cumulative::cumsum(&self.context, x, axis, dtype, out)
    }

    fn cumprod(
        &self,
        x: &Buffer,
        axis: isize,
        exclusive: bool,
        dtype: Option<DType>,
        out: Option<&mut Buffer>,
    ) -> ArrayResult<Buffer> {
        cumulative::cumprod(&self.context, x, axis, exclusive, dtype, out)
    }

    fn copy(&self, x: &Buffer) -> ArrayResult<Buffer> {
        inplace::copy(&self.context, x)
    }

    fn array_equal(&self, lhs: &Buffer, rhs: &Buffer) -> bool {
        inplace::array_equal(lhs, rhs)
    }

    fn inplace_update(&self, x: &mut Buffer, values: &Buffer) -> ArrayResult<()> {
        inplace::inplace_update(x, values)
    }

    fn inplace_increment(&self, x: &mut Buffer, values: &Buffer) -> ArrayResult<()> {
        inplace::inplace_increment(x, values)
    }

    fn inplace_decrement(&self, x: &mut Buffer, values: &Buffer) -> ArrayResult<()> {
        inplace::inplace_decrement(x, values)
    }

    fn unstack(&self, x: &Buffer, axis: isize, keepdims: bool) -> ArrayResult<Vec<Buffer>> {
        util::unstack(&self.context, x, axis, keepdims)
    }

    fn indices_where(&self, mask: &Buffer) -> ArrayResult<Buffer> {
        util::indices_where(&self.context, mask)
    }
}
