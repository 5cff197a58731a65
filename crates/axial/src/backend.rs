//! The language-agnostic operation surface backends implement.

use crate::context::BackendContext;
use crate::dtype::DType;
use crate::error::ArrayResult;
use crate::reduction::Reduction;
use crate::shape::Shape;

/// Operation surface every backend adapter provides.
///
/// The scatter/gather family is the load-bearing part: sparse indexed
/// writes with collision reduction and their inverse reads. The rest is the
/// collaborator surface the surrounding framework expects from any adapter
/// (cumulative ops, one-hot encoding, in-place utilities, equality).
///
/// Contract shared by all operations taking `out`: the target shape may come
/// from an explicit `size`/`shape` argument or from `out`, and when both are
/// present they must agree. Commits into `out` are all-or-nothing; a failed
/// call leaves `out` exactly as it was.
pub trait ArrayBackend: Send + Sync {
    /// Dense array handle this backend operates on.
    type Handle: Clone + Send + Sync + 'static;

    /// Stable identifier for the framework's backend registry.
    fn backend_name(&self) -> &'static str;

    /// Configuration the backend was constructed with.
    fn context(&self) -> &BackendContext;

    /// True when the backend can commit results into caller-owned buffers.
    fn supports_inplace_updates(&self) -> bool {
        true
    }

    /// Scatters `updates` into a rank-1 target at flat positions `indices`,
    /// combining collisions under `reduction`.
    fn scatter_flat(
        &self,
        indices: &Self::Handle,
        updates: &Self::Handle,
        size: Option<usize>,
        reduction: Reduction,
        out: Option<&mut Self::Handle>,
    ) -> ArrayResult<Self::Handle>;

    /// Scatters `updates` into an N-dimensional target addressed by
    /// coordinate rows; rows shorter than the target rank address whole
    /// trailing blocks.
    fn scatter_nd(
        &self,
        indices: &Self::Handle,
        updates: &Self::Handle,
        shape: Option<&Shape>,
        reduction: Reduction,
        out: Option<&mut Self::Handle>,
    ) -> ArrayResult<Self::Handle>;

    /// Take-along-axis: selects elements of `params` along `axis` at the
    /// positions named by `indices` (same rank, matching extents elsewhere).
    fn gather(
        &self,
        params: &Self::Handle,
        indices: &Self::Handle,
        axis: isize,
        out: Option<&mut Self::Handle>,
    ) -> ArrayResult<Self::Handle>;

    /// Gathers trailing slices of `params` addressed by coordinate rows;
    /// the result shape is `indices.shape[:-1] + params.shape[k:]`.
    fn gather_nd(
        &self,
        params: &Self::Handle,
        indices: &Self::Handle,
        out: Option<&mut Self::Handle>,
    ) -> ArrayResult<Self::Handle>;

    /// Encodes integer `indices` as one-hot rows along a new trailing axis
    /// of length `depth`, in the context's default float dtype.
    fn one_hot(&self, indices: &Self::Handle, depth: usize) -> ArrayResult<Self::Handle>;

    /// Running sum along `axis`; `dtype` defaults to the context's working
    /// dtype for the input.
    fn cumsum(
        &self,
        x: &Self::Handle,
        axis: isize,
        dtype: Option<DType>,
        out: Option<&mut Self::Handle>,
    ) -> ArrayResult<Self::Handle>;

    /// Running product along `axis`. The exclusive variant shifts values
    /// right by one along the axis and seeds position 0 with the
    /// multiplicative identity.
    fn cumprod(
        &self,
        x: &Self::Handle,
        axis: isize,
        exclusive: bool,
        dtype: Option<DType>,
        out: Option<&mut Self::Handle>,
    ) -> ArrayResult<Self::Handle>;

    /// Deep copy with fresh storage.
    fn copy(&self, x: &Self::Handle) -> ArrayResult<Self::Handle>;

    /// True iff shapes, dtypes and every element agree.
    fn array_equal(&self, lhs: &Self::Handle, rhs: &Self::Handle) -> bool;

    /// Overwrites `x`'s contents with `values` (shapes must match exactly,
    /// dtype coerced when safe).
    fn inplace_update(&self, x: &mut Self::Handle, values: &Self::Handle) -> ArrayResult<()>;

    /// Elementwise `+=` with the same shape/dtype rules as
    /// [`inplace_update`](ArrayBackend::inplace_update).
    fn inplace_increment(&self, x: &mut Self::Handle, values: &Self::Handle) -> ArrayResult<()>;

    /// Elementwise `-=` with the same shape/dtype rules as
    /// [`inplace_update`](ArrayBackend::inplace_update).
    fn inplace_decrement(&self, x: &mut Self::Handle, values: &Self::Handle) -> ArrayResult<()>;

    /// Splits `x` into its slices along `axis`, squeezing the axis away
    /// unless `keepdims` is set. Rank-0 input yields the buffer unchanged.
    fn unstack(
        &self,
        x: &Self::Handle,
        axis: isize,
        keepdims: bool,
    ) -> ArrayResult<Vec<Self::Handle>>;

    /// Coordinates of every true cell of a bool buffer, as an `I64` buffer
    /// of shape `[n_true, rank]`.
    fn indices_where(&self, mask: &Self::Handle) -> ArrayResult<Self::Handle>;
}
