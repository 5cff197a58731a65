//! Host-memory reference backend for the `axial` array contract.
//!
//! [`HostBackend`] implements [`axial::ArrayBackend`] over plain `Vec`
//! storage with sequential kernels. It exists to pin down semantics
//! (collision order under scatter reductions, the all-or-nothing `out`
//! protocol, bounds and dtype validation) so accelerated backends have
//! an executable reference to agree with.

mod cumulative;
mod dispatch;
mod gather;
mod host;
mod index;
mod inplace;
mod one_hot;
mod outbuf;
mod reduce;
mod scatter;
mod util;

pub use host::HostBackend;
