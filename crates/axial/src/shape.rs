//! Dense rectangular extents.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{ArrayError, ArrayResult};

/// Ordered per-axis extents of a dense row-major buffer.
///
/// Rank 0 is the scalar shape (one element). Extents of zero are legal and
/// describe empty buffers.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Shape {
    dims: Vec<usize>,
}

impl Shape {
    pub fn new(dims: Vec<usize>) -> Self {
        Shape { dims }
    }

    pub fn scalar() -> Self {
        Shape { dims: Vec::new() }
    }

    pub fn dims(&self) -> &[usize] {
        &self.dims
    }

    pub fn rank(&self) -> usize {
        self.dims.len()
    }

    /// Total number of elements, with overflow reported instead of wrapped.
    pub fn element_count(&self) -> ArrayResult<usize> {
        let mut count = 1usize;
        for &dim in &self.dims {
            count = count.checked_mul(dim).ok_or_else(|| {
                ArrayError::invalid_argument(
                    "shape",
                    format!("element count of {:?} overflows usize", self.dims),
                )
            })?;
        }
        Ok(count)
    }
}

impl From<Vec<usize>> for Shape {
    fn from(dims: Vec<usize>) -> Self {
        Shape::new(dims)
    }
}

impl From<&[usize]> for Shape {
    fn from(dims: &[usize]) -> Self {
        Shape::new(dims.to_vec())
    }
}

impl<const N: usize> From<[usize; N]> for Shape {
    fn from(dims: [usize; N]) -> Self {
        Shape::new(dims.to_vec())
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self.dims)
    }
}
