//! Error taxonomy shared by every backend adapter.

use thiserror::Error;

use crate::dtype::DType;

/// Errors surfaced by array operations.
///
/// Every failure names the offending argument and the violated constraint;
/// operations raise them synchronously and never leave a caller-supplied
/// output buffer partially written.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ArrayError {
    #[error("{argument}: {reason}")]
    InvalidArgument {
        argument: &'static str,
        reason: String,
    },

    #[error("{argument}: expected shape {expected:?}, got {got:?}")]
    ShapeMismatch {
        argument: &'static str,
        expected: Vec<usize>,
        got: Vec<usize>,
    },

    #[error("{argument}: expected dtype {expected}, got {got}")]
    DtypeMismatch {
        argument: &'static str,
        expected: DType,
        got: DType,
    },

    #[error("index {index} is out of bounds for axis {axis} with size {size}")]
    IndexOutOfBounds {
        index: i64,
        axis: usize,
        size: usize,
    },
}

impl ArrayError {
    pub fn invalid_argument(argument: &'static str, reason: impl Into<String>) -> Self {
        ArrayError::InvalidArgument {
            argument,
            reason: reason.into(),
        }
    }

    pub fn shape_mismatch(argument: &'static str, expected: &[usize], got: &[usize]) -> Self {
        ArrayError::ShapeMismatch {
            argument,
            expected: expected.to_vec(),
            got: got.to_vec(),
        }
    }

    pub fn dtype_mismatch(argument: &'static str, expected: DType, got: DType) -> Self {
        ArrayError::DtypeMismatch {
            argument,
            expected,
            got,
        }
    }

    pub fn index_out_of_bounds(index: i64, axis: usize, size: usize) -> Self {
        ArrayError::IndexOutOfBounds { index, axis, size }
    }
}

pub type ArrayResult<T> = Result<T, ArrayError>;
