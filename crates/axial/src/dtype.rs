//! Element kinds a buffer can store.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Closed set of element types supported by [`Buffer`](crate::Buffer) storage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DType {
    F32,
    F64,
    I32,
    I64,
    Bool,
}

impl DType {
    /// Returns true for floating-point kinds.
    pub fn is_float(self) -> bool {
        matches!(self, DType::F32 | DType::F64)
    }

    /// Returns true for signed-integer kinds.
    pub fn is_integer(self) -> bool {
        matches!(self, DType::I32 | DType::I64)
    }

    pub fn is_bool(self) -> bool {
        matches!(self, DType::Bool)
    }

    /// Logical width used by the widening rules in
    /// [`BackendContext::working_dtype`](crate::BackendContext::working_dtype).
    pub fn bitwidth(self) -> usize {
        match self {
            DType::F32 | DType::I32 => 32,
            DType::F64 | DType::I64 => 64,
            DType::Bool => 8,
        }
    }

    pub fn size_in_bytes(self) -> usize {
        match self {
            DType::F32 | DType::I32 => 4,
            DType::F64 | DType::I64 => 8,
            DType::Bool => 1,
        }
    }

    /// True when a value of `self` converts to `target` without changing its
    /// meaning: identical kinds, bool to any numeric kind, or widening that
    /// keeps every representable value exact. Lossy conversions (for example
    /// `I32` to `F32`, whose mantissa cannot hold every 32-bit integer) are
    /// rejected here; [`Buffer::cast`](crate::Buffer::cast) stays available
    /// for callers that want them anyway.
    pub fn safely_casts_to(self, target: DType) -> bool {
        if self == target {
            return true;
        }
        match self {
            DType::Bool => true,
            DType::I32 => matches!(target, DType::I64 | DType::F64),
            DType::F32 => matches!(target, DType::F64),
            DType::I64 | DType::F64 => false,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            DType::F32 => "f32",
            DType::F64 => "f64",
            DType::I32 => "i32",
            DType::I64 => "i64",
            DType::Bool => "bool",
        }
    }
}

impl fmt::Display for DType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
