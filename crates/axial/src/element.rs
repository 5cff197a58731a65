//! Scalar types that can live inside buffer storage.

use std::ops::{Add, Mul, Sub};

use crate::buffer::BufferData;
use crate::dtype::DType;

/// Rust scalar types backing one [`DType`] each.
///
/// The combine primitives are what the reduction rules are built from; for
/// `bool` they take their lattice meaning (`add`/`maximum` are OR,
/// `mul`/`minimum` are AND), and integer `add`/`sub`/`mul` wrap on overflow
/// (two's complement). The `i64`/`f64` accessors are the widening bridge
/// used by [`Buffer::cast`](crate::Buffer::cast): integer and bool sources
/// travel through `i64`, float sources through `f64`.
pub trait Element: Copy + PartialEq + PartialOrd + Send + Sync + 'static {
    const DTYPE: DType;

    fn zero() -> Self;
    fn one() -> Self;

    fn add(self, rhs: Self) -> Self;
    fn sub(self, rhs: Self) -> Self;
    fn mul(self, rhs: Self) -> Self;
    fn minimum(self, rhs: Self) -> Self;
    fn maximum(self, rhs: Self) -> Self;

    fn from_i64(value: i64) -> Self;
    fn to_i64(self) -> i64;
    fn from_f64(value: f64) -> Self;
    fn to_f64(self) -> f64;

    fn wrap(values: Vec<Self>) -> BufferData;
    fn slice(data: &BufferData) -> Option<&[Self]>;
    fn slice_mut(data: &mut BufferData) -> Option<&mut [Self]>;
}

macro_rules! numeric_element {
    ($ty:ty, $dtype:expr, $variant:ident, $add:path, $sub:path, $mul:path, $min:path, $max:path) => {
        impl Element for $ty {
            const DTYPE: DType = $dtype;

            fn zero() -> Self {
                0 as $ty
            }

            fn one() -> Self {
                1 as $ty
            }

            fn add(self, rhs: Self) -> Self {
                $add(self, rhs)
            }

            fn sub(self, rhs: Self) -> Self {
                $sub(self, rhs)
            }

            fn mul(self, rhs: Self) -> Self {
                $mul(self, rhs)
            }

            fn minimum(self, rhs: Self) -> Self {
                $min(self, rhs)
            }

            fn maximum(self, rhs: Self) -> Self {
                $max(self, rhs)
            }

            fn from_i64(value: i64) -> Self {
                value as $ty
            }

            fn to_i64(self) -> i64 {
                self as i64
            }

            fn from_f64(value: f64) -> Self {
                value as $ty
            }

            fn to_f64(self) -> f64 {
                self as f64
            }

            fn wrap(values: Vec<Self>) -> BufferData {
                BufferData::$variant(values)
            }

            fn slice(data: &BufferData) -> Option<&[Self]> {
                match data {
                    BufferData::$variant(values) => Some(values),
                    _ => None,
                }
            }

            fn slice_mut(data: &mut BufferData) -> Option<&mut [Self]> {
                match data {
                    BufferData::$variant(values) => Some(values),
                    _ => None,
                }
            }
        }
    };
}

numeric_element!(f32, DType::F32, F32, Add::add, Sub::sub, Mul::mul, f32::min, f32::max);
numeric_element!(f64, DType::F64, F64, Add::add, Sub::sub, Mul::mul, f64::min, f64::max);
numeric_element!(
    i32,
    DType::I32,
    I32,
    i32::wrapping_add,
    i32::wrapping_sub,
    i32::wrapping_mul,
    Ord::min,
    Ord::max
);
numeric_element!(
    i64,
    DType::I64,
    I64,
    i64::wrapping_add,
    i64::wrapping_sub,
    i64::wrapping_mul,
    Ord::min,
    Ord::max
);

impl Element for bool {
    const DTYPE: DType = DType::Bool;

    fn zero() -> Self {
        false
    }

    fn one() -> Self {
        true
    }

    fn add(self, rhs: Self) -> Self {
        self | rhs
    }

    fn sub(self, rhs: Self) -> Self {
        self & !rhs
    }

    fn mul(self, rhs: Self) -> Self {
        self & rhs
    }

    fn minimum(self, rhs: Self) -> Self {
        self & rhs
    }

    fn maximum(self, rhs: Self) -> Self {
        self | rhs
    }

    fn from_i64(value: i64) -> Self {
        value != 0
    }

    fn to_i64(self) -> i64 {
        i64::from(self)
    }

    fn from_f64(value: f64) -> Self {
        value != 0.0
    }

    fn to_f64(self) -> f64 {
        f64::from(u8::from(self))
    }

    fn wrap(values: Vec<Self>) -> BufferData {
        BufferData::Bool(values)
    }

    fn slice(data: &BufferData) -> Option<&[Self]> {
        match data {
            BufferData::Bool(values) => Some(values),
            _ => None,
        }
    }

    fn slice_mut(data: &mut BufferData) -> Option<&mut [Self]> {
        match data {
            BufferData::Bool(values) => Some(values),
            _ => None,
        }
    }
}
