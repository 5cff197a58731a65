//! Runtime dtype dispatch onto generic element kernels.

/// Expands `$body` once per storage dtype with `$ty` aliased to the
/// matching Rust scalar, and selects the arm for `$dtype` at runtime.
macro_rules! with_element {
    ($dtype:expr, $ty:ident, $body:block) => {
        match $dtype {
            axial::DType::F32 => {
                type $ty = f32;
                $body
            }
            axial::DType::F64 => {
                type $ty = f64;
                $body
            }
            axial::DType::I32 => {
                type $ty = i32;
                $body
            }
            axial::DType::I64 => {
                type $ty = i64;
                $body
            }
            axial::DType::Bool => {
                type $ty = bool;
                $body
            }
        }
    };
}

pub(crate) use with_element;
