//! Dense typed N-dimensional arrays.

use crate::device::Device;
use crate::dtype::DType;
use crate::element::Element;
use crate::error::{ArrayError, ArrayResult};
use crate::shape::Shape;

/// Storage for one buffer: a tagged vector per supported dtype.
#[derive(Debug, Clone, PartialEq)]
pub enum BufferData {
    F32(Vec<f32>),
    F64(Vec<f64>),
    I32(Vec<i32>),
    I64(Vec<i64>),
    Bool(Vec<bool>),
}

impl BufferData {
    pub fn dtype(&self) -> DType {
        match self {
            BufferData::F32(_) => DType::F32,
            BufferData::F64(_) => DType::F64,
            BufferData::I32(_) => DType::I32,
            BufferData::I64(_) => DType::I64,
            BufferData::Bool(_) => DType::Bool,
        }
    }

    pub fn len(&self) -> usize {
        match self {
            BufferData::F32(values) => values.len(),
            BufferData::F64(values) => values.len(),
            BufferData::I32(values) => values.len(),
            BufferData::I64(values) => values.len(),
            BufferData::Bool(values) => values.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Dense, rectangular, homogeneously-typed N-dimensional array.
///
/// A buffer owns its storage outright; the only aliasing an operation ever
/// sees is the explicit `out` parameter of the backend surface. The shape,
/// storage length and dtype tag stay consistent by construction: the
/// constructors validate and the accessors cannot resize.
#[derive(Debug, Clone, PartialEq)]
pub struct Buffer {
    shape: Shape,
    device: Device,
    data: BufferData,
}

impl Buffer {
    /// Wraps `values` as a buffer of the given shape.
    pub fn from_vec<E: Element>(values: Vec<E>, shape: impl Into<Shape>) -> ArrayResult<Buffer> {
        let shape = shape.into();
        let count = shape.element_count()?;
        if count != values.len() {
            return Err(ArrayError::shape_mismatch(
                "values",
                shape.dims(),
                &[values.len()],
            ));
        }
        Ok(Buffer {
            shape,
            device: Device::default(),
            data: E::wrap(values),
        })
    }

    /// Rank-0 buffer holding a single value.
    pub fn from_scalar<E: Element>(value: E) -> Buffer {
        Buffer {
            shape: Shape::scalar(),
            device: Device::default(),
            data: E::wrap(vec![value]),
        }
    }

    pub fn zeros(dtype: DType, shape: impl Into<Shape>) -> ArrayResult<Buffer> {
        let shape = shape.into();
        let count = shape.element_count()?;
        let data = match dtype {
            DType::F32 => BufferData::F32(vec![0.0; count]),
            DType::F64 => BufferData::F64(vec![0.0; count]),
            DType::I32 => BufferData::I32(vec![0; count]),
            DType::I64 => BufferData::I64(vec![0; count]),
            DType::Bool => BufferData::Bool(vec![false; count]),
        };
        Ok(Buffer {
            shape,
            device: Device::default(),
            data,
        })
    }

    pub fn filled<E: Element>(value: E, shape: impl Into<Shape>) -> ArrayResult<Buffer> {
        let shape = shape.into();
        let count = shape.element_count()?;
        Ok(Buffer {
            shape,
            device: Device::default(),
            data: E::wrap(vec![value; count]),
        })
    }

    pub fn shape(&self) -> &Shape {
        &self.shape
    }

    pub fn dims(&self) -> &[usize] {
        self.shape.dims()
    }

    pub fn rank(&self) -> usize {
        self.shape.rank()
    }

    pub fn dtype(&self) -> DType {
        self.data.dtype()
    }

    pub fn device(&self) -> &Device {
        &self.device
    }

    pub fn element_count(&self) -> usize {
        self.data.len()
    }

    pub fn data(&self) -> &BufferData {
        &self.data
    }

    /// Re-tags the buffer's logical location without touching contents.
    pub fn with_device(mut self, device: Device) -> Buffer {
        self.device = device;
        self
    }

    /// Typed view of the storage; fails unless `E` matches the dtype.
    pub fn values<E: Element>(&self) -> ArrayResult<&[E]> {
        E::slice(&self.data).ok_or_else(|| ArrayError::dtype_mismatch("buffer", E::DTYPE, self.dtype()))
    }

    /// Mutable typed view of the storage; fails unless `E` matches the dtype.
    pub fn values_mut<E: Element>(&mut self) -> ArrayResult<&mut [E]> {
        let dtype = self.dtype();
        E::slice_mut(&mut self.data).ok_or_else(|| ArrayError::dtype_mismatch("buffer", E::DTYPE, dtype))
    }

    pub fn to_vec<E: Element>(&self) -> ArrayResult<Vec<E>> {
        Ok(self.values::<E>()?.to_vec())
    }

    /// Extracts the single element of a one-element buffer.
    pub fn to_scalar<E: Element>(&self) -> ArrayResult<E> {
        let values = self.values::<E>()?;
        if values.len() != 1 {
            return Err(ArrayError::invalid_argument(
                "buffer",
                format!("expected a single element, got {}", values.len()),
            ));
        }
        Ok(values[0])
    }

    /// Value-converting cast to another dtype.
    ///
    /// Deliberately permissive: truncation and rounding are allowed, exactly
    /// like an explicit `astype`. Use [`DType::safely_casts_to`] first when
    /// only meaning-preserving conversions are acceptable.
    pub fn cast(&self, dtype: DType) -> Buffer {
        if dtype == self.dtype() {
            return self.clone();
        }
        let data = match dtype {
            DType::F32 => BufferData::F32(self.converted_values::<f32>()),
            DType::F64 => BufferData::F64(self.converted_values::<f64>()),
            DType::I32 => BufferData::I32(self.converted_values::<i32>()),
            DType::I64 => BufferData::I64(self.converted_values::<i64>()),
            DType::Bool => BufferData::Bool(self.converted_values::<bool>()),
        };
        Buffer {
            shape: self.shape.clone(),
            device: self.device.clone(),
            data,
        }
    }

    // Integer and bool sources travel through i64 so large values survive;
    // float sources travel through f64.
    fn converted_values<E: Element>(&self) -> Vec<E> {
        match &self.data {
            BufferData::F32(values) => values.iter().map(|&v| E::from_f64(f64::from(v))).collect(),
            BufferData::F64(values) => values.iter().map(|&v| E::from_f64(v)).collect(),
            BufferData::I32(values) => values.iter().map(|&v| E::from_i64(i64::from(v))).collect(),
            BufferData::I64(values) => values.iter().map(|&v| E::from_i64(v)).collect(),
            BufferData::Bool(values) => values.iter().map(|&v| E::from_i64(i64::from(v))).collect(),
        }
    }
}
