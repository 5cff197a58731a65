//! Explicit backend configuration.

use serde::{Deserialize, Serialize};

use crate::device::Device;
use crate::dtype::DType;
use crate::error::{ArrayError, ArrayResult};

/// Configuration a backend adapter is constructed with: dtype defaults for
/// working-precision inference and the device tag stamped on fresh results.
///
/// There is no process-wide fallback; whoever builds a backend decides these
/// values and passes them in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BackendContext {
    default_float: DType,
    default_int: DType,
    device: Device,
}

impl BackendContext {
    pub fn new(default_float: DType, default_int: DType, device: Device) -> ArrayResult<Self> {
        if !default_float.is_float() {
            return Err(ArrayError::invalid_argument(
                "default_float",
                format!("expected a float dtype, got {default_float}"),
            ));
        }
        if !default_int.is_integer() {
            return Err(ArrayError::invalid_argument(
                "default_int",
                format!("expected an integer dtype, got {default_int}"),
            ));
        }
        Ok(BackendContext {
            default_float,
            default_int,
            device,
        })
    }

    pub fn default_float(&self) -> DType {
        self.default_float
    }

    pub fn default_int(&self) -> DType {
        self.default_int
    }

    pub fn device(&self) -> &Device {
        &self.device
    }

    /// Accumulation dtype preferred for inputs of the given dtype.
    ///
    /// Bool accumulates in the default int dtype; numeric inputs narrower
    /// than their kind's default widen to it, wider inputs keep their own
    /// dtype.
    pub fn working_dtype(&self, dtype: DType) -> DType {
        if dtype.is_bool() {
            self.default_int
        } else if dtype.is_integer() && dtype.bitwidth() < self.default_int.bitwidth() {
            self.default_int
        } else if dtype.is_float() && dtype.bitwidth() < self.default_float.bitwidth() {
            self.default_float
        } else {
            dtype
        }
    }
}

impl Default for BackendContext {
    fn default() -> Self {
        BackendContext {
            default_float: DType::F32,
            default_int: DType::I32,
            device: Device::cpu(),
        }
    }
}
