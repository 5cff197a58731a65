//! Logical result-location tags.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Logical device/location identifier stamped on result buffers.
///
/// Tagging never changes buffer contents; it only records where the
/// surrounding framework considers the data to live.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Device(String);

impl Device {
    pub fn new(name: impl Into<String>) -> Self {
        Device(name.into())
    }

    pub fn cpu() -> Self {
        Device::new("cpu")
    }

    pub fn name(&self) -> &str {
        &self.0
    }
}

impl Default for Device {
    fn default() -> Self {
        Device::cpu()
    }
}

impl fmt::Display for Device {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
