//! Collision-combine rules for scatter operations.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ArrayError;

/// Combine rule applied when several updates land on one target cell.
///
/// The wire form is the lowercase identifier (`"sum"`, `"replace"`,
/// `"min"`, `"max"`), both through serde and [`FromStr`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Reduction {
    Sum,
    Replace,
    Min,
    Max,
}

impl Reduction {
    pub const ALL: [Reduction; 4] = [
        Reduction::Sum,
        Reduction::Replace,
        Reduction::Min,
        Reduction::Max,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Reduction::Sum => "sum",
            Reduction::Replace => "replace",
            Reduction::Min => "min",
            Reduction::Max => "max",
        }
    }

    /// True when collision order cannot change the result.
    pub fn is_commutative(self) -> bool {
        !matches!(self, Reduction::Replace)
    }
}

impl fmt::Display for Reduction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Reduction {
    type Err = ArrayError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "sum" => Ok(Reduction::Sum),
            "replace" => Ok(Reduction::Replace),
            "min" => Ok(Reduction::Min),
            "max" => Ok(Reduction::Max),
            other => Err(ArrayError::invalid_argument(
                "reduction",
                format!(
                    "unrecognized reduction \"{other}\", expected one of \
                     \"sum\", \"replace\", \"min\" or \"max\""
                ),
            )),
        }
    }
}
