//! Compatibility marker for analysis behavior.
//!
//! Analyzers take a [`Version`] so indexes built with an older release keep
//! producing the same terms after an upgrade. The only behavior currently
//! keyed on the version is whether stop word removal leaves position gaps.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Result, SabiaError};

/// Release whose analysis behavior should be reproduced.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Version {
    /// Stop word removal does not leave position gaps.
    #[serde(rename = "2.4")]
    V2_4,
    /// Removed stop words leave position gaps.
    #[serde(rename = "2.9")]
    V2_9,
    /// Current behavior.
    #[serde(rename = "3.0")]
    V3_0,
}

impl Version {
    /// The most recent behavior.
    pub const CURRENT: Version = Version::V3_0;

    /// Whether removed stop words should be reflected in the next token's
    /// position increment.
    pub fn enable_position_increments(self) -> bool {
        self >= Version::V2_9
    }
}

impl Default for Version {
    fn default() -> Self {
        Version::CURRENT
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Version::V2_4 => "2.4",
            Version::V2_9 => "2.9",
            Version::V3_0 => "3.0",
        };
        write!(f, "{s}")
    }
}

impl FromStr for Version {
    type Err = SabiaError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "2.4" => Ok(Version::V2_4),
            "2.9" => Ok(Version::V2_9),
            "3.0" | "current" => Ok(Version::CURRENT),
            other => Err(SabiaError::invalid_config(format!(
                "unknown analysis version '{other}'"
            ))),
        }
    }
}
