use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::VaultError;

// ---------------------------------------------------------------------------
// Era — Closed set of historical eras used by the timeline
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Era {
    Classic,
    Neo,
    #[serde(rename = "E-Series")]
    ESeries,
    #[serde(rename = "EX")]
    Ex,
    #[serde(rename = "DP")]
    Dp,
    #[serde(rename = "BW")]
    Bw,
    #[serde(rename = "XY")]
    Xy,
    #[serde(rename = "SM")]
    Sm,
    #[serde(rename = "SWSH")]
    Swsh,
    #[serde(rename = "SV")]
    Sv,
}

impl Era {
    pub const ALL: [Era; 10] = [
        Era::Classic,
        Era::Neo,
        Era::ESeries,
        Era::Ex,
        Era::Dp,
        Era::Bw,
        Era::Xy,
        Era::Sm,
        Era::Swsh,
        Era::Sv,
    ];

    /// The identifier used in card records and the era table.
    pub fn as_str(&self) -> &'static str {
        match self {
            Era::Classic => "Classic",
            Era::Neo => "Neo",
            Era::ESeries => "E-Series",
            Era::Ex => "EX",
            Era::Dp => "DP",
            Era::Bw => "BW",
            Era::Xy => "XY",
            Era::Sm => "SM",
            Era::Swsh => "SWSH",
            Era::Sv => "SV",
        }
    }
}

impl fmt::Display for Era {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Era {
    type Err = VaultError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Era::ALL
            .iter()
            .copied()
            .find(|era| era.as_str() == s)
            .ok_or_else(|| VaultError::InvalidArgument(format!("Unknown era '{}'", s)))
    }
}

// ---------------------------------------------------------------------------
// EraDescriptor — One row of the era table
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EraDescriptor {
    pub id: Era,
    pub label: String,
    pub start: i32,
    pub end: i32,
}

impl EraDescriptor {
    pub fn new(id: Era, label: &str, start: i32, end: i32) -> Self {
        Self {
            id,
            label: label.to_string(),
            start,
            end,
        }
    }
}
