//! Attribute - The four named stats

use super::StatError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One of the four attributes in a [`StatBlock`](super::StatBlock)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Attribute {
    Strength,
    Endurance,
    Luck,
    Intelligence,
}

impl Attribute {
    /// Get all attributes
    pub fn all() -> &'static [Attribute] {
        &[
            Attribute::Strength,
            Attribute::Endurance,
            Attribute::Luck,
            Attribute::Intelligence,
        ]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Attribute::Strength => "strength",
            Attribute::Endurance => "endurance",
            Attribute::Luck => "luck",
            Attribute::Intelligence => "intelligence",
        }
    }
}

impl fmt::Display for Attribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Attribute {
    type Err = StatError;

    /// Case-insensitive, so "Strength" and "strength" both parse
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Attribute::all()
            .iter()
            .copied()
            .find(|attr| attr.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| StatError::UnknownAttribute(s.to_string()))
    }
}
