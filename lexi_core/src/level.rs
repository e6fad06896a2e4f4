//! CEFR level labels
//!
//! Vocabulary and grammar items carry a CEFR level (A1..C2). The level
//! maps to an integer weight used as the base of the difficulty score.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The six CEFR levels, plus a catch-all for labels the dataset uses
/// that are not part of the ordered set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Level {
    A1,
    A2,
    B1,
    B2,
    C1,
    C2,
    #[serde(other)]
    Unknown,
}

impl Level {
    /// Base difficulty weight: A1=1 .. C2=6, unknown labels fall back to 3.
    pub fn weight(self) -> u8 {
        match self {
            Level::A1 => 1,
            Level::A2 => 2,
            Level::B1 => 3,
            Level::B2 => 4,
            Level::C1 => 5,
            Level::C2 => 6,
            Level::Unknown => 3,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Level::A1 => "A1",
            Level::A2 => "A2",
            Level::B1 => "B1",
            Level::B2 => "B2",
            Level::C1 => "C1",
            Level::C2 => "C2",
            Level::Unknown => "unknown",
        }
    }
}

impl Default for Level {
    fn default() -> Self {
        Level::A1
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Level {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s.trim().to_ascii_uppercase().as_str() {
            "A1" => Level::A1,
            "A2" => Level::A2,
            "B1" => Level::B1,
            "B2" => Level::B2,
            "C1" => Level::C1,
            "C2" => Level::C2,
            _ => Level::Unknown,
        })
    }
}
