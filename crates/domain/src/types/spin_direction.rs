//! Spin direction enumeration
//!
//! A Bey spins either left or right. Right is the default for the vast
//! majority of Beys; left spin is the rare, deliberate exception.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Rotational orientation of a Bey
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum SpinDirection {
    /// Counter-clockwise rotation
    Left,
    /// Clockwise rotation (the common case)
    #[default]
    Right,
}

impl SpinDirection {
    /// Get both directions for UI dropdowns
    pub fn all() -> &'static [SpinDirection] {
        &[SpinDirection::Left, SpinDirection::Right]
    }

    /// Get a display name for the direction
    pub fn display_name(&self) -> &'static str {
        match self {
            SpinDirection::Left => "Left",
            SpinDirection::Right => "Right",
        }
    }

    /// The opposite direction
    pub fn reversed(&self) -> Self {
        match self {
            SpinDirection::Left => SpinDirection::Right,
            SpinDirection::Right => SpinDirection::Left,
        }
    }
}

impl fmt::Display for SpinDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

impl std::str::FromStr for SpinDirection {
    type Err = crate::error::DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "left" => Ok(SpinDirection::Left),
            "right" => Ok(SpinDirection::Right),
            other => Err(crate::error::DomainError::parse(format!(
                "Unknown spin direction: {}",
                other
            ))),
        }
    }
}
