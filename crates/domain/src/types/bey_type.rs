//! Bey classification enumeration
//!
//! The classic four-way split between raw offense, durability, endurance,
//! and hybrids. A Bey that hasn't been classified yet is `Unspecified`.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Classification of a Bey's combat role
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum BeyType {
    /// High burst damage, low endurance
    Attack,
    /// Absorbs and deflects hits
    Defense,
    /// Outlasts the opponent
    Stamina,
    /// A mix of the other three
    Balance,
    /// No classification assigned (for forward compatibility)
    #[default]
    #[serde(other)]
    Unspecified,
}

impl BeyType {
    /// Get all classifications for UI dropdowns (excludes Unspecified)
    pub fn all() -> &'static [BeyType] {
        &[
            BeyType::Attack,
            BeyType::Defense,
            BeyType::Stamina,
            BeyType::Balance,
        ]
    }

    /// Get a display name for the classification
    pub fn display_name(&self) -> &'static str {
        match self {
            BeyType::Attack => "Attack",
            BeyType::Defense => "Defense",
            BeyType::Stamina => "Stamina",
            BeyType::Balance => "Balance",
            BeyType::Unspecified => "Type",
        }
    }
}

impl fmt::Display for BeyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

impl std::str::FromStr for BeyType {
    type Err = crate::error::DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s.to_lowercase().as_str() {
            "attack" => BeyType::Attack,
            "defense" => BeyType::Defense,
            "stamina" => BeyType::Stamina,
            "balance" => BeyType::Balance,
            _ => BeyType::Unspecified,
        })
    }
}
