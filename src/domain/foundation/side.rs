//! Side enum naming the two parties of a match.

use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the two sides playing a match.
///
/// `Team` is the side whose actions are being scouted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Side {
    Team,
    Opponent,
}

impl Side {
    /// Returns the other side.
    pub fn other(&self) -> Side {
        match self {
            Side::Team => Side::Opponent,
            Side::Opponent => Side::Team,
        }
    }

    /// Returns the lowercase storage name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Side::Team => "team",
            Side::Opponent => "opponent",
        }
    }

    /// Parses the lowercase storage name.
    pub fn parse(s: &str) -> Option<Side> {
        match s {
            "team" => Some(Side::Team),
            "opponent" => Some(Side::Opponent),
            _ => None,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Side::Team => "Team",
            Side::Opponent => "Opponent",
        };
        write!(f, "{}", s)
    }
}
