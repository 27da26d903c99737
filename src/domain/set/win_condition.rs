//! Set termination rules.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{DomainError, Side};

/// Point threshold and margin that end a set.
///
/// Deserialization goes through [`WinCondition::new`], so zero values are
/// rejected there as well.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "WinConditionParams")]
pub struct WinCondition {
    points_to_win: u32,
    min_margin: u32,
}

impl WinCondition {
    /// Creates a win condition.
    ///
    /// # Errors
    ///
    /// - `ValidationFailed` if either value is zero
    pub fn new(points_to_win: u32, min_margin: u32) -> Result<Self, DomainError> {
        if points_to_win == 0 {
            return Err(DomainError::validation(
                "points_to_win",
                "Points to win must be greater than zero",
            ));
        }
        if min_margin == 0 {
            return Err(DomainError::validation(
                "min_margin",
                "Winning margin must be greater than zero",
            ));
        }
        Ok(Self {
            points_to_win,
            min_margin,
        })
    }

    pub fn points_to_win(&self) -> u32 {
        self.points_to_win
    }

    pub fn min_margin(&self) -> u32 {
        self.min_margin
    }

    /// Returns the winning side, or `None` while the set is still open.
    pub fn decide(&self, team_points: u32, opponent_points: u32) -> Option<Side> {
        let (leader, high, low) = if team_points >= opponent_points {
            (Side::Team, team_points, opponent_points)
        } else {
            (Side::Opponent, opponent_points, team_points)
        };

        if high >= self.points_to_win && high - low >= self.min_margin {
            Some(leader)
        } else {
            None
        }
    }
}

/// Unchecked wire form of a [`WinCondition`].
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct WinConditionParams {
    pub points_to_win: u32,
    pub min_margin: u32,
}

impl TryFrom<WinConditionParams> for WinCondition {
    type Error = DomainError;

    fn try_from(params: WinConditionParams) -> Result<Self, Self::Error> {
        WinCondition::new(params.points_to_win, params.min_margin)
    }
}

/// Match-wide scoring rules.
///
/// Regular sets are played to `points_to_win`; the deciding set (the last
/// possible set of a best-of-N match) is played to `deciding_set_points`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchRules {
    pub points_to_win: u32,
    pub deciding_set_points: u32,
    pub min_margin: u32,
}

impl MatchRules {
    /// Returns the condition that ends set number `set_number` of a best-of-`best_of` match.
    ///
    /// # Errors
    ///
    /// - `ValidationFailed` if the configured thresholds are zero
    pub fn win_condition_for(&self, set_number: u8, best_of: u8) -> Result<WinCondition, DomainError> {
        let points = if set_number >= best_of {
            self.deciding_set_points
        } else {
            self.points_to_win
        };
        WinCondition::new(points, self.min_margin)
    }
}

impl Default for MatchRules {
    fn default() -> Self {
        Self {
            points_to_win: 25,
            deciding_set_points: 15,
            min_margin: 2,
        }
    }
}

/// Result of asking a set to finish.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case", tag = "status", content = "winner")]
pub enum SetOutcome {
    /// Win condition met; the set is now closed.
    Won(Side),
    /// Neither side satisfies the win condition yet; the set is unchanged.
    NotFinished,
}

impl SetOutcome {
    pub fn winner(&self) -> Option<Side> {
        match self {
            SetOutcome::Won(side) => Some(*side),
            SetOutcome::NotFinished => None,
        }
    }
}
