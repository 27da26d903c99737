//! Action vocabulary and classification.
//!
//! A recorded action is a short code combining a skill and an outcome
//! (`ATK_POINT`, `SRV_ERROR`, ...) or an opponent-side event
//! (`OPP_ATK_POINT`, `OPP_ERROR`). The vocabulary is closed: anything
//! outside it is rejected with `InvalidActionCode`.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::foundation::{DomainError, ErrorCode};

/// Skill performed by the scouted team.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Skill {
    Attack,
    Block,
    Serve,
}

/// Result of a skill execution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    /// Rally won directly by the action.
    Point,
    /// Rally continues.
    Neutral,
    /// Rally lost by the action.
    Error,
}

/// Event credited to the opponent side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OpponentAction {
    AttackPoint,
    BlockPoint,
    ServePoint,
    /// Opponent fault, scores for the team.
    Error,
}

/// Statistical category an action code falls into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ActionCategory {
    Own { skill: Skill, outcome: Outcome },
    Opponent(OpponentAction),
}

/// Recognized action codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ActionCode {
    #[serde(rename = "ATK_POINT")]
    AttackPoint,
    #[serde(rename = "ATK_NEUTRAL")]
    AttackNeutral,
    #[serde(rename = "ATK_ERROR")]
    AttackError,
    #[serde(rename = "BLK_POINT")]
    BlockPoint,
    #[serde(rename = "BLK_NEUTRAL")]
    BlockNeutral,
    #[serde(rename = "BLK_ERROR")]
    BlockError,
    #[serde(rename = "SRV_POINT")]
    ServePoint,
    #[serde(rename = "SRV_NEUTRAL")]
    ServeNeutral,
    #[serde(rename = "SRV_ERROR")]
    ServeError,
    #[serde(rename = "OPP_ATK_POINT")]
    OpponentAttackPoint,
    #[serde(rename = "OPP_BLK_POINT")]
    OpponentBlockPoint,
    #[serde(rename = "OPP_SRV_POINT")]
    OpponentServePoint,
    #[serde(rename = "OPP_ERROR")]
    OpponentError,
}

impl ActionCode {
    /// Every recognized code, in declaration order.
    pub const ALL: [ActionCode; 13] = [
        ActionCode::AttackPoint,
        ActionCode::AttackNeutral,
        ActionCode::AttackError,
        ActionCode::BlockPoint,
        ActionCode::BlockNeutral,
        ActionCode::BlockError,
        ActionCode::ServePoint,
        ActionCode::ServeNeutral,
        ActionCode::ServeError,
        ActionCode::OpponentAttackPoint,
        ActionCode::OpponentBlockPoint,
        ActionCode::OpponentServePoint,
        ActionCode::OpponentError,
    ];

    /// Returns the wire/storage code.
    pub fn as_str(&self) -> &'static str {
        match self {
            ActionCode::AttackPoint => "ATK_POINT",
            ActionCode::AttackNeutral => "ATK_NEUTRAL",
            ActionCode::AttackError => "ATK_ERROR",
            ActionCode::BlockPoint => "BLK_POINT",
            ActionCode::BlockNeutral => "BLK_NEUTRAL",
            ActionCode::BlockError => "BLK_ERROR",
            ActionCode::ServePoint => "SRV_POINT",
            ActionCode::ServeNeutral => "SRV_NEUTRAL",
            ActionCode::ServeError => "SRV_ERROR",
            ActionCode::OpponentAttackPoint => "OPP_ATK_POINT",
            ActionCode::OpponentBlockPoint => "OPP_BLK_POINT",
            ActionCode::OpponentServePoint => "OPP_SRV_POINT",
            ActionCode::OpponentError => "OPP_ERROR",
        }
    }

    /// Returns the statistical category of this code.
    pub fn category(&self) -> ActionCategory {
        use ActionCategory::{Opponent, Own};
        match self {
            ActionCode::AttackPoint => Own { skill: Skill::Attack, outcome: Outcome::Point },
            ActionCode::AttackNeutral => Own { skill: Skill::Attack, outcome: Outcome::Neutral },
            ActionCode::AttackError => Own { skill: Skill::Attack, outcome: Outcome::Error },
            ActionCode::BlockPoint => Own { skill: Skill::Block, outcome: Outcome::Point },
            ActionCode::BlockNeutral => Own { skill: Skill::Block, outcome: Outcome::Neutral },
            ActionCode::BlockError => Own { skill: Skill::Block, outcome: Outcome::Error },
            ActionCode::ServePoint => Own { skill: Skill::Serve, outcome: Outcome::Point },
            ActionCode::ServeNeutral => Own { skill: Skill::Serve, outcome: Outcome::Neutral },
            ActionCode::ServeError => Own { skill: Skill::Serve, outcome: Outcome::Error },
            ActionCode::OpponentAttackPoint => Opponent(OpponentAction::AttackPoint),
            ActionCode::OpponentBlockPoint => Opponent(OpponentAction::BlockPoint),
            ActionCode::OpponentServePoint => Opponent(OpponentAction::ServePoint),
            ActionCode::OpponentError => Opponent(OpponentAction::Error),
        }
    }
}

impl fmt::Display for ActionCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ActionCode {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ActionCode::ALL
            .iter()
            .copied()
            .find(|code| code.as_str() == s)
            .ok_or_else(|| {
                DomainError::new(
                    ErrorCode::InvalidActionCode,
                    format!("Unrecognized action code: '{}'", s),
                )
                .with_detail("code", s)
            })
    }
}

/// Maps a raw action code to its statistical category.
///
/// # Errors
///
/// - `InvalidActionCode` if the code is not part of the vocabulary
pub fn classify(code: &str) -> Result<ActionCategory, DomainError> {
    Ok(code.parse::<ActionCode>()?.category())
}
