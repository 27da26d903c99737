//! Match rules configuration

use serde::Deserialize;

use super::error::ValidationError;
use crate::domain::game::MAX_BEST_OF;
use crate::domain::set::MatchRules;

/// Scoring thresholds and default match format
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct MatchRulesConfig {
    /// Points that end a regular set
    #[serde(default = "default_points_to_win")]
    pub points_to_win: u32,

    /// Points that end the deciding set
    #[serde(default = "default_deciding_set_points")]
    pub deciding_set_points: u32,

    /// Lead required to close any set
    #[serde(default = "default_min_margin")]
    pub min_margin: u32,

    /// Match format used when a new game does not specify one
    #[serde(default = "default_best_of")]
    pub default_best_of: u8,
}

impl MatchRulesConfig {
    pub fn to_rules(&self) -> MatchRules {
        MatchRules {
            points_to_win: self.points_to_win,
            deciding_set_points: self.deciding_set_points,
            min_margin: self.min_margin,
        }
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.points_to_win == 0 {
            return Err(ValidationError::ZeroThreshold("points_to_win"));
        }
        if self.deciding_set_points == 0 {
            return Err(ValidationError::ZeroThreshold("deciding_set_points"));
        }
        if self.min_margin == 0 {
            return Err(ValidationError::ZeroThreshold("min_margin"));
        }
        if self.deciding_set_points > self.points_to_win {
            return Err(ValidationError::DecidingSetTooLong {
                deciding: self.deciding_set_points,
                regular: self.points_to_win,
            });
        }
        let best_of = self.default_best_of;
        if best_of == 0 || best_of > MAX_BEST_OF || best_of % 2 == 0 {
            return Err(ValidationError::InvalidBestOf {
                value: best_of,
                max: MAX_BEST_OF,
            });
        }
        Ok(())
    }
}

impl Default for MatchRulesConfig {
    fn default() -> Self {
        Self {
            points_to_win: default_points_to_win(),
            deciding_set_points: default_deciding_set_points(),
            min_margin: default_min_margin(),
            default_best_of: default_best_of(),
        }
    }
}

fn default_points_to_win() -> u32 {
    25
}

fn default_deciding_set_points() -> u32 {
    15
}

fn default_min_margin() -> u32 {
    2
}

fn default_best_of() -> u8 {
    5
}
