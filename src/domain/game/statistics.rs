//! Game-level totals folded from finished sets.

use serde::Serialize;

use crate::domain::foundation::GameId;
use crate::domain::set::Set;
use crate::domain::statistics::StatSheet;

/// Summed statistics over the finished sets of one game.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GameStatistics {
    pub game_id: GameId,
    /// Finished sets included in the totals.
    pub sets_counted: u32,
    pub stats: StatSheet,
}

impl GameStatistics {
    /// Folds every finished set of `game_id` into one sheet.
    ///
    /// Active sets and sets of other games are skipped. Ratios are
    /// recomputed from the summed counters, never averaged.
    pub fn from_sets(game_id: GameId, sets: &[Set]) -> Self {
        sets.iter()
            .filter(|set| set.game_id() == &game_id && !set.is_active())
            .fold(
                Self {
                    game_id,
                    sets_counted: 0,
                    stats: StatSheet::new(),
                },
                |acc, set| Self {
                    game_id,
                    sets_counted: acc.sets_counted + 1,
                    stats: acc.stats.merge(set.stats()),
                },
            )
    }
}
