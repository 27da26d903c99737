//! GetGameStatisticsHandler - Query handler for game-level totals.

use std::sync::Arc;

use tracing::debug;

use crate::domain::foundation::GameId;
use crate::domain::game::{GameError, GameStatistics};
use crate::ports::{GameRepository, SetRepository};

/// Query for the summed statistics of a game's finished sets.
#[derive(Debug, Clone)]
pub struct GetGameStatisticsQuery {
    pub game_id: GameId,
}

/// Handler for game statistics.
pub struct GetGameStatisticsHandler {
    games: Arc<dyn GameRepository>,
    sets: Arc<dyn SetRepository>,
}

impl GetGameStatisticsHandler {
    pub fn new(games: Arc<dyn GameRepository>, sets: Arc<dyn SetRepository>) -> Self {
        Self { games, sets }
    }

    pub async fn handle(&self, query: GetGameStatisticsQuery) -> Result<GameStatistics, GameError> {
        let game = self
            .games
            .find_by_id(&query.game_id)
            .await?
            .ok_or_else(|| GameError::not_found(query.game_id))?;

        let sets = self.sets.find_by_game(game.id()).await?;
        let statistics = GameStatistics::from_sets(*game.id(), &sets);

        debug!(
            game_id = %game.id(),
            sets_counted = statistics.sets_counted,
            "game statistics computed"
        );
        Ok(statistics)
    }
}
