//! FinishGameHandler - Command handler for closing a game.

use std::sync::Arc;

use tracing::{info, warn};

use crate::domain::foundation::{GameId, Side};
use crate::domain::game::{Game, GameError};
use crate::ports::GameRepository;

/// Command to close a game.
#[derive(Debug, Clone)]
pub struct FinishGameCommand {
    pub game_id: GameId,
}

/// Result of closing a game.
#[derive(Debug, Clone)]
pub struct FinishGameResult {
    pub game: Game,
    /// Winner, if a side reached the majority before the game was closed.
    pub winner: Option<Side>,
}

/// Handler for closing games.
pub struct FinishGameHandler {
    repository: Arc<dyn GameRepository>,
}

impl FinishGameHandler {
    pub fn new(repository: Arc<dyn GameRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, cmd: FinishGameCommand) -> Result<FinishGameResult, GameError> {
        let mut game = self
            .repository
            .find_by_id(&cmd.game_id)
            .await?
            .ok_or_else(|| GameError::not_found(cmd.game_id))?;
        let read_at = *game.last_update();

        let winner = game.finish()?;

        if let Err(err) = self.repository.update(&game, &read_at).await {
            warn!(game_id = %cmd.game_id, error = %err, "game close rejected");
            return Err(err.into());
        }

        match winner {
            Some(side) => info!(game_id = %cmd.game_id, winner = %side, "game closed"),
            None => info!(game_id = %cmd.game_id, "game abandoned without a winner"),
        }
        Ok(FinishGameResult { game, winner })
    }
}
