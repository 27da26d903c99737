//! CreateSetHandler - Command handler for starting the next set of a game.

use std::sync::Arc;

use tracing::{info, warn};

use crate::domain::foundation::GameId;
use crate::domain::set::{Set, SetError};
use crate::ports::{GameRepository, SetRepository};

/// Command to start the next set of a game.
#[derive(Debug, Clone)]
pub struct CreateSetCommand {
    pub game_id: GameId,
}

/// Result of successful set creation.
#[derive(Debug, Clone)]
pub struct CreateSetResult {
    pub set: Set,
}

/// Handler for creating sets.
pub struct CreateSetHandler {
    games: Arc<dyn GameRepository>,
    sets: Arc<dyn SetRepository>,
}

impl CreateSetHandler {
    pub fn new(games: Arc<dyn GameRepository>, sets: Arc<dyn SetRepository>) -> Self {
        Self { games, sets }
    }

    pub async fn handle(&self, cmd: CreateSetCommand) -> Result<CreateSetResult, SetError> {
        // 1. Load game
        let mut game = self
            .games
            .find_by_id(&cmd.game_id)
            .await?
            .ok_or_else(|| SetError::game_not_found(cmd.game_id))?;
        let read_at = *game.last_update();

        // 2. Start the set; rejected while an earlier set is unrecorded
        let set = game.start_new_set().map_err(|err| {
            warn!(game_id = %cmd.game_id, error = %err, "set start rejected");
            SetError::from(err)
        })?;

        // 3. Persist the set, then claim it on the game. A set whose game
        // write loses the race is never adopted and cannot be recorded.
        self.sets.save(&set).await?;
        if let Err(err) = self.games.update(&game, &read_at).await {
            warn!(game_id = %cmd.game_id, set_id = %set.id(), error = %err, "set start lost race");
            return Err(err.into());
        }

        info!(
            game_id = %cmd.game_id,
            set_id = %set.id(),
            set_number = set.set_number(),
            "set started"
        );
        Ok(CreateSetResult { set })
    }
}
