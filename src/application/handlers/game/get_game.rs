//! GetGameHandler - Query handler for retrieving a game.

use std::sync::Arc;

use crate::domain::foundation::GameId;
use crate::domain::game::{Game, GameError};
use crate::ports::GameRepository;

/// Query to get a game by ID.
#[derive(Debug, Clone)]
pub struct GetGameQuery {
    pub game_id: GameId,
}

/// Handler for retrieving games.
pub struct GetGameHandler {
    repository: Arc<dyn GameRepository>,
}

impl GetGameHandler {
    pub fn new(repository: Arc<dyn GameRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, query: GetGameQuery) -> Result<Game, GameError> {
        self.repository
            .find_by_id(&query.game_id)
            .await?
            .ok_or_else(|| GameError::not_found(query.game_id))
    }
}
