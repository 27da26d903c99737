//! In-memory Game repository.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::foundation::{DomainError, GameId, Timestamp};
use crate::domain::game::Game;
use crate::ports::GameRepository;

/// In-memory storage for games.
#[derive(Debug, Clone, Default)]
pub struct InMemoryGameRepository {
    games: Arc<RwLock<HashMap<GameId, Game>>>,
}

impl InMemoryGameRepository {
    /// Create a new in-memory repository
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl GameRepository for InMemoryGameRepository {
    async fn save(&self, game: &Game) -> Result<(), DomainError> {
        self.games.write().await.insert(*game.id(), game.clone());
        Ok(())
    }

    async fn update(
        &self,
        game: &Game,
        expected_last_update: &Timestamp,
    ) -> Result<(), DomainError> {
        let mut games = self.games.write().await;
        let stored = games
            .get_mut(game.id())
            .ok_or_else(|| DomainError::game_not_found(game.id()))?;

        if stored.last_update() != expected_last_update {
            return Err(DomainError::stale_write("Game", game.id()));
        }

        *stored = game.clone();
        Ok(())
    }

    async fn find_by_id(&self, id: &GameId) -> Result<Option<Game>, DomainError> {
        Ok(self.games.read().await.get(id).cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::ErrorCode;

    fn test_game() -> Game {
        Game::new(GameId::new(), "Harbor Spikers".to_string(), 5).unwrap()
    }

    #[tokio::test]
    async fn saves_and_finds_game() {
        let repo = InMemoryGameRepository::new();
        let game = test_game();
        repo.save(&game).await.unwrap();
        assert_eq!(repo.find_by_id(game.id()).await.unwrap(), Some(game));
    }

    #[tokio::test]
    async fn stale_update_is_rejected() {
        let repo = InMemoryGameRepository::new();
        let game = test_game();
        repo.save(&game).await.unwrap();
        let read_at = *game.last_update();

        let mut first = game.clone();
        first.finish().unwrap();
        repo.update(&first, &read_at).await.unwrap();

        let mut second = game.clone();
        second.finish().unwrap();
        let err = repo.update(&second, &read_at).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::ConcurrencyConflict);
    }

    #[tokio::test]
    async fn update_missing_game_is_not_found() {
        let repo = InMemoryGameRepository::new();
        let game = test_game();
        let err = repo.update(&game, game.last_update()).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::GameNotFound);
        assert_eq!(err.detail("game_id"), Some(game.id().to_string().as_str()));
    }
}
