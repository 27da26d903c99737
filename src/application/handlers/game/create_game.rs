//! CreateGameHandler - Command handler for opening a new game.

use std::sync::Arc;

use tracing::info;

use crate::domain::foundation::GameId;
use crate::domain::game::{Game, GameError};
use crate::ports::GameRepository;

/// Command to create a game against an opponent.
#[derive(Debug, Clone)]
pub struct CreateGameCommand {
    pub opponent: String,
    /// Match format; falls back to the handler's configured default.
    pub best_of: Option<u8>,
}

/// Result of successful game creation.
#[derive(Debug, Clone)]
pub struct CreateGameResult {
    pub game: Game,
}

/// Handler for creating games.
pub struct CreateGameHandler {
    repository: Arc<dyn GameRepository>,
    default_best_of: u8,
}

impl CreateGameHandler {
    pub fn new(repository: Arc<dyn GameRepository>, default_best_of: u8) -> Self {
        Self {
            repository,
            default_best_of,
        }
    }

    pub async fn handle(&self, cmd: CreateGameCommand) -> Result<CreateGameResult, GameError> {
        let best_of = cmd.best_of.unwrap_or(self.default_best_of);
        let game = Game::new(GameId::new(), cmd.opponent, best_of)?;

        self.repository.save(&game).await?;

        info!(game_id = %game.id(), opponent = game.opponent(), best_of, "game created");
        Ok(CreateGameResult { game })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::{DomainError, Timestamp};
    use async_trait::async_trait;
    use std::sync::Mutex;

    struct MockGameRepository {
        games: Mutex<Vec<Game>>,
        fail_save: bool,
    }

    impl MockGameRepository {
        fn new() -> Self {
            Self {
                games: Mutex::new(Vec::new()),
                fail_save: false,
            }
        }

        fn failing() -> Self {
            Self {
                games: Mutex::new(Vec::new()),
                fail_save: true,
            }
        }

        fn saved_games(&self) -> Vec<Game> {
            self.games.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl GameRepository for MockGameRepository {
        async fn save(&self, game: &Game) -> Result<(), DomainError> {
            if self.fail_save {
                return Err(DomainError::database("Failed to insert game", "simulated"));
            }
            self.games.lock().unwrap().push(game.clone());
            Ok(())
        }

        async fn update(&self, _game: &Game, _expected: &Timestamp) -> Result<(), DomainError> {
            Ok(())
        }

        async fn find_by_id(&self, id: &GameId) -> Result<Option<Game>, DomainError> {
            Ok(self
                .games
                .lock()
                .unwrap()
                .iter()
                .find(|g| g.id() == id)
                .cloned())
        }
    }

    fn command(best_of: Option<u8>) -> CreateGameCommand {
        CreateGameCommand {
            opponent: "Riverside VC".to_string(),
            best_of,
        }
    }

    #[tokio::test]
    async fn creates_and_saves_game() {
        let repo = Arc::new(MockGameRepository::new());
        let handler = CreateGameHandler::new(repo.clone(), 5);

        let result = handler.handle(command(Some(3))).await.unwrap();

        assert_eq!(result.game.best_of(), 3);
        assert!(result.game.is_active());
        assert!(result.game.set_ids().is_empty());
        assert_eq!(repo.saved_games(), vec![result.game]);
    }

    #[tokio::test]
    async fn uses_default_best_of_when_omitted() {
        let repo = Arc::new(MockGameRepository::new());
        let handler = CreateGameHandler::new(repo, 5);

        let result = handler.handle(command(None)).await.unwrap();
        assert_eq!(result.game.best_of(), 5);
        assert_eq!(result.game.majority(), 3);
    }

    #[tokio::test]
    async fn rejects_even_best_of() {
        let repo = Arc::new(MockGameRepository::new());
        let handler = CreateGameHandler::new(repo.clone(), 5);

        let err = handler.handle(command(Some(4))).await.unwrap_err();
        assert!(matches!(err, GameError::ValidationFailed { ref field, .. } if field == "best_of"));
        assert!(repo.saved_games().is_empty());
    }

    #[tokio::test]
    async fn surfaces_storage_failure() {
        let handler = CreateGameHandler::new(Arc::new(MockGameRepository::failing()), 5);
        let err = handler.handle(command(None)).await.unwrap_err();
        assert!(matches!(err, GameError::Infrastructure(_)));
    }
}
