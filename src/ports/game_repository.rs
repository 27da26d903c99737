//! Game repository port (write side).
//!
//! Defines the contract for persisting and retrieving Game aggregates.
//! Updates are guarded by `last_update` the same way as sets, so two sets
//! finishing concurrently cannot lose a win from the tally.

use crate::domain::foundation::{DomainError, GameId, Timestamp};
use crate::domain::game::Game;
use async_trait::async_trait;

/// Repository port for Game aggregate persistence.
#[async_trait]
pub trait GameRepository: Send + Sync {
    /// Save a new game.
    ///
    /// # Errors
    ///
    /// - `DatabaseError` on persistence failure
    async fn save(&self, game: &Game) -> Result<(), DomainError>;

    /// Update an existing game if its stored `last_update` still equals `expected_last_update`.
    ///
    /// # Errors
    ///
    /// - `GameNotFound` if the game doesn't exist
    /// - `ConcurrencyConflict` if the game was modified since it was read
    /// - `DatabaseError` on persistence failure
    async fn update(&self, game: &Game, expected_last_update: &Timestamp)
        -> Result<(), DomainError>;

    /// Find a game by its ID.
    ///
    /// Returns `None` if not found.
    async fn find_by_id(&self, id: &GameId) -> Result<Option<Game>, DomainError>;
}
