//! Set repository port (write side).
//!
//! Defines the contract for persisting and retrieving Set aggregates.
//!
//! # Design
//!
//! - **Ordered action log**: implementations choose the storage format but
//!   must return `actions` in exactly the order they were saved
//! - **Optimistic concurrency**: `update` is a compare-and-swap on
//!   `last_update`, so two requests recording actions for the same live set
//!   can never both write on top of the same read

use crate::domain::foundation::{DomainError, GameId, SetId, Timestamp};
use crate::domain::set::Set;
use async_trait::async_trait;

/// Repository port for Set aggregate persistence.
#[async_trait]
pub trait SetRepository: Send + Sync {
    /// Save a new set.
    ///
    /// # Errors
    ///
    /// - `DatabaseError` on persistence failure
    async fn save(&self, set: &Set) -> Result<(), DomainError>;

    /// Update an existing set if its stored `last_update` still equals `expected_last_update`.
    ///
    /// # Errors
    ///
    /// - `SetNotFound` if the set doesn't exist
    /// - `ConcurrencyConflict` if the set was modified since it was read
    /// - `DatabaseError` on persistence failure
    async fn update(&self, set: &Set, expected_last_update: &Timestamp) -> Result<(), DomainError>;

    /// Find a set by its ID.
    ///
    /// Returns `None` if not found.
    async fn find_by_id(&self, id: &SetId) -> Result<Option<Set>, DomainError>;

    /// Find every set of a game, ordered by set number.
    async fn find_by_game(&self, game_id: &GameId) -> Result<Vec<Set>, DomainError>;
}
