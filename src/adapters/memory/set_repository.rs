//! In-memory Set repository.
//!
//! Stores sets in a process-local map. Useful for testing and development.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::foundation::{DomainError, GameId, SetId, Timestamp};
use crate::domain::set::Set;
use crate::ports::SetRepository;

/// In-memory storage for sets.
#[derive(Debug, Clone, Default)]
pub struct InMemorySetRepository {
    sets: Arc<RwLock<HashMap<SetId, Set>>>,
}

impl InMemorySetRepository {
    /// Create a new in-memory repository
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the number of stored sets
    pub async fn len(&self) -> usize {
        self.sets.read().await.len()
    }

    /// Check if no sets are stored
    pub async fn is_empty(&self) -> bool {
        self.sets.read().await.is_empty()
    }
}

#[async_trait]
impl SetRepository for InMemorySetRepository {
    async fn save(&self, set: &Set) -> Result<(), DomainError> {
        self.sets.write().await.insert(*set.id(), set.clone());
        Ok(())
    }

    async fn update(&self, set: &Set, expected_last_update: &Timestamp) -> Result<(), DomainError> {
        // Check and write under one lock so the swap is atomic.
        let mut sets = self.sets.write().await;
        let stored = sets
            .get_mut(set.id())
            .ok_or_else(|| DomainError::set_not_found(set.id()))?;

        if stored.last_update() != expected_last_update {
            return Err(DomainError::stale_write("Set", set.id()));
        }

        *stored = set.clone();
        Ok(())
    }

    async fn find_by_id(&self, id: &SetId) -> Result<Option<Set>, DomainError> {
        Ok(self.sets.read().await.get(id).cloned())
    }

    async fn find_by_game(&self, game_id: &GameId) -> Result<Vec<Set>, DomainError> {
        let sets = self.sets.read().await;
        let mut found: Vec<Set> = sets
            .values()
            .filter(|s| s.game_id() == game_id)
            .cloned()
            .collect();
        found.sort_by_key(|s| (s.set_number(), *s.started_at()));
        Ok(found)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::ErrorCode;

    fn test_set(game_id: GameId, number: u8) -> Set {
        Set::new(SetId::new(), game_id, number)
    }

    #[tokio::test]
    async fn saves_and_finds_set() {
        let repo = InMemorySetRepository::new();
        let set = test_set(GameId::new(), 1);
        repo.save(&set).await.unwrap();

        let found = repo.find_by_id(set.id()).await.unwrap();
        assert_eq!(found, Some(set));
        assert_eq!(repo.len().await, 1);
    }

    #[tokio::test]
    async fn missing_set_is_none() {
        let repo = InMemorySetRepository::new();
        assert_eq!(repo.find_by_id(&SetId::new()).await.unwrap(), None);
    }

    #[tokio::test]
    async fn update_with_current_stamp_succeeds() {
        let repo = InMemorySetRepository::new();
        let mut set = test_set(GameId::new(), 1);
        repo.save(&set).await.unwrap();

        let read_at = *set.last_update();
        set.apply_action("ATK_POINT").unwrap();
        repo.update(&set, &read_at).await.unwrap();

        let stored = repo.find_by_id(set.id()).await.unwrap().unwrap();
        assert_eq!(stored.actions().len(), 1);
    }

    #[tokio::test]
    async fn update_with_stale_stamp_is_rejected() {
        let repo = InMemorySetRepository::new();
        let original = test_set(GameId::new(), 1);
        repo.save(&original).await.unwrap();
        let read_at = *original.last_update();

        let mut first = original.clone();
        first.apply_action("ATK_POINT").unwrap();
        repo.update(&first, &read_at).await.unwrap();

        let mut second = original.clone();
        second.apply_action("SRV_ERROR").unwrap();
        let err = repo.update(&second, &read_at).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::ConcurrencyConflict);

        let stored = repo.find_by_id(original.id()).await.unwrap().unwrap();
        assert_eq!(stored, first);
    }

    #[tokio::test]
    async fn update_missing_set_is_not_found() {
        let repo = InMemorySetRepository::new();
        let set = test_set(GameId::new(), 1);
        let err = repo.update(&set, set.last_update()).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::SetNotFound);
    }

    #[tokio::test]
    async fn find_by_game_orders_by_set_number() {
        let repo = InMemorySetRepository::new();
        let game_id = GameId::new();
        for number in [3, 1, 2] {
            repo.save(&test_set(game_id, number)).await.unwrap();
        }
        repo.save(&test_set(GameId::new(), 1)).await.unwrap();

        let sets = repo.find_by_game(&game_id).await.unwrap();
        let numbers: Vec<u8> = sets.iter().map(|s| s.set_number()).collect();
        assert_eq!(numbers, vec![1, 2, 3]);
    }
}
