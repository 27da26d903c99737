//! Game aggregate entity.
//!
//! A game is a best-of-N match between the scouted team and an opponent.
//! It references its finished sets by ID and keeps the running set tally.

use serde::Serialize;

use crate::domain::foundation::{DomainError, ErrorCode, GameId, SetId, Side, Timestamp};
use crate::domain::set::Set;

/// Largest supported match format.
pub const MAX_BEST_OF: u8 = 7;

/// Game aggregate - set tally and winner for one match.
///
/// # Invariants
///
/// - `best_of` is odd and within `1..=MAX_BEST_OF`
/// - `set_ids` holds recorded (finished) sets in play order, without duplicates
/// - `team_sets_won + opponent_sets_won == set_ids.len()`
/// - at most one started set is unrecorded at a time (`live_set`)
/// - `winner` is set only once one side reaches `majority()`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Game {
    id: GameId,
    opponent: String,
    best_of: u8,
    set_ids: Vec<SetId>,
    /// Started set not yet folded into the tally.
    live_set: Option<SetId>,
    team_sets_won: u8,
    opponent_sets_won: u8,
    is_active: bool,
    winner: Option<Side>,
    created_at: Timestamp,
    last_update: Timestamp,
}

impl Game {
    /// Create a new active game with no sets.
    ///
    /// # Errors
    ///
    /// - `ValidationFailed` if the opponent name is blank or `best_of` is even or out of range
    pub fn new(id: GameId, opponent: String, best_of: u8) -> Result<Self, DomainError> {
        if opponent.trim().is_empty() {
            return Err(DomainError::validation("opponent", "Opponent cannot be empty"));
        }
        if best_of == 0 || best_of > MAX_BEST_OF || best_of % 2 == 0 {
            return Err(DomainError::validation(
                "best_of",
                format!("best_of must be an odd number between 1 and {}", MAX_BEST_OF),
            ));
        }

        let now = Timestamp::now();
        Ok(Self {
            id,
            opponent,
            best_of,
            set_ids: Vec::new(),
            live_set: None,
            team_sets_won: 0,
            opponent_sets_won: 0,
            is_active: true,
            winner: None,
            created_at: now,
            last_update: now,
        })
    }

    /// Reconstitute a game from persistence (no validation).
    #[allow(clippy::too_many_arguments)]
    pub fn reconstitute(
        id: GameId,
        opponent: String,
        best_of: u8,
        set_ids: Vec<SetId>,
        live_set: Option<SetId>,
        team_sets_won: u8,
        opponent_sets_won: u8,
        is_active: bool,
        winner: Option<Side>,
        created_at: Timestamp,
        last_update: Timestamp,
    ) -> Self {
        Self {
            id,
            opponent,
            best_of,
            set_ids,
            live_set,
            team_sets_won,
            opponent_sets_won,
            is_active,
            winner,
            created_at,
            last_update,
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Accessors
    // ─────────────────────────────────────────────────────────────────────────

    pub fn id(&self) -> &GameId {
        &self.id
    }

    pub fn opponent(&self) -> &str {
        &self.opponent
    }

    pub fn best_of(&self) -> u8 {
        self.best_of
    }

    pub fn set_ids(&self) -> &[SetId] {
        &self.set_ids
    }

    /// Set started but not yet recorded, whether still in play or already closed.
    pub fn live_set(&self) -> Option<&SetId> {
        self.live_set.as_ref()
    }

    pub fn team_sets_won(&self) -> u8 {
        self.team_sets_won
    }

    pub fn opponent_sets_won(&self) -> u8 {
        self.opponent_sets_won
    }

    /// Sets won by the given side.
    pub fn sets_won(&self, side: Side) -> u8 {
        match side {
            Side::Team => self.team_sets_won,
            Side::Opponent => self.opponent_sets_won,
        }
    }

    pub fn is_active(&self) -> bool {
        self.is_active
    }

    pub fn winner(&self) -> Option<Side> {
        self.winner
    }

    pub fn created_at(&self) -> &Timestamp {
        &self.created_at
    }

    pub fn last_update(&self) -> &Timestamp {
        &self.last_update
    }

    /// Sets needed to win the match.
    pub fn majority(&self) -> u8 {
        self.best_of / 2 + 1
    }

    /// True once the game is closed, with or without a winner.
    pub fn is_finished(&self) -> bool {
        !self.is_active || self.winner.is_some()
    }

    /// Number the next started set will carry.
    pub fn next_set_number(&self) -> u8 {
        self.set_ids.len() as u8 + 1
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Mutations
    // ─────────────────────────────────────────────────────────────────────────

    /// Start the next set of this game and register it as the live set.
    ///
    /// # Errors
    ///
    /// - `GameAlreadyFinished` if the game has a winner or was closed
    /// - `InvalidStateTransition` if a started set has not been recorded yet
    pub fn start_new_set(&mut self) -> Result<Set, DomainError> {
        self.ensure_open()?;
        if let Some(live) = self.live_set {
            return Err(DomainError::new(
                ErrorCode::InvalidStateTransition,
                format!("Game {} already has set {} in progress", self.id, live),
            )
            .with_detail("set_id", live.to_string()));
        }

        let set = Set::new(SetId::new(), self.id, self.next_set_number());
        self.live_set = Some(*set.id());
        self.touch();
        Ok(set)
    }

    /// Fold a finished set into the tally.
    ///
    /// Every check runs before the game changes; a rejected set leaves the
    /// tally untouched. Returns the side that won the set.
    ///
    /// # Errors
    ///
    /// - `SetAlreadyRecorded` if the set ID is already part of the game
    /// - `ValidationFailed` if the set belongs to another game
    /// - `InvalidStateTransition` if the set has no winner yet
    /// - `GameAlreadyFinished` if the game has a winner or was closed
    /// - `InvalidStateTransition` if the set is not the game's live set
    pub fn record_finished_set(&mut self, set: &Set) -> Result<Side, DomainError> {
        if self.set_ids.contains(set.id()) {
            return Err(DomainError::new(
                ErrorCode::SetAlreadyRecorded,
                format!("Set {} is already recorded for game {}", set.id(), self.id),
            ));
        }
        if set.game_id() != &self.id {
            return Err(DomainError::validation(
                "game_id",
                format!("Set {} belongs to game {}", set.id(), set.game_id()),
            ));
        }
        let winner = set.set_winner().ok_or_else(|| {
            DomainError::new(
                ErrorCode::InvalidStateTransition,
                format!("Set {} has no winner yet", set.id()),
            )
        })?;
        self.ensure_open()?;
        if self.live_set.as_ref() != Some(set.id()) {
            return Err(DomainError::new(
                ErrorCode::InvalidStateTransition,
                format!("Set {} was not started as the live set of game {}", set.id(), self.id),
            ));
        }

        self.live_set = None;
        self.set_ids.push(*set.id());
        match winner {
            Side::Team => self.team_sets_won += 1,
            Side::Opponent => self.opponent_sets_won += 1,
        }
        if self.sets_won(winner) >= self.majority() {
            self.winner = Some(winner);
            self.is_active = false;
        }
        self.touch();
        Ok(winner)
    }

    /// Close the game.
    ///
    /// A game that reached a majority keeps its winner; a game closed early
    /// ends without one.
    ///
    /// # Errors
    ///
    /// - `GameAlreadyFinished` if the game is already closed
    pub fn finish(&mut self) -> Result<Option<Side>, DomainError> {
        if !self.is_active {
            return Err(self.already_finished());
        }
        self.is_active = false;
        self.touch();
        Ok(self.winner)
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Private helpers
    // ─────────────────────────────────────────────────────────────────────────

    fn ensure_open(&self) -> Result<(), DomainError> {
        if self.is_finished() {
            Err(self.already_finished())
        } else {
            Ok(())
        }
    }

    fn already_finished(&self) -> DomainError {
        DomainError::new(
            ErrorCode::GameAlreadyFinished,
            format!("Game {} is already finished", self.id),
        )
    }

    fn touch(&mut self) {
        self.last_update = Timestamp::now_after(&self.last_update);
    }
}
