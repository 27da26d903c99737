//! Set aggregate entity.
//!
//! A set accumulates the recorded actions of one unit of play and keeps
//! the derived statistics current after every action.
//!
//! # Ownership
//!
//! Sets reference their game by ID. The game records a set only once the
//! set has a winner.

use serde::Serialize;

use super::win_condition::{SetOutcome, WinCondition};
use crate::domain::foundation::{DomainError, ErrorCode, GameId, SetId, Side, Timestamp};
use crate::domain::statistics::{ActionCode, StatSheet};

/// Set aggregate - statistics for one set of a game.
///
/// # Invariants
///
/// - `actions` is append-only, in order of play
/// - `stats` always equals the replay of `actions` on an empty sheet
/// - `set_winner` is `Some` exactly when `is_active` is false
/// - Inactive sets cannot be modified
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Set {
    /// Unique identifier for this set.
    id: SetId,

    /// Game this set belongs to.
    game_id: GameId,

    /// 1-based position of the set within its game.
    set_number: u8,

    /// When the set was started.
    started_at: Timestamp,

    /// True until a winner is decided.
    is_active: bool,

    /// Recorded action codes in order of play.
    actions: Vec<ActionCode>,

    /// Counters derived from `actions`.
    stats: StatSheet,

    /// Winning side once decided.
    set_winner: Option<Side>,

    /// When the set was last modified. Used as the optimistic concurrency guard.
    last_update: Timestamp,
}

impl Set {
    /// Create a new, empty, active set.
    pub fn new(id: SetId, game_id: GameId, set_number: u8) -> Self {
        let now = Timestamp::now();
        Self {
            id,
            game_id,
            set_number,
            started_at: now,
            is_active: true,
            actions: Vec::new(),
            stats: StatSheet::new(),
            set_winner: None,
            last_update: now,
        }
    }

    /// Reconstitute a set from persistence (no validation).
    ///
    /// Statistics are rebuilt from the action log so stored aggregates can
    /// never drift from the actions they summarize.
    #[allow(clippy::too_many_arguments)]
    pub fn reconstitute(
        id: SetId,
        game_id: GameId,
        set_number: u8,
        started_at: Timestamp,
        is_active: bool,
        actions: Vec<ActionCode>,
        set_winner: Option<Side>,
        last_update: Timestamp,
    ) -> Self {
        let mut stats = StatSheet::new();
        for action in &actions {
            stats.record(action.category());
        }
        Self {
            id,
            game_id,
            set_number,
            started_at,
            is_active,
            actions,
            stats,
            set_winner,
            last_update,
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Accessors
    // ─────────────────────────────────────────────────────────────────────────

    pub fn id(&self) -> &SetId {
        &self.id
    }

    pub fn game_id(&self) -> &GameId {
        &self.game_id
    }

    pub fn set_number(&self) -> u8 {
        self.set_number
    }

    pub fn started_at(&self) -> &Timestamp {
        &self.started_at
    }

    pub fn is_active(&self) -> bool {
        self.is_active
    }

    pub fn actions(&self) -> &[ActionCode] {
        &self.actions
    }

    pub fn stats(&self) -> &StatSheet {
        &self.stats
    }

    pub fn set_winner(&self) -> Option<Side> {
        self.set_winner
    }

    pub fn last_update(&self) -> &Timestamp {
        &self.last_update
    }

    /// Current score as (team, opponent).
    pub fn score(&self) -> (u32, u32) {
        (self.stats.team_points(), self.stats.opponent_points())
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Mutations
    // ─────────────────────────────────────────────────────────────────────────

    /// Record one action and update every derived counter.
    ///
    /// The code is validated before anything changes, so a rejected code
    /// leaves the set untouched.
    ///
    /// # Errors
    ///
    /// - `SetAlreadyFinished` if the set is inactive
    /// - `InvalidActionCode` if the code is not recognized
    pub fn apply_action(&mut self, code: &str) -> Result<ActionCode, DomainError> {
        self.ensure_active()?;
        let action: ActionCode = code.parse()?;

        self.stats.record(action.category());
        self.actions.push(action);
        self.touch();
        Ok(action)
    }

    /// Close the set if the current score satisfies the win condition.
    ///
    /// Returns `SetOutcome::NotFinished` and leaves the set unchanged when
    /// neither side qualifies.
    ///
    /// # Errors
    ///
    /// - `SetAlreadyFinished` if the set is inactive
    pub fn finish(&mut self, condition: &WinCondition) -> Result<SetOutcome, DomainError> {
        self.ensure_active()?;

        let (team, opponent) = self.score();
        match condition.decide(team, opponent) {
            None => Ok(SetOutcome::NotFinished),
            Some(winner) => {
                self.is_active = false;
                self.set_winner = Some(winner);
                self.touch();
                Ok(SetOutcome::Won(winner))
            }
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Private helpers
    // ─────────────────────────────────────────────────────────────────────────

    fn ensure_active(&self) -> Result<(), DomainError> {
        if self.is_active {
            Ok(())
        } else {
            Err(DomainError::new(
                ErrorCode::SetAlreadyFinished,
                format!("Set {} is already finished", self.id),
            ))
        }
    }

    fn touch(&mut self) {
        self.last_update = Timestamp::now_after(&self.last_update);
    }
}
